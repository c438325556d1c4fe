//! Token supplier contract consumed by the API client.
//!
//! The client only depends on [`TokenProvider`], so the OAuth password-grant provider in
//! [`crate::oauth`] and [`StaticTokenProvider`] are interchangeable.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Boxed future returned by [`TokenProvider::token`].
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<TokenSecret>> + 'a + Send>>;

/// Supplies a bearer token that is valid at the time of the call.
pub trait TokenProvider
where
	Self: Send + Sync,
{
	/// Returns the access token to present on the next request.
	fn token(&self) -> TokenFuture<'_>;
}

/// Provider that always hands out the same pre-issued token.
#[derive(Clone, Debug)]
pub struct StaticTokenProvider(TokenSecret);
impl StaticTokenProvider {
	/// Wraps an access token obtained elsewhere.
	pub fn new(access_token: impl Into<String>) -> Self {
		Self(TokenSecret::new(access_token))
	}
}
impl TokenProvider for StaticTokenProvider {
	fn token(&self) -> TokenFuture<'_> {
		let token = self.0.clone();

		Box::pin(async move { Ok(token) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn static_provider_returns_its_token() {
		let provider: Arc<dyn TokenProvider> = Arc::new(StaticTokenProvider::new("fixed"));
		let first = provider.token().await.expect("Static provider should never fail.");
		let second = provider.token().await.expect("Static provider should never fail.");

		assert_eq!(first.expose(), "fixed");
		assert_eq!(first, second);
	}
}
