//! OAuth password-grant token provider with lazy acquisition and expiry-based refresh.
//!
//! [`OAuthTokenProvider`] keeps at most one [`TokenRecord`] behind an async mutex. Every call to
//! [`OAuthTokenProvider::access_token`] holds the mutex for the whole check-and-grant sequence:
//! the first call sends `grant_type=password`, a call made at or after the record's expiry sends
//! `grant_type=refresh_token`, and every other call returns the cached access token. Concurrent
//! callers queue on the mutex and observe the record written by the holder. A failed grant leaves
//! the cached record untouched, so the next call retries the same grant.

mod grant;
mod stats;

pub use grant::{GrantType, TOKEN_ENDPOINT_PATH};
pub use stats::TokenMetrics;

// crates.io
use reqwest::{
	Response,
	header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	auth::{Credential, TokenRecord, TokenSecret},
	clock::{Clock, SystemClock},
	error::{self, ConfigError, TokenError, TransportError},
	http::{self, AppHeaders, DEFAULT_OAUTH_BASE_URL, ReqwestHttpClient},
	model::{TokenErrorBody, TokenResponse},
	obs::{self, RequestKind},
	provider::{TokenFuture, TokenProvider},
};

const TOKEN_ENDPOINT_LABEL: &str = "auth/token";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Token provider backed by the pixiv OAuth endpoint.
pub struct OAuthTokenProvider {
	http_client: ReqwestHttpClient,
	token_url: Url,
	headers: HeaderMap,
	credential: Credential,
	clock: Arc<dyn Clock>,
	metrics: TokenMetrics,
	token: AsyncMutex<Option<TokenRecord>>,
}
impl OAuthTokenProvider {
	/// Starts configuring a provider for `credential`.
	pub fn builder(credential: Credential) -> OAuthTokenProviderBuilder {
		OAuthTokenProviderBuilder::new(credential)
	}

	/// Creates a provider with the default endpoint, headers, transport, and system clock.
	pub fn new(credential: Credential) -> Result<Self> {
		Ok(Self::builder(credential).build()?)
	}

	/// Counters describing the grants this provider has sent.
	pub fn metrics(&self) -> &TokenMetrics {
		&self.metrics
	}

	/// Returns a valid access token, authorizing or refreshing first when required.
	pub async fn access_token(&self) -> Result<TokenSecret> {
		let mut cached = self.token.lock().await;
		let record = match cached.as_ref() {
			None => self.grant(GrantType::Password, grant::password_form(&self.credential)).await?,
			Some(current) if current.is_expired_at(self.clock.now()) => {
				let form = grant::refresh_form(&self.credential, current.refresh_token.expose());

				self.grant(GrantType::RefreshToken, form).await?
			},
			Some(current) => {
				self.metrics.record_cache_hit();

				return Ok(current.access_token.clone());
			},
		};
		let access_token = record.access_token.clone();

		*cached = Some(record);

		Ok(access_token)
	}

	async fn grant(&self, grant: GrantType, form: String) -> Result<TokenRecord> {
		let kind = match grant {
			GrantType::Password => {
				self.metrics.record_authorization();

				RequestKind::Authorize
			},
			GrantType::RefreshToken => {
				self.metrics.record_refresh();

				RequestKind::Refresh
			},
		};

		obs::observe(kind, TOKEN_ENDPOINT_LABEL, async move {
			self.exchange(form).await.inspect_err(|_| self.metrics.record_failure())
		})
		.await
	}

	async fn exchange(&self, form: String) -> Result<TokenRecord> {
		let response = self
			.http_client
			.post(self.token_url.clone())
			.headers(self.headers.clone())
			.header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
			.body(form)
			.send()
			.await
			.map_err(|err| TransportError::network(TOKEN_ENDPOINT_LABEL, err))?;
		let status = response.status();

		if !status.is_success() {
			return Err(token_failure(response).await);
		}
		if !http::is_json(response.headers()) {
			return Err(Error::ContentType {
				found: http::content_type(response.headers()).to_owned(),
			});
		}

		let body = http::read_body(response, TOKEN_ENDPOINT_LABEL).await?;
		let payload = TokenResponse::from_json(&body, Some(status.as_u16()))?;

		self.record_from(payload)
	}

	fn record_from(&self, payload: TokenResponse) -> Result<TokenRecord> {
		if payload.expires_in <= 0 {
			return Err(ConfigError::NonPositiveExpiresIn.into());
		}

		let created_at = self.clock.now();
		let expires_in = Duration::seconds(payload.expires_in);

		if created_at.checked_add(expires_in).is_none() {
			return Err(ConfigError::ExpiresInOutOfRange.into());
		}

		TokenRecord::builder()
			.access_token(payload.access_token)
			.refresh_token(payload.refresh_token)
			.created_at(created_at)
			.expires_in(expires_in)
			.build()
			.map_err(|err| ConfigError::from(err).into())
	}
}
impl TokenProvider for OAuthTokenProvider {
	fn token(&self) -> TokenFuture<'_> {
		Box::pin(self.access_token())
	}
}
impl Debug for OAuthTokenProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthTokenProvider")
			.field("token_url", &self.token_url.as_str())
			.field("credential", &self.credential)
			.field("metrics", &self.metrics)
			.finish()
	}
}

/// Builder for [`OAuthTokenProvider`].
pub struct OAuthTokenProviderBuilder {
	credential: Credential,
	base_url: Option<String>,
	headers: AppHeaders,
	http_client: Option<ReqwestHttpClient>,
	clock: Arc<dyn Clock>,
}
impl OAuthTokenProviderBuilder {
	fn new(credential: Credential) -> Self {
		Self {
			credential,
			base_url: None,
			headers: AppHeaders::default(),
			http_client: None,
			clock: Arc::new(SystemClock),
		}
	}

	/// Overrides the OAuth base URL (defaults to [`DEFAULT_OAUTH_BASE_URL`]).
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());

		self
	}

	/// Overrides the app-identification headers.
	pub fn headers(mut self, headers: AppHeaders) -> Self {
		self.headers = headers;

		self
	}

	/// Supplies the HTTP transport (timeouts, proxies, TLS).
	pub fn http_client(mut self, http_client: impl Into<ReqwestHttpClient>) -> Self {
		self.http_client = Some(http_client.into());

		self
	}

	/// Supplies the time source used to stamp and expire tokens.
	pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = clock;

		self
	}

	/// Validates the configuration and produces the provider.
	pub fn build(self) -> Result<OAuthTokenProvider, ConfigError> {
		let base_url =
			http::parse_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_OAUTH_BASE_URL))?;
		let http_client = match self.http_client {
			Some(http_client) => http_client,
			None => ReqwestHttpClient::new()?,
		};

		Ok(OAuthTokenProvider {
			http_client,
			token_url: http::endpoint_url(&base_url, TOKEN_ENDPOINT_PATH)?,
			headers: self.headers.header_map()?,
			credential: self.credential,
			clock: self.clock,
			metrics: TokenMetrics::default(),
			token: AsyncMutex::new(None),
		})
	}
}

async fn token_failure(response: Response) -> Error {
	let status = response.status();
	let mut err =
		TokenError { status: status.as_u16(), status_text: http::status_text(status), body: None };

	if http::is_json(response.headers()) {
		let body = match http::read_body(response, TOKEN_ENDPOINT_LABEL).await {
			Ok(body) => body,
			Err(e) => return e,
		};

		match error::decode_json::<TokenErrorBody>(&body, Some(status.as_u16())) {
			Ok(decoded) => err.body = Some(decoded),
			Err(e) => return e.into(),
		}
	}

	err.into()
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::clock::ManualClock;

	fn provider(base_url: &str) -> OAuthTokenProvider {
		OAuthTokenProvider::builder(Credential::new("u", "p", "id", "secret"))
			.base_url(base_url)
			.clock(Arc::new(ManualClock::new(macros::datetime!(2017-01-01 00:00 UTC))))
			.build()
			.expect("Provider should build for a valid base URL.")
	}

	fn payload(expires_in: i64) -> TokenResponse {
		TokenResponse {
			access_token: "access".into(),
			refresh_token: "refresh".into(),
			expires_in,
			token_type: "bearer".into(),
			scope: String::new(),
			user: None,
		}
	}

	#[test]
	fn token_url_is_joined_onto_the_base() {
		assert_eq!(
			provider("https://oauth.secure.pixiv.net").token_url.as_str(),
			"https://oauth.secure.pixiv.net/auth/token"
		);
	}

	#[test]
	fn builder_rejects_unparsable_base_urls() {
		let err = OAuthTokenProvider::builder(Credential::new("u", "p", "id", "secret"))
			.base_url("::not-a-url")
			.build()
			.expect_err("Invalid base URL should be rejected.");

		assert!(matches!(err, ConfigError::InvalidUrl { .. }));
	}

	#[test]
	fn records_are_stamped_with_the_injected_clock() {
		let record = provider("https://oauth.example.com")
			.record_from(payload(3600))
			.expect("Positive lifetimes should produce a record.");

		assert_eq!(record.created_at, macros::datetime!(2017-01-01 00:00 UTC));
		assert_eq!(record.expires_at(), macros::datetime!(2017-01-01 01:00 UTC));
	}

	#[test]
	fn non_positive_and_overflowing_lifetimes_are_rejected() {
		let provider = provider("https://oauth.example.com");

		assert!(matches!(
			provider.record_from(payload(0)),
			Err(Error::Config(ConfigError::NonPositiveExpiresIn))
		));
		assert!(matches!(
			provider.record_from(payload(i64::MAX)),
			Err(Error::Config(ConfigError::ExpiresInOutOfRange))
		));
	}
}
