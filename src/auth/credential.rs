//! Account and client credentials for the password grant.

// self
use crate::auth::TokenSecret;

/// Immutable credentials supplied when the token provider is built.
///
/// `Debug` output shows the username and client id only; both secrets redact themselves.
#[derive(Clone, Debug)]
pub struct Credential {
	/// Account login (pixiv ID or e-mail address).
	pub username: String,
	/// Account password.
	pub password: TokenSecret,
	/// OAuth client identifier of the app.
	pub client_id: String,
	/// OAuth client secret of the app.
	pub client_secret: TokenSecret,
}
impl Credential {
	/// Bundles the four values required by the password and refresh grants.
	pub fn new(
		username: impl Into<String>,
		password: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self {
			username: username.into(),
			password: TokenSecret::new(password),
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
		}
	}
}
