// self
use crate::{_prelude::*, auth::Credential};

/// Path of the token endpoint relative to the OAuth base URL.
pub const TOKEN_ENDPOINT_PATH: &str = "/auth/token";

/// Grants issued against the token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Resource-owner password grant used for the first token.
	Password,
	/// Refresh grant used once the cached token expires.
	RefreshToken,
}
impl GrantType {
	/// Returns the `grant_type` form value.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::Password => "password",
			GrantType::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Encodes the `application/x-www-form-urlencoded` body of a password grant.
pub(crate) fn password_form(credential: &Credential) -> String {
	encode(GrantType::Password, [
		("username", credential.username.as_str()),
		("password", credential.password.expose()),
		("client_id", credential.client_id.as_str()),
		("client_secret", credential.client_secret.expose()),
	])
}

/// Encodes the `application/x-www-form-urlencoded` body of a refresh grant.
pub(crate) fn refresh_form(credential: &Credential, refresh_token: &str) -> String {
	encode(GrantType::RefreshToken, [
		("refresh_token", refresh_token),
		("client_id", credential.client_id.as_str()),
		("client_secret", credential.client_secret.expose()),
	])
}

fn encode<const N: usize>(grant: GrantType, fields: [(&str, &str); N]) -> String {
	let mut form = url::form_urlencoded::Serializer::new(String::new());

	form.extend_pairs(fields);
	form.append_pair("grant_type", grant.as_str());
	form.append_pair("get_secure_url", "true");

	form.finish()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn decode(body: &str) -> BTreeMap<String, String> {
		url::form_urlencoded::parse(body.as_bytes()).into_owned().collect()
	}

	#[test]
	fn password_form_carries_the_full_credential() {
		let credential = Credential::new("user@example.com", "p&ss", "CLIENT_ID", "CLIENT_SECRET");
		let form = decode(&password_form(&credential));

		assert_eq!(form.len(), 6);
		assert_eq!(form["username"], "user@example.com");
		assert_eq!(form["password"], "p&ss");
		assert_eq!(form["client_id"], "CLIENT_ID");
		assert_eq!(form["client_secret"], "CLIENT_SECRET");
		assert_eq!(form["grant_type"], "password");
		assert_eq!(form["get_secure_url"], "true");
	}

	#[test]
	fn refresh_form_omits_the_account_credentials() {
		let credential = Credential::new("USERNAME", "PASSWORD", "CLIENT_ID", "CLIENT_SECRET");
		let form = decode(&refresh_form(&credential, "wgNv1gZ0y8Z1nIyG4bRbpT2yNMs3hvHhHLIhXDc47G8"));

		assert_eq!(form.len(), 5);
		assert_eq!(form["refresh_token"], "wgNv1gZ0y8Z1nIyG4bRbpT2yNMs3hvHhHLIhXDc47G8");
		assert_eq!(form["grant_type"], "refresh_token");
		assert_eq!(form["get_secure_url"], "true");
		assert!(!form.contains_key("username"));
		assert!(!form.contains_key("password"));
	}
}
