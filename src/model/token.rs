//! Success body returned by the auth endpoint.

// self
use crate::{
	_prelude::*,
	error::{self, DecodeError},
};

/// Token grant payload.
///
/// The endpoint nests the payload under `response`; [`TokenResponse::from_json`] also accepts a
/// bare payload at the top level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Bearer token for resource requests.
	pub access_token: String,
	/// Token used by the next refresh grant.
	pub refresh_token: String,
	/// Validity window in seconds.
	pub expires_in: i64,
	/// Token type, normally `bearer`.
	#[serde(default)]
	pub token_type: String,
	/// Granted scope string.
	#[serde(default)]
	pub scope: String,
	/// Account the token was issued for.
	#[serde(default)]
	pub user: Option<TokenUser>,
}
impl TokenResponse {
	/// Decodes either the enveloped or the bare payload.
	///
	/// Schema mismatches report their JSON path from the document root, so a bad field inside the
	/// envelope is reported as `response.<field>`.
	pub fn from_json(bytes: &[u8], status: Option<u16>) -> Result<Self, DecodeError> {
		#[derive(Deserialize)]
		struct Envelope {
			response: TokenResponse,
		}

		let document = error::decode_json::<serde_json::Value>(bytes, status)?;

		if document.get("response").is_some() {
			let Envelope { response } = error::decode_json(bytes, status)?;

			Ok(response)
		} else {
			error::decode_json(bytes, status)
		}
	}
}

/// Account summary attached to token responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
	/// Numeric account id, serialized as a string by the endpoint.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Account handle.
	pub account: String,
	/// Avatar URLs keyed by size.
	#[serde(default)]
	pub profile_image_urls: BTreeMap<String, String>,
}
