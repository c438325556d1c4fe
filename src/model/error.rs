//! Error bodies returned by the resource and auth endpoints.

// self
use crate::_prelude::*;

/// Envelope of a resource endpoint error response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
	/// Error payload.
	pub error: ApiErrorDetail,
}

/// Error payload of a resource endpoint error response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
	/// Localized message meant for end users.
	#[serde(default)]
	pub user_message: String,
	/// Developer-facing message.
	#[serde(default)]
	pub message: String,
	/// Machine-readable reason.
	#[serde(default)]
	pub reason: String,
	/// Free-form details attached to the user message.
	#[serde(default)]
	pub user_message_details: BTreeMap<String, serde_json::Value>,
}

/// Error body returned by the auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenErrorBody {
	/// Always `true` on error responses.
	#[serde(default)]
	pub has_error: bool,
	/// Errors keyed by category (e.g. `system`).
	#[serde(default)]
	pub errors: BTreeMap<String, TokenErrorEntry>,
}

/// Single auth endpoint error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenErrorEntry {
	/// Human-readable message.
	#[serde(default)]
	pub message: String,
	/// Numeric error code.
	#[serde(default)]
	pub code: i64,
}
