//! Crate-level error types shared by the token provider, the API client, and parameter checks.

// self
use crate::{
	_prelude::*,
	auth::TokenRecordBuilderError,
	model::{ApiErrorBody, TokenErrorBody},
	params::ParamErrors,
};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Request parameters failed validation; no request was sent.
	#[error(transparent)]
	InvalidParams(#[from] ParamErrors),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Resource endpoint answered with a non-200 status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Auth endpoint answered with a non-2xx status.
	#[error(transparent)]
	Token(#[from] TokenError),
	/// Response body could not be decoded into the expected schema.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// A successful response did not carry a JSON body.
	#[error("Content-Type header is `{found}`, expected `application/json`.")]
	ContentType {
		/// Content type reported by the server (empty when absent).
		found: String,
	},
}

/// Configuration and validation failures raised while building clients or tokens.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base or request URL cannot be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Offending URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL parses but cannot carry a path (e.g. `mailto:`).
	#[error("URL `{url}` cannot be used as a base URL.")]
	CannotBeABase {
		/// Offending URL text.
		url: String,
	},
	/// Header value contains characters HTTP does not allow.
	#[error("Header `{name}` has an invalid value.")]
	InvalidHeader {
		/// Header name.
		name: &'static str,
	},
	/// Token record builder validation failed.
	#[error("Unable to build token record.")]
	TokenBuild(#[from] TokenRecordBuilderError),
	/// Token endpoint returned an excessively large `expires_in`.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
	/// Token endpoint returned a non-positive duration.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	pub(crate) fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
		Self::InvalidUrl { url: url.into(), source }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Network {
		/// Endpoint label (`auth/token`, `illust/ranking`, ...).
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(
		endpoint: &'static str,
		src: impl 'static + Send + Sync + StdError,
	) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}
}

/// Failures raised while decoding response bodies.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// The response carried no JSON body to decode.
	#[error("Response has no JSON contents.")]
	MissingBody,
	/// JSON did not match the expected schema.
	#[error("Response JSON does not match the expected schema at `{}`.", source.path())]
	Json {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the decoded response.
		status: Option<u16>,
	},
}

/// Non-200 response from a resource endpoint.
///
/// The raw JSON body is kept as text so callers can decide whether to decode it with
/// [`ApiError::decode_body`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("API request failed with status {status_text}.")]
pub struct ApiError {
	/// Numeric HTTP status code.
	pub status: u16,
	/// Status line text such as `404 Not Found`.
	pub status_text: String,
	/// Raw response body, present only when the response was JSON.
	///
	/// Invalid UTF-8 sequences are replaced with `U+FFFD` when the body is captured.
	pub json: Option<String>,
}
impl ApiError {
	/// Decodes the raw JSON body into an [`ApiErrorBody`].
	pub fn decode_body(&self) -> Result<ApiErrorBody, DecodeError> {
		let raw =
			self.json.as_deref().filter(|raw| !raw.is_empty()).ok_or(DecodeError::MissingBody)?;

		decode_json(raw.as_bytes(), Some(self.status))
	}
}

/// Non-2xx response from the auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Token request failed with status {status_text}.")]
pub struct TokenError {
	/// Numeric HTTP status code.
	pub status: u16,
	/// Status line text such as `400 Bad Request`.
	pub status_text: String,
	/// Decoded error body, present only when the response was JSON.
	pub body: Option<TokenErrorBody>,
}

/// Decodes `bytes` as `T`, recording the JSON path of any mismatch.
pub(crate) fn decode_json<T>(bytes: &[u8], status: Option<u16>) -> Result<T, DecodeError>
where
	T: for<'de> Deserialize<'de>,
{
	let mut de = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut de).map_err(|source| DecodeError::Json { source, status })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn api_error_decodes_user_message() {
		let err = ApiError {
			status: 404,
			status_text: "404 Not Found".into(),
			json: Some(
				r#"{"error":{"user_message":"missing","message":"","reason":"","user_message_details":{}}}"#
					.into(),
			),
		};
		let body = err.decode_body().expect("Error body fixture should decode.");

		assert_eq!(body.error.user_message, "missing");
		assert!(body.error.user_message_details.is_empty());
		assert_eq!(err.to_string(), "API request failed with status 404 Not Found.");
	}

	#[test]
	fn api_error_without_body_reports_missing_contents() {
		let err =
			ApiError { status: 500, status_text: "500 Internal Server Error".into(), json: None };

		assert!(matches!(err.decode_body(), Err(DecodeError::MissingBody)));
	}

	#[test]
	fn decode_errors_carry_the_json_path() {
		let err = decode_json::<ApiErrorBody>(br#"{"error":{"user_message":7}}"#, Some(404))
			.expect_err("Numeric user_message should fail to decode.");

		match err {
			DecodeError::Json { source, status } => {
				assert_eq!(source.path().to_string(), "error.user_message");
				assert_eq!(status, Some(404));
			},
			other => panic!("Unexpected decode error: {other:?}."),
		}
	}
}
