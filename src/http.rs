//! Transport primitives shared by the token provider and the API client.
//!
//! [`ReqwestHttpClient`] wraps the caller's `reqwest::Client` so timeouts, proxies, and TLS
//! settings stay under the caller's control. [`AppHeaders`] carries the app-identification
//! headers every request must present.

// std
use std::ops::Deref;
// crates.io
use reqwest::{
	Response, StatusCode,
	header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, REFERER, USER_AGENT},
};
// self
use crate::{
	_prelude::*,
	error::{ApiError, ConfigError, TransportError},
};

/// Default base URL of the app API.
pub const DEFAULT_API_BASE_URL: &str = "https://app-api.pixiv.net";
/// Default base URL of the auth endpoint.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://oauth.secure.pixiv.net";
/// `Referer` the image CDN expects on downloads.
pub const DEFAULT_DOWNLOAD_REFERER: &str = "https://app-api.pixiv.net/";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Builds a client with reqwest's defaults, reporting TLS backend failures instead of
	/// panicking.
	pub fn new() -> Result<Self, ConfigError> {
		ReqwestClient::builder().build().map(Self).map_err(ConfigError::http_client_build)
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<ReqwestClient> for ReqwestHttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self(client)
	}
}

/// App-identification headers attached to auth and resource requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppHeaders {
	/// `User-Agent` header.
	pub user_agent: String,
	/// `App-OS` header.
	pub app_os: String,
	/// `App-OS-Version` header.
	pub app_os_version: String,
	/// `App-Version` header.
	pub app_version: String,
}
impl AppHeaders {
	/// Builds the header map, rejecting values HTTP cannot carry.
	pub fn header_map(&self) -> Result<HeaderMap, ConfigError> {
		let mut map = HeaderMap::with_capacity(4);

		for (name, label, value) in [
			(USER_AGENT, "User-Agent", &self.user_agent),
			(HeaderName::from_static("app-os"), "App-OS", &self.app_os),
			(HeaderName::from_static("app-os-version"), "App-OS-Version", &self.app_os_version),
			(HeaderName::from_static("app-version"), "App-Version", &self.app_version),
		] {
			map.insert(name, header_value(label, value)?);
		}

		Ok(map)
	}

	/// Builds the headers the image CDN requires: `Referer` plus this `User-Agent`.
	pub fn download_header_map(&self, referer: &str) -> Result<HeaderMap, ConfigError> {
		let mut map = HeaderMap::with_capacity(2);

		map.insert(REFERER, header_value("Referer", referer)?);
		map.insert(USER_AGENT, header_value("User-Agent", &self.user_agent)?);

		Ok(map)
	}
}
impl Default for AppHeaders {
	fn default() -> Self {
		Self {
			user_agent: "PixivAndroidApp/5.0.64 (Android 6.0; Google Nexus 5X - 6.0.0 - API 23 - \
			             1080x1920)"
				.into(),
			app_os: "android".into(),
			app_os_version: "6.0".into(),
			app_version: "5.0.64".into(),
		}
	}
}

/// Returns `true` when the response declares a JSON body.
pub fn is_json(headers: &HeaderMap) -> bool {
	content_type(headers).contains(JSON_CONTENT_TYPE)
}

/// Returns the `Content-Type` header, or an empty string when absent or not text.
pub fn content_type(headers: &HeaderMap) -> &str {
	headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()).unwrap_or_default()
}

/// Reads the whole response body.
pub(crate) async fn read_body(response: Response, endpoint: &'static str) -> Result<Vec<u8>> {
	let bytes = response.bytes().await.map_err(|err| TransportError::network(endpoint, err))?;

	Ok(bytes.to_vec())
}

/// Converts a non-200 response into an [`ApiError`], keeping the body when it is JSON.
pub(crate) async fn api_error(response: Response, endpoint: &'static str) -> Error {
	let status = response.status();
	let json = is_json(response.headers());
	let mut err =
		ApiError { status: status.as_u16(), status_text: status_text(status), json: None };

	if json {
		match read_body(response, endpoint).await {
			Ok(body) => err.json = Some(String::from_utf8_lossy(&body).into_owned()),
			Err(e) => return e,
		}
	}

	err.into()
}

/// Renders a status the way HTTP status lines do (`404 Not Found`).
pub(crate) fn status_text(status: StatusCode) -> String {
	status.to_string()
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw).map_err(|source| ConfigError::invalid_url(raw, source))?;

	if url.cannot_be_a_base() {
		return Err(ConfigError::CannotBeABase { url: raw.to_owned() });
	}

	Ok(url)
}

/// Joins an absolute endpoint path onto a base URL, keeping any path prefix of the base.
pub(crate) fn endpoint_url(base: &Url, path: &str) -> Result<Url, ConfigError> {
	let joined = format!("{}{}", base.as_str().trim_end_matches('/'), path);

	Url::parse(&joined).map_err(|source| ConfigError::invalid_url(joined, source))
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ConfigError> {
	HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeader { name })
}
