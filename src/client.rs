//! Authorized client for the pixiv app API.
//!
//! [`ApiClient`] asks its [`TokenProvider`] for a bearer token before every resource request and
//! attaches it together with the app-identification headers. Endpoint methods live in
//! [`illust`]; [`ApiClient::send`] is available for requests the crate does not model.

pub mod illust;

// crates.io
use reqwest::{
	RequestBuilder, Response, StatusCode,
	header::{HeaderMap, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	error::{self, ConfigError, TransportError},
	http::{self, AppHeaders, DEFAULT_API_BASE_URL, DEFAULT_DOWNLOAD_REFERER, ReqwestHttpClient},
	obs::{self, RequestKind},
	provider::TokenProvider,
};

const SEND_ENDPOINT: &str = "api";

/// Client for the resource endpoints of the app API.
#[derive(Clone)]
pub struct ApiClient {
	http_client: ReqwestHttpClient,
	token_provider: Arc<dyn TokenProvider>,
	base_url: Url,
	headers: HeaderMap,
	download_headers: HeaderMap,
}
impl ApiClient {
	/// Starts configuring a client that authorizes with `token_provider`.
	pub fn builder(token_provider: Arc<dyn TokenProvider>) -> ApiClientBuilder {
		ApiClientBuilder::new(token_provider)
	}

	/// Creates a client with the default base URL, headers, and transport.
	pub fn new(token_provider: Arc<dyn TokenProvider>) -> Result<Self> {
		Ok(Self::builder(token_provider).build()?)
	}

	/// Base URL the endpoint paths are joined onto.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Underlying transport, for building requests passed to [`ApiClient::send`].
	pub fn http_client(&self) -> &ReqwestHttpClient {
		&self.http_client
	}

	/// Attaches the bearer token and app headers to `request` and dispatches it.
	///
	/// The response is returned as-is; status classification is left to the caller.
	pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
		self.authorized_send(request, SEND_ENDPOINT).await
	}

	async fn authorized_send(
		&self,
		request: RequestBuilder,
		endpoint: &'static str,
	) -> Result<Response> {
		let token = self.token_provider.token().await?;
		let mut authorization = HeaderValue::try_from(format!("Bearer {}", token.expose()))
			.map_err(|_| ConfigError::InvalidHeader { name: "Authorization" })?;

		authorization.set_sensitive(true);

		request
			.headers(self.headers.clone())
			.header(reqwest::header::AUTHORIZATION, authorization)
			.send()
			.await
			.map_err(|err| TransportError::network(endpoint, err).into())
	}

	async fn get_json<T>(&self, url: Url, kind: RequestKind, endpoint: &'static str) -> Result<T>
	where
		T: for<'de> Deserialize<'de>,
	{
		obs::observe(kind, endpoint, async move {
			let response = self.authorized_send(self.http_client.get(url), endpoint).await?;

			if response.status() != StatusCode::OK {
				return Err(http::api_error(response, endpoint).await);
			}
			if !http::is_json(response.headers()) {
				return Err(Error::ContentType {
					found: http::content_type(response.headers()).to_owned(),
				});
			}

			let body = http::read_body(response, endpoint).await?;

			Ok(error::decode_json(&body, Some(StatusCode::OK.as_u16()))?)
		})
		.await
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		Ok(http::endpoint_url(&self.base_url, path)?)
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient").field("base_url", &self.base_url.as_str()).finish()
	}
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
	token_provider: Arc<dyn TokenProvider>,
	base_url: Option<String>,
	headers: AppHeaders,
	download_referer: String,
	http_client: Option<ReqwestHttpClient>,
}
impl ApiClientBuilder {
	fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
		Self {
			token_provider,
			base_url: None,
			headers: AppHeaders::default(),
			download_referer: DEFAULT_DOWNLOAD_REFERER.into(),
			http_client: None,
		}
	}

	/// Overrides the API base URL (defaults to [`DEFAULT_API_BASE_URL`]).
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());

		self
	}

	/// Overrides the app-identification headers.
	pub fn headers(mut self, headers: AppHeaders) -> Self {
		self.headers = headers;

		self
	}

	/// Overrides the `Referer` sent with image downloads.
	pub fn download_referer(mut self, referer: impl Into<String>) -> Self {
		self.download_referer = referer.into();

		self
	}

	/// Supplies the HTTP transport (timeouts, proxies, TLS).
	pub fn http_client(mut self, http_client: impl Into<ReqwestHttpClient>) -> Self {
		self.http_client = Some(http_client.into());

		self
	}

	/// Validates the configuration and produces the client.
	pub fn build(self) -> Result<ApiClient, ConfigError> {
		let base_url =
			http::parse_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))?;
		let http_client = match self.http_client {
			Some(http_client) => http_client,
			None => ReqwestHttpClient::new()?,
		};

		Ok(ApiClient {
			http_client,
			token_provider: self.token_provider,
			base_url,
			headers: self.headers.header_map()?,
			download_headers: self.headers.download_header_map(&self.download_referer)?,
		})
	}
}
