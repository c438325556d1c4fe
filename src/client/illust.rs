//! Illustration endpoints and image downloads.

// crates.io
use reqwest::StatusCode;
// self
use crate::{
	_prelude::*,
	client::ApiClient,
	error::{ConfigError, TransportError},
	http,
	model::{IllustDetail, IllustRanking},
	obs::{self, RequestKind},
	params::{IllustDetailParams, IllustRankingParams, Params},
};

/// Path of the ranking endpoint.
pub const ILLUST_RANKING_PATH: &str = "/v1/illust/ranking";
/// Path of the detail endpoint.
pub const ILLUST_DETAIL_PATH: &str = "/v1/illust/detail";

const RANKING_ENDPOINT: &str = "illust/ranking";
const DETAIL_ENDPOINT: &str = "illust/detail";
const DOWNLOAD_ENDPOINT: &str = "download";

impl ApiClient {
	/// Fetches the first page of an illustration ranking.
	///
	/// `params` is validated before any request is sent.
	pub async fn illust_ranking(&self, params: &IllustRankingParams) -> Result<IllustRanking> {
		params.validate()?;

		let mut url = self.endpoint(ILLUST_RANKING_PATH)?;

		params.append_query(&mut url);

		self.get_json(url, RequestKind::IllustRanking, RANKING_ENDPOINT).await
	}

	/// Fetches the page behind a `next_url` returned by a previous ranking page.
	pub async fn illust_ranking_next(&self, next_url: &str) -> Result<IllustRanking> {
		let url =
			Url::parse(next_url).map_err(|source| ConfigError::invalid_url(next_url, source))?;

		self.get_json(url, RequestKind::IllustRanking, RANKING_ENDPOINT).await
	}

	/// Fetches a single illustration.
	pub async fn illust_detail(&self, params: &IllustDetailParams) -> Result<IllustDetail> {
		params.validate()?;

		let mut url = self.endpoint(ILLUST_DETAIL_PATH)?;

		params.append_query(&mut url);

		self.get_json(url, RequestKind::IllustDetail, DETAIL_ENDPOINT).await
	}

	/// Downloads an image from the image CDN.
	///
	/// The CDN rejects requests without the app `Referer`; no bearer token is sent.
	pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
		let url = Url::parse(url).map_err(|source| ConfigError::invalid_url(url, source))?;

		obs::observe(RequestKind::Download, DOWNLOAD_ENDPOINT, async move {
			let response = self
				.http_client
				.get(url)
				.headers(self.download_headers.clone())
				.send()
				.await
				.map_err(|err| TransportError::network(DOWNLOAD_ENDPOINT, err))?;

			if response.status() != StatusCode::OK {
				return Err(http::api_error(response, DOWNLOAD_ENDPOINT).await);
			}

			http::read_body(response, DOWNLOAD_ENDPOINT).await
		})
		.await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::provider::StaticTokenProvider;

	fn client() -> ApiClient {
		ApiClient::builder(Arc::new(StaticTokenProvider::new("token")))
			.base_url("http://127.0.0.1:1")
			.build()
			.expect("Client should build.")
	}

	#[tokio::test]
	async fn invalid_params_fail_before_any_request() {
		let client = client();

		assert!(matches!(
			client.illust_ranking(&IllustRankingParams::new()).await,
			Err(Error::InvalidParams(errors)) if errors.errors[0].field == "mode"
		));
		assert!(matches!(
			client.illust_detail(&IllustDetailParams::new()).await,
			Err(Error::InvalidParams(errors)) if errors.errors[0].field == "illust_id"
		));
	}

	#[tokio::test]
	async fn unparsable_urls_are_config_errors() {
		let client = client();

		assert!(matches!(
			client.illust_ranking_next("/v1/illust/ranking?offset=30").await,
			Err(Error::Config(ConfigError::InvalidUrl { .. }))
		));
		assert!(matches!(
			client.download("img/2017/09/01/64936066_p0.jpg").await,
			Err(Error::Config(ConfigError::InvalidUrl { .. }))
		));
	}
}
