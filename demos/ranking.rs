//! Walks the first pages of today's illustration ranking.
//!
//! Reads `PIXIV_USERNAME`, `PIXIV_PASSWORD`, `PIXIV_CLIENT_ID`, and `PIXIV_CLIENT_SECRET`, then
//! follows `next_url` for up to three pages.

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::Result;
// self
use pixiv_client::{
	auth::Credential,
	client::ApiClient,
	oauth::OAuthTokenProvider,
	params::{IllustRankingParams, RankingMode},
};

const MAX_PAGES: usize = 3;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let credential = Credential::new(
		env::var("PIXIV_USERNAME")?,
		env::var("PIXIV_PASSWORD")?,
		env::var("PIXIV_CLIENT_ID")?,
		env::var("PIXIV_CLIENT_SECRET")?,
	);
	let provider = Arc::new(OAuthTokenProvider::new(credential)?);
	let client = ApiClient::new(provider.clone())?;
	let params = IllustRankingParams::new().mode(RankingMode::Day);
	let mut page = client.illust_ranking(&params).await?;
	let mut rank = 0;

	for _ in 0..MAX_PAGES {
		for illust in &page.illusts {
			rank += 1;

			println!(
				"#{rank:>3} {} by {} ({} bookmarks)",
				illust.title, illust.user.name, illust.total_bookmarks
			);
		}

		let Some(next_url) = page.next_url.take() else { break };

		page = client.illust_ranking_next(&next_url).await?;
	}

	println!(
		"authorizations={} refreshes={} cache_hits={}",
		provider.metrics().authorizations(),
		provider.metrics().refreshes(),
		provider.metrics().cache_hits()
	);

	Ok(())
}
