//! Fetches one illustration and downloads its first original page.
//!
//! Usage: `cargo run --example illust_detail -- <illust_id> [output]`. Credentials come from the
//! same `PIXIV_*` environment variables as the ranking demo.

// std
use std::{env, fs, sync::Arc};
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use pixiv_client::{
	auth::Credential, client::ApiClient, oauth::OAuthTokenProvider, params::IllustDetailParams,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = env::args().skip(1);
	let illust_id = args.next().ok_or_else(|| eyre!("An illustration id is required."))?.parse()?;
	let output = args.next();
	let credential = Credential::new(
		env::var("PIXIV_USERNAME")?,
		env::var("PIXIV_PASSWORD")?,
		env::var("PIXIV_CLIENT_ID")?,
		env::var("PIXIV_CLIENT_SECRET")?,
	);
	let client = ApiClient::new(Arc::new(OAuthTokenProvider::new(credential)?))?;
	let detail = client.illust_detail(&IllustDetailParams::new().illust_id(illust_id)).await?;
	let illust = detail.illust;

	println!("{} ({} pages) by {}", illust.title, illust.page_count, illust.user.name);
	println!("created {}, {} views", illust.create_date, illust.total_view);
	println!(
		"tags: {}",
		illust.tags.iter().map(|tag| tag.name.as_str()).collect::<Vec<_>>().join(", ")
	);

	let Some(original) = illust.original_image_urls().first().map(|url| url.to_string()) else {
		return Ok(());
	};
	let bytes = client.download(&original).await?;
	let output =
		output.unwrap_or_else(|| original.rsplit('/').next().unwrap_or("original").to_owned());

	fs::write(&output, &bytes)?;

	println!("saved {} bytes to {output}", bytes.len());

	Ok(())
}
