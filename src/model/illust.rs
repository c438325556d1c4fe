//! Illustration schemas shared by the ranking and detail endpoints.

// self
use crate::_prelude::*;

/// Page of an illustration ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IllustRanking {
	/// Ranked illustrations on this page.
	pub illusts: Vec<Illust>,
	/// Absolute URL of the next page; `None` on the last page.
	#[serde(default)]
	pub next_url: Option<String>,
}

/// Response of the illustration detail endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IllustDetail {
	/// Requested illustration.
	pub illust: Illust,
}

/// Single illustration work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Illust {
	/// Work id.
	pub id: u64,
	/// Work title.
	pub title: String,
	/// Work type (`illust`, `manga`, `ugoira`).
	#[serde(rename = "type")]
	pub kind: String,
	/// Preview image URLs keyed by size (`square_medium`, `medium`, `large`).
	pub image_urls: BTreeMap<String, String>,
	/// Caption as HTML.
	pub caption: String,
	/// Visibility restriction flag.
	pub restrict: u32,
	/// Author.
	pub user: IllustUser,
	/// Tags attached to the work.
	pub tags: Vec<IllustTag>,
	/// Drawing tools reported by the author.
	pub tools: Vec<String>,
	/// Publication instant.
	#[serde(with = "time::serde::rfc3339")]
	pub create_date: OffsetDateTime,
	/// Number of pages.
	pub page_count: u32,
	/// Width of the first page in pixels.
	pub width: u32,
	/// Height of the first page in pixels.
	pub height: u32,
	/// Content rating level.
	pub sanity_level: u32,
	/// Series the work belongs to, if any.
	#[serde(default)]
	pub series: Option<IllustSeries>,
	/// Original image URL for single-page works (`original_image_url`); empty otherwise.
	#[serde(default)]
	pub meta_single_page: BTreeMap<String, String>,
	/// Per-page image URLs for multi-page works; empty otherwise.
	#[serde(default)]
	pub meta_pages: Vec<IllustMetaPage>,
	/// View count.
	pub total_view: u64,
	/// Bookmark count.
	pub total_bookmarks: u64,
	/// Whether the authenticated account bookmarked the work.
	pub is_bookmarked: bool,
	/// Whether the work is visible to the authenticated account.
	pub visible: bool,
	/// Whether the work is muted by the authenticated account.
	pub is_muted: bool,
}
impl Illust {
	/// Returns the original-resolution URL of every page, in page order.
	pub fn original_image_urls(&self) -> Vec<&str> {
		if let Some(url) = self.meta_single_page.get("original_image_url") {
			return vec![url.as_str()];
		}

		self.meta_pages
			.iter()
			.filter_map(|page| page.image_urls.get("original").map(String::as_str))
			.collect()
	}
}

/// Author summary embedded in an illustration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustUser {
	/// Account id.
	pub id: u64,
	/// Display name.
	pub name: String,
	/// Account handle.
	pub account: String,
	/// Avatar URLs keyed by size.
	pub profile_image_urls: BTreeMap<String, String>,
	/// Whether the authenticated account follows the author.
	#[serde(default)]
	pub is_followed: bool,
}

/// Tag attached to an illustration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustTag {
	/// Tag text.
	pub name: String,
}

/// Series reference embedded in an illustration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustSeries {
	/// Series id.
	pub id: u64,
	/// Series title.
	pub title: String,
}

/// Image URLs of one page of a multi-page illustration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustMetaPage {
	/// Image URLs keyed by size, including `original`.
	pub image_urls: BTreeMap<String, String>,
}
