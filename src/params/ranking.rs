//! Options for the illustration ranking endpoint and the closed set of ranking modes.

// crates.io
use time::{format_description::BorrowedFormatItem, macros};
// self
use crate::{
	_prelude::*,
	params::{MISSING_REQUIRED_FIELD, ParamErrors, Params},
};

/// Filter sent when the caller leaves [`IllustRankingParams::filter`] unset.
pub const DEFAULT_RANKING_FILTER: &str = "for_android";

const RANKING_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
	macros::format_description!("[year]-[month]-[day]");

/// Ranking categories accepted by `GET /v1/illust/ranking`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
	/// Daily ranking.
	Day,
	/// Daily ranking among male users.
	DayMale,
	/// Daily ranking among female users.
	DayFemale,
	/// Daily R-18 ranking.
	DayR18,
	/// Daily R-18 ranking among male users.
	DayMaleR18,
	/// Daily R-18 ranking among female users.
	DayFemaleR18,
	/// Weekly ranking.
	Week,
	/// Weekly ranking of original works.
	WeekOriginal,
	/// Weekly ranking of rookie authors.
	WeekRookie,
	/// Weekly R-18 ranking.
	WeekR18,
	/// Weekly R-18G ranking.
	#[serde(rename = "week_r18g")]
	WeekR18G,
	/// Monthly ranking.
	Month,
}
impl RankingMode {
	const ALL: [RankingMode; 12] = [
		RankingMode::Day,
		RankingMode::DayMale,
		RankingMode::DayFemale,
		RankingMode::DayR18,
		RankingMode::DayMaleR18,
		RankingMode::DayFemaleR18,
		RankingMode::Week,
		RankingMode::WeekOriginal,
		RankingMode::WeekRookie,
		RankingMode::WeekR18,
		RankingMode::WeekR18G,
		RankingMode::Month,
	];

	/// Returns the wire value of the mode.
	pub const fn as_str(self) -> &'static str {
		match self {
			RankingMode::Day => "day",
			RankingMode::DayMale => "day_male",
			RankingMode::DayFemale => "day_female",
			RankingMode::DayR18 => "day_r18",
			RankingMode::DayMaleR18 => "day_male_r18",
			RankingMode::DayFemaleR18 => "day_female_r18",
			RankingMode::Week => "week",
			RankingMode::WeekOriginal => "week_original",
			RankingMode::WeekRookie => "week_rookie",
			RankingMode::WeekR18 => "week_r18",
			RankingMode::WeekR18G => "week_r18g",
			RankingMode::Month => "month",
		}
	}
}
impl Display for RankingMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for RankingMode {
	type Err = UnknownRankingMode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|mode| mode.as_str() == s)
			.ok_or_else(|| UnknownRankingMode(s.to_owned()))
	}
}

/// Error returned when parsing an unknown ranking mode.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown ranking mode `{0}`.")]
pub struct UnknownRankingMode(pub String);

/// Options for `GET /v1/illust/ranking`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IllustRankingParams {
	/// Ranking category. Required.
	pub mode: Option<RankingMode>,
	/// Ranking day; the latest ranking when unset.
	pub date: Option<Date>,
	/// Number of entries to skip.
	pub offset: Option<u32>,
	/// Content filter; [`DEFAULT_RANKING_FILTER`] when unset.
	pub filter: Option<String>,
}
impl IllustRankingParams {
	/// Creates empty options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the ranking category.
	pub fn mode(mut self, mode: RankingMode) -> Self {
		self.mode = Some(mode);

		self
	}

	/// Sets the ranking day.
	pub fn date(mut self, date: Date) -> Self {
		self.date = Some(date);

		self
	}

	/// Sets the number of entries to skip.
	pub fn offset(mut self, offset: u32) -> Self {
		self.offset = Some(offset);

		self
	}

	/// Overrides the content filter.
	///
	/// An empty filter fails validation instead of being sent as `filter=`; leave it unset to get
	/// [`DEFAULT_RANKING_FILTER`].
	pub fn filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = Some(filter.into());

		self
	}
}
impl Params for IllustRankingParams {
	fn validate(&self) -> Result<(), ParamErrors> {
		let mut errors = ParamErrors::default();

		if self.mode.is_none() {
			errors.push("mode", MISSING_REQUIRED_FIELD);
		}
		if self.filter.as_deref().is_some_and(str::is_empty) {
			errors.push("filter", "must not be empty");
		}

		errors.into_result()
	}

	fn append_query(&self, url: &mut Url) {
		let mut pairs = url.query_pairs_mut();

		if let Some(mode) = self.mode {
			pairs.append_pair("mode", mode.as_str());
		}
		if let Some(date) = self.date {
			// The format only uses numeric components, which every `Date` can render.
			if let Ok(formatted) = date.format(RANKING_DATE_FORMAT) {
				pairs.append_pair("date", &formatted);
			}
		}
		if let Some(offset) = self.offset {
			pairs.append_pair("offset", &offset.to_string());
		}

		pairs.append_pair("filter", self.filter.as_deref().unwrap_or(DEFAULT_RANKING_FILTER));
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn endpoint() -> Url {
		Url::parse("https://app-api.pixiv.net/v1/illust/ranking")
			.expect("Ranking endpoint URL should parse.")
	}

	#[test]
	fn mode_is_required() {
		let err = IllustRankingParams::new()
			.offset(30)
			.validate()
			.expect_err("Options without a mode should fail validation.");

		assert_eq!(err.errors.len(), 1);
		assert_eq!(err.errors[0].field, "mode");
		assert_eq!(err.errors[0].message, MISSING_REQUIRED_FIELD);
	}

	#[test]
	fn empty_filter_is_reported_alongside_missing_mode() {
		let err = IllustRankingParams::new()
			.filter("")
			.validate()
			.expect_err("Empty filter and missing mode should both fail.");
		let fields = err.errors.iter().map(|error| error.field).collect::<Vec<_>>();

		assert_eq!(fields, ["mode", "filter"]);
	}

	#[test]
	fn minimal_query_uses_default_filter() {
		let mut url = endpoint();

		IllustRankingParams::new().mode(RankingMode::Day).append_query(&mut url);

		assert_eq!(url.query(), Some("mode=day&filter=for_android"));
	}

	#[test]
	fn full_query_formats_every_field() {
		let mut url = endpoint();

		IllustRankingParams::new()
			.mode(RankingMode::WeekR18G)
			.date(macros::date!(2017 - 09 - 01))
			.offset(30)
			.filter("for_ios")
			.append_query(&mut url);

		assert_eq!(url.query(), Some("mode=week_r18g&date=2017-09-01&offset=30&filter=for_ios"));
	}

	#[test]
	fn modes_round_trip_through_their_wire_names() {
		for mode in RankingMode::ALL {
			assert_eq!(mode.as_str().parse::<RankingMode>(), Ok(mode));
			assert_eq!(
				serde_json::to_string(&mode).expect("Ranking mode should serialize."),
				format!("\"{mode}\"")
			);
		}

		assert_eq!("yearly".parse::<RankingMode>(), Err(UnknownRankingMode("yearly".into())));
	}
}
