//! Options for the illustration detail endpoint.

// self
use crate::{
	_prelude::*,
	params::{MISSING_REQUIRED_FIELD, ParamErrors, Params},
};

/// Options for `GET /v1/illust/detail`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IllustDetailParams {
	/// Illustration to fetch. Required.
	pub illust_id: Option<u64>,
}
impl IllustDetailParams {
	/// Creates empty options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the illustration id.
	pub fn illust_id(mut self, illust_id: u64) -> Self {
		self.illust_id = Some(illust_id);

		self
	}
}
impl Params for IllustDetailParams {
	fn validate(&self) -> Result<(), ParamErrors> {
		let mut errors = ParamErrors::default();

		if self.illust_id.is_none() {
			errors.push("illust_id", MISSING_REQUIRED_FIELD);
		}

		errors.into_result()
	}

	fn append_query(&self, url: &mut Url) {
		if let Some(illust_id) = self.illust_id {
			url.query_pairs_mut().append_pair("illust_id", &illust_id.to_string());
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn illust_id_is_required() {
		let err = IllustDetailParams::new().validate().expect_err("Missing id should fail.");

		assert_eq!(err.len(), 1);
		assert_eq!(err.errors[0].field, "illust_id");
		assert_eq!(err.to_string(), "1 validation error(s) found.");
		assert_eq!(err.errors[0].to_string(), "illust_id, missing required field");
	}

	#[test]
	fn query_carries_the_id() {
		let mut url = Url::parse("https://app-api.pixiv.net/v1/illust/detail")
			.expect("Detail endpoint URL should parse.");
		let params = IllustDetailParams::new().illust_id(62397682);

		params.validate().expect("Complete options should validate.");
		params.append_query(&mut url);

		assert_eq!(url.query(), Some("illust_id=62397682"));
	}
}
