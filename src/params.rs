//! Request options for the resource endpoints and their validation.
//!
//! Each options type keeps optional fields as `Option<T>` so "unset" is distinct from any real
//! value. [`Params::validate`] is pure: it reports every missing or invalid field at once and
//! never touches the network.

pub mod detail;
pub mod ranking;

pub use detail::*;
pub use ranking::*;

// self
use crate::_prelude::*;

/// Message recorded for required fields that were never set.
pub const MISSING_REQUIRED_FIELD: &str = "missing required field";

/// Request options that can be validated and encoded into a query string.
pub trait Params {
	/// Checks every field, returning all failures together.
	fn validate(&self) -> Result<(), ParamErrors>;

	/// Appends the query pairs for this request.
	///
	/// Callers must run [`Params::validate`] first; required fields that are unset are skipped.
	fn append_query(&self, url: &mut Url);
}

/// Single field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{field}, {message}")]
pub struct ParamError {
	/// Name of the offending field.
	pub field: &'static str,
	/// Description of the failure.
	pub message: &'static str,
}

/// Every validation failure found in one options value.
#[derive(Clone, Debug, Default, PartialEq, Eq, ThisError)]
#[error("{} validation error(s) found.", .errors.len())]
pub struct ParamErrors {
	/// Individual failures, in field order.
	pub errors: Vec<ParamError>,
}
impl ParamErrors {
	/// Records a failure.
	pub fn push(&mut self, field: &'static str, message: &'static str) {
		self.errors.push(ParamError { field, message });
	}

	/// Returns the number of recorded failures.
	pub fn len(&self) -> usize {
		self.errors.len()
	}

	/// Returns `true` when nothing failed.
	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	/// Converts the collected failures into a `Result`.
	pub fn into_result(self) -> Result<(), ParamErrors> {
		if self.is_empty() { Ok(()) } else { Err(self) }
	}
}
