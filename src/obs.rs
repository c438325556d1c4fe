//! Optional observability helpers for token grants and API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `pixiv_client.request` with the `request`
//!   (operation) and `endpoint` (wire label such as `auth/token`) fields, plus a `warn` event
//!   when the request fails.
//! - Enable `metrics` to increment the `pixiv_client_request_total` counter for every
//!   attempt/success/failure, labeled by `request`, `endpoint` and `outcome`.

mod counter;
mod span;

pub use counter::*;
pub use span::*;

// self
use crate::_prelude::*;

/// Operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
	/// Password grant against the auth endpoint.
	Authorize,
	/// Refresh grant against the auth endpoint.
	Refresh,
	/// Illustration ranking page.
	IllustRanking,
	/// Illustration detail.
	IllustDetail,
	/// Image download from the CDN.
	Download,
}
impl RequestKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestKind::Authorize => "authorize",
			RequestKind::Refresh => "refresh",
			RequestKind::IllustRanking => "illust_ranking",
			RequestKind::IllustDetail => "illust_detail",
			RequestKind::Download => "download",
		}
	}
}
impl Display for RequestKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a request span, recording attempt and outcome.
pub(crate) async fn observe<T, Fut>(
	kind: RequestKind,
	endpoint: &'static str,
	fut: Fut,
) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = RequestSpan::new(kind, endpoint);

	record_request_outcome(kind, endpoint, RequestOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_request_outcome(kind, endpoint, RequestOutcome::Success),
		Err(err) => {
			span.record_failure(err);
			record_request_outcome(kind, endpoint, RequestOutcome::Failure);
		},
	}

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ConfigError;

	#[tokio::test]
	async fn observe_returns_the_wrapped_result() {
		let ok = observe(RequestKind::IllustDetail, "illust/detail", async { Ok(64936066_u64) })
			.await
			.expect("Successful futures should pass through.");
		let err = observe::<u64, _>(RequestKind::Refresh, "auth/token", async {
			Err(ConfigError::NonPositiveExpiresIn.into())
		})
		.await
		.expect_err("Failed futures should pass through.");

		assert_eq!(ok, 64936066);
		assert!(matches!(err, Error::Config(ConfigError::NonPositiveExpiresIn)));
	}
}
