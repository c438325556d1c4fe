//! `pixiv_client_request_total` counter, a no-op unless the `metrics` feature is on.

// self
use crate::obs::{RequestKind, RequestOutcome};

/// Counts one outcome of `kind` against `endpoint`.
pub fn record_request_outcome(kind: RequestKind, endpoint: &'static str, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pixiv_client_request_total",
			"request" => kind.as_str(),
			"endpoint" => endpoint,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, endpoint, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcomes_are_accepted_without_an_installed_recorder() {
		for outcome in [RequestOutcome::Attempt, RequestOutcome::Success, RequestOutcome::Failure] {
			record_request_outcome(RequestKind::Download, "download", outcome);
		}
	}
}
