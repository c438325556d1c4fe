//! Request spans, compiled down to nothing unless the `tracing` feature is on.

// self
use crate::{_prelude::*, obs::RequestKind};

/// Future returned by [`RequestSpan::instrument`].
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`RequestSpan::instrument`].
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// `pixiv_client.request` span carrying the operation and the endpoint it talks to.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Opens a span with the `request` and `endpoint` fields set.
	pub fn new(kind: RequestKind, endpoint: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self {
				span: tracing::info_span!("pixiv_client.request", request = kind.as_str(), endpoint),
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, endpoint);

			Self {}
		}
	}

	/// Runs `fut` inside the span.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Emits a `warn` event under the span describing why the request failed.
	pub fn record_failure(&self, err: &Error) {
		#[cfg(feature = "tracing")]
		{
			tracing::warn!(parent: &self.span, error = %err, "pixiv request failed");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = err;
		}
	}
}
