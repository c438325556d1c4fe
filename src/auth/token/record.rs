//! Cached grant result and its expiry arithmetic.

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Whether a record may still be presented at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
	/// Token can still be presented as a bearer credential.
	Active,
	/// Token reached `created_at + expires_in` and must be refreshed.
	Expired,
}

/// Field left unset on a [`TokenRecordBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum TokenRecordBuilderError {
	/// `access_token` was never set.
	#[error("Token record is missing its access token.")]
	MissingAccessToken,
	/// `refresh_token` was never set.
	#[error("Token record is missing its refresh token.")]
	MissingRefreshToken,
	/// `created_at` was never set.
	#[error("Token record is missing its creation instant.")]
	MissingCreatedAt,
	/// `expires_in` was never set.
	#[error("Token record is missing its validity window.")]
	MissingExpiresIn,
	/// `created_at + expires_in` is not a representable instant.
	#[error("Token record expiry overflows the supported date range.")]
	ExpiryOutOfRange,
}

/// Tokens issued by a successful password or refresh grant.
///
/// Records are replaced wholesale on refresh and never mutated in place. Both secrets redact
/// themselves in `Debug` output.
#[derive(Clone, Debug)]
pub struct TokenRecord {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Refresh token secret used by the next refresh grant.
	pub refresh_token: TokenSecret,
	/// Instant the record was stamped with, read from the provider's clock.
	pub created_at: OffsetDateTime,
	/// Validity window reported by the auth endpoint.
	pub expires_in: Duration,
}
impl TokenRecord {
	/// Starts an empty builder.
	pub fn builder() -> TokenRecordBuilder {
		TokenRecordBuilder::default()
	}

	/// Instant at which the access token stops being valid; the builder guarantees it exists.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.created_at + self.expires_in
	}

	/// Status at `instant`; the deadline itself already counts as expired.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		if instant >= self.expires_at() { TokenStatus::Expired } else { TokenStatus::Active }
	}

	/// Shorthand for `status_at(instant) == TokenStatus::Expired`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Expired)
	}
}

/// Builder for [`TokenRecord`].
#[derive(Clone, Debug, Default)]
pub struct TokenRecordBuilder {
	access_token: Option<TokenSecret>,
	refresh_token: Option<TokenSecret>,
	created_at: Option<OffsetDateTime>,
	expires_in: Option<Duration>,
}
impl TokenRecordBuilder {
	/// Provides the access token value.
	pub fn access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(TokenSecret::new(token));

		self
	}

	/// Provides the refresh token value.
	pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Sets the creation instant.
	pub fn created_at(mut self, instant: OffsetDateTime) -> Self {
		self.created_at = Some(instant);

		self
	}

	/// Sets the validity window counted from the creation instant.
	pub fn expires_in(mut self, duration: Duration) -> Self {
		self.expires_in = Some(duration);

		self
	}

	/// Produces the record, naming the first field left unset.
	pub fn build(self) -> Result<TokenRecord, TokenRecordBuilderError> {
		use TokenRecordBuilderError::*;

		let Some(access_token) = self.access_token else { return Err(MissingAccessToken) };
		let Some(refresh_token) = self.refresh_token else { return Err(MissingRefreshToken) };
		let Some(created_at) = self.created_at else { return Err(MissingCreatedAt) };
		let Some(expires_in) = self.expires_in else { return Err(MissingExpiresIn) };

		if created_at.checked_add(expires_in).is_none() {
			return Err(ExpiryOutOfRange);
		}

		Ok(TokenRecord { access_token, refresh_token, created_at, expires_in })
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn record() -> TokenRecord {
		TokenRecord::builder()
			.access_token("access")
			.refresh_token("refresh")
			.created_at(macros::datetime!(2017-01-01 00:00 UTC))
			.expires_in(Duration::hours(1))
			.build()
			.expect("Token record builder should succeed for complete input.")
	}

	#[test]
	fn expiry_is_inclusive_of_the_deadline() {
		let record = record();

		assert_eq!(record.expires_at(), macros::datetime!(2017-01-01 01:00 UTC));
		assert_eq!(record.status_at(macros::datetime!(2017-01-01 00:59:59 UTC)), TokenStatus::Active);
		assert_eq!(record.status_at(macros::datetime!(2017-01-01 01:00 UTC)), TokenStatus::Expired);
		assert!(record.is_expired_at(macros::datetime!(2017-01-02 00:00 UTC)));
	}

	#[test]
	fn builder_reports_the_first_missing_field() {
		let err = TokenRecord::builder()
			.access_token("access")
			.created_at(macros::datetime!(2017-01-01 00:00 UTC))
			.expires_in(Duration::hours(1))
			.build()
			.expect_err("Builder should reject a missing refresh token.");

		assert_eq!(err, TokenRecordBuilderError::MissingRefreshToken);
	}

	#[test]
	fn builder_rejects_unrepresentable_expiry() {
		let err = TokenRecord::builder()
			.access_token("access")
			.refresh_token("refresh")
			.created_at(macros::datetime!(2017-01-01 00:00 UTC))
			.expires_in(Duration::MAX)
			.build()
			.expect_err("An expiry past the supported range should be rejected.");

		assert_eq!(err, TokenRecordBuilderError::ExpiryOutOfRange);
	}

	#[test]
	fn debug_output_redacts_secrets() {
		let rendered = format!("{:?}", record());

		assert!(!rendered.contains("\"access\""));
		assert!(!rendered.contains("\"refresh\""));
		assert!(rendered.contains("access_token: TokenSecret(<redacted>, len=6)"));
	}
}
