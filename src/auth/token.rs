//! Token secrets and the immutable record issued by the auth endpoint.

pub mod record;
pub mod secret;
