//! Credentials and token models used by the OAuth token provider.

pub mod credential;
pub mod token;

pub use credential::*;
pub use token::{record::*, secret::*};
