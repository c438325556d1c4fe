//! Response schemas decoded from the app API and the auth endpoint.

pub mod error;
pub mod illust;
pub mod token;

pub use error::*;
pub use illust::*;
pub use token::*;
