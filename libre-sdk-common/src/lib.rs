//! Request/response helpers shared by the `libre-sdk` clients.

mod error;
pub use error::Error;

pub mod helper;

#[cfg(feature = "blocking")]
pub mod blocking;
