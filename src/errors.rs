//! Defines the error types reported by the framework.

use thiserror::Error;


/// An error reported by an engine configuration method.
///
/// Configuration errors leave the engine state unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A configuration value outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}


/// A handy alias for `Result` with this crate's `Error`.
pub type Result<T> = ::std::result::Result<T, Error>;
