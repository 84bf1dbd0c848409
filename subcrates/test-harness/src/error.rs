use shard_testing::FixtureError;
use thiserror::Error;

/// Main `Error` for use in unit and integration tests.
///
/// Implements `From` for:
/// - [`std::io::Error`], and
/// - [`shard_testing::FixtureError`].
#[derive(Error, Debug)]
pub enum TestError {
    #[error("std::io::Error")]
    IoError(
        #[from]
        #[source]
        std::io::Error,
    ),

    #[error("fixture error")]
    FixtureError(
        #[from]
        #[source]
        FixtureError,
    ),
}

/// A main `Result` type for use in unit and integration tests (shorthand for the [`TestError`] error).
pub type TestResult<O = ()> = std::result::Result<O, TestError>;
