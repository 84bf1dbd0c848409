//! Error types returned by the fixture generator.

use std::path::PathBuf;

use thiserror::Error;


/// An error that can occur while materializing, streaming or cleaning up fixtures.
///
/// Every variant is fatal to the calling test: nothing here is retried.
/// Variants fall into two groups, see [`FixtureError::io_error`]
/// and [`FixtureError::is_not_a_directory`].
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum FixtureError {
    /// The metadata of a path could not be read for a reason other than it not existing.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to access path: {}", .path.display())]
    UnableToAccessPath {
        /// The path whose metadata could not be read.
        path: PathBuf,

        /// Underlying IO error describing why the path could not be accessed.
        #[source]
        error: std::io::Error,
    },

    /// A path that should be a directory exists, but is something else (a file, for example).
    #[error("path exists, but is not a directory: {}", .path.display())]
    NotADirectory {
        /// The path that exists, but is not a directory.
        path: PathBuf,
    },

    /// A path was handed off as a file, but is a directory.
    #[error("path was expected to be a file, but is a directory: {}", .path.display())]
    UnexpectedDirectory {
        /// The path that is a directory.
        path: PathBuf,
    },

    /// A directory (or one of its missing parents) could not be created.
    #[error("unable to create directory: {}", .path.display())]
    UnableToCreateDirectory {
        /// The directory path that could not be created.
        path: PathBuf,

        /// Underlying IO error describing why the directory could not be created.
        #[source]
        error: std::io::Error,
    },

    /// A file could not be created (or truncated).
    #[error("unable to create file: {}", .path.display())]
    UnableToCreateFile {
        /// The file path that could not be created.
        path: PathBuf,

        /// Underlying IO error describing why the file could not be created.
        #[source]
        error: std::io::Error,
    },

    /// Generated content could not be written (or flushed) to a file.
    #[error("unable to write to file: {}", .path.display())]
    UnableToWriteFile {
        /// The file path that could not be written to.
        path: PathBuf,

        /// Underlying IO error describing why the write failed.
        #[source]
        error: std::io::Error,
    },

    /// A directory could not be listed while collecting entries for streaming.
    #[error("unable to read directory: {}", .path.display())]
    UnableToReadDirectory {
        /// The directory path that could not be read.
        path: PathBuf,

        /// Underlying IO error describing why the directory could not be read.
        #[source]
        error: std::io::Error,
    },

    /// The sandbox root exists, but could not be removed.
    ///
    /// A sandbox root that is already absent is not an error.
    #[error("unable to remove sandbox directory: {}", .path.display())]
    UnableToRemoveSandbox {
        /// The sandbox root path.
        path: PathBuf,

        /// Underlying IO error describing why the removal failed.
        #[source]
        error: std::io::Error,
    },
}

impl FixtureError {
    /// Returns the underlying [`std::io::Error`], if this is an IO failure.
    ///
    /// Returns `None` for [`FixtureError::NotADirectory`] and [`FixtureError::UnexpectedDirectory`].
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            FixtureError::UnableToAccessPath { error, .. }
            | FixtureError::UnableToCreateDirectory { error, .. }
            | FixtureError::UnableToCreateFile { error, .. }
            | FixtureError::UnableToWriteFile { error, .. }
            | FixtureError::UnableToReadDirectory { error, .. }
            | FixtureError::UnableToRemoveSandbox { error, .. } => Some(error),
            FixtureError::NotADirectory { .. } | FixtureError::UnexpectedDirectory { .. } => None,
        }
    }

    /// Returns `true` if a directory was expected, but something else was found.
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, FixtureError::NotADirectory { .. })
    }
}


/// Shorthand for a [`Result`] carrying a [`FixtureError`].
pub type FixtureResult<T> = std::result::Result<T, FixtureError>;
