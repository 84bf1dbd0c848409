//! Hand-off of generated fixtures to a streaming multi-file reader.
//!
//! The generator only knows two capabilities of the streaming side:
//!
//! | capability | trait | default implementation |
//! |---|---|---|
//! | construct a streamable handle from a name, a path and its metadata | [`SerialFileProvider`] | [`SerialFile`] |
//! | aggregate handles for sequential streaming | [`MultiFileAggregator`] | [`MultiFileReader`] |
//!
//! [`FilesystemStreaming`] implements both over the local filesystem.
//! Test suites that stream into a different abstraction
//! implement the two traits for their own types.

use std::{fs::Metadata, path::Path};

use crate::error::FixtureResult;

mod multi_reader;
mod serial_file;

pub use multi_reader::MultiFileReader;
pub use serial_file::{SerialEntry, SerialEntryKind, SerialFile};


/// Constructs a streamable handle for a single file or directory tree.
pub trait SerialFileProvider {
    /// The streamable handle.
    type File;

    /// Constructs a handle named `name` for the entry at `path`.
    ///
    /// `is_directory` states what the caller expects `path` to be;
    /// `metadata` is the caller's metadata for `path`.
    fn open_serial_file(
        &self,
        name: &str,
        path: &Path,
        is_directory: bool,
        metadata: &Metadata,
    ) -> FixtureResult<Self::File>;
}


/// Wraps one or more handles so that they can be streamed one after another.
pub trait MultiFileAggregator<F> {
    /// The sequential reader over all handles.
    type Reader;

    /// Aggregates `files` in the given order.
    ///
    /// If `container_name` is `Some`, all entries are nested under a
    /// wrapping container with that name.
    fn aggregate(
        &self,
        files: Vec<F>,
        container_name: Option<&str>,
    ) -> FixtureResult<Self::Reader>;
}


/// Streams fixtures directly from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilesystemStreaming;

impl SerialFileProvider for FilesystemStreaming {
    type File = SerialFile;

    fn open_serial_file(
        &self,
        name: &str,
        path: &Path,
        is_directory: bool,
        metadata: &Metadata,
    ) -> FixtureResult<Self::File> {
        SerialFile::new(name, path, is_directory, metadata.clone())
    }
}

impl MultiFileAggregator<SerialFile> for FilesystemStreaming {
    type Reader = MultiFileReader;

    fn aggregate(
        &self,
        files: Vec<SerialFile>,
        container_name: Option<&str>,
    ) -> FixtureResult<Self::Reader> {
        MultiFileReader::new(files, container_name)
    }
}
