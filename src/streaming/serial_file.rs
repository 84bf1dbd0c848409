use std::{
    fs::Metadata,
    path::{Path, PathBuf},
};

use crate::{
    error::{FixtureError, FixtureResult},
    macros::use_enabled_fs_module,
};

use_enabled_fs_module!();


/// What a [`SerialEntry`] points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerialEntryKind {
    /// A directory. Directories carry no content in the stream.
    Directory,

    /// A regular file, whose content is part of the stream.
    File,
}


/// A single file or directory inside a [`SerialFile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerialEntry {
    /// Path inside the stream. Starts with the serial file's name.
    pub stream_path: PathBuf,

    /// Path on disk.
    pub path: PathBuf,

    /// Whether this is a file or a directory.
    pub kind: SerialEntryKind,

    /// Size of the file in bytes, `0` for directories.
    pub size_bytes: u64,
}


/// A named handle to a file or directory tree on disk.
///
/// Directory children are listed depth-first, sorted by file name,
/// so the stream order does not depend on the order the filesystem returns entries in.
#[derive(Clone, Debug)]
pub struct SerialFile {
    name: String,

    path: PathBuf,

    metadata: Metadata,
}

impl SerialFile {
    /// Constructs a handle, validating `is_directory` against `metadata`.
    pub fn new<N, P>(
        name: N,
        path: P,
        is_directory: bool,
        metadata: Metadata,
    ) -> FixtureResult<Self>
    where
        N: Into<String>,
        P: Into<PathBuf>,
    {
        let path: PathBuf = path.into();

        if is_directory && !metadata.is_dir() {
            return Err(FixtureError::NotADirectory { path });
        }

        if !is_directory && metadata.is_dir() {
            return Err(FixtureError::UnexpectedDirectory { path });
        }

        Ok(Self {
            name: name.into(),
            path,
            metadata,
        })
    }

    /// Name of the handle; the first component of every stream path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Metadata the handle was constructed with.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns `true` if the handle points to a directory tree.
    pub fn is_directory(&self) -> bool {
        self.metadata.is_dir()
    }

    /// Lists this handle and everything below it, in stream order.
    ///
    /// The first entry is always the handle itself.
    pub fn entries(&self) -> FixtureResult<Vec<SerialEntry>> {
        let mut entries = Vec::new();

        if self.metadata.is_dir() {
            entries.push(SerialEntry {
                stream_path: PathBuf::from(&self.name),
                path: self.path.clone(),
                kind: SerialEntryKind::Directory,
                size_bytes: 0,
            });

            collect_directory_entries(&self.path, Path::new(&self.name), &mut entries)?;
        } else {
            entries.push(SerialEntry {
                stream_path: PathBuf::from(&self.name),
                path: self.path.clone(),
                kind: SerialEntryKind::File,
                size_bytes: self.metadata.len(),
            });
        }

        Ok(entries)
    }
}


fn collect_directory_entries(
    directory_path: &Path,
    stream_prefix: &Path,
    entries: &mut Vec<SerialEntry>,
) -> FixtureResult<()> {
    let map_read_error = |error: std::io::Error| FixtureError::UnableToReadDirectory {
        path: directory_path.to_path_buf(),
        error,
    };

    let mut children = Vec::new();
    for raw_entry in fs::read_dir(directory_path).map_err(map_read_error)? {
        let raw_entry = raw_entry.map_err(map_read_error)?;
        let raw_entry_metadata = raw_entry.metadata().map_err(map_read_error)?;

        children.push((raw_entry.file_name(), raw_entry.path(), raw_entry_metadata));
    }

    children.sort_by(|(first_name, ..), (second_name, ..)| first_name.cmp(second_name));


    for (child_name, child_path, child_metadata) in children {
        let child_stream_path = stream_prefix.join(&child_name);

        if child_metadata.is_dir() {
            entries.push(SerialEntry {
                stream_path: child_stream_path.clone(),
                path: child_path.clone(),
                kind: SerialEntryKind::Directory,
                size_bytes: 0,
            });

            collect_directory_entries(&child_path, &child_stream_path, entries)?;
        } else if child_metadata.is_file() {
            entries.push(SerialEntry {
                stream_path: child_stream_path,
                path: child_path,
                kind: SerialEntryKind::File,
                size_bytes: child_metadata.len(),
            });
        } else {
            tracing::trace!(
                path = %child_path.display(),
                "skipping entry that is neither a file nor a directory"
            );
        }
    }

    Ok(())
}
