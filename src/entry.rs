use std::{
    fs::Metadata,
    path::{Path, PathBuf},
};


/// A materialized tree or file, described the way the streaming
/// collaborator expects it: a name, a path and the path's metadata.
#[derive(Clone, Debug)]
pub struct GeneratedEntry {
    name: String,

    path: PathBuf,

    metadata: Metadata,
}

impl GeneratedEntry {
    pub(crate) fn new<N, P>(name: N, path: P, metadata: Metadata) -> Self
    where
        N: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            path: path.into(),
            metadata,
        }
    }

    /// Name the entry is streamed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the entry on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Metadata captured right after the entry was materialized (or found, for a reused tree).
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns `true` for a tree, `false` for a single file.
    pub fn is_directory(&self) -> bool {
        self.metadata.is_dir()
    }
}
