use std::{fs, io::ErrorKind, path::Path};


/// What a path points to, without following symlinks.
///
/// The generator never creates symlinks, so a symlink anywhere
/// in a sandbox is an assertion failure in its own right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,

    /// The path leads to a regular file.
    File,

    /// The path leads to a directory.
    Directory,

    /// The path leads to a symlink (valid or not).
    Symlink,

    /// The path exists, but its type is not one of the recognized ones.
    Unrecognized,
}

impl PathType {
    /// Computes the type of a `path`.
    ///
    /// Returns [`std::io::Error`] if the metadata cannot be read
    /// for a reason other than the path not existing.
    pub fn from_path<P>(path: P) -> Result<Self, std::io::Error>
    where
        P: AsRef<Path>,
    {
        let metadata_no_follow = match fs::symlink_metadata(path.as_ref()) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Self::NotFound),
            Err(error) => return Err(error),
        };

        let file_type = metadata_no_follow.file_type();

        if file_type.is_symlink() {
            Ok(Self::Symlink)
        } else if file_type.is_file() {
            Ok(Self::File)
        } else if file_type.is_dir() {
            Ok(Self::Directory)
        } else {
            Ok(Self::Unrecognized)
        }
    }

    /// Returns a short name of the given path type.
    ///
    /// Examples: "a file", "a directory", ...
    pub fn to_short_name(self) -> &'static str {
        match self {
            PathType::NotFound => "non-existent",
            PathType::File => "a file",
            PathType::Directory => "a directory",
            PathType::Symlink => "a symlink",
            PathType::Unrecognized => "unrecognized",
        }
    }
}
