use std::path::{Path, PathBuf};


pub trait AsPath {
    fn as_path(&self) -> &Path;
}


pub trait WithSubPath {
    fn sub_path<P>(&self, sub_path: P) -> PathBuf
    where
        P: AsRef<Path>;
}



pub trait AssertablePath {
    /*
     * General assertions.
     */

    /// Asserts the underlying path points to an existing entry on the filesystem.
    fn assert_exists(&self);

    /// Asserts the path does not exist on the filesystem.
    fn assert_not_exists(&self);


    /*
     * Directory-related assertions.
     */

    /// Asserts the path points to a directory (and not to a symlink).
    fn assert_is_directory(&self);

    /// Asserts the path points to a directory that does not contain any entries.
    fn assert_is_directory_and_empty(&self);

    /// Asserts the path points to a directory that contains at least one entry.
    fn assert_is_directory_and_not_empty(&self);


    /*
     * File-related assertions.
     */

    /// Asserts the path points to a regular file (and not to a symlink).
    fn assert_is_file(&self);

    /// Asserts the path points to a regular file that is exactly `expected_size_bytes` long.
    fn assert_is_file_with_size(&self, expected_size_bytes: u64);

    /// Asserts the path points to a regular file whose content equals `expected_content`.
    fn assert_is_file_with_content(&self, expected_content: &[u8]);

    /// Asserts both paths point to regular files with equal contents.
    fn assert_is_file_and_matches_secondary_file<P>(&self, secondary_file_path: P)
    where
        P: AsPath;

    /// Asserts the path points to a regular file and returns its entire content.
    fn assert_is_file_and_read_content(&self) -> Vec<u8>;
}
