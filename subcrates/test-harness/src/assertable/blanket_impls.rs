use std::{
    fs,
    path::{Path, PathBuf},
};

use humansize::{format_size, BINARY};

use super::{path_type::PathType, AsPath, AssertablePath, WithSubPath};


/// Blanket implements `AsPath` for all `AsRef<Path>`s.
impl<P> AsPath for P
where
    P: AsRef<Path>,
{
    fn as_path(&self) -> &Path {
        self.as_ref()
    }
}


/// Blanket implements `WithSubPath` for all `AsPath`s.
impl<A> WithSubPath for A
where
    A: AsPath,
{
    fn sub_path<P>(&self, sub_path: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.as_path().join(sub_path)
    }
}


#[track_caller]
fn path_type_of(path: &Path) -> PathType {
    match PathType::from_path(path) {
        Ok(path_type) => path_type,
        Err(error) => panic!(
            "failed to determine the type of the path (IO error): {} (for path {})",
            error,
            path.display()
        ),
    }
}


/// Blanket implementation of [`AssertablePath`] for all items
/// that implement [`AsPath`].
impl<A> AssertablePath for A
where
    A: AsPath,
{
    #[track_caller]
    fn assert_exists(&self) {
        if path_type_of(self.as_path()) == PathType::NotFound {
            panic!("path does not exist: {}", self.as_path().display());
        }
    }

    #[track_caller]
    fn assert_not_exists(&self) {
        let path_type = path_type_of(self.as_path());

        if path_type != PathType::NotFound {
            panic!(
                "path exists and leads to {}: {}",
                path_type.to_short_name(),
                self.as_path().display()
            );
        }
    }

    #[track_caller]
    fn assert_is_directory(&self) {
        let path_type = path_type_of(self.as_path());

        if path_type != PathType::Directory {
            panic!(
                "path does not lead to a directory, but to {}: {}",
                path_type.to_short_name(),
                self.as_path().display()
            );
        }
    }

    #[track_caller]
    fn assert_is_directory_and_empty(&self) {
        self.assert_is_directory();

        let directory_scan = fs::read_dir(self.as_path()).expect("failed to read directory");

        assert!(
            directory_scan.count() == 0,
            "path is directory, but is not empty: {}",
            self.as_path().display()
        )
    }

    #[track_caller]
    fn assert_is_directory_and_not_empty(&self) {
        self.assert_is_directory();

        let directory_scan = fs::read_dir(self.as_path()).expect("failed to read directory");

        assert!(
            directory_scan.count() > 0,
            "path is directory, but is also empty: {}",
            self.as_path().display()
        )
    }

    #[track_caller]
    fn assert_is_file(&self) {
        let path_type = path_type_of(self.as_path());

        if path_type != PathType::File {
            panic!(
                "path does not lead to a file, but to {}: {}",
                path_type.to_short_name(),
                self.as_path().display()
            );
        }
    }

    #[track_caller]
    fn assert_is_file_with_size(&self, expected_size_bytes: u64) {
        self.assert_is_file();

        let actual_size_bytes = fs::metadata(self.as_path())
            .expect("failed to read file metadata")
            .len();

        assert_eq!(
            actual_size_bytes,
            expected_size_bytes,
            "file is {} ({} bytes), expected {} ({} bytes): {}",
            format_size(actual_size_bytes, BINARY),
            actual_size_bytes,
            format_size(expected_size_bytes, BINARY),
            expected_size_bytes,
            self.as_path().display()
        );
    }

    #[track_caller]
    fn assert_is_file_with_content(&self, expected_content: &[u8]) {
        let actual_content = self.assert_is_file_and_read_content();

        assert_eq!(
            actual_content.len(),
            expected_content.len(),
            "file content length differs from the expected length: {}",
            self.as_path().display()
        );

        if let Some(first_mismatch) = actual_content
            .iter()
            .zip(expected_content.iter())
            .position(|(actual, expected)| actual != expected)
        {
            panic!(
                "file content differs from the expected content at byte {}: {}",
                first_mismatch,
                self.as_path().display()
            );
        }
    }

    #[track_caller]
    fn assert_is_file_and_matches_secondary_file<P>(&self, secondary_file_path: P)
    where
        P: AsPath,
    {
        let secondary_content = secondary_file_path.assert_is_file_and_read_content();

        self.assert_is_file_with_content(&secondary_content);
    }

    #[track_caller]
    fn assert_is_file_and_read_content(&self) -> Vec<u8> {
        self.assert_is_file();

        fs::read(self.as_path()).expect("failed to read file contents")
    }
}
