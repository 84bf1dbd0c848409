//! The fixed layout of the sharding test tree.
//!
//! **Take special care when modifying anything in this module.**
//! File content depends on the directory creation order, the file creation order
//! and each file size, because all files draw from one shared random source.
//! Changing any of them changes the generated bytes, which invalidates
//! every hash that downstream tests recorded for the tree.
//! [`SHARDING_TREE_CONTENT_PREFIXES`] pins the generated bytes and has to be
//! re-recorded together with any such change.

use std::{fmt, path::PathBuf};

use humansize::{format_size, BINARY};

use crate::random::CHUNK_SIZE_BYTES;


/// A file in a [`TreeDescriptor`], with its path relative to the tree root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path components relative to the tree root.
    pub components: &'static [&'static str],

    /// Declared size in KiB (1024 bytes).
    pub size_kib: usize,
}

impl FileDescriptor {
    /// Path of this file, relative to the tree root.
    pub fn relative_path(&self) -> PathBuf {
        self.components.iter().collect()
    }

    /// Exact size of the file once generated.
    pub fn size_bytes(&self) -> u64 {
        (self.size_kib * CHUNK_SIZE_BYTES) as u64
    }
}


/// A directory in a [`TreeDescriptor`], with its path relative to the tree root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectoryDescriptor {
    /// Path components relative to the tree root.
    pub components: &'static [&'static str],
}

impl DirectoryDescriptor {
    /// Path of this directory, relative to the tree root.
    pub fn relative_path(&self) -> PathBuf {
        self.components.iter().collect()
    }
}


/// Hard-coded description of a test tree.
///
/// `directories` and `files` are both listed in creation order.
/// Intermediate directories (e.g. `A` for `A/alpha`) are created implicitly
/// along with the first descendant that needs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeDescriptor {
    /// Directories, in creation order.
    pub directories: &'static [DirectoryDescriptor],

    /// Files, in creation order.
    pub files: &'static [FileDescriptor],
}

impl TreeDescriptor {
    /// Sum of all declared file sizes, in bytes.
    ///
    /// Directory overhead of the filesystem is not included.
    pub fn total_file_bytes(&self) -> u64 {
        self.files.iter().map(FileDescriptor::size_bytes).sum()
    }

    /// Returns the directories that do not contain any file or directory from this descriptor.
    pub fn empty_directories(&self) -> impl Iterator<Item = &'static DirectoryDescriptor> + '_ {
        self.directories.iter().filter(|directory| {
            let directory_path = directory.relative_path();

            let has_file = self
                .files
                .iter()
                .any(|file| file.relative_path().starts_with(&directory_path));

            let has_subdirectory = self.directories.iter().any(|other| {
                other.components.len() > directory.components.len()
                    && other.relative_path().starts_with(&directory_path)
            });

            !has_file && !has_subdirectory
        })
    }
}


/// The sharding test tree:
///
/// ```md
/// .
/// |-- A
/// |   |-- alpha
/// |   |   |-- small_file_0 (5 KiB)
/// |   |-- beta
/// |   |   |-- small_file_1 (5 KiB)
/// |   |-- delta
/// |   |   |-- empty (empty directory)
/// |   |-- small_file_2 (5 KiB)
/// |   |-- gamma
/// |   |   |-- small_file_3 (5 KiB)
/// |-- B
/// |   |-- medium_file (300 KiB)
/// |   |-- big_file (3000 KiB)
/// ```
///
/// Total file content is 3320 KiB (3,399,680 bytes).
/// On ext4 the tree takes up around 3,420,160 bytes including directory overhead.
pub const SHARDING_TREE: TreeDescriptor = TreeDescriptor {
    directories: &[
        DirectoryDescriptor {
            components: &["A", "alpha"],
        },
        DirectoryDescriptor {
            components: &["A", "beta"],
        },
        DirectoryDescriptor {
            components: &["A", "delta", "empty"],
        },
        DirectoryDescriptor {
            components: &["A", "gamma"],
        },
        DirectoryDescriptor {
            components: &["B"],
        },
    ],
    files: &[
        FileDescriptor {
            components: &["A", "alpha", "small_file_0"],
            size_kib: 5,
        },
        FileDescriptor {
            components: &["A", "beta", "small_file_1"],
            size_kib: 5,
        },
        FileDescriptor {
            components: &["A", "small_file_2"],
            size_kib: 5,
        },
        FileDescriptor {
            components: &["A", "gamma", "small_file_3"],
            size_kib: 5,
        },
        FileDescriptor {
            components: &["B", "medium_file"],
            size_kib: 300,
        },
        FileDescriptor {
            components: &["B", "big_file"],
            size_kib: 3000,
        },
    ],
};


/// Length of each entry in [`SHARDING_TREE_CONTENT_PREFIXES`].
pub const CONTENT_PREFIX_LEN: usize = 16;

/// The first [`CONTENT_PREFIX_LEN`] bytes of every [`SHARDING_TREE`] file, in creation order.
///
/// Recorded for [`DEFAULT_SEED`](crate::random::DEFAULT_SEED) and a helper whose
/// first call generates the tree. Each prefix sits at a different offset of the
/// random stream (0, 5, 10, 15, 20 and 320 KiB), so together they pin the seeding,
/// the generator algorithm and the creation order.
pub const SHARDING_TREE_CONTENT_PREFIXES: [[u8; CONTENT_PREFIX_LEN]; 6] = [
    // A/alpha/small_file_0
    [
        0x9a, 0x37, 0x44, 0x50, 0x45, 0x60, 0x63, 0x9e,
        0xc6, 0x70, 0xb7, 0xa1, 0x7d, 0x49, 0x2b, 0x27,
    ],
    // A/beta/small_file_1
    [
        0x44, 0xb7, 0xf3, 0xc9, 0x82, 0x04, 0x69, 0xb8,
        0x97, 0x05, 0x78, 0x2e, 0x45, 0x62, 0x08, 0xad,
    ],
    // A/small_file_2
    [
        0xb2, 0xd8, 0x7d, 0x30, 0x90, 0x56, 0x86, 0xad,
        0x39, 0xcf, 0xd6, 0xb0, 0x1c, 0x3f, 0xf1, 0x7b,
    ],
    // A/gamma/small_file_3
    [
        0x11, 0x8c, 0x11, 0x97, 0x72, 0xcc, 0x14, 0x34,
        0xb2, 0x65, 0xea, 0x25, 0x3c, 0x4f, 0x32, 0x2a,
    ],
    // B/medium_file
    [
        0x89, 0xb2, 0x5b, 0x64, 0xc0, 0x12, 0x32, 0x0d,
        0xca, 0xb5, 0x71, 0x2a, 0x6a, 0x34, 0x11, 0x78,
    ],
    // B/big_file
    [
        0xc4, 0x8d, 0x40, 0x47, 0x7b, 0xc2, 0x8e, 0x70,
        0x83, 0x91, 0xee, 0xe7, 0x4b, 0xf3, 0xe5, 0x21,
    ],
];



/// Renders the descriptor as a flat listing in creation order.
impl fmt::Display for TreeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty_directories: Vec<PathBuf> = self
            .empty_directories()
            .map(DirectoryDescriptor::relative_path)
            .collect();

        for directory in self.directories {
            let directory_path = directory.relative_path();

            if empty_directories.contains(&directory_path) {
                writeln!(f, "{}/ (empty directory)", directory_path.display())?;
            } else {
                writeln!(f, "{}/", directory_path.display())?;
            }
        }

        for file in self.files {
            writeln!(
                f,
                "{} ({})",
                file.relative_path().display(),
                format_size(file.size_bytes(), BINARY)
            )?;
        }

        write!(
            f,
            "total: {}",
            format_size(self.total_file_bytes(), BINARY)
        )
    }
}
