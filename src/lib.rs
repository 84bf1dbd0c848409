//! Deterministic directory trees and random files for sharding test suites.
//!
//! [`ShardingTestHelper`] materializes a fixed tree ([`SHARDING_TREE`]) and
//! single random files inside a sandbox directory, filling them with
//! pseudo-random content from a seeded source. Tests that hash or shard the
//! generated content can rely on it being byte-for-byte the same on every run.
//! The generated entries can then be handed off to a multi-file reader
//! (see the [`streaming`] module) and streamed into the system under test.
//!
//!
//! <br>
//!
//! # Reproducibility
//! Generated content depends on:
//! - the seed (see [`ShardingTestOptions::seed`]),
//! - the creation order of directories and files in the [`descriptor`],
//! - the declared size of each file, and
//! - the 1 KiB chunk size used to read from the random source.
//!
//! Changing any of these invalidates expected hashes recorded against the tree.
//!
//!
//! <br>
//!
//! # Feature flags
//! - `fs-err` (*disabled by default*): enables the optional [`fs-err`](../fs_err/index.html) support,
//!   which makes underlying IO error messages include the affected path.
//! - `miette` (*disabled by default*): derives `miette::Diagnostic` on [`FixtureError`].
//!
//!
//! <br>
//!
//! # Examples
//!
//! Generating the tree and streaming it:
//! ```no_run
//! # use std::io::Read;
//! # use shard_testing::{ShardingTestHelper, streaming::FilesystemStreaming};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut helper = ShardingTestHelper::new();
//!
//! let mut reader = helper.tree_multi_reader(&FilesystemStreaming)?;
//! println!("streaming {} bytes", reader.total_file_bytes());
//!
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//!
//! helper.clean()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]


pub mod descriptor;
mod entry;
pub mod error;
mod helper;
mod macros;
mod options;
pub mod random;
pub mod streaming;


pub use descriptor::{TreeDescriptor, SHARDING_TREE, SHARDING_TREE_CONTENT_PREFIXES};
pub use entry::GeneratedEntry;
pub use error::{FixtureError, FixtureResult};
pub use helper::{ShardingTestHelper, RANDOM_FILE_STREAM_NAME};
pub use options::{
    ShardingTestOptions,
    DEFAULT_RANDOM_FILE_NAME,
    DEFAULT_SANDBOX_ROOT,
    DEFAULT_TREE_DIRECTORY_NAME,
};
