use std::path::{Path, PathBuf};

use shard_testing::{ShardingTestHelper, ShardingTestOptions, DEFAULT_SANDBOX_ROOT};
use tempfile::TempDir;

use crate::assertable::AsPath;


/// A temporary directory to host a sharding test sandbox.
///
/// The sandbox root itself (`<temporary directory>/shardTesting`) is *not* created;
/// that is left to the helper under test. When [`SandboxHarness::destroy`] is called
/// (or when the struct is dropped), the temporary directory is removed,
/// along with all of its contents.
pub struct SandboxHarness {
    temporary_directory: TempDir,

    sandbox_root: PathBuf,
}

impl SandboxHarness {
    #[track_caller]
    pub fn initialize() -> Self {
        let temporary_directory =
            tempfile::tempdir().expect("failed to initialize temporary directory");

        let sandbox_root = temporary_directory.path().join(DEFAULT_SANDBOX_ROOT);

        Self {
            temporary_directory,
            sandbox_root,
        }
    }

    pub fn sandbox_root(&self) -> &Path {
        &self.sandbox_root
    }

    /// Default options, pointed at this harness' sandbox root.
    pub fn options(&self) -> ShardingTestOptions {
        ShardingTestOptions::in_sandbox(&self.sandbox_root)
    }

    /// A fresh helper (with a fresh random source) operating in this harness' sandbox root.
    pub fn helper(&self) -> ShardingTestHelper {
        ShardingTestHelper::with_options(self.options())
    }

    /// Obtain a custom sub-path, by providing a relative `sub_path`.
    pub fn child_path<P>(&self, sub_path: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.temporary_directory.path().join(sub_path)
    }

    /// Consume `self` and remove the entire testing temporary directory.
    #[track_caller]
    pub fn destroy(self) {
        self.temporary_directory
            .close()
            .expect("failed to remove temporary directory");
    }
}

impl AsPath for SandboxHarness {
    fn as_path(&self) -> &Path {
        self.temporary_directory.path()
    }
}
