use std::path::PathBuf;

use crate::random::DEFAULT_SEED;


/// Default sandbox root directory name, relative to the current working directory.
pub const DEFAULT_SANDBOX_ROOT: &str = "shardTesting";

/// Default name of the tree directory inside the sandbox root.
pub const DEFAULT_TREE_DIRECTORY_NAME: &str = "testTree";

/// Default name of the random file inside the sandbox root.
pub const DEFAULT_RANDOM_FILE_NAME: &str = "testFile";


/// Options that influence [`ShardingTestHelper`](crate::ShardingTestHelper).
///
/// Override individual fields with struct update syntax:
/// ```
/// # use shard_testing::ShardingTestOptions;
/// let options = ShardingTestOptions {
///     sandbox_root: std::env::temp_dir().join("my-sandbox"),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShardingTestOptions {
    /// Directory that contains every generated artifact.
    /// [`ShardingTestHelper::clean`](crate::ShardingTestHelper::clean) removes it recursively.
    ///
    /// The default value is `shardTesting`.
    pub sandbox_root: PathBuf,

    /// Name of the tree directory, created directly inside `sandbox_root`.
    /// This is also the name handed off with the tree's serial file.
    ///
    /// The default value is `testTree`.
    pub tree_directory_name: String,

    /// Name of the random file, created directly inside `sandbox_root`.
    ///
    /// The default value is `testFile`.
    pub random_file_name: String,

    /// Seed of the helper's random source.
    ///
    /// Changing this changes every generated byte.
    ///
    /// The default value is `1`.
    pub seed: u64,
}

impl Default for ShardingTestOptions {
    /// Constructs default options for the sharding test helper:
    /// - sandbox root is `shardTesting`,
    /// - tree directory is `testTree`,
    /// - random file is `testFile`, and
    /// - the seed is `1`.
    fn default() -> Self {
        Self {
            sandbox_root: PathBuf::from(DEFAULT_SANDBOX_ROOT),
            tree_directory_name: DEFAULT_TREE_DIRECTORY_NAME.to_string(),
            random_file_name: DEFAULT_RANDOM_FILE_NAME.to_string(),
            seed: DEFAULT_SEED,
        }
    }
}

impl ShardingTestOptions {
    /// Default options, but with the sandbox placed at `sandbox_root`.
    pub fn in_sandbox<P>(sandbox_root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            sandbox_root: sandbox_root.into(),
            ..Default::default()
        }
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_options_use_original_names() {
        let options = ShardingTestOptions::default();

        assert_eq!(options.sandbox_root, PathBuf::from("shardTesting"));
        assert_eq!(options.tree_directory_name, "testTree");
        assert_eq!(options.random_file_name, "testFile");
        assert_eq!(options.seed, 1);
    }

    #[test]
    fn in_sandbox_only_overrides_root() {
        let options = ShardingTestOptions::in_sandbox("/tmp/elsewhere");

        assert_eq!(options.sandbox_root, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(
            options,
            ShardingTestOptions {
                sandbox_root: PathBuf::from("/tmp/elsewhere"),
                ..Default::default()
            }
        );
    }
}
