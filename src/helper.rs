use std::{
    fs::Metadata,
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    descriptor::SHARDING_TREE,
    entry::GeneratedEntry,
    error::{FixtureError, FixtureResult},
    macros::use_enabled_fs_module,
    options::ShardingTestOptions,
    random::{SeededRandomSource, CHUNK_SIZE_BYTES},
    streaming::{MultiFileAggregator, SerialFileProvider},
};

use_enabled_fs_module!();


/// Name the random file is handed off under.
pub const RANDOM_FILE_STREAM_NAME: &str = "randomfile";

const WRITE_BUFFER_SIZE: usize = CHUNK_SIZE_BYTES * 64;


/// Generates the sharding test tree and random files inside a sandbox directory.
///
/// The tree ([`SHARDING_TREE`]) is generated once and then reused for as long as
/// it exists on disk, even across helpers and runs. Call [`clean`] first
/// when a test needs a freshly generated tree.
///
/// All writes draw from a single [`SeededRandomSource`], so the generated bytes
/// depend on the order of calls made on one helper. A fresh helper whose
/// first call is [`ensure_tree`] (on a clean sandbox) always produces the same tree.
///
/// [`clean`]: ShardingTestHelper::clean
/// [`ensure_tree`]: ShardingTestHelper::ensure_tree
#[derive(Debug)]
pub struct ShardingTestHelper {
    options: ShardingTestOptions,

    random_source: SeededRandomSource,
}

impl Default for ShardingTestHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ShardingTestHelper {
    /// Initializes a helper with [`ShardingTestOptions::default`].
    pub fn new() -> Self {
        Self::with_options(ShardingTestOptions::default())
    }

    /// Initializes a helper with custom `options`.
    pub fn with_options(options: ShardingTestOptions) -> Self {
        let random_source = SeededRandomSource::new(options.seed);

        Self {
            options,
            random_source,
        }
    }

    /// Options this helper was initialized with.
    pub fn options(&self) -> &ShardingTestOptions {
        &self.options
    }

    /// Path of the sandbox root directory.
    pub fn sandbox_root(&self) -> &Path {
        &self.options.sandbox_root
    }

    /// Path of the tree root directory.
    pub fn tree_path(&self) -> PathBuf {
        self.options
            .sandbox_root
            .join(&self.options.tree_directory_name)
    }

    /// Path of the random file.
    pub fn random_file_path(&self) -> PathBuf {
        self.options
            .sandbox_root
            .join(&self.options.random_file_name)
    }

    /// Joins `components` onto the sandbox root.
    pub fn path_in_sandbox<I, C>(&self, components: I) -> PathBuf
    where
        I: IntoIterator<Item = C>,
        C: AsRef<Path>,
    {
        let mut path = self.options.sandbox_root.clone();
        path.extend(components);
        path
    }

    /// Creates the sandbox root (and missing parents) if it does not exist yet.
    ///
    /// Fails with [`FixtureError::NotADirectory`] if the root exists,
    /// but is not a directory.
    pub fn ensure_root_directory(&self) -> FixtureResult<()> {
        ensure_directory(&self.options.sandbox_root)
    }

    /// Generates the sharding test tree, unless it already exists.
    ///
    /// If the tree root already is a directory, its metadata is returned
    /// and nothing inside it is touched or verified. This includes a tree left
    /// partially generated by an earlier, interrupted run: remove it with
    /// [`clean`](ShardingTestHelper::clean) before calling this again. Otherwise every
    /// directory of [`SHARDING_TREE`] is created in order, followed by every file
    /// in order, each filled with `size_kib` chunks from the random source.
    ///
    /// Returns the metadata of the tree root.
    pub fn ensure_tree(&mut self) -> FixtureResult<Metadata> {
        self.ensure_root_directory()?;

        let tree_path = self.tree_path();

        if directory_exists(&tree_path)? {
            tracing::debug!(
                path = %tree_path.display(),
                "sharding test tree already exists, reusing it"
            );

            return read_metadata(&tree_path);
        }


        tracing::debug!(
            path = %tree_path.display(),
            total_bytes = SHARDING_TREE.total_file_bytes(),
            "generating sharding test tree"
        );

        for directory in SHARDING_TREE.directories {
            let directory_path = tree_path.join(directory.relative_path());

            tracing::trace!(path = %directory_path.display(), "creating directory");
            ensure_directory(&directory_path)?;
        }

        for file in SHARDING_TREE.files {
            let file_path = tree_path.join(file.relative_path());

            tracing::trace!(
                path = %file_path.display(),
                size_kib = file.size_kib,
                "creating file"
            );
            write_random_file(&file_path, &mut self.random_source, file.size_kib)?;
        }


        read_metadata(&tree_path)
    }

    /// (Re)creates the random file with `size_kib` KiB of pseudo-random content,
    /// overwriting any previous content.
    ///
    /// Because the random source keeps advancing, consecutive calls
    /// produce different content.
    ///
    /// Returns the metadata of the written file.
    pub fn materialize_random_file(&mut self, size_kib: usize) -> FixtureResult<Metadata> {
        self.ensure_root_directory()?;

        let file_path = self.random_file_path();

        tracing::debug!(
            path = %file_path.display(),
            size_kib,
            "writing random file"
        );

        let file = write_random_file(&file_path, &mut self.random_source, size_kib)?;

        file.metadata()
            .map_err(|error| FixtureError::UnableToAccessPath {
                path: file_path,
                error,
            })
    }

    /// Removes the sandbox root and everything inside it.
    ///
    /// A sandbox root that does not exist is not an error.
    pub fn clean(&self) -> FixtureResult<()> {
        let sandbox_root = &self.options.sandbox_root;

        match fs::remove_dir_all(sandbox_root) {
            Ok(()) => {
                tracing::debug!(path = %sandbox_root.display(), "removed sandbox directory");
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(FixtureError::UnableToRemoveSandbox {
                path: sandbox_root.clone(),
                error,
            }),
        }
    }


    /*
     * Hand-off to the streaming side.
     */

    /// Ensures the tree exists (see [`ensure_tree`]) and describes it for hand-off.
    /// The entry is named after the tree directory.
    ///
    /// [`ensure_tree`]: ShardingTestHelper::ensure_tree
    pub fn tree_entry(&mut self) -> FixtureResult<GeneratedEntry> {
        let metadata = self.ensure_tree()?;

        Ok(GeneratedEntry::new(
            self.options.tree_directory_name.clone(),
            self.tree_path(),
            metadata,
        ))
    }

    /// Writes a new random file (see [`materialize_random_file`]) and describes it for hand-off.
    /// The entry is named [`RANDOM_FILE_STREAM_NAME`].
    ///
    /// [`materialize_random_file`]: ShardingTestHelper::materialize_random_file
    pub fn random_file_entry(&mut self, size_kib: usize) -> FixtureResult<GeneratedEntry> {
        let metadata = self.materialize_random_file(size_kib)?;

        Ok(GeneratedEntry::new(
            RANDOM_FILE_STREAM_NAME,
            self.random_file_path(),
            metadata,
        ))
    }

    /// Ensures the tree exists and constructs a serial file for it.
    pub fn tree_serial_file<P>(&mut self, provider: &P) -> FixtureResult<P::File>
    where
        P: SerialFileProvider,
    {
        let entry = self.tree_entry()?;
        open_entry(provider, &entry)
    }

    /// Ensures the tree exists and wraps its serial file into a multi-file reader.
    pub fn tree_multi_reader<S>(
        &mut self,
        streaming: &S,
    ) -> FixtureResult<<S as MultiFileAggregator<<S as SerialFileProvider>::File>>::Reader>
    where
        S: SerialFileProvider + MultiFileAggregator<<S as SerialFileProvider>::File>,
    {
        let serial_file = self.tree_serial_file(streaming)?;
        streaming.aggregate(vec![serial_file], None)
    }

    /// Writes a new random file of `size_kib` KiB and wraps it into a multi-file reader.
    pub fn random_file_multi_reader<S>(
        &mut self,
        size_kib: usize,
        streaming: &S,
    ) -> FixtureResult<<S as MultiFileAggregator<<S as SerialFileProvider>::File>>::Reader>
    where
        S: SerialFileProvider + MultiFileAggregator<<S as SerialFileProvider>::File>,
    {
        let entry = self.random_file_entry(size_kib)?;
        let serial_file = open_entry(streaming, &entry)?;

        streaming.aggregate(vec![serial_file], None)
    }
}


fn open_entry<P>(provider: &P, entry: &GeneratedEntry) -> FixtureResult<P::File>
where
    P: SerialFileProvider + ?Sized,
{
    provider.open_serial_file(
        entry.name(),
        entry.path(),
        entry.is_directory(),
        entry.metadata(),
    )
}

fn read_metadata(path: &Path) -> FixtureResult<Metadata> {
    fs::metadata(path).map_err(|error| FixtureError::UnableToAccessPath {
        path: path.to_path_buf(),
        error,
    })
}

/// Returns `Ok(false)` if nothing exists at `path`, `Ok(true)` if a directory does,
/// and [`FixtureError::NotADirectory`] if something else does.
fn directory_exists(path: &Path) -> FixtureResult<bool> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(true),
        Ok(_) => Err(FixtureError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
        Err(error) => Err(FixtureError::UnableToAccessPath {
            path: path.to_path_buf(),
            error,
        }),
    }
}

fn ensure_directory(path: &Path) -> FixtureResult<()> {
    if directory_exists(path)? {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|error| FixtureError::UnableToCreateDirectory {
        path: path.to_path_buf(),
        error,
    })
}

/// Creates (or truncates) the file at `file_path` and fills it with
/// `size_kib` chunks from `random_source`. The returned file is flushed.
fn write_random_file(
    file_path: &Path,
    random_source: &mut SeededRandomSource,
    size_kib: usize,
) -> FixtureResult<fs::File> {
    let map_write_error = |error: std::io::Error| FixtureError::UnableToWriteFile {
        path: file_path.to_path_buf(),
        error,
    };

    let file =
        fs::File::create(file_path).map_err(|error| FixtureError::UnableToCreateFile {
            path: file_path.to_path_buf(),
            error,
        })?;

    let mut buffered_file_writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    random_source
        .write_kibibytes(&mut buffered_file_writer, size_kib)
        .map_err(map_write_error)?;

    let mut file = buffered_file_writer
        .into_inner()
        .map_err(|error| map_write_error(error.into_error()))?;

    file.flush().map_err(map_write_error)?;

    Ok(file)
}



#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    #[test]
    fn default_paths_are_relative_to_sandbox_root() {
        let helper = ShardingTestHelper::new();

        assert_eq!(helper.sandbox_root(), Path::new("shardTesting"));
        assert_eq!(helper.tree_path(), Path::new("shardTesting").join("testTree"));
        assert_eq!(
            helper.random_file_path(),
            Path::new("shardTesting").join("testFile")
        );
    }

    #[test]
    fn path_in_sandbox_joins_all_components() {
        let helper = ShardingTestHelper::with_options(ShardingTestOptions::in_sandbox("/sandbox"));

        assert_eq!(
            helper.path_in_sandbox(["testTree", "A", "alpha"]),
            Path::new("/sandbox/testTree/A/alpha")
        );
    }

    #[test]
    fn renamed_tree_and_random_file_follow_options() {
        let helper = ShardingTestHelper::with_options(ShardingTestOptions {
            sandbox_root: "/sandbox".into(),
            tree_directory_name: "otherTree".to_string(),
            random_file_name: "otherFile".to_string(),
            ..Default::default()
        });

        assert_eq!(helper.tree_path(), Path::new("/sandbox/otherTree"));
        assert_eq!(helper.random_file_path(), Path::new("/sandbox/otherFile"));
    }
}
