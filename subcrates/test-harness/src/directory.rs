use std::{
    fs,
    path::{Path, PathBuf},
};


pub struct TreeStatistics {
    pub total_file_bytes: u64,
    pub total_files: usize,
    pub total_directories: usize,
}


/// Walks everything below `directory_path` (the directory itself is not counted).
pub fn collect_tree_statistics(directory_path: &Path) -> std::io::Result<TreeStatistics> {
    let mut total_file_bytes = 0;
    let mut total_files = 0;
    let mut total_directories = 0;

    let mut pending_directories: Vec<PathBuf> = vec![directory_path.to_path_buf()];

    while let Some(next_directory) = pending_directories.pop() {
        for entry_result in fs::read_dir(&next_directory)? {
            let entry = entry_result?;
            let entry_metadata = fs::symlink_metadata(entry.path())?;

            if entry_metadata.is_file() {
                total_file_bytes += entry_metadata.len();
                total_files += 1;
            } else if entry_metadata.is_dir() {
                total_directories += 1;
                pending_directories.push(entry.path());
            }
        }
    }


    Ok(TreeStatistics {
        total_file_bytes,
        total_files,
        total_directories,
    })
}


/// Collects the paths of all entries below `directory_path`, relative to it.
pub fn collect_relative_paths(directory_path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut relative_paths = Vec::new();
    let mut pending_directories: Vec<PathBuf> = vec![directory_path.to_path_buf()];

    while let Some(next_directory) = pending_directories.pop() {
        for entry_result in fs::read_dir(&next_directory)? {
            let entry_path = entry_result?.path();

            let relative_path = entry_path
                .strip_prefix(directory_path)
                .expect("entry path should be inside the scanned directory")
                .to_path_buf();

            if fs::symlink_metadata(&entry_path)?.is_dir() {
                pending_directories.push(entry_path);
            }

            relative_paths.push(relative_path);
        }
    }

    Ok(relative_paths)
}
