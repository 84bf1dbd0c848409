use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use super::{SerialEntry, SerialEntryKind, SerialFile};
use crate::{error::FixtureResult, macros::use_enabled_fs_module};

use_enabled_fs_module!();


/// Streams the content of one or more [`SerialFile`]s, one after another.
///
/// Entries are listed up front (see [`MultiFileReader::entries`]);
/// file contents are opened lazily as the reader reaches them.
/// Directories contribute no bytes.
#[derive(Debug)]
pub struct MultiFileReader {
    entries: Vec<SerialEntry>,

    next_entry_index: usize,

    current_file: Option<fs::File>,
}

impl MultiFileReader {
    /// Collects the entries of all `files` in order.
    ///
    /// If `container_name` is `Some`, every stream path is nested under it
    /// and the container itself is listed as the first entry.
    pub fn new(files: Vec<SerialFile>, container_name: Option<&str>) -> FixtureResult<Self> {
        let mut entries = Vec::new();

        if let Some(container_name) = container_name {
            entries.push(SerialEntry {
                stream_path: PathBuf::from(container_name),
                path: PathBuf::new(),
                kind: SerialEntryKind::Directory,
                size_bytes: 0,
            });
        }

        for file in &files {
            for mut entry in file.entries()? {
                if let Some(container_name) = container_name {
                    entry.stream_path = Path::new(container_name).join(&entry.stream_path);
                }

                entries.push(entry);
            }
        }

        Ok(Self {
            entries,
            next_entry_index: 0,
            current_file: None,
        })
    }

    /// All entries, in stream order.
    pub fn entries(&self) -> &[SerialEntry] {
        &self.entries
    }

    /// Total number of content bytes this reader yields.
    pub fn total_file_bytes(&self) -> u64 {
        self.entries
            .iter()
            .filter(|entry| entry.kind == SerialEntryKind::File)
            .map(|entry| entry.size_bytes)
            .sum()
    }

    /// Opens the next file entry, returning `false` once no entries are left.
    fn open_next_file(&mut self) -> io::Result<bool> {
        while let Some(entry) = self.entries.get(self.next_entry_index) {
            self.next_entry_index += 1;

            if entry.kind == SerialEntryKind::File {
                self.current_file = Some(fs::File::open(&entry.path)?);
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl Read for MultiFileReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            if let Some(current_file) = self.current_file.as_mut() {
                let bytes_read = current_file.read(buf)?;
                if bytes_read > 0 {
                    return Ok(bytes_read);
                }

                self.current_file = None;
            }

            if !self.open_next_file()? {
                return Ok(0);
            }
        }
    }
}
