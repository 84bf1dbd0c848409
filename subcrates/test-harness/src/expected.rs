//! Re-computes generated content without going through `shard_testing`,
//! so tests can compare what landed on disk against an independent source.

use std::path::PathBuf;

use rand::RngCore;
use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
use shard_testing::{random::CHUNK_SIZE_BYTES, SHARDING_TREE};


/// A tree file, as it should look on disk.
pub struct ExpectedFile {
    /// Path relative to the tree root.
    pub relative_path: PathBuf,

    pub content: Vec<u8>,
}


/// Generates `kibibytes` KiB of seeded data, reading the generator in 1 KiB chunks.
pub fn generate_seeded_chunks(generator: &mut ChaCha20Rng, kibibytes: usize) -> Vec<u8> {
    let mut data = vec![0u8; kibibytes * CHUNK_SIZE_BYTES];

    for chunk in data.chunks_exact_mut(CHUNK_SIZE_BYTES) {
        generator.fill_bytes(chunk);
    }

    data
}


/// Expected content of every tree file, in creation order,
/// for a helper seeded with `seed` whose first call generates the tree.
pub fn expected_tree_file_contents(seed: u64) -> Vec<ExpectedFile> {
    let mut generator = ChaCha20Rng::seed_from_u64(seed);

    SHARDING_TREE
        .files
        .iter()
        .map(|file| ExpectedFile {
            relative_path: file.relative_path(),
            content: generate_seeded_chunks(&mut generator, file.size_kib),
        })
        .collect()
}


/// Expected content of the first random file written by a fresh helper seeded with `seed`.
pub fn expected_first_random_file_content(seed: u64, size_kib: usize) -> Vec<u8> {
    let mut generator = ChaCha20Rng::seed_from_u64(seed);

    generate_seeded_chunks(&mut generator, size_kib)
}
