//! Seeded pseudo-random byte source.
//!
//! The byte sequence written to disk depends on the chunk size used to read
//! from the generator, not only on the seed: content is always produced in
//! [`CHUNK_SIZE_BYTES`] chunks, one generator read per chunk.

use std::io::Write;

use rand::RngCore;
use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};


/// 1 KiB
pub const CHUNK_SIZE_BYTES: usize = 1024;

/// Seed used by [`ShardingTestOptions::default`](crate::ShardingTestOptions).
pub const DEFAULT_SEED: u64 = 1;


/// A ChaCha20-backed byte source, seeded once and never reseeded.
///
/// Owned by a single [`ShardingTestHelper`](crate::ShardingTestHelper);
/// reads advance the sequence, so two helpers built with the same seed
/// produce the same bytes only if they issue the same reads in the same order.
pub struct SeededRandomSource {
    generator: ChaCha20Rng,
}

impl SeededRandomSource {
    /// Initializes the source with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            generator: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Fills exactly one chunk with the next bytes of the sequence.
    pub fn fill_chunk(&mut self, chunk: &mut [u8; CHUNK_SIZE_BYTES]) {
        self.generator.fill_bytes(chunk);
    }

    /// Writes `kibibytes` chunks of pseudo-random content into `writer`,
    /// returning the number of bytes written.
    ///
    /// The writer is not flushed.
    pub fn write_kibibytes<W>(&mut self, writer: &mut W, kibibytes: usize) -> std::io::Result<u64>
    where
        W: Write,
    {
        let mut chunk = [0u8; CHUNK_SIZE_BYTES];
        let mut bytes_written: u64 = 0;

        for _ in 0..kibibytes {
            self.fill_chunk(&mut chunk);
            writer.write_all(&chunk)?;

            bytes_written += CHUNK_SIZE_BYTES as u64;
        }

        Ok(bytes_written)
    }
}

impl std::fmt::Debug for SeededRandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRandomSource")
            .finish_non_exhaustive()
    }
}
