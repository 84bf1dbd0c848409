//! Test harness for `shard-testing` integration tests.
//!
//! Provides a temporary [`SandboxHarness`](sandbox::SandboxHarness),
//! path assertions (see [`assertable`]) and an independent
//! re-computation of the expected tree contents (see [`expected`]).

pub mod assertable;
pub mod directory;
pub mod error;
pub mod expected;
pub mod path_comparison;
pub mod prelude;
pub mod sandbox;
