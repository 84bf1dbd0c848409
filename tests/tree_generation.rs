use std::{fs, path::Path};

use assert_matches::assert_matches;
use shard_testing::{FixtureError, SHARDING_TREE, SHARDING_TREE_CONTENT_PREFIXES};
use shard_testing_test_harness::prelude::*;



#[test]
fn ensure_tree_creates_expected_layout() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    harness.sandbox_root().assert_not_exists();

    let tree_metadata = helper.ensure_tree()?;
    assert!(tree_metadata.is_dir());

    let tree_path = helper.tree_path();
    tree_path.assert_is_directory();

    for directory in ["A/alpha", "A/beta", "A/delta/empty", "A/gamma", "B"] {
        tree_path.sub_path(directory).assert_is_directory();
    }

    tree_path
        .sub_path("A/alpha/small_file_0")
        .assert_is_file_with_size(5120);
    tree_path
        .sub_path("A/small_file_2")
        .assert_is_file_with_size(5120);
    tree_path
        .sub_path("B/big_file")
        .assert_is_file_with_size(3_072_000);


    assert_path_list_fully_matches_set(
        collect_relative_paths(&tree_path)?,
        [
            Path::new("A"),
            Path::new("A/alpha"),
            Path::new("A/alpha/small_file_0"),
            Path::new("A/beta"),
            Path::new("A/beta/small_file_1"),
            Path::new("A/delta"),
            Path::new("A/delta/empty"),
            Path::new("A/small_file_2"),
            Path::new("A/gamma"),
            Path::new("A/gamma/small_file_3"),
            Path::new("B"),
            Path::new("B/medium_file"),
            Path::new("B/big_file"),
        ],
    );

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_files_match_declared_sizes() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    helper.ensure_tree()?;

    let tree_path = helper.tree_path();

    for file in SHARDING_TREE.files {
        tree_path
            .sub_path(file.relative_path())
            .assert_is_file_with_size(file.size_kib as u64 * 1024);
    }

    tree_path.sub_path("A/delta/empty").assert_is_directory_and_empty();


    let statistics = collect_tree_statistics(&tree_path)?;

    assert_eq!(statistics.total_file_bytes, 3_399_680);
    assert_eq!(statistics.total_files, 6);
    // A, A/alpha, A/beta, A/delta, A/delta/empty, A/gamma, B
    assert_eq!(statistics.total_directories, 7);

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_content_matches_seeded_chunks() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    helper.ensure_tree()?;

    for expected_file in expected_tree_file_contents(helper.options().seed) {
        helper
            .tree_path()
            .sub_path(&expected_file.relative_path)
            .assert_is_file_with_content(&expected_file.content);
    }

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_content_starts_with_recorded_prefixes() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    helper.ensure_tree()?;

    for (file, expected_prefix) in SHARDING_TREE
        .files
        .iter()
        .zip(SHARDING_TREE_CONTENT_PREFIXES.iter())
    {
        let file_path = helper.tree_path().sub_path(file.relative_path());
        let content = fs::read(&file_path)?;

        assert_eq!(
            &content[..expected_prefix.len()],
            expected_prefix,
            "recorded prefix mismatch: {}",
            file_path.display()
        );
    }


    let first_small_file = fs::read(helper.tree_path().sub_path("A/alpha/small_file_0"))?;
    assert_eq!(
        first_small_file[..16],
        [
            0x9a, 0x37, 0x44, 0x50, 0x45, 0x60, 0x63, 0x9e,
            0xc6, 0x70, 0xb7, 0xa1, 0x7d, 0x49, 0x2b, 0x27,
        ]
    );

    let big_file = fs::read(helper.tree_path().sub_path("B/big_file"))?;
    assert_eq!(
        big_file[..16],
        [
            0xc4, 0x8d, 0x40, 0x47, 0x7b, 0xc2, 0x8e, 0x70,
            0x83, 0x91, 0xee, 0xe7, 0x4b, 0xf3, 0xe5, 0x21,
        ]
    );

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_is_deterministic_across_sandboxes() -> TestResult {
    let first_harness = SandboxHarness::initialize();
    let second_harness = SandboxHarness::initialize();

    let mut first_helper = first_harness.helper();
    let mut second_helper = second_harness.helper();

    first_helper.ensure_tree()?;
    second_helper.ensure_tree()?;

    for file in SHARDING_TREE.files {
        first_helper
            .tree_path()
            .sub_path(file.relative_path())
            .assert_is_file_and_matches_secondary_file(
                second_helper.tree_path().sub_path(file.relative_path()),
            );
    }

    first_harness.destroy();
    second_harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_files_differ_from_each_other() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    helper.ensure_tree()?;

    let tree_path = helper.tree_path();

    let first_small_file = tree_path
        .sub_path("A/alpha/small_file_0")
        .assert_is_file_and_read_content();
    let second_small_file = tree_path
        .sub_path("A/beta/small_file_1")
        .assert_is_file_and_read_content();

    assert_ne!(first_small_file, second_small_file);

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_reuses_existing_tree() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    let first_metadata = helper.ensure_tree()?;

    let marker_file_path = helper.tree_path().sub_path("A/alpha/small_file_0");
    fs::write(&marker_file_path, b"overwritten by the test")?;

    let second_metadata = helper.ensure_tree()?;

    assert!(second_metadata.is_dir());
    assert_eq!(first_metadata.len(), second_metadata.len());
    assert_eq!(first_metadata.modified()?, second_metadata.modified()?);

    // The tree was not regenerated, so the modification is still there.
    marker_file_path.assert_is_file_with_content(b"overwritten by the test");

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_reuses_tree_generated_by_another_helper() -> TestResult {
    let harness = SandboxHarness::initialize();

    let mut first_helper = harness.helper();
    first_helper.ensure_tree()?;

    let big_file_path = first_helper.tree_path().sub_path("B/big_file");
    let big_file_content = big_file_path.assert_is_file_and_read_content();

    let mut second_helper = harness.helper();
    second_helper.materialize_random_file(16)?;
    second_helper.ensure_tree()?;

    big_file_path.assert_is_file_with_content(&big_file_content);

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_after_clean_regenerates_identical_content() -> TestResult {
    let harness = SandboxHarness::initialize();

    let mut helper = harness.helper();
    helper.ensure_tree()?;

    let medium_file_path = helper.tree_path().sub_path("B/medium_file");
    let original_content = medium_file_path.assert_is_file_and_read_content();

    helper.clean()?;
    harness.sandbox_root().assert_not_exists();

    let mut fresh_helper = harness.helper();
    fresh_helper.ensure_tree()?;

    medium_file_path.assert_is_file_with_content(&original_content);

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_with_different_seed_produces_different_content() -> TestResult {
    let harness = SandboxHarness::initialize();
    let other_harness = SandboxHarness::initialize();

    let mut helper = harness.helper();
    let mut other_helper = shard_testing::ShardingTestHelper::with_options(
        shard_testing::ShardingTestOptions {
            seed: 2,
            ..other_harness.options()
        },
    );

    helper.ensure_tree()?;
    other_helper.ensure_tree()?;

    let content = helper
        .tree_path()
        .sub_path("A/gamma/small_file_3")
        .assert_is_file_and_read_content();
    let other_content = other_helper
        .tree_path()
        .sub_path("A/gamma/small_file_3")
        .assert_is_file_and_read_content();

    assert_eq!(content.len(), other_content.len());
    assert_ne!(content, other_content);

    harness.destroy();
    other_harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_errors_when_tree_path_is_a_file() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    helper.ensure_root_directory()?;
    fs::write(helper.tree_path(), b"not a directory")?;

    let tree_result = helper.ensure_tree();

    assert_matches!(
        tree_result,
        Err(FixtureError::NotADirectory { path })
        if path == helper.tree_path()
    );

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_errors_when_sandbox_root_is_a_file() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    fs::write(harness.sandbox_root(), b"not a directory")?;

    let tree_result = helper.ensure_tree();

    assert!(
        tree_result.is_err(),
        "expected ensure_tree to fail, got Ok"
    );

    let tree_error = tree_result.unwrap_err();
    assert!(tree_error.is_not_a_directory());
    assert!(tree_error.io_error().is_none());

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_root_directory_is_idempotent() -> TestResult {
    let harness = SandboxHarness::initialize();
    let helper = harness.helper();

    helper.ensure_root_directory()?;
    harness.sandbox_root().assert_is_directory_and_empty();

    helper.ensure_root_directory()?;
    harness.sandbox_root().assert_is_directory_and_empty();

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_root_directory_creates_missing_parents() -> TestResult {
    let harness = SandboxHarness::initialize();

    let nested_root = harness.child_path("outer/inner/shardTesting");
    let helper = shard_testing::ShardingTestHelper::with_options(
        shard_testing::ShardingTestOptions::in_sandbox(&nested_root),
    );

    helper.ensure_root_directory()?;
    nested_root.assert_is_directory_and_empty();

    harness.destroy();
    Ok(())
}



#[test]
fn ensure_tree_keeps_partial_tree_until_cleaned() -> TestResult {
    let harness = SandboxHarness::initialize();
    let mut helper = harness.helper();

    // Left behind by an interrupted run.
    fs::create_dir_all(helper.tree_path().sub_path("A/alpha"))?;

    helper.ensure_tree()?;
    helper.tree_path().sub_path("B/big_file").assert_not_exists();


    helper.clean()?;

    let mut fresh_helper = harness.helper();
    fresh_helper.ensure_tree()?;

    for file in SHARDING_TREE.files {
        fresh_helper
            .tree_path()
            .sub_path(file.relative_path())
            .assert_is_file_with_size(file.size_bytes());
    }

    harness.destroy();
    Ok(())
}
