pub use crate::assertable::{AsPath, AssertablePath, WithSubPath};
pub use crate::directory::{collect_relative_paths, collect_tree_statistics, TreeStatistics};
pub use crate::error::TestResult;
pub use crate::expected::{
    expected_first_random_file_content,
    expected_tree_file_contents,
    ExpectedFile,
};
pub use crate::path_comparison::assert_path_list_fully_matches_set;
pub use crate::sandbox::SandboxHarness;
