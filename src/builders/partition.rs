use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use crate::core::platform::Platform;
use crate::utils::partition_by;

/// The two execution buckets a test-path list splits into.
///
/// Paths under the `parallel/` suite directory run concurrently; everything
/// else runs one at a time. The split is total: every input path lands in
/// exactly one bucket, and relative order is preserved within each.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TestPartition {
    pub parallel: Vec<String>,
    pub sequential: Vec<String>,
}

/// Compiles the prefix pattern identifying parallel-bucket paths.
///
/// On Windows a composite path may carry either separator, so the pattern
/// accepts both; everywhere else only `/` counts. Callers compile this once,
/// at startup, for the detected host platform and reuse it for every
/// partitioning call.
pub fn parallel_pattern(platform: Platform) -> Result<Regex> {
    let raw = match platform {
        Platform::Windows => r"^parallel[/\\]",
        _ => r"^parallel/",
    };
    Regex::new(raw).context("Failed to compile parallel prefix pattern")
}

/// Splits `paths` into the parallel and sequential buckets.
///
/// Total over any string sequence; no drops, no duplicates, no reordering
/// within a bucket. Pure given the same pattern.
pub fn partition_test_paths(paths: Vec<String>, pattern: &Regex) -> TestPartition {
    let (parallel, sequential) = partition_by(paths, |path| pattern.is_match(path));

    TestPartition {
        parallel,
        sequential,
    }
}
