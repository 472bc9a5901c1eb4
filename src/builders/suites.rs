use crate::core::config::TestSuiteMap;
use crate::utils::join_suite_path;

/// Suite directories the extractor recognizes, mirroring the upstream test
/// corpus layout. Entries under any other key are silently skipped — that is
/// intentional filtering, not an error.
pub const RECOGNIZED_SUITES: [&str; 5] =
    ["parallel", "internet", "pummel", "sequential", "pseudo-tty"];

/// Flattens a suite map into composite test paths.
///
/// Iterates the map in declaration order; for each recognized suite, every
/// fragment becomes `suite/fragment` in list order. Duplicate config entries
/// pass through as duplicate paths — nothing deduplicates here.
///
/// Pure: same map in, same list out.
pub fn suite_test_paths(suites: &TestSuiteMap) -> Vec<String> {
    let mut paths = Vec::new();

    for (suite, fragments) in suites {
        if !RECOGNIZED_SUITES.contains(&suite.as_str()) {
            continue;
        }
        for fragment in fragments {
            paths.push(join_suite_path(suite, fragment));
        }
    }

    paths
}
