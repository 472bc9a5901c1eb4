use anyhow::{Context, Result};
use regex::Regex;

use crate::core::config::TestSuiteMap;
use crate::utils::join_suite_path;

/// Built-in exclusion present in every ignore list regardless of what the
/// config declares. `package.json` files in the corpus are managed by the
/// sync tooling itself and must never be regenerated from upstream.
const DEFAULT_IGNORE_PATTERN: &str = "package.json";

/// Compiles the ignore-pattern list for an `ignore` suite map.
///
/// Each configured fragment is raw regex text. The pattern for a fragment is
/// the suite name joined to it with `/`, compiled as-is, so a fragment like
/// `test-worker-.*\.js` under `parallel` excludes everything matching
/// `parallel/test-worker-.*\.js`. The joined string is both a path and a
/// regex at once; that contract is documented on
/// [`crate::core::config::SuiteConfig`] and preserved here.
///
/// The output always starts with the built-in `package.json` pattern, then
/// one pattern per fragment in map order. A fragment that does not compile
/// as a regex is fatal at construction time.
pub fn build_ignore_list(ignore: &TestSuiteMap) -> Result<Vec<Regex>> {
    let mut patterns = Vec::with_capacity(1 + ignore.values().map(Vec::len).sum::<usize>());

    patterns.push(
        Regex::new(DEFAULT_IGNORE_PATTERN).context("Failed to compile built-in ignore pattern")?,
    );

    for (suite, fragments) in ignore {
        for fragment in fragments {
            let raw = join_suite_path(suite, fragment);
            let compiled = Regex::new(&raw)
                .with_context(|| format!("Invalid ignore pattern `{raw}` in suite `{suite}`"))?;
            patterns.push(compiled);
        }
    }

    Ok(patterns)
}

/// Returns true if any pattern in the list matches `path`.
pub fn is_ignored(patterns: &[Regex], path: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(path))
}
