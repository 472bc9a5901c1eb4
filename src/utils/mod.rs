use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::builders::ignore::build_ignore_list;
use crate::builders::partition::{parallel_pattern, partition_test_paths};
use crate::builders::reporter::{ConsoleReporter, StatusReporter};
use crate::builders::suites::suite_test_paths;
use crate::builders::validator::{ConfigValidator, StandardValidator};
use crate::core::config::ConfigProvider;
use crate::core::platform::Platform;

/// Joins a suite name and a path fragment into one composite path.
///
/// The separator is `/` on every platform: ignore fragments double as regex
/// text, and a `\` separator would be read as a regex escape. The partitioner
/// accepts the Windows separator on the matching side instead.
pub fn join_suite_path(suite: &str, fragment: &str) -> String {
    format!("{suite}/{fragment}")
}

/// Splits `items` by `predicate` into (matching, non-matching), preserving
/// relative order in both halves.
pub fn partition_by<T, F>(items: Vec<T>, predicate: F) -> (Vec<T>, Vec<T>)
where
    F: FnMut(&T) -> bool,
{
    items.into_iter().partition(predicate)
}

/// Prints every runnable test path, one per line.
pub fn list_paths(store: &impl ConfigProvider) -> Result<()> {
    let config = store.load_config()?;
    for path in suite_test_paths(&config.tests) {
        println!("{path}");
    }
    Ok(())
}

/// Prints the parallel/sequential split of the runnable test paths.
pub fn show_partition(store: &impl ConfigProvider) -> Result<()> {
    let config = store.load_config()?;
    let pattern = parallel_pattern(Platform::host())?;
    let partition = partition_test_paths(suite_test_paths(&config.tests), &pattern);

    println!("Parallel ({}):", partition.parallel.len());
    for path in &partition.parallel {
        println!("  {path}");
    }
    println!("\nSequential ({}):", partition.sequential.len());
    for path in &partition.sequential {
        println!("  {path}");
    }
    Ok(())
}

/// Prints the compiled ignore patterns, plus any exclusions specific to the
/// host platform.
pub fn show_ignored(store: &impl ConfigProvider) -> Result<()> {
    let config = store.load_config()?;

    let patterns = build_ignore_list(&config.ignore)?;
    println!("Ignore patterns ({}):", patterns.len());
    for pattern in &patterns {
        println!("  {}", pattern.as_str());
    }

    let platform = Platform::host();
    if let Some(map) = config.platform_ignore(platform)
        && !map.is_empty()
    {
        println!("\nPlatform exclusions ({platform}):");
        for (suite, fragments) in map {
            for fragment in fragments {
                println!("  {}", join_suite_path(suite, fragment));
            }
        }
    }

    Ok(())
}

/// Validates the suite config and reports every issue found. Any issue makes
/// the command fail.
pub fn check_config(store: &impl ConfigProvider) -> Result<()> {
    let config = store.load_config()?;
    let validator = StandardValidator::new();
    let issues = validator.validate_config(&config)?;

    if issues.is_empty() {
        println!("✓ Suite config is valid.");
        Ok(())
    } else {
        println!("⚠️  Found issues in suite config:");
        for issue in issues {
            println!("  - {issue}");
        }
        anyhow::bail!("Suite config validation failed.");
    }
}

/// Prints the summary report for the loaded config.
pub fn show_status(store: &impl ConfigProvider) -> Result<()> {
    let config = store.load_config()?;
    let pattern = parallel_pattern(Platform::host())?;
    let partition = partition_test_paths(suite_test_paths(&config.tests), &pattern);
    let ignore_patterns = build_ignore_list(&config.ignore)?;

    let reporter = ConsoleReporter::new();
    reporter.generate_status_report(&config, &partition, ignore_patterns.len())
}

/// Everything an external test-execution driver needs, derived from one
/// config load: the runnable paths, both partitions, and the ignore-pattern
/// sources. This is what the `export` command serializes.
#[derive(Debug, Serialize)]
pub struct SyncManifest {
    pub node_version: String,
    pub test_paths: Vec<String>,
    pub parallel: Vec<String>,
    pub sequential: Vec<String>,
    pub ignore_patterns: Vec<String>,
}

/// Derives a [`SyncManifest`] for `platform` from the stored config.
pub fn build_manifest(store: &impl ConfigProvider, platform: Platform) -> Result<SyncManifest> {
    let config = store.load_config()?;
    let test_paths = suite_test_paths(&config.tests);
    let pattern = parallel_pattern(platform)?;
    let partition = partition_test_paths(test_paths.clone(), &pattern);
    let ignore_patterns = build_ignore_list(&config.ignore)?
        .iter()
        .map(|pattern| pattern.as_str().to_string())
        .collect();

    Ok(SyncManifest {
        node_version: config.node_version,
        test_paths,
        parallel: partition.parallel,
        sequential: partition.sequential,
        ignore_patterns,
    })
}

/// Writes the derived manifest to `file_path` in the requested format.
pub fn export_manifest(
    store: &impl ConfigProvider,
    file_path: &str,
    format: String,
) -> Result<()> {
    let manifest = build_manifest(store, Platform::host())?;

    let content = match format.as_str() {
        "json" => {
            serde_json::to_string_pretty(&manifest).context("Failed to serialize to JSON")?
        }
        "yaml" => serde_yaml::to_string(&manifest).context("Failed to serialize to YAML")?,
        "toml" | _ => {
            toml::to_string_pretty(&manifest).context("Failed to serialize to TOML")?
        }
    };

    fs::write(file_path, content).context("Failed to write export file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_uses_forward_slash() {
        assert_eq!(join_suite_path("parallel", "test-a.js"), "parallel/test-a.js");
    }

    #[test]
    fn test_partition_by_preserves_order() {
        let (even, odd) = partition_by(vec![1, 2, 3, 4, 5], |n| n % 2 == 0);
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3, 5]);
    }
}
