use anyhow::Result;

use crate::builders::partition::TestPartition;
use crate::builders::suites::RECOGNIZED_SUITES;
use crate::core::config::SuiteConfig;

pub trait StatusReporter {
    fn generate_status_report(
        &self,
        config: &SuiteConfig,
        partition: &TestPartition,
        ignore_pattern_count: usize,
    ) -> Result<()>;
}

/// A concrete implementation of `StatusReporter` that prints the report to
/// the console. This is the reporter behind the `status` command.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// Formats the status line for a single suite entry in the `tests` map.
    ///
    /// 🟢: recognized suite, its entries are extracted.
    /// 🟡: unrecognized suite, silently skipped at extraction.
    fn format_suite_status(&self, suite: &str, path_count: usize, recognized: bool) -> String {
        if recognized {
            format!("🟢 {suite} ({path_count} paths)")
        } else {
            format!("🟡 {suite} ({path_count} paths, not recognized, skipped)")
        }
    }
}

impl StatusReporter for ConsoleReporter {
    fn generate_status_report(
        &self,
        config: &SuiteConfig,
        partition: &TestPartition,
        ignore_pattern_count: usize,
    ) -> Result<()> {
        println!("📊 Node Compat Sync Status");
        println!("==========================");

        if config.node_version.is_empty() {
            println!("Node version: (not pinned)");
        } else {
            println!("Node version: {}", config.node_version);
        }

        if config.tests.is_empty() {
            println!("\nNo test suites configured.");
            return Ok(());
        }

        println!();
        for (suite, fragments) in &config.tests {
            let recognized = RECOGNIZED_SUITES.contains(&suite.as_str());
            println!(
                "{}",
                self.format_suite_status(suite, fragments.len(), recognized)
            );
        }

        println!("\n📈 Summary:");
        println!(
            "  Runnable paths: {}",
            partition.parallel.len() + partition.sequential.len()
        );
        println!("  Parallel bucket: {}", partition.parallel.len());
        println!("  Sequential bucket: {}", partition.sequential.len());
        println!("  Ignore patterns: {ignore_pattern_count} (includes the built-in package.json exclusion)");
        println!(
            "  Windows-only exclusions: {}",
            config.windows_ignore.values().map(Vec::len).sum::<usize>()
        );
        println!(
            "  Darwin-only exclusions: {}",
            config.darwin_ignore.values().map(Vec::len).sum::<usize>()
        );

        Ok(())
    }
}
