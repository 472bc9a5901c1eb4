use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::platform::Platform;

/// An ordered mapping from a suite name (e.g. `parallel`, `sequential`) to the
/// file path/pattern fragments configured under it.
///
/// Insertion order is preserved so every derived list comes out in the same
/// order the config file declares it.
pub type TestSuiteMap = IndexMap<String, Vec<String>>;

/// File name of the suite configuration, resolved relative to the tool's own
/// install location.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// The parsed suite configuration.
///
/// This mirrors the JSON document maintained alongside the vendored Node.js
/// compatibility tests. Keys in the JSON are camelCase; unrecognized top-level
/// keys are ignored rather than rejected. Each field defaults to empty so a
/// partial document still parses; only malformed JSON is fatal.
///
/// The `ignore` fragments double as regular-expression text: a fragment like
/// `test-fs-.*\.js` excludes every match, not one literal file. That dual
/// path/regex contract is deliberate and load-bearing; see
/// [`crate::builders::ignore`].
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuiteConfig {
    /// The pinned upstream Node.js version. Informational only.
    #[serde(default)]
    pub node_version: String,
    /// Paths excluded from automatic regeneration. By convention every entry
    /// here is also listed (or eligible) under `tests` for the same suite;
    /// nothing enforces that at load time.
    #[serde(default)]
    pub ignore: TestSuiteMap,
    /// Paths that are actually executed/generated.
    #[serde(default)]
    pub tests: TestSuiteMap,
    /// Exclusions that only apply on Windows.
    #[serde(default)]
    pub windows_ignore: TestSuiteMap,
    /// Exclusions that only apply on macOS.
    #[serde(default)]
    pub darwin_ignore: TestSuiteMap,
}

impl SuiteConfig {
    /// Returns the exclusion map for `platform`, if it has one.
    ///
    /// The returned map is exposed data; consumers decide how to apply it.
    pub fn platform_ignore(&self, platform: Platform) -> Option<&TestSuiteMap> {
        match platform {
            Platform::Windows => Some(&self.windows_ignore),
            Platform::Darwin => Some(&self.darwin_ignore),
            Platform::Other => None,
        }
    }
}

/// Resolves and reads the suite configuration from disk.
///
/// The configuration lives at a fixed location relative to the tool itself
/// and is read exactly once, synchronously, at startup. A missing file or
/// malformed JSON is fatal: the process cannot do anything useful without
/// the config, so there is no retry and no fallback.
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Creates a store pointing at the default location: `config.json` next
    /// to the running executable.
    pub fn new() -> Result<Self> {
        let exe = env::current_exe().context("Failed to locate the running executable")?;
        let dir = exe
            .parent()
            .context("Executable path has no parent directory")?;

        Ok(Self {
            config_path: dir.join(CONFIG_FILE_NAME),
        })
    }

    /// Creates a store pointing at an explicit config file. Used by the
    /// `--config` CLI override and by tests.
    pub fn new_at(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

pub trait ConfigProvider {
    fn load_config(&self) -> Result<SuiteConfig>;
    fn config_path(&self) -> &Path;
}

impl ConfigProvider for ConfigStore {
    fn load_config(&self) -> Result<SuiteConfig> {
        let content = fs::read_to_string(&self.config_path).with_context(|| {
            format!(
                "Failed to read suite config at {}",
                self.config_path.display()
            )
        })?;

        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse suite config at {}",
                self.config_path.display()
            )
        })
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_keys() {
        let json = r#"{
            "nodeVersion": "18.12.1",
            "ignore": { "parallel": ["test-a.js"] },
            "tests": { "parallel": ["test-a.js", "test-b.js"] },
            "windowsIgnore": { "sequential": ["test-w.js"] },
            "darwinIgnore": { "parallel": ["test-d.js"] }
        }"#;
        let config: SuiteConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.node_version, "18.12.1");
        assert_eq!(config.ignore["parallel"], vec!["test-a.js"]);
        assert_eq!(config.tests["parallel"].len(), 2);
        assert_eq!(config.windows_ignore["sequential"], vec!["test-w.js"]);
        assert_eq!(config.darwin_ignore["parallel"], vec!["test-d.js"]);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let json = r#"{ "nodeVersion": "18.12.1", "futureKey": [1, 2, 3] }"#;
        let config: SuiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.node_version, "18.12.1");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config: SuiteConfig = serde_json::from_str("{}").unwrap();
        assert!(config.node_version.is_empty());
        assert!(config.ignore.is_empty());
        assert!(config.tests.is_empty());
    }

    #[test]
    fn test_suite_map_preserves_declaration_order() {
        let json = r#"{
            "tests": {
                "sequential": ["test-c.js"],
                "parallel": ["test-a.js"],
                "internet": ["test-i.js"]
            }
        }"#;
        let config: SuiteConfig = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = config.tests.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["sequential", "parallel", "internet"]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result: Result<SuiteConfig, _> = serde_json::from_str("{ not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_platform_ignore_selection() {
        let json = r#"{
            "windowsIgnore": { "parallel": ["test-w.js"] },
            "darwinIgnore": { "parallel": ["test-d.js"] }
        }"#;
        let config: SuiteConfig = serde_json::from_str(json).unwrap();

        let windows = config.platform_ignore(Platform::Windows).unwrap();
        assert_eq!(windows["parallel"], vec!["test-w.js"]);
        let darwin = config.platform_ignore(Platform::Darwin).unwrap();
        assert_eq!(darwin["parallel"], vec!["test-d.js"]);
        assert!(config.platform_ignore(Platform::Other).is_none());
    }
}
