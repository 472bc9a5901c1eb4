use anyhow::Result;
use regex::Regex;

use crate::builders::suites::RECOGNIZED_SUITES;
use crate::core::config::{SuiteConfig, TestSuiteMap};
use crate::utils::join_suite_path;

/// The `ConfigValidator` trait defines the public interface for validating
/// a loaded suite configuration.
///
/// Validation never aborts on the first problem; it collects everything it
/// finds so the config can be fixed in one pass.
pub trait ConfigValidator {
    /// Performs a full validation of the `SuiteConfig` and returns a list of
    /// issues found. An empty list means the config is clean.
    fn validate_config(&self, config: &SuiteConfig) -> Result<Vec<String>>;
}

/// The standard checks applied before the config is trusted:
///
/// - every ignore fragment must compile as a regex once joined to its suite,
/// - `tests` keys outside the recognized suite set are flagged (the
///   extractor drops them silently, which is easy to miss in a large config),
/// - ignore suites with no corresponding `tests` suite break the
///   ignore-implies-tests convention,
/// - empty path lists and a missing Node version are flagged as likely
///   editing mistakes.
pub struct StandardValidator;

impl StandardValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks every fragment in an exclusion map for regex validity, plus
    /// empty path lists. `label` names the map in the reported issues.
    fn check_exclusion_map(&self, label: &str, map: &TestSuiteMap) -> Vec<String> {
        let mut issues = Vec::new();

        for (suite, fragments) in map {
            if fragments.is_empty() {
                issues.push(format!("Suite `{suite}` in `{label}` has an empty path list"));
            }
            for fragment in fragments {
                let raw = join_suite_path(suite, fragment);
                if let Err(e) = Regex::new(&raw) {
                    issues.push(format!("Invalid `{label}` pattern `{raw}`: {e}"));
                }
            }
        }

        issues
    }
}

impl ConfigValidator for StandardValidator {
    fn validate_config(&self, config: &SuiteConfig) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        if config.node_version.is_empty() {
            issues.push("Missing `nodeVersion`".to_string());
        }

        for (suite, fragments) in &config.tests {
            if !RECOGNIZED_SUITES.contains(&suite.as_str()) {
                issues.push(format!(
                    "Suite `{suite}` in `tests` is not a recognized suite; its entries will never be extracted"
                ));
            }
            if fragments.is_empty() {
                issues.push(format!("Suite `{suite}` in `tests` has an empty path list"));
            }
        }

        // Convention: everything excluded from regeneration is still a test.
        for suite in config.ignore.keys() {
            if !config.tests.contains_key(suite) {
                issues.push(format!(
                    "Suite `{suite}` appears in `ignore` but not in `tests`"
                ));
            }
        }

        issues.extend(self.check_exclusion_map("ignore", &config.ignore));
        issues.extend(self.check_exclusion_map("windowsIgnore", &config.windows_ignore));
        issues.extend(self.check_exclusion_map("darwinIgnore", &config.darwin_ignore));

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(json: &str) -> SuiteConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_clean_config_has_no_issues() {
        let config = base_config(
            r#"{
                "nodeVersion": "18.12.1",
                "ignore": { "parallel": ["test-a.js"] },
                "tests": { "parallel": ["test-a.js", "test-b.js"] }
            }"#,
        );
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_unrecognized_tests_suite_is_flagged() {
        let config = base_config(
            r#"{ "nodeVersion": "18.12.1", "tests": { "fixtures": ["a.js"] } }"#,
        );
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("fixtures")));
    }

    #[test]
    fn test_ignore_without_matching_tests_suite_is_flagged() {
        let config = base_config(
            r#"{
                "nodeVersion": "18.12.1",
                "ignore": { "pummel": ["test-a.js"] },
                "tests": { "parallel": ["test-b.js"] }
            }"#,
        );
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert!(
            issues
                .iter()
                .any(|i| i.contains("`pummel`") && i.contains("ignore"))
        );
    }

    #[test]
    fn test_invalid_ignore_fragment_is_flagged() {
        let config = base_config(
            r#"{
                "nodeVersion": "18.12.1",
                "ignore": { "parallel": ["test-[bad"] },
                "tests": { "parallel": ["test-a.js"] }
            }"#,
        );
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("parallel/test-[bad")));
    }

    #[test]
    fn test_missing_node_version_is_flagged() {
        let config = base_config(r#"{ "tests": { "parallel": ["a.js"] } }"#);
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("nodeVersion")));
    }

    #[test]
    fn test_platform_maps_are_checked_too() {
        let config = base_config(
            r#"{
                "nodeVersion": "18.12.1",
                "tests": { "parallel": ["a.js"] },
                "windowsIgnore": { "parallel": ["test-(unclosed"] }
            }"#,
        );
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("windowsIgnore")));
    }
}
