//! Linter configuration.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::LinterError;
use crate::diagnostic::Severity;

/// Configuration for the linter.
///
/// The `rules` map is the rule configuration contract: each entry maps a
/// rule identifier to either a boolean (enable with defaults), a severity
/// string, or a settings object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Rule configuration (enable/disable/options).
    #[serde(default)]
    pub rules: HashMap<String, RuleOption>,
}

/// Configuration for a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with severity string ("error", "warning", "info", "off").
    Severity(String),
    /// Rule is enabled with specific options.
    Options(serde_json::Value),
}

impl RuleOption {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Severity(s) => s != "off",
            RuleOption::Options(_) => true,
        }
    }

    /// Gets the rule options as JSON value.
    pub fn options(&self) -> serde_json::Value {
        match self {
            RuleOption::Enabled(_) | RuleOption::Severity(_) => serde_json::Value::Null,
            RuleOption::Options(v) => v.clone(),
        }
    }

    /// Returns the severity override, if this entry carries one.
    pub fn severity_override(&self) -> Result<Option<Severity>, LinterError> {
        let RuleOption::Severity(s) = self else {
            return Ok(None);
        };
        match s.as_str() {
            "error" => Ok(Some(Severity::Error)),
            "warning" => Ok(Some(Severity::Warning)),
            "info" => Ok(Some(Severity::Info)),
            "off" => Ok(None),
            other => Err(LinterError::config(format!(
                "invalid severity `{other}` (expected \"error\", \"warning\", \"info\" or \"off\")"
            ))),
        }
    }
}

impl LinterConfig {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables a rule programmatically.
    pub fn with_rule(mut self, name: impl Into<String>, option: RuleOption) -> Self {
        self.rules.insert(name.into(), option);
        self
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::config(format!("Failed to read config: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        serde_json::from_str(json)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Returns enabled rules.
    pub fn enabled_rules(&self) -> Vec<(&str, &RuleOption)> {
        self.rules
            .iter()
            .filter(|(_, option)| option.is_enabled())
            .map(|(name, option)| (name.as_str(), option))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_config_new() {
        let config = LinterConfig::new();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "rules": {
                "long-lines": true,
                "some-other-rule": { "max": 100 }
            }
        }"#;

        let config = LinterConfig::from_json(json).unwrap();
        assert_eq!(config.rules.len(), 2);
        assert!(config.rules["long-lines"].is_enabled());
        assert_eq!(config.rules["some-other-rule"].options()["max"], 100);
    }

    #[test]
    fn test_rule_option_enabled() {
        assert!(RuleOption::Enabled(true).is_enabled());
        assert!(!RuleOption::Enabled(false).is_enabled());
        assert!(!RuleOption::Severity("off".to_string()).is_enabled());
        assert!(RuleOption::Severity("error".to_string()).is_enabled());
        assert!(RuleOption::Options(serde_json::json!({ "max": 120 })).is_enabled());
    }

    #[test]
    fn test_severity_override() {
        let error = RuleOption::Severity("error".to_string());
        assert_eq!(error.severity_override().unwrap(), Some(Severity::Error));

        let boolean = RuleOption::Enabled(true);
        assert_eq!(boolean.severity_override().unwrap(), None);

        let bad = RuleOption::Severity("loud".to_string());
        assert!(bad.severity_override().is_err());
    }

    #[test]
    fn test_enabled_rules() {
        let json = r#"{
            "rules": {
                "enabled-rule": true,
                "disabled-rule": false,
                "options-rule": { "max": 10 }
            }
        }"#;

        let config = LinterConfig::from_json(json).unwrap();
        let enabled = config.enabled_rules();

        assert_eq!(enabled.len(), 2); // enabled-rule, options-rule
    }

    #[test]
    fn test_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rules": {{ "long-lines": {{ "max": 120 }} }} }}"#).unwrap();

        let config = LinterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rules["long-lines"].options()["max"], 120);
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = LinterConfig::from_file("/nonexistent/.sollint.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[rstest]
    #[case::not_json("rules: long-lines", "Invalid config")]
    #[case::wrong_shape(r#"{ "rules": [1, 2] }"#, "Invalid config")]
    fn test_config_parse_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = LinterConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }
}
