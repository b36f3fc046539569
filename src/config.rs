use serde::{Deserialize, Serialize};

use crate::error::{Result, SniffError};
use crate::utils::hash::HexCase;

/// Output format for batch reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

/// Settings for batch sniffing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    /// Case used when fingerprints are rendered as hex
    pub hex_case: HexCase,
    /// Mark payloads whose fingerprint was already seen in the batch
    pub dedupe: bool,
    /// Batches with at least this many payloads are processed on the rayon pool
    pub parallel_threshold: usize,
    /// Format used by `format::render_report`
    pub report_format: ReportFormat,
    /// Log batch progress at info instead of debug
    pub verbose: bool,
}

impl SniffConfig {
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(SniffError::InvalidConfig(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Upper,
            dedupe: true,
            parallel_threshold: 64,
            report_format: ReportFormat::Plain,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SniffConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = SniffConfig {
            parallel_threshold: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SniffError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = SniffConfig::from_toml_str(
            r#"
            hex_case = "lower"
            report_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.hex_case, HexCase::Lower);
        assert_eq!(config.report_format, ReportFormat::Json);
        assert!(config.dedupe);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            SniffConfig::from_toml_str("dedupe = \"yes\""),
            Err(SniffError::Config(_))
        ));
        assert!(matches!(
            SniffConfig::from_toml_str("parallel_threshold = 0"),
            Err(SniffError::InvalidConfig(_))
        ));
    }
}
