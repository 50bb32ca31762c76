//! Configuration for matching runs.

use serde::{Deserialize, Serialize};

use crate::{Result, StableMatchError, constants};

/// Knobs for a single matching run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Largest group size a run will accept.
    pub max_group_size: usize,
    /// Re-check the finished pairing for blocking pairs.
    pub verify_stability: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_group_size: constants::DEFAULT_MAX_GROUP_SIZE,
            verify_stability: constants::DEFAULT_VERIFY_STABILITY,
        }
    }
}

impl MatchConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| StableMatchError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations no run could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.max_group_size == 0 {
            return Err(StableMatchError::Configuration(
                "max_group_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.max_group_size, 10_000);
        assert!(cfg.verify_stability);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = MatchConfig::from_json(r#"{"max_group_size": 8}"#).unwrap();
        assert_eq!(cfg.max_group_size, 8);
        assert!(cfg.verify_stability);
    }

    #[test]
    fn zero_group_size_rejected() {
        let err = MatchConfig::from_json(r#"{"max_group_size": 0}"#).unwrap_err();
        assert!(matches!(err, StableMatchError::Configuration(_)));
    }

    #[test]
    fn malformed_json_is_configuration_error() {
        let err = MatchConfig::from_json("{max_group_size").unwrap_err();
        assert!(format!("{err}").starts_with("SM_ERR_902"));
    }
}
