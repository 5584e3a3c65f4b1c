use serde::{Deserialize, Serialize};

use crate::engine::{EngineIsolation, EnginePriority};

/// Session-level defaults applied to every transaction a session opens.
///
/// `SET TRANSACTION` overrides these for the current transaction only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub default_isolation: EngineIsolation,
    pub default_priority: EnginePriority,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_isolation: EngineIsolation::Serializable,
            default_priority: EnginePriority::NORMAL,
        }
    }
}

impl SessionConfig {
    pub fn with_default_isolation(mut self, isolation: EngineIsolation) -> Self {
        self.default_isolation = isolation;
        self
    }

    pub fn with_default_priority(mut self, priority: EnginePriority) -> Self {
        self.default_priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());

        let config: SessionConfig =
            serde_json::from_str(r#"{"default_isolation":"Snapshot"}"#).unwrap();
        assert_eq!(config.default_isolation, EngineIsolation::Snapshot);
        assert_eq!(config.default_priority, EnginePriority::NORMAL);
    }

    #[test]
    fn test_config_serializes_priority_as_number() {
        let config = SessionConfig::default().with_default_priority(EnginePriority::MAX);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"default_isolation": "Serializable", "default_priority": 1000.0})
        );

        let back: SessionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_out_of_range_priority_is_rejected() {
        let err = serde_json::from_str::<SessionConfig>(r#"{"default_priority":-3.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("priority -3 is outside"));

        assert!(serde_json::from_str::<SessionConfig>(r#"{"default_priority":5000}"#).is_err());
    }
}
