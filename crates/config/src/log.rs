// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level '{0}'. Must be one of: trace, debug, info, warn, error")]
    InvalidLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log Level
    ///
    /// Env: ABI_JSON_LOG_LEVEL
    /// Valid values: trace, debug, info, warn, error
    /// Default: info
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: ABI_JSON_LOG_JSON
    /// Default: false
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: ABI_JSON_LOG_STRIP_ANSI
    /// Default: false
    pub strip_ansi: bool,
}

pub(crate) fn default_level() -> String {
    "info".to_string()
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), LogError> {
        if !VALID_LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(LogError::InvalidLevel(self.level.clone()));
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
        assert!(!config.strip_ansi);
    }

    #[test]
    fn test_validate_valid_levels() {
        for level in VALID_LOG_LEVELS {
            let config = LogConfig {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Level {} should be valid", level);
        }
    }

    #[test]
    fn test_validate_invalid_level() {
        let config = LogConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        match config.validate() {
            Err(LogError::InvalidLevel(level)) => assert_eq!(level, "verbose"),
            other => panic!("expected InvalidLevel, got {:?}", other),
        }
    }

    #[test]
    fn test_level_is_case_sensitive() {
        let config = LogConfig {
            level: "INFO".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
