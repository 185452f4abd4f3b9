// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod error;
mod log;
mod serializer;

pub use error::ConfigError;
pub use log::{LogConfig, LogError, VALID_LOG_LEVELS};
pub use serializer::{
    AddressEncoding, BytesEncoding, FloatEncoding, IntEncoding, SerializerConfig, TupleFormat,
};

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Prefix shared by every environment variable read by this crate.
pub const ENV_PREFIX: &str = "ABI_JSON_";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbiJsonConfig {
    pub serializer: SerializerConfig,
    pub log: LogConfig,
}

/// Flat view of the environment, as envy sees it after the prefix is stripped.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default)]
    serializer_format: TupleFormat,
    #[serde(default)]
    serializer_int: IntEncoding,
    #[serde(default)]
    serializer_float: FloatEncoding,
    #[serde(default)]
    serializer_bytes: BytesEncoding,
    #[serde(default)]
    serializer_address: AddressEncoding,
    #[serde(default)]
    serializer_pretty: bool,
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
}

impl From<EnvConfig> for AbiJsonConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            serializer: SerializerConfig {
                format: env.serializer_format,
                int_encoding: env.serializer_int,
                float_encoding: env.serializer_float,
                bytes_encoding: env.serializer_bytes,
                address_encoding: env.serializer_address,
                pretty: env.serializer_pretty,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
            },
        }
    }
}

impl AbiJsonConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from a `.env` file, with the process environment taking
    /// precedence over values in the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_error = |source| ConfigError::EnvFileError {
            path: path.display().to_string(),
            source,
        };

        let mut vars: HashMap<String, String> = HashMap::new();
        for item in dotenv::from_path_iter(path).map_err(file_error)? {
            let (key, value) = item.map_err(file_error)?;
            vars.insert(key, value);
        }
        vars.extend(std::env::vars());

        Self::from_vars(vars)
    }

    /// Load configuration from an explicit set of `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        Ok(())
    }
}
