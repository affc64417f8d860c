// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
#[allow(deprecated)]
use std::env::home_dir;
use std::fs::read_to_string;

/// Configuration parameters, e.g. the API secret key and endpoint.
#[derive(Debug)]
pub struct DenarConfig {
    debug_enabled: bool,
    toml: String,
}

impl DenarConfig {
    /// Creates a configuration builder.
    pub fn builder() -> DenarConfigBuilder {
        DenarConfigBuilder {
            debug_enabled: false,
            toml: Err(Error::String("config not set".to_string())),
        }
    }

    /// Returns `true` if diagnostic output is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Deserializes configuration parameters from the loaded TOML.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::String(format!("toml: {e}")))
    }
}

/// Builder for `DenarConfig`.
pub struct DenarConfigBuilder {
    debug_enabled: bool,
    toml: Result<String, Error>,
}

impl DenarConfigBuilder {
    /// Returns the configuration, or an error if no TOML could be loaded.
    pub fn build(self) -> Result<DenarConfig, Error> {
        let debug_enabled = self.debug_enabled;
        self.toml.map(|toml| DenarConfig {
            debug_enabled,
            toml,
        })
    }

    /// Enables or disables diagnostic output.
    pub fn debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    /// Loads TOML from the named file, looking in the home directory first
    /// and then the current directory.
    pub fn toml_file(mut self, file_name: &str) -> Self {
        #[allow(deprecated)]
        let home_path = home_dir()
            .and_then(|pathbuf| pathbuf.to_str().map(|path| format!("{path}/{file_name}")));
        let local_path = format!("./{file_name}");
        self.toml = home_path
            .and_then(|path| read_to_string(path).ok())
            .map(Ok)
            .unwrap_or_else(|| {
                read_to_string(&local_path)
                    .map_err(|_| Error::String(format!("{local_path}: cannot read")))
            });
        self
    }

    /// Uses the given TOML string.
    pub fn toml_str(mut self, toml: &str) -> Self {
        self.toml = Ok(toml.to_string());
        self
    }
}
