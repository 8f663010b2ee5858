// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_CLUSTER_NAME;
use anyhow::{ensure, Result};
use std::env;
use std::path::PathBuf;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the client config file is written to
    pub output_dir: PathBuf,
    /// Name of the cluster entry in the generated client config
    pub cluster_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("."),
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let output_dir = var("DAIK_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let cluster_name = var("DAIK_CLUSTER_NAME").unwrap_or(defaults.cluster_name);

        ensure!(
            !cluster_name.is_empty(),
            "DAIK_CLUSTER_NAME environment variable must not be empty"
        );

        Ok(Config {
            output_dir,
            cluster_name,
        })
    }
}
