// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace to list inference services in when the caller gives none
    pub default_project: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let default_project =
            env::var("DEFAULT_PROJECT").context("DEFAULT_PROJECT environment variable not set")?;

        Ok(Config { default_project })
    }
}
