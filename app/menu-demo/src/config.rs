use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use test_menu::RunnerConfig;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG: &str = "menu.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub runner: RunnerConfig,
    pub log: Log,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
            None => return Ok(Self::default()),
        };
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
