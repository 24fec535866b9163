// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository whose commit history is read
    #[serde(default = "default_repo")]
    pub repo: PathBuf,
}

fn default_repo() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: default_repo(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.semrel.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".semrel.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (SEMREL_REPO, etc.)
        figment = figment.merge(Env::prefixed("SEMREL_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "semrel").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref repo) = cli.repo {
            self.repo = repo.clone();
        }
    }
}
