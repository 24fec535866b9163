// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(repo = %config.repo.display(), "config loaded");
        Ok(Self { cli, config })
    }

    pub fn run(&mut self) -> Result<()> {
        match self.cli.command {
            Commands::Deploy => self.deploy(),
        }
    }

    /// Placeholder release pipeline. History classification lives in the
    /// library; this command only greets until the pipeline lands.
    fn deploy(&self) -> Result<()> {
        debug!(repo = %self.config.repo.display(), "deploy invoked");
        println!("Hello world!");
        Ok(())
    }
}
