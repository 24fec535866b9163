// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "semrel")]
#[command(version)]
#[command(about = "Semantic release helper for conventional commit histories", long_about = None)]
pub struct Cli {
    /// Repository to operate on (defaults to the current directory)
    #[arg(short = 'C', long, env = "SEMREL_REPO")]
    pub repo: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Trigger a semantic release with the click of a button
    Deploy,
}
