// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Commit does not follow semantic syntax: {message:?}")]
    #[diagnostic(
        code(semrel::parse::non_semantic),
        help("Expected `<type>[(<scope>)][!]: <subject>`")
    )]
    NonSemanticSyntax { message: String },

    #[error("Invalid semver type: {found:?}")]
    #[diagnostic(
        code(semrel::parse::invalid_type),
        help(
            "Recognized types: build, chore, ci, docs, feat, fix, perf, refactor, release, revert, style, test, temp"
        )
    )]
    InvalidCommitType { found: String },

    #[error("Commit subject is empty: {message:?}")]
    #[diagnostic(
        code(semrel::parse::empty_subject),
        help("The subject after the colon must contain at least one non-whitespace character")
    )]
    EmptySubject { message: String },

    #[error("Not a git repository")]
    #[diagnostic(
        code(semrel::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo,

    #[error("Git error: {0}")]
    #[diagnostic(code(semrel::git::error))]
    Git(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(semrel::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
