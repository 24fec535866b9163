// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::str::FromStr;

use crate::domain::CommitType;
use crate::error::Error;
use crate::services::parser::MessageParser;

/// A commit message that satisfies the conventional commit grammar.
///
/// All string fields are stored trimmed; `subject` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticMessage {
    pub kind: CommitType,
    pub scope: Option<String>,
    pub breaking: bool,
    pub subject: String,
    pub body: Option<String>,
}

impl SemanticMessage {
    /// Strict parse: fails unless `commit_msg` fully satisfies the grammar
    /// and every field validates.
    pub fn parse(commit_msg: &str) -> crate::error::Result<Self> {
        MessageParser::parse_strict(commit_msg)
    }
}

impl FromStr for SemanticMessage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A free-form commit message that does not follow the grammar.
///
/// Wraps the original text verbatim, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyMessage {
    pub message: String,
}

/// Outcome of the tolerant parse: wholly semantic or wholly legacy, nothing
/// in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    Semantic(SemanticMessage),
    Legacy(LegacyMessage),
}

impl ParsedMessage {
    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }

    /// True for a semantic message of the reserved `release` type.
    pub fn is_release(&self) -> bool {
        matches!(self, Self::Semantic(m) if m.kind == CommitType::Release)
    }
}
