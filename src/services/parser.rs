// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{CommitType, LegacyMessage, ParsedMessage, SemanticMessage};
use crate::error::{Error, Result};

/// Conventional commit grammar, applied to the whole trimmed message:
/// `<type>[(<scope>)][!]: <subject>[\n\n<body>]`. The body separator accepts
/// `\n\n` and `\r\n\r\n`; `(?s)` is scoped to the body group so it can span
/// further blank lines.
static COMMIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A(?P<type>[a-z]+)(?:\((?P<scope>[a-z0-9-]+)\))?(?P<breaking>!)?: (?P<subject>[^\n]+)(?:\r?\n\r?\n(?s:(?P<body>.+)))?\z",
    )
    .expect("commit pattern is valid")
});

/// Body marker that flags a breaking change without the `!` shorthand.
const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE";

pub struct MessageParser;

impl MessageParser {
    /// Strict tier: grammar match plus field validation.
    ///
    /// Fails with [`Error::NonSemanticSyntax`] when the trimmed message does
    /// not match the grammar as a whole, [`Error::InvalidCommitType`] when
    /// the type is not in the recognized set, and [`Error::EmptySubject`]
    /// when the subject trims to nothing.
    pub fn parse_strict(commit_msg: &str) -> Result<SemanticMessage> {
        let Some(caps) = COMMIT_PATTERN.captures(commit_msg.trim()) else {
            return Err(Error::NonSemanticSyntax {
                message: commit_msg.to_string(),
            });
        };

        let raw_type = caps["type"].trim();
        let kind = CommitType::parse(raw_type).ok_or_else(|| Error::InvalidCommitType {
            found: raw_type.to_string(),
        })?;

        let scope = caps.name("scope").map(|m| m.as_str().trim().to_string());
        let body = caps.name("body").map(|m| m.as_str().trim().to_string());

        let subject = caps["subject"].trim();
        if subject.is_empty() {
            return Err(Error::EmptySubject {
                message: commit_msg.to_string(),
            });
        }

        let breaking = caps.name("breaking").is_some()
            || body
                .as_deref()
                .is_some_and(|b| b.contains(BREAKING_CHANGE_MARKER));

        Ok(SemanticMessage {
            kind,
            scope,
            breaking,
            subject: subject.to_string(),
            body,
        })
    }

    /// Tolerant tier: never fails. Anything the strict tier rejects comes
    /// back as a [`LegacyMessage`] wrapping the original untrimmed text.
    pub fn parse(commit_msg: &str) -> ParsedMessage {
        match Self::parse_strict(commit_msg) {
            Ok(msg) => ParsedMessage::Semantic(msg),
            Err(err) => {
                debug!(error = %err, "message kept as legacy");
                ParsedMessage::Legacy(LegacyMessage {
                    message: commit_msg.to_string(),
                })
            }
        }
    }
}
