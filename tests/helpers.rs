// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use semrel::domain::{CommitType, RawCommit, SemanticMessage};

/// Build a SemanticMessage for comparison in tests
#[allow(dead_code)]
pub fn semantic(
    kind: CommitType,
    scope: Option<&str>,
    breaking: bool,
    subject: &str,
    body: Option<&str>,
) -> SemanticMessage {
    SemanticMessage {
        kind,
        scope: scope.map(str::to_string),
        breaking,
        subject: subject.to_string(),
        body: body.map(str::to_string),
    }
}

/// Build a RawCommit record as a history source would yield it
#[allow(dead_code)]
pub fn commit(id: &str, message: &str) -> RawCommit {
    RawCommit {
        id: id.to_string(),
        message: message.to_string(),
    }
}
