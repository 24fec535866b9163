// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::iter::FusedIterator;

use tracing::debug;

use crate::domain::{ParsedMessage, RawCommit};
use crate::services::parser::MessageParser;

/// Parse every record in `source` up to, but not including, the most recent
/// `release` commit.
///
/// The source is expected newest-to-oldest, so the result reads as "all
/// messages since the last release". Records are pulled one at a time;
/// dropping the iterator stops all further fetches from the source.
pub fn walk_commit_log<I>(source: I) -> CommitWalk<I::IntoIter>
where
    I: IntoIterator<Item = RawCommit>,
{
    CommitWalk {
        source: source.into_iter(),
        done: false,
    }
}

/// Lazy walk over parsed commit messages, ending before the most recent
/// release marker. Created by [`walk_commit_log`].
pub struct CommitWalk<I> {
    source: I,
    done: bool,
}

impl<I> Iterator for CommitWalk<I>
where
    I: Iterator<Item = RawCommit>,
{
    type Item = ParsedMessage;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(record) = self.source.next() else {
            self.done = true;
            return None;
        };

        let parsed = MessageParser::parse(&record.message);
        if parsed.is_release() {
            // The release marker is a sentinel, not content.
            debug!(id = %record.id, "reached last release, stopping walk");
            self.done = true;
            return None;
        }

        Some(parsed)
    }
}

impl<I> FusedIterator for CommitWalk<I> where I: Iterator<Item = RawCommit> {}
