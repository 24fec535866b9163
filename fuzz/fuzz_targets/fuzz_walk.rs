// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;
use semrel::domain::{ParsedMessage, RawCommit};
use semrel::services::history::walk_commit_log;

fuzz_target!(|messages: Vec<String>| {
    let total = messages.len();
    let records = messages.into_iter().enumerate().map(|(i, message)| RawCommit {
        id: i.to_string(),
        message,
    });

    let yielded: Vec<ParsedMessage> = walk_commit_log(records).collect();

    // Never yields more than the source holds, and never yields a release
    assert!(yielded.len() <= total);
    assert!(yielded.iter().all(|m| !m.is_release()));
});
