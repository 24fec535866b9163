// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;
use semrel::domain::{CommitType, ParsedMessage};
use semrel::services::parser::MessageParser;

fuzz_target!(|data: &str| {
    match MessageParser::parse(data) {
        ParsedMessage::Semantic(msg) => {
            assert!(CommitType::ALL.contains(&msg.kind.as_str()));
            assert!(!msg.subject.trim().is_empty());
        }
        ParsedMessage::Legacy(legacy) => {
            assert_eq!(legacy.message, data);
        }
    }
});
