// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Build,
    Chore,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Release,
    Revert,
    Style,
    Test,
    Temp,
}

impl CommitType {
    /// Every recognized type name, in the order accepted by `parse`.
    pub const ALL: [&'static str; 13] = [
        "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "release", "revert",
        "style", "test", "temp",
    ];

    /// Exact, lowercase-only match against the closed type set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "build" => Some(Self::Build),
            "chore" => Some(Self::Chore),
            "ci" => Some(Self::Ci),
            "docs" => Some(Self::Docs),
            "feat" => Some(Self::Feat),
            "fix" => Some(Self::Fix),
            "perf" => Some(Self::Perf),
            "refactor" => Some(Self::Refactor),
            "release" => Some(Self::Release),
            "revert" => Some(Self::Revert),
            "style" => Some(Self::Style),
            "test" => Some(Self::Test),
            "temp" => Some(Self::Temp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Chore => "chore",
            Self::Ci => "ci",
            Self::Docs => "docs",
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Perf => "perf",
            Self::Refactor => "refactor",
            Self::Release => "release",
            Self::Revert => "revert",
            Self::Style => "style",
            Self::Test => "test",
            Self::Temp => "temp",
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw record from a history source. The `id` is carried for logging
/// only; classification looks at `message` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    pub id: String,
    pub message: String,
}
