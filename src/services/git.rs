// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

use tracing::warn;

use crate::domain::{ParsedMessage, RawCommit};
use crate::error::{Error, Result};
use crate::services::history::walk_commit_log;

pub struct GitService {
    repo: gix::Repository,
}

impl GitService {
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|_| Error::NotAGitRepo)?;
        Ok(Self { repo })
    }

    /// Raw commit records reachable from `HEAD`, newest first.
    ///
    /// Records are produced lazily as the revision walk advances; an
    /// unreadable commit is skipped with a warning rather than aborting the
    /// walk.
    pub fn commit_log(&self) -> Result<impl Iterator<Item = RawCommit> + '_> {
        let head = self.repo.head_id().map_err(|e| Error::Git(e.to_string()))?;
        let walk = self
            .repo
            .rev_walk([head])
            .all()
            .map_err(|e| Error::Git(e.to_string()))?;

        Ok(walk.filter_map(|info| {
            let info = match info {
                Ok(info) => info,
                Err(err) => {
                    warn!(error = %err, "revision walk interrupted");
                    return None;
                }
            };
            match self.repo.find_commit(info.id) {
                Ok(commit) => Some(RawCommit {
                    id: info.id.to_string(),
                    message: commit.message_raw_sloppy().to_string(),
                }),
                Err(err) => {
                    warn!(id = %info.id, error = %err, "skipping unreadable commit");
                    None
                }
            }
        }))
    }

    /// Every parsed message since the last release, newest first, with the
    /// release marker itself excluded.
    pub fn read_commit_log(&self) -> Result<impl Iterator<Item = ParsedMessage> + '_> {
        Ok(walk_commit_log(self.commit_log()?))
    }
}
