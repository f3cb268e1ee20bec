use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::{MockRequest, Reply, ResponseEvent, ResponseSource};
use crate::error::MockError;

/// Read a JSON array of response events. The file is fully read and closed
/// before anything is returned.
pub async fn load_fixture(path: &Path) -> Result<Vec<ResponseEvent>, MockError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MockError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;

    let events: Vec<ResponseEvent> =
        serde_json::from_str(&raw).map_err(|source| MockError::FixtureParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), events = events.len(), "loaded fixture");
    Ok(events)
}

/// Replays recorded events, then fails on purpose unless told not to.
pub struct FixtureSource {
    path: PathBuf,
    fail_after_replay: bool,
}

impl FixtureSource {
    pub fn new(path: PathBuf, fail_after_replay: bool) -> Self {
        Self {
            path,
            fail_after_replay,
        }
    }
}

#[async_trait]
impl ResponseSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    // The prompt only selects this branch, the replay ignores its content.
    async fn respond(&self, _request: &MockRequest<'_>) -> Result<Reply> {
        let events = load_fixture(&self.path).await?;
        Ok(Reply::Events(events))
    }

    fn finish(&self) -> Result<()> {
        if self.fail_after_replay {
            return Err(MockError::SimulatedFailure.into());
        }
        Ok(())
    }
}
