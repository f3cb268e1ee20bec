use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockError {
    #[error("Failed to read fixture file {}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture file {} is not a list of response events", path.display())]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised on purpose after a fixture replay so callers can test their
    /// failure handling.
    #[error("Mock script error: Simulated failure during execution")]
    SimulatedFailure,
}
