use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{Cli, Mode};
use crate::latency::Latency;
use crate::mock::{create_source, MockRequest, Reply};

pub const GREETING: &str = "Mock Gemini: Hello! Ready to help with mock responses.";
pub const DEBUG_START: &str = "[DEBUG] Mock Gemini CLI starting";
pub const DEBUG_FINISH: &str = "[DEBUG] Mock Gemini CLI finished";

#[derive(Debug, Clone)]
pub struct EmitterConfig {
    pub prompt: Option<String>,
    pub model: Option<String>,
    pub debug: bool,
    pub mode: Mode,
    pub fixture: PathBuf,
    pub fail_after_replay: bool,
    pub latency: Latency,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            model: None,
            debug: false,
            mode: Mode::Echo,
            fixture: PathBuf::from("mock_responses.json"),
            fail_after_replay: true,
            latency: Latency::default(),
        }
    }
}

impl From<Cli> for EmitterConfig {
    fn from(cli: Cli) -> Self {
        if cli.mcp_config.is_some() || cli.yolo {
            debug!(mcp_config = ?cli.mcp_config, yolo = cli.yolo, "ignoring real-CLI options");
        }
        Self {
            prompt: cli.prompt,
            model: cli.model,
            debug: cli.debug,
            mode: cli.mode,
            fixture: cli.fixture,
            fail_after_replay: !cli.no_fail,
            latency: Latency::scaled(cli.latency_scale),
        }
    }
}

/// Writes the mocked output for one invocation.
pub struct Emitter<O: Write, E: Write> {
    config: EmitterConfig,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Emitter<O, E> {
    pub fn new(config: EmitterConfig, out: O, err: E) -> Self {
        Self { config, out, err }
    }

    /// Runs the whole invocation. Debug markers wrap the main behaviour,
    /// and the finish marker is written even when it fails.
    pub async fn run(&mut self) -> Result<()> {
        if self.config.debug {
            writeln!(self.err, "{}", DEBUG_START)?;
        }

        let result = self.respond().await;

        if self.config.debug {
            writeln!(self.err, "{}", DEBUG_FINISH)?;
            self.err.flush()?;
        }
        result
    }

    async fn respond(&mut self) -> Result<()> {
        self.config.latency.startup().await;

        let prompt = match self.config.prompt.as_deref().filter(|p| !p.is_empty()) {
            Some(prompt) => prompt,
            None => {
                writeln!(self.out, "{}", GREETING)?;
                self.out.flush()?;
                return Ok(());
            }
        };

        let request = MockRequest {
            prompt,
            model: self.config.model.as_deref(),
        };
        let source = create_source(&self.config);
        debug!(source = source.name(), "answering prompt");

        match source.respond(&request).await? {
            Reply::Plain(line) => {
                writeln!(self.out, "{}", line)?;
                self.out.flush()?;
            }
            Reply::Events(events) => {
                let (min, max) = self.config.latency.bounds(events.len());
                debug!(events = events.len(), ?min, ?max, "replaying events");
                for (index, event) in events.iter().enumerate() {
                    if index > 0 {
                        self.config.latency.pause().await;
                    }
                    let line = event
                        .to_line()
                        .with_context(|| format!("Failed to serialize event {}", index))?;
                    debug!(index, tools = ?event.tool_names(), "emitting event");
                    writeln!(self.out, "{}", line)?;
                    self.out.flush()?;
                }
            }
        }

        source.finish()
    }
}
