mod echo;
mod fixture;
mod inline;
mod models;

pub use echo::EchoSource;
pub use fixture::FixtureSource;
pub use inline::InlineSource;
pub use models::{ContentBlock, ResponseEvent, TodoItem, TodoPriority, TodoStatus};

use anyhow::Result;
use async_trait::async_trait;

use crate::cli::Mode;
use crate::emitter::EmitterConfig;

/// What the mock was asked.
#[derive(Debug, Clone, Copy)]
pub struct MockRequest<'a> {
    pub prompt: &'a str,
    pub model: Option<&'a str>,
}

impl MockRequest<'_> {
    /// `Mock Gemini response to: <prompt>`, with ` (model: <model>)` when a
    /// model was given.
    pub fn echo_text(&self) -> String {
        match self.model {
            Some(model) => format!("Mock Gemini response to: {} (model: {})", self.prompt, model),
            None => format!("Mock Gemini response to: {}", self.prompt),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A single line of plain text.
    Plain(String),
    /// One JSON line per event, paused in between.
    Events(Vec<ResponseEvent>),
}

#[async_trait]
pub trait ResponseSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn respond(&self, request: &MockRequest<'_>) -> Result<Reply>;

    /// Runs once the whole reply has been written.
    fn finish(&self) -> Result<()> {
        Ok(())
    }
}

pub fn create_source(config: &EmitterConfig) -> Box<dyn ResponseSource> {
    match config.mode {
        Mode::Fixture => Box::new(FixtureSource::new(
            config.fixture.clone(),
            config.fail_after_replay,
        )),
        Mode::Inline => Box::new(InlineSource::new()),
        Mode::Echo => Box::new(EchoSource),
    }
}
