use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};

use crate::latency::MAX_LATENCY_SCALE;

#[derive(Parser, Debug)]
#[command(name = "mock-gemini", author, version, about = "Mock Gemini CLI", long_about = None)]
pub struct Cli {
    /// Prompt to process
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Model to use (only echoed back)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// MCP config file (ignored)
    #[arg(long, value_name = "PATH")]
    pub mcp_config: Option<PathBuf>,

    /// YOLO mode (ignored)
    #[arg(long)]
    pub yolo: bool,

    /// How a prompt is answered
    #[arg(long, value_enum, env = "MOCK_GEMINI_MODE", default_value_t = Mode::Echo)]
    pub mode: Mode,

    /// Recorded response events replayed by the fixture mode
    #[arg(
        long,
        value_name = "PATH",
        env = "MOCK_GEMINI_FIXTURE",
        default_value = "mock_responses.json"
    )]
    pub fixture: PathBuf,

    /// Exit successfully after replaying the fixture
    #[arg(long, env = "MOCK_GEMINI_NO_FAIL", value_parser = BoolishValueParser::new())]
    pub no_fail: bool,

    /// Multiplier applied to every simulated delay, 0 disables them
    #[arg(
        long,
        value_name = "FACTOR",
        env = "MOCK_GEMINI_LATENCY_SCALE",
        default_value_t = 1.0,
        value_parser = parse_latency_scale
    )]
    pub latency_scale: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Replay events from the fixture file, then fail
    Fixture,
    /// Two built-in tool-use events echoing the prompt
    Inline,
    /// One plain line echoing the prompt
    Echo,
}

fn parse_latency_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !scale.is_finite() || !(0.0..=MAX_LATENCY_SCALE).contains(&scale) {
        return Err(format!(
            "latency scale must be between 0 and {}, got {}",
            MAX_LATENCY_SCALE, value
        ));
    }
    Ok(scale)
}
