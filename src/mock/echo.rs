use anyhow::Result;
use async_trait::async_trait;

use super::{MockRequest, Reply, ResponseSource};

/// Answers with one plain line echoing the prompt.
pub struct EchoSource;

#[async_trait]
impl ResponseSource for EchoSource {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn respond(&self, request: &MockRequest<'_>) -> Result<Reply> {
        Ok(Reply::Plain(request.echo_text()))
    }
}
