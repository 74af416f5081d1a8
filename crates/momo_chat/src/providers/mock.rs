//! Test and demo providers.

use crate::llm::{ChatTurn, LlmClient};
use anyhow::Result;
use std::time::Duration;

/// Returns a fixed reply after an optional artificial typing delay.
#[derive(Debug, Clone)]
pub struct MockClient {
    reply: String,
    delay: Duration,
}

impl MockClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(reply: impl Into<String>, delay: Duration) -> Self {
        Self {
            reply: reply.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockClient {
    async fn complete(&self, _system: &str, _turns: Vec<ChatTurn>) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.reply.clone())
    }
}

/// Always errors; exercises the fallback path.
#[derive(Debug, Clone, Default)]
pub struct FailingClient;

#[async_trait::async_trait]
impl LlmClient for FailingClient {
    async fn complete(&self, _system: &str, _turns: Vec<ChatTurn>) -> Result<String> {
        anyhow::bail!("remote collaborator unavailable")
    }
}
