//! OpenAI-compatible chat completions provider.

use crate::llm::{ChatTurn, LlmClient, Role};
use anyhow::{Context, Result};
use momo_core::config::LlmConfig;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("OpenAiClient requires an api_key")?;
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, system: &str, turns: Vec<ChatTurn>) -> Result<String> {
        let mut messages = vec![json!({"role": "system", "content": system})];
        for turn in turns {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            messages.push(json!({"role": role, "content": turn.content}));
        }

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": messages,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
            }))
            .send()
            .await
            .context("Failed to send chat completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat API error ({status}): {error_text}");
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to decode chat completion response")?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .context("Chat completion response had no text content")?
            .trim()
            .to_string();

        if content.is_empty() {
            anyhow::bail!("Chat completion returned empty content");
        }
        Ok(content)
    }
}
