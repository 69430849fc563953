//! Minimal OpenAI-compatible chat completion client used by `llm-check`.

use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

pub const CHECK_PROMPT: &str = "Reply with one short sentence confirming you are reachable.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	System,
	User,
	Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
	pub role: Role,
	pub content: String,
}

impl ChatMessage {
	pub fn user(content: impl Into<String>) -> Self {
		ChatMessage { role: Role::User, content: content.into() }
	}
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
	model: &'a str,
	messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
	#[serde(default)]
	choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
	message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
	content: Option<String>,
}

pub struct ChatClient {
	client: Client,
	base_url: String,
	api_key: String,
	model: String,
}

impl ChatClient {
	pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
		Ok(ChatClient {
			client: Client::new(),
			base_url: config.openai_url.clone(),
			api_key: config.openai_key()?.to_string(),
			model: config.openai_model.clone(),
		})
	}

	/// Send `messages` and return the first choice's text.
	pub fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
		let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
		tracing::debug!(%url, model = %self.model, "sending chat completion");
		let response = self
			.client
			.post(&url)
			.bearer_auth(&self.api_key)
			.json(&ChatRequest { model: &self.model, messages })
			.send()
			.with_context(|| format!("chat request to {} failed", url))?;
		let status = response.status();
		let body = response.text().context("read chat response body")?;
		if !status.is_success() {
			bail!("chat completion returned {}: {}", status, body);
		}
		let parsed: ChatResponse = serde_json::from_str(&body).with_context(|| format!("decode chat response: {}", body))?;
		parsed
			.choices
			.into_iter()
			.next()
			.and_then(|c| c.message.content)
			.map(|s| s.trim().to_string())
			.ok_or_else(|| anyhow!("chat response had no content"))
	}
}
