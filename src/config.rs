//! Process configuration, read once at startup and passed down explicitly.

use thiserror::Error;

pub const TODOIST_TOKEN_VAR: &str = "TODOIST_API_TOKEN";
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_TODOIST_URL: &str = "https://api.todoist.com/sync/v9";
const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("{0} environment variable is not set")]
	Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
	pub todoist_token: Option<String>,
	pub todoist_url: String,
	pub openai_key: Option<String>,
	pub openai_url: String,
	pub openai_model: String,
}

impl Config {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Build from any key lookup. Empty values count as unset.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
		Config {
			todoist_token: get(TODOIST_TOKEN_VAR),
			todoist_url: get("TODOIST_API_URL").unwrap_or_else(|| DEFAULT_TODOIST_URL.to_string()),
			openai_key: get(OPENAI_KEY_VAR),
			openai_url: get("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
			openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
		}
	}

	pub fn todoist_token(&self) -> Result<&str, ConfigError> {
		self.todoist_token.as_deref().ok_or(ConfigError::Missing(TODOIST_TOKEN_VAR))
	}

	pub fn openai_key(&self) -> Result<&str, ConfigError> {
		self.openai_key.as_deref().ok_or(ConfigError::Missing(OPENAI_KEY_VAR))
	}
}
