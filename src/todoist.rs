//! Todoist Sync API client.
//!
//! One request pulls every active item plus the `day_orders` map; filtering to
//! the target day happens locally.

use std::collections::HashMap;
use std::io::{self, Write};

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::agenda;
use crate::config::{Config, ConfigError};
use crate::task::{Task, DAY_ORDER_UNSET, PRIORITY_LOWEST};

const RESOURCE_TYPES: &str = r#"["items","day_orders"]"#;

#[derive(Debug, Error)]
pub enum FetchError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("task service returned {status}: {body}")]
	Status { status: StatusCode, body: String },
	#[error("could not decode task payload: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Anything that can hand over the user's full, unfiltered task set.
pub trait TaskSource {
	fn fetch_all(&self) -> Result<Vec<Task>, FetchError>;
}

/// Result of one fetch for a target day. Failure is kept distinct here and only
/// collapsed to "no tasks" when handed to the presenter.
#[derive(Debug)]
pub enum FetchOutcome {
	Fetched(Vec<Task>),
	Failed(String),
}

impl FetchOutcome {
	/// Report a failure on `out` and fall back to an empty task set.
	pub fn into_tasks(self, out: &mut impl Write) -> io::Result<Vec<Task>> {
		match self {
			FetchOutcome::Fetched(tasks) => Ok(tasks),
			FetchOutcome::Failed(reason) => {
				writeln!(out, "An error occurred: {}", reason)?;
				Ok(Vec::new())
			}
		}
	}
}

/// Open tasks due on `date`, with day order already merged in.
pub fn fetch_due(source: &dyn TaskSource, date: NaiveDate) -> FetchOutcome {
	match source.fetch_all() {
		Ok(tasks) => FetchOutcome::Fetched(agenda::due_on(tasks, date)),
		Err(err) => {
			tracing::warn!(error = %err, "task fetch failed");
			FetchOutcome::Failed(err.to_string())
		}
	}
}

pub struct TodoistClient {
	client: Client,
	base_url: String,
	token: String,
}

impl TodoistClient {
	pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
		TodoistClient { client: Client::new(), base_url: base_url.into(), token: token.into() }
	}

	pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
		Ok(Self::new(config.todoist_url.clone(), config.todoist_token()?))
	}

	fn sync_url(&self) -> String {
		format!("{}/sync", self.base_url.trim_end_matches('/'))
	}
}

impl TaskSource for TodoistClient {
	fn fetch_all(&self) -> Result<Vec<Task>, FetchError> {
		let url = self.sync_url();
		tracing::debug!(%url, "requesting items and day orders");
		let response = self
			.client
			.post(&url)
			.bearer_auth(&self.token)
			.form(&[("sync_token", "*"), ("resource_types", RESOURCE_TYPES)])
			.send()?;
		let status = response.status();
		let body = response.text()?;
		if !status.is_success() {
			return Err(FetchError::Status { status, body });
		}
		tracing::debug!(payload = %body, "raw sync response");
		Ok(parse_sync(&body)?)
	}
}

/// Decode a sync payload into tasks, merging `day_orders` by id.
pub fn parse_sync(body: &str) -> Result<Vec<Task>, serde_json::Error> {
	let resp: SyncResponse = serde_json::from_str(body)?;
	Ok(resp.into_tasks())
}

#[derive(Debug, Deserialize)]
struct SyncResponse {
	#[serde(default)]
	items: Vec<Item>,
	#[serde(default)]
	day_orders: HashMap<String, i64>,
}

impl SyncResponse {
	fn into_tasks(self) -> Vec<Task> {
		let SyncResponse { items, day_orders } = self;
		items
			.into_iter()
			.map(|item| {
				let id = item.id.into_string();
				// Todoist reports -1 for tasks not placed in the day view.
				let day_order = day_orders.get(&id).copied().filter(|o| *o >= 0).unwrap_or(DAY_ORDER_UNSET);
				Task {
					due: item.due.and_then(|d| due_date(&d.date)),
					priority: item.priority.unwrap_or(PRIORITY_LOWEST),
					checked: item.checked.unwrap_or(false),
					content: item.content,
					day_order,
					id,
				}
			})
			.collect()
	}
}

#[derive(Debug, Deserialize)]
struct Item {
	id: ItemId,
	#[serde(default)]
	content: String,
	due: Option<Due>,
	priority: Option<i64>,
	checked: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemId {
	Text(String),
	Number(i64),
}

impl ItemId {
	fn into_string(self) -> String {
		match self {
			ItemId::Text(s) => s,
			ItemId::Number(n) => n.to_string(),
		}
	}
}

#[derive(Debug, Deserialize)]
struct Due {
	date: String,
}

/// Calendar day of a due value; `2026-10-18` and `2026-10-18T09:00:00Z` both
/// land on the 18th.
fn due_date(raw: &str) -> Option<NaiveDate> {
	let day = raw.get(..10)?;
	NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
