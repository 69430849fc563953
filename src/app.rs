use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::agenda::sort_tasks;
use crate::cli::{usage, Cli, Command, TargetDay};
use crate::config::Config;
use crate::llm::{ChatClient, ChatMessage, CHECK_PROMPT};
use crate::presenter::Presenter;
use crate::todoist::{fetch_due, TaskSource, TodoistClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
	Total,
	List,
}

/// Dispatch one invocation. Only missing configuration (or an I/O failure on
/// `out`) is an error; fetch failures and unknown commands are printed.
pub fn run(cli: &Cli, config: &Config, today: NaiveDate, presenter: &Presenter, out: &mut impl Write) -> Result<()> {
	let Some(raw) = cli.command.as_deref() else {
		write!(out, "{}", usage())?;
		return Ok(());
	};
	match Command::parse(raw) {
		Command::Total => {
			let client = TodoistClient::from_config(config)?;
			report(Report::Total, &client, cli.day, today, presenter, out)
		}
		Command::List => {
			let client = TodoistClient::from_config(config)?;
			report(Report::List, &client, cli.day, today, presenter, out)
		}
		Command::Help => {
			write!(out, "{}", usage())?;
			Ok(())
		}
		Command::LlmCheck => {
			let client = ChatClient::from_config(config)?;
			let reply = client.complete(&[ChatMessage::user(CHECK_PROMPT)]).context("llm check failed")?;
			writeln!(out, "{}", reply)?;
			Ok(())
		}
		Command::Unknown(cmd) => {
			presenter.unknown_command(out, &cmd, &usage())?;
			Ok(())
		}
	}
}

/// Fetch, filter, sort and render tasks for `day`.
pub fn report(kind: Report, source: &dyn TaskSource, day: TargetDay, today: NaiveDate, presenter: &Presenter, out: &mut impl Write) -> Result<()> {
	let date = day.resolve(today).context("cannot compute target date")?;
	let mut tasks = fetch_due(source, date).into_tasks(out)?;
	sort_tasks(&mut tasks);
	for (rank, t) in tasks.iter().enumerate() {
		tracing::debug!(rank, id = %t.id, label = %t.label(), day_order = t.day_order, "sorted");
	}
	match kind {
		Report::Total => presenter.total(out, day.name(), &tasks)?,
		Report::List => presenter.list(out, day.name(), &tasks)?,
	}
	Ok(())
}
