mod agenda;
mod app;
mod cli;
mod config;
mod duration;
mod llm;
mod presenter;
mod task;
mod todoist;

#[cfg(test)]
mod test_http;
#[cfg(test)]
mod test_log;

use std::io::{self, Write};

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::presenter::Presenter;

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);
	let config = Config::from_env();
	let today = Local::now().date_naive();
	let stdout = io::stdout();
	let mut out = stdout.lock();
	app::run(&cli, &config, today, &Presenter::new(true), &mut out)?;
	out.flush()?;
	Ok(())
}

/// Filter directive used when `RUST_LOG` is unset.
pub(crate) fn log_filter(verbose: bool) -> &'static str {
	if verbose {
		"todo_today=debug"
	} else {
		"todo_today=error"
	}
}

/// Logs go to stderr so stdout stays clean for the report. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}
