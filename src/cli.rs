use chrono::NaiveDate;
use clap::{CommandFactory, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
	name = "todo-today",
	version,
	about = "Todoist task totals for today or tomorrow",
	after_help = "Commands:\n  total      Show number of tasks and total estimated time\n  list       Show tasks by priority and day order\n  help       Show this help message\n  llm-check  Send a test prompt to the configured chat model\n\nTime estimates are read from title markers like [2h] or [30m].\n\nExamples:\n  todo-today total\n  todo-today list tomorrow\n  todo-today -v list"
)]
pub struct Cli {
	/// Command to run (total, list, help, llm-check)
	pub command: Option<String>,
	/// Day to report on
	#[arg(value_enum, default_value_t = TargetDay::Today)]
	pub day: TargetDay,
	/// Log the raw task payload and computed sort order to stderr
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Total,
	List,
	Help,
	LlmCheck,
	Unknown(String),
}

impl Command {
	pub fn parse(s: &str) -> Self {
		match s {
			"total" => Command::Total,
			"list" => Command::List,
			"help" => Command::Help,
			"llm-check" => Command::LlmCheck,
			other => Command::Unknown(other.to_string()),
		}
	}
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDay {
	Today,
	Tomorrow,
}

impl TargetDay {
	pub fn name(self) -> &'static str {
		match self {
			TargetDay::Today => "today",
			TargetDay::Tomorrow => "tomorrow",
		}
	}

	/// Calendar date this day refers to, counted from `today`.
	pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
		match self {
			TargetDay::Today => Some(today),
			TargetDay::Tomorrow => today.succ_opt(),
		}
	}
}

pub fn usage() -> String {
	Cli::command().render_help().to_string()
}
