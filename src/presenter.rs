use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use crate::duration::total_hours;
use crate::task::{Priority, Task};

pub struct Presenter {
	color: bool,
}

impl Presenter {
	pub fn new(color: bool) -> Self {
		Presenter { color }
	}

	/// `"N tasks remaining <day>, totaling H.H hours"`
	pub fn total(&self, out: &mut impl Write, day: &str, tasks: &[Task]) -> io::Result<()> {
		writeln!(out, "{} tasks remaining {}, totaling {:.1} hours", tasks.len(), day, total_hours(tasks))
	}

	/// Itemized list; expects tasks already sorted.
	pub fn list(&self, out: &mut impl Write, day: &str, tasks: &[Task]) -> io::Result<()> {
		if tasks.is_empty() {
			return writeln!(out, "No tasks due {}", day);
		}
		writeln!(out, "Tasks due {}:", day)?;
		for t in tasks {
			writeln!(out, "- [{}] {}", self.label(t.label()), t.content)?;
		}
		Ok(())
	}

	pub fn unknown_command(&self, out: &mut impl Write, command: &str, usage: &str) -> io::Result<()> {
		writeln!(out, "Unknown command: {}", command)?;
		write!(out, "{}", usage)
	}

	fn label(&self, p: Priority) -> ColoredString {
		let s = p.as_str();
		if !self.color {
			return s.normal();
		}
		match p {
			Priority::P1 => s.red().bold(),
			Priority::P2 => s.yellow(),
			Priority::P3 => s.blue(),
			Priority::P4 => s.normal(),
		}
	}
}

#[cfg(test)]
impl Presenter {
	pub fn plain() -> Self {
		Self::new(false)
	}
}
