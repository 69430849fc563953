use std::sync::OnceLock;

use regex::Regex;

use crate::task::Task;

fn marker_re() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	// Estimate marker format: [2h] or [30m]
	RE.get_or_init(|| Regex::new(r"\[(\d+)([hm])\]").expect("duration marker regex is valid"))
}

/// Estimated hours from the first `[Nh]` / `[Nm]` marker in a title, or 0.0.
pub fn parse_duration(title: &str) -> f64 {
	let Some(caps) = marker_re().captures(title) else { return 0.0 };
	let Ok(value) = caps[1].parse::<f64>() else { return 0.0 };
	match &caps[2] {
		"h" => value,
		"m" => value / 60.0,
		_ => 0.0,
	}
}

/// Sum of estimates; +0.0 for an empty slice.
pub fn total_hours(tasks: &[Task]) -> f64 {
	tasks.iter().map(|t| parse_duration(&t.content)).fold(0.0, |acc, h| acc + h)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hours_marker() {
		assert_eq!(parse_duration("Write report [2h]"), 2.0);
	}

	#[test]
	fn minutes_marker() {
		assert_eq!(parse_duration("Call client [30m]"), 0.5);
		assert_eq!(parse_duration("[90m] deep work"), 1.5);
	}

	#[test]
	fn no_marker_is_zero() {
		assert_eq!(parse_duration("No marker"), 0.0);
		assert_eq!(parse_duration(""), 0.0);
	}

	#[test]
	fn unknown_unit_or_malformed_is_zero() {
		assert_eq!(parse_duration("Lunch [2d]"), 0.0);
		assert_eq!(parse_duration("Gym [h]"), 0.0);
		assert_eq!(parse_duration("Read [1.5h]"), 0.0);
		assert_eq!(parse_duration("Plan 2h"), 0.0);
	}

	#[test]
	fn only_first_marker_counts() {
		assert_eq!(parse_duration("Review [1h] then fix [30m]"), 1.0);
		assert_eq!(parse_duration("Sync [15m] [3h]"), 0.25);
	}

	#[test]
	fn totals_across_tasks() {
		let tasks = vec![Task::new("1", "A [2h]"), Task::new("2", "B [30m]"), Task::new("3", "C")];
		assert_eq!(total_hours(&tasks), 2.5);
		assert_eq!(total_hours(&[]), 0.0);
	}

	#[test]
	fn empty_total_is_positive_zero() {
		let total = total_hours(&[]);
		assert!(total.is_sign_positive());
		assert_eq!(format!("{:.1}", total), "0.0");
		assert_eq!(format!("{:.1}", total_hours(&[Task::new("1", "No marker")])), "0.0");
	}
}
