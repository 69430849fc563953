use std::fmt;

use chrono::NaiveDate;

/// Day order for tasks the user never arranged; sorts after every real rank.
pub const DAY_ORDER_UNSET: i64 = i64::MAX;

/// Service priority 1..=4 where 4 is the most urgent.
pub const PRIORITY_LOWEST: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
	pub id: String,
	pub content: String,
	pub due: Option<NaiveDate>,
	pub priority: i64,
	pub day_order: i64,
	pub checked: bool,
}

impl Task {
	pub fn label(&self) -> Priority {
		Priority::from_service(self.priority)
	}
}

/// Display priority. The service counts upwards (4 = urgent), labels count downwards,
/// so `P1 < P4` in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
	P1,
	P2,
	P3,
	P4,
}

impl Priority {
	pub fn from_service(value: i64) -> Self {
		match value {
			4 => Priority::P1,
			3 => Priority::P2,
			2 => Priority::P3,
			_ => Priority::P4,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Priority::P1 => "p1",
			Priority::P2 => "p2",
			Priority::P3 => "p3",
			Priority::P4 => "p4",
		}
	}
}

impl fmt::Display for Priority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
impl Task {
	pub fn new(id: &str, content: &str) -> Self {
		Task {
			id: id.to_string(),
			content: content.to_string(),
			due: None,
			priority: PRIORITY_LOWEST,
			day_order: DAY_ORDER_UNSET,
			checked: false,
		}
	}

	pub fn due(mut self, date: NaiveDate) -> Self {
		self.due = Some(date);
		self
	}

	pub fn priority(mut self, p: i64) -> Self {
		self.priority = p;
		self
	}

	pub fn day_order(mut self, order: i64) -> Self {
		self.day_order = order;
		self
	}

	pub fn done(mut self) -> Self {
		self.checked = true;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_follow_inverted_scale() {
		assert_eq!(Priority::from_service(4).as_str(), "p1");
		assert_eq!(Priority::from_service(3).as_str(), "p2");
		assert_eq!(Priority::from_service(2).as_str(), "p3");
		assert_eq!(Priority::from_service(1).as_str(), "p4");
	}

	#[test]
	fn label_mapping_is_total() {
		for v in [i64::MIN, -1, 0, 5, 42, i64::MAX] {
			assert_eq!(Priority::from_service(v), Priority::P4, "value {}", v);
		}
	}

	#[test]
	fn task_label_uses_priority() {
		let t = Task::new("1", "x").priority(3);
		assert_eq!(t.label().to_string(), "p2");
		assert_eq!(Task::new("2", "y").label(), Priority::P4);
	}
}
