use chrono::NaiveDate;

use crate::task::Task;

/// Open tasks due exactly on `date`, in input order. Undated tasks never match.
pub fn due_on(tasks: Vec<Task>, date: NaiveDate) -> Vec<Task> {
	tasks.into_iter().filter(|t| !t.checked && t.due == Some(date)).collect()
}

/// Most urgent first, then manual day order; ties keep their input order.
/// Out-of-range priorities rank with p4, matching their label.
pub fn sort_tasks(tasks: &mut [Task]) {
	tasks.sort_by_key(|t| (t.label(), t.day_order));
}
