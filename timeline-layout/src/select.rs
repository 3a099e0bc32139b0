//! Which tasks make it onto the timeline.

use chrono::NaiveDate;

use crate::Task;

/// Maximum number of rows drawn on the timeline. Fixed product policy.
pub const DISPLAY_CAP: usize = 5;

/// Pick at most [`DISPLAY_CAP`] tasks and return them in row order
/// (top to bottom).
///
/// Tasks still running on `today` come first, soonest end first; remaining
/// slots go to finished tasks, most recently ended first. The selection is
/// then reversed so the most urgent task ends up on the bottom row.
pub fn select_for_display(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    let (mut ongoing, mut past): (Vec<&Task>, Vec<&Task>) =
        tasks.iter().partition(|task| task.end >= today);

    ongoing.sort_by_key(|task| task.end);
    past.sort_by(|a, b| b.end.cmp(&a.end));

    let mut selected: Vec<&Task> = ongoing.into_iter().take(DISPLAY_CAP).collect();
    let missing = DISPLAY_CAP - selected.len();
    selected.extend(past.into_iter().take(missing));

    selected.reverse();
    selected
}
