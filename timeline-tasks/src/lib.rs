//! Planner task rows (JSON exports of the task store) to timeline inputs.

mod demo;
mod validate;

pub use demo::demo_tasks;
pub use timeline_layout::valid_tasks;
pub use validate::{validate_draft, TaskDraft, ValidationError};

use serde_json::Value;
use timeline_layout::{TaskRecord, TimelineError};
use tracing::{debug, warn};

/// Read task rows from a JSON string.
pub fn parse_tasks_str(json: &str) -> Result<Vec<TaskRecord>, TimelineError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| TimelineError::Parse(err.to_string()))?;
    parse_tasks_value(&value)
}

/// Read task rows from a `serde_json::Value`.
///
/// Accepts either a bare array of rows or an object with a `tasks` array.
/// Rows without a usable integer `id` are skipped.
pub fn parse_tasks_value(document: &Value) -> Result<Vec<TaskRecord>, TimelineError> {
    let rows = match document {
        Value::Array(rows) => rows,
        Value::Object(map) => map
            .get("tasks")
            .and_then(Value::as_array)
            .ok_or(TimelineError::MissingData)?,
        other => {
            return Err(TimelineError::Parse(format!(
                "expected an array of tasks, received {}",
                value_kind(other)
            )))
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let Some(id) = row.get("id").and_then(extract_id) else {
            warn!(index, "skipping task row without an integer id");
            continue;
        };

        records.push(TaskRecord {
            id,
            title: text_field(row, "title"),
            s_text: text_field(row, "s_text"),
            m_text: text_field(row, "m_text"),
            a_text: text_field(row, "a_text"),
            r_text: text_field(row, "r_text"),
            start_date: text_field(row, "start_date"),
            end_date: text_field(row, "end_date"),
        });
    }

    debug!(rows = rows.len(), records = records.len(), "task rows read");
    Ok(records)
}

fn extract_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn text_field(row: &Value, key: &str) -> Option<String> {
    row.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
