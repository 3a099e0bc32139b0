//! Task records, parsed tasks and zoom levels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TimelineError;

/// Storage date format of `start_date` / `end_date` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw task row as exported by the planner store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TaskRecord {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub s_text: Option<String>,
    #[serde(default)]
    pub m_text: Option<String>,
    #[serde(default)]
    pub a_text: Option<String>,
    #[serde(default)]
    pub r_text: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl TaskRecord {
    /// Parse the stored date strings into a [`Task`].
    pub fn parse(&self) -> Result<Task, TimelineError> {
        let start = parse_date("start_date", self.start_date.as_deref())?;
        let end = parse_date("end_date", self.end_date.as_deref())?;

        Ok(Task {
            id: self.id,
            title: self.title.clone().unwrap_or_default(),
            start,
            end,
            notes: SmartNotes {
                specific: self.s_text.clone(),
                measurable: self.m_text.clone(),
                achievable: self.a_text.clone(),
                relevant: self.r_text.clone(),
            },
        })
    }
}

/// Records with usable dates, parsed. Malformed rows are dropped.
pub fn valid_tasks(records: &[TaskRecord]) -> Vec<Task> {
    records
        .iter()
        .filter_map(|record| match record.parse() {
            Ok(task) => Some(task),
            Err(err) => {
                debug!(task_id = record.id, %err, "skipping task without usable dates");
                None
            }
        })
        .collect()
}

fn parse_date(field: &'static str, raw: Option<&str>) -> Result<NaiveDate, TimelineError> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty());
    let Some(raw) = raw else {
        return Err(TimelineError::MissingData);
    };
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| TimelineError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

/// SMART breakdown of a goal. Every part is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SmartNotes {
    pub specific: Option<String>,
    pub measurable: Option<String>,
    pub achievable: Option<String>,
    pub relevant: Option<String>,
}

impl SmartNotes {
    /// True when no part has any text. Whitespace counts as text.
    pub fn is_empty(&self) -> bool {
        [
            &self.specific,
            &self.measurable,
            &self.achievable,
            &self.relevant,
        ]
        .iter()
        .all(|part| part.as_deref().map_or(true, str::is_empty))
    }
}

/// A task with valid calendar dates, ready for layout.
///
/// `end >= start` is expected but not checked here; the draft validator
/// enforces it before rows are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub notes: SmartNotes,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
            notes: SmartNotes::default(),
        }
    }

    pub fn with_notes(mut self, notes: SmartNotes) -> Self {
        self.notes = notes;
        self
    }

    /// Title shown on the bar, falling back to `Task {id}`.
    pub fn display_title(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            format!("Task {}", self.id)
        } else {
            title.to_string()
        }
    }

    /// Number of calendar days covered, end day included.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Days represented by one axis division.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum ZoomLevel {
    Day,
    Week,
    Fortnight,
    Month,
}

impl ZoomLevel {
    /// All levels, finest first.
    pub const ALL: [ZoomLevel; 4] = [
        ZoomLevel::Day,
        ZoomLevel::Week,
        ZoomLevel::Fortnight,
        ZoomLevel::Month,
    ];

    pub const DEFAULT_INDEX: usize = 2;

    pub fn step_days(self) -> u32 {
        match self {
            ZoomLevel::Day => 1,
            ZoomLevel::Week => 7,
            ZoomLevel::Fortnight => 14,
            ZoomLevel::Month => 30,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ZoomLevel::Day => 0,
            ZoomLevel::Week => 1,
            ZoomLevel::Fortnight => 2,
            ZoomLevel::Month => 3,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, TimelineError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(TimelineError::ZoomIndex(index))
    }

    pub fn from_step_days(days: u32) -> Result<Self, TimelineError> {
        Self::ALL
            .into_iter()
            .find(|level| level.step_days() == days)
            .ok_or(TimelineError::UnknownZoom(days))
    }

    /// One step finer; stays put at the finest level.
    pub fn zoom_in(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    /// One step coarser; stays put at the coarsest level.
    pub fn zoom_out(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    pub fn label(self) -> String {
        match self.step_days() {
            1 => "1 day/division".to_string(),
            days => format!("{days} days/division"),
        }
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::ALL[Self::DEFAULT_INDEX]
    }
}

impl TryFrom<u32> for ZoomLevel {
    type Error = TimelineError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::from_step_days(days)
    }
}

impl From<ZoomLevel> for u32 {
    fn from(level: ZoomLevel) -> Self {
        level.step_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_saturate() {
        assert_eq!(ZoomLevel::Day.zoom_in(), ZoomLevel::Day);
        assert_eq!(ZoomLevel::Day.zoom_out(), ZoomLevel::Week);
        assert_eq!(ZoomLevel::Month.zoom_out(), ZoomLevel::Month);
        assert_eq!(ZoomLevel::default().step_days(), 14);
    }

    #[test]
    fn record_with_bad_date_is_rejected() {
        let record = TaskRecord {
            id: 3,
            start_date: Some("2024-13-01".into()),
            end_date: Some("2024-01-02".into()),
            ..TaskRecord::default()
        };
        assert!(matches!(
            record.parse(),
            Err(TimelineError::InvalidDate { field: "start_date", .. })
        ));
    }
}
