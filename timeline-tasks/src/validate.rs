use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use timeline_layout::{SmartNotes, DATE_FORMAT};

/// Task as entered in the editor form, before it is stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub notes: SmartNotes,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("goal title is required")]
    MissingTitle,
    #[error("invalid date `{0}`, use yyyy-MM-dd")]
    BadDate(String),
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("fill in at least one SMART item")]
    EmptySmart,
}

/// Check a draft against the editor rules and return its parsed dates.
pub fn validate_draft(draft: &TaskDraft) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    let start = parse(&draft.start_date)?;
    let end = parse(&draft.end_date)?;
    if end < start {
        return Err(ValidationError::EndBeforeStart { start, end });
    }

    if draft.notes.is_empty() {
        return Err(ValidationError::EmptySmart);
    }

    Ok((start, end))
}

fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::BadDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TaskDraft {
        TaskDraft {
            title: "Backup".into(),
            notes: SmartNotes {
                specific: Some("Archive the project".into()),
                ..SmartNotes::default()
            },
            start_date: "2024-03-01".into(),
            end_date: "2024-03-01".into(),
        }
    }

    #[test]
    fn accepts_single_day_goal() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(validate_draft(&draft()), Ok((day, day)));
    }

    #[test]
    fn checks_run_in_form_order() {
        let blank = TaskDraft {
            title: "  ".into(),
            start_date: "garbage".into(),
            ..draft()
        };
        assert_eq!(validate_draft(&blank), Err(ValidationError::MissingTitle));

        let bad_date = TaskDraft {
            end_date: "01.03.2024".into(),
            ..draft()
        };
        assert_eq!(
            validate_draft(&bad_date),
            Err(ValidationError::BadDate("01.03.2024".into()))
        );

        let reversed = TaskDraft {
            start_date: "2024-03-05".into(),
            ..draft()
        };
        assert!(matches!(
            validate_draft(&reversed),
            Err(ValidationError::EndBeforeStart { .. })
        ));

        let no_smart = TaskDraft {
            notes: SmartNotes::default(),
            ..draft()
        };
        assert_eq!(validate_draft(&no_smart), Err(ValidationError::EmptySmart));
    }

    #[test]
    fn whitespace_smart_item_counts_as_filled() {
        let spaces = TaskDraft {
            notes: SmartNotes {
                relevant: Some("  ".into()),
                ..SmartNotes::default()
            },
            ..draft()
        };
        assert!(validate_draft(&spaces).is_ok());

        let blank = TaskDraft {
            notes: SmartNotes {
                specific: Some(String::new()),
                ..SmartNotes::default()
            },
            ..draft()
        };
        assert_eq!(validate_draft(&blank), Err(ValidationError::EmptySmart));
    }
}
