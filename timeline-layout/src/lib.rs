//! Layout engine for the SMART-goal timeline (Gantt view).
//!
//! Turns a snapshot of tasks, a zoom level and a viewport width into a
//! [`RenderPlan`]: bar rectangles, axis ticks, an optional "today" marker and
//! the scene bounds. The computation is pure; the caller supplies "today".

pub mod axis;
mod config;
mod layout;
mod model;
pub mod plan;
mod select;

pub use axis::{
    align_to_step, ensure_min_span, AxisWindow, Rounding, SpanRequest, EPOCH, MAX_DIVISIONS,
};
pub use config::LayoutConfig;
pub use layout::{layout_records, layout_timeline, LayoutRequest};
pub use model::{valid_tasks, SmartNotes, Task, TaskRecord, ZoomLevel, DATE_FORMAT};
pub use plan::{BarGeometry, RenderPlan, SceneSize, TickGeometry, TickKind, TodayMarker};
pub use select::{select_for_display, DISPLAY_CAP};

/// Errors raised while reading task data. Layout itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("input is missing required data")]
    MissingData,
    #[error("could not read input: {0}")]
    Parse(String),
    #[error("invalid {field} `{value}`, expected yyyy-MM-dd")]
    InvalidDate { field: &'static str, value: String },
    #[error("unsupported zoom step of {0} days (expected 1, 7, 14 or 30)")]
    UnknownZoom(u32),
    #[error("zoom index {0} out of range")]
    ZoomIndex(usize),
}
