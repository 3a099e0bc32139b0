//! Render plan handed to the UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::axis::AxisWindow;

/// One task bar. `task_id` is opaque metadata for click handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarGeometry {
    pub task_id: i64,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub date_label: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TickKind {
    /// Regular division boundary.
    Division,
    /// Forced tick at the axis end.
    Terminal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickGeometry {
    pub x: f64,
    pub date: NaiveDate,
    pub label: String,
    pub kind: TickKind,
}

/// Vertical "today" line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodayMarker {
    pub x: f64,
    pub date: NaiveDate,
    /// True when the marker sits on a division tick and may be hidden by it.
    pub on_tick: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisLine {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SceneSize {
    pub width: f64,
    pub height: f64,
}

/// Message shown instead of a timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placeholder {
    pub message: String,
    pub x: f64,
    pub y: f64,
}

/// Complete layout of the timeline scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderPlan {
    pub axis: Option<AxisWindow>,
    pub px_per_day: f64,
    pub axis_line: Option<AxisLine>,
    pub bars: Vec<BarGeometry>,
    pub ticks: Vec<TickGeometry>,
    pub today_marker: Option<TodayMarker>,
    pub scene: SceneSize,
    pub placeholder: Option<Placeholder>,
}

impl RenderPlan {
    pub const EMPTY_MESSAGE: &'static str = "No tasks with valid dates";
    pub const EMPTY_SCENE: SceneSize = SceneSize {
        width: 600.0,
        height: 200.0,
    };

    /// Plan drawn when no task has usable dates.
    pub fn placeholder(px_per_day: f64) -> Self {
        Self {
            axis: None,
            px_per_day,
            axis_line: None,
            bars: Vec::new(),
            ticks: Vec::new(),
            today_marker: None,
            scene: Self::EMPTY_SCENE,
            placeholder: Some(Placeholder {
                message: Self::EMPTY_MESSAGE.to_string(),
                x: 20.0,
                y: 20.0,
            }),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    /// Task under the scene point `(x, y)`, if any.
    pub fn task_at(&self, x: f64, y: f64) -> Option<i64> {
        self.bars
            .iter()
            .find(|bar| x >= bar.x && x <= bar.x + bar.width && y >= bar.y && y <= bar.y + bar.height)
            .map(|bar| bar.task_id)
    }

    /// Calendar day under the scene x coordinate, inside the axis window.
    pub fn date_at(&self, x: f64) -> Option<NaiveDate> {
        let axis = self.axis.as_ref()?;
        let line = self.axis_line.as_ref()?;
        if !(x >= line.x_start && x < line.x_end) {
            return None;
        }
        let offset = ((x - line.x_start) / self.px_per_day).floor() as i64;
        Some(crate::axis::add_days(axis.start, offset)).filter(|date| axis.contains(*date))
    }
}
