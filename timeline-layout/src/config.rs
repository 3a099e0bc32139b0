use serde::{Deserialize, Serialize};

use crate::axis::MAX_DIVISIONS;

/// Tunable geometry of the timeline view.
///
/// Passed explicitly to every layout call; the UI scale that used to live in
/// the theme is a plain field here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per day at a 30-day zoom and UI scale 1.0.
    pub base_scale: f64,
    /// Global UI scale factor.
    pub ui_scale: f64,
    pub left_pad: f64,
    pub right_pad: f64,
    /// Y coordinate of the first row.
    pub top_pad: f64,
    pub bar_height: f64,
    /// Vertical distance between consecutive rows.
    pub row_spacing: f64,
    /// Gap between the last row and the axis line.
    pub axis_gap: f64,
    /// Space reserved under the axis for tick labels.
    pub axis_footer: f64,
    pub min_bar_width: f64,
    pub min_divisions: u32,
    /// Estimated width of one tick-label character at UI scale 1.0.
    pub label_char_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_scale: 3.6,
            ui_scale: 1.0,
            left_pad: 40.0,
            right_pad: 40.0,
            top_pad: 20.0,
            bar_height: 35.0,
            row_spacing: 60.0,
            axis_gap: 15.0,
            axis_footer: 60.0,
            min_bar_width: 15.0,
            min_divisions: 10,
            label_char_width: 7.0,
        }
    }
}

impl LayoutConfig {
    const MIN_SCALE: f64 = 0.01;

    /// Copy with pathological values clamped to usable minimums.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            base_scale: scale_factor(self.base_scale, defaults.base_scale),
            ui_scale: scale_factor(self.ui_scale, defaults.ui_scale),
            left_pad: non_negative(self.left_pad),
            right_pad: non_negative(self.right_pad),
            top_pad: non_negative(self.top_pad),
            bar_height: positive_or(self.bar_height, defaults.bar_height),
            row_spacing: non_negative(self.row_spacing),
            axis_gap: non_negative(self.axis_gap),
            axis_footer: non_negative(self.axis_footer),
            min_bar_width: non_negative(self.min_bar_width),
            min_divisions: self.min_divisions.clamp(1, MAX_DIVISIONS),
            label_char_width: non_negative(self.label_char_width),
        }
    }

    /// Pixels per day for a zoom step.
    pub fn px_per_day(&self, step_days: u32) -> f64 {
        self.base_scale * (30.0 / f64::from(step_days.max(1))) * self.ui_scale
    }

    /// Approximate rendered width of a tick label.
    pub fn label_width(&self, label: &str) -> f64 {
        label.chars().count() as f64 * self.label_char_width * self.ui_scale
    }
}

fn scale_factor(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(LayoutConfig::MIN_SCALE)
    } else {
        fallback
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
