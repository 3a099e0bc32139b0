//! Axis window alignment and minimum-span enforcement.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed reference date for tick alignment.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("epoch is a valid date"),
};

/// Smallest pixel-per-day value used when converting pixels to days.
const MIN_PX_PER_DAY: f64 = 0.001;

/// Upper bound on the divisions added by minimum-span widening.
pub const MAX_DIVISIONS: u32 = 10_000;

/// Rounding direction for [`align_to_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

/// Snap `date` to a multiple of `step_days` counted from [`EPOCH`].
pub fn align_to_step(date: NaiveDate, step_days: u32, rounding: Rounding) -> NaiveDate {
    let step = i64::from(step_days.max(1));
    let days = (date - EPOCH).num_days();
    let k = match rounding {
        Rounding::Down => days.div_euclid(step),
        Rounding::Up => {
            let k = days.div_euclid(step);
            if days.rem_euclid(step) == 0 {
                k
            } else {
                k + 1
            }
        }
    };
    match k.checked_mul(step).and_then(|days| shift_days(EPOCH, days)) {
        Some(aligned) => aligned,
        // Outside chrono's range: the outermost boundary that still exists.
        None if k >= 0 => align_to_step(NaiveDate::MAX, step_days, Rounding::Down),
        None => align_to_step(NaiveDate::MIN, step_days, Rounding::Up),
    }
}

/// Shift a date by a signed number of days, saturating at chrono's range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    shift_days(date, days).unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// The `[start, end)` date range actually drawn on the axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AxisWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub step_days: u32,
}

impl AxisWindow {
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn divisions(&self) -> i64 {
        self.total_days() / i64::from(self.step_days.max(1))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Day offset of `date` from the window start.
    pub fn offset_days(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }
}

/// Inputs of [`ensure_min_span`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanRequest {
    pub step_days: u32,
    pub px_per_day: f64,
    pub min_divisions: u32,
    pub viewport_width: f64,
    pub left_pad: f64,
    pub right_pad: f64,
}

/// Widen `[start, end)` until it has at least `min_divisions` divisions and
/// its pixel width covers the viewport between the paddings. The end is
/// re-aligned upward to a tick boundary.
///
/// Widening never adds more than [`MAX_DIVISIONS`] divisions; a span taken
/// from the tasks themselves is kept as is.
pub fn ensure_min_span(start: NaiveDate, end: NaiveDate, request: &SpanRequest) -> AxisWindow {
    let step = request.step_days.max(1);
    let px_per_day = if request.px_per_day.is_finite() {
        request.px_per_day.max(MIN_PX_PER_DAY)
    } else {
        MIN_PX_PER_DAY
    };

    let max_widened_span = i64::from(MAX_DIVISIONS) * i64::from(step);
    let span_for_divisions =
        i64::from(request.min_divisions.min(MAX_DIVISIONS)) * i64::from(step);

    let needed_px = (request.viewport_width - (request.left_pad + request.right_pad)).max(0.0);
    let needed_px = if needed_px.is_finite() { needed_px } else { 0.0 };
    let raw_days = (needed_px / px_per_day).ceil();
    let mut span_for_viewport = raw_days.min(max_widened_span as f64) as i64;
    // ceil() on the quotient can land one day short after float rounding.
    if span_for_viewport < max_widened_span && (span_for_viewport as f64) * px_per_day < needed_px
    {
        span_for_viewport += 1;
    }

    let base_span = (end - start).num_days();
    let span = base_span.max(span_for_divisions).max(span_for_viewport);

    AxisWindow {
        start,
        end: align_to_step(add_days(start, span), step, Rounding::Up),
        step_days: step,
    }
}
