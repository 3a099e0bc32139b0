//! Task list to render plan.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{add_days, align_to_step, ensure_min_span, AxisWindow, Rounding, SpanRequest};
use crate::model::valid_tasks;
use crate::plan::{
    AxisLine, BarGeometry, RenderPlan, SceneSize, TickGeometry, TickKind, TodayMarker,
};
use crate::select::select_for_display;
use crate::{LayoutConfig, Task, TaskRecord, ZoomLevel};

/// Per-call inputs supplied by the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutRequest {
    pub zoom: ZoomLevel,
    pub viewport_width: f64,
    pub today: NaiveDate,
}

impl LayoutRequest {
    /// Viewport assumed when the UI does not report one.
    pub const DEFAULT_VIEWPORT_PX: f64 = 1024.0;
    /// Widest viewport honoured; wider values are clamped.
    pub const MAX_VIEWPORT_PX: f64 = 100_000.0;

    pub fn new(zoom: ZoomLevel, viewport_width: f64, today: NaiveDate) -> Self {
        Self {
            zoom,
            viewport_width,
            today,
        }
    }

    fn clamped_viewport(&self) -> f64 {
        if self.viewport_width.is_finite() && self.viewport_width >= 1.0 {
            self.viewport_width.min(Self::MAX_VIEWPORT_PX)
        } else {
            1.0
        }
    }
}

/// Lay out raw task rows. Rows with missing or malformed dates are skipped.
pub fn layout_records(
    records: &[TaskRecord],
    request: &LayoutRequest,
    config: &LayoutConfig,
) -> RenderPlan {
    layout_timeline(&valid_tasks(records), request, config)
}

/// Compute the timeline scene for `tasks`.
///
/// Never fails: with nothing to draw the plan carries a placeholder message.
pub fn layout_timeline(tasks: &[Task], request: &LayoutRequest, config: &LayoutConfig) -> RenderPlan {
    let config = config.sanitized();
    let step = request.zoom.step_days();
    let px_per_day = config.px_per_day(step);
    let viewport = request.clamped_viewport();

    let selected = select_for_display(tasks, request.today);
    let (Some(min_start), Some(max_end)) = (
        selected.iter().map(|task| task.start).min(),
        selected.iter().map(|task| task.end).max(),
    ) else {
        debug!("no tasks to lay out, returning placeholder");
        return RenderPlan::placeholder(px_per_day);
    };

    let axis_start = align_to_step(min_start, step, Rounding::Down);
    let axis_end_raw = align_to_step(add_days(max_end, 1), step, Rounding::Up);
    let axis = ensure_min_span(
        axis_start,
        axis_end_raw,
        &SpanRequest {
            step_days: step,
            px_per_day,
            min_divisions: config.min_divisions,
            viewport_width: viewport,
            left_pad: config.left_pad,
            right_pad: config.right_pad,
        },
    );
    debug!(
        start = %axis.start,
        end = %axis.end,
        step,
        divisions = axis.divisions(),
        rows = selected.len(),
        "axis window computed"
    );

    let axis_start_x = config.left_pad;
    let axis_end_x = axis_start_x + axis.total_days() as f64 * px_per_day;
    let x_of = |date: NaiveDate| axis_start_x + axis.offset_days(date) as f64 * px_per_day;

    let mut y = config.top_pad;
    let mut bars = Vec::with_capacity(selected.len());
    for (row, task) in selected.iter().enumerate() {
        let width = (task.span_days() as f64 * px_per_day).max(config.min_bar_width);
        bars.push(BarGeometry {
            task_id: task.id,
            row,
            x: x_of(task.start),
            y,
            width,
            height: config.bar_height,
            title: task.display_title(),
            date_label: date_range_label(task),
            tooltip: tooltip(task),
        });
        y += config.row_spacing;
    }

    let axis_y = y + config.axis_gap;
    let ticks = ticks(&axis, &x_of, axis_end_x);

    let today_marker = axis.contains(request.today).then(|| TodayMarker {
        x: x_of(request.today),
        date: request.today,
        on_tick: axis.offset_days(request.today) % i64::from(step) == 0,
    });

    let terminal_half = ticks
        .last()
        .map(|tick| config.label_width(&tick.label) / 2.0)
        .unwrap_or_default();
    let tail_pad = terminal_half + 20.0;
    let scene = SceneSize {
        width: (axis_end_x + tail_pad + config.right_pad).max(viewport + 1.0),
        height: axis_y + config.axis_footer,
    };

    RenderPlan {
        axis: Some(axis),
        px_per_day,
        axis_line: Some(AxisLine {
            x_start: axis_start_x,
            x_end: axis_end_x,
            y: axis_y,
        }),
        bars,
        ticks,
        today_marker,
        scene,
        placeholder: None,
    }
}

fn ticks(axis: &AxisWindow, x_of: &impl Fn(NaiveDate) -> f64, axis_end_x: f64) -> Vec<TickGeometry> {
    let step = Days::new(u64::from(axis.step_days.max(1)));
    let mut ticks = Vec::with_capacity(axis.divisions().max(0) as usize + 1);

    let mut current = axis.start;
    while current < axis.end {
        ticks.push(TickGeometry {
            x: x_of(current),
            date: current,
            label: current.format("%d.%m").to_string(),
            kind: TickKind::Division,
        });
        match current.checked_add_days(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    // The terminal tick sits on the boundary but names the last day inside it.
    let last_day = add_days(axis.end, -1);
    ticks.push(TickGeometry {
        x: axis_end_x,
        date: axis.end,
        label: last_day.format("%d.%m").to_string(),
        kind: TickKind::Terminal,
    });
    ticks
}

fn date_range_label(task: &Task) -> String {
    format!(
        "{} → {}",
        task.start.format("%d.%m.%Y"),
        task.end.format("%d.%m.%Y")
    )
}

fn tooltip(task: &Task) -> String {
    let part = |text: &Option<String>| {
        text.as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or("-")
            .to_string()
    };
    format!(
        "{}\nS: {}\nM: {}\nA: {}\nR: {}\n{}",
        task.display_title(),
        part(&task.notes.specific),
        part(&task.notes.measurable),
        part(&task.notes.achievable),
        part(&task.notes.relevant),
        date_range_label(task)
    )
}
