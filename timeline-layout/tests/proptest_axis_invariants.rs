//! Property-based invariants of axis alignment and layout.
//!
//! 1. Alignment is idempotent for both rounding directions.
//! 2. Aligned dates are multiples of the step from the epoch and bracket the input.
//! 3. The axis window is non-empty with at least the minimum number of divisions.
//! 4. The axis always covers the viewport between the paddings.
//! 5. Every bar is at least the minimum bar width and starts inside the axis.
//! 6. Never more rows than the display cap.
//! 7. Extreme viewports and division counts keep the axis aligned and bounded.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use timeline_layout::{
    align_to_step, ensure_min_span, layout_timeline, LayoutConfig, LayoutRequest, Rounding,
    SpanRequest, Task, ZoomLevel, DISPLAY_CAP, EPOCH, MAX_DIVISIONS,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (-8_000i64..8_000).prop_map(|offset| {
        if offset >= 0 {
            EPOCH + Days::new(offset as u64)
        } else {
            EPOCH - Days::new(offset.unsigned_abs())
        }
    })
}

fn zoom_strategy() -> impl Strategy<Value = ZoomLevel> {
    (0usize..ZoomLevel::ALL.len()).prop_map(|index| ZoomLevel::ALL[index])
}

fn viewport_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-100.0f64..6000.0, 6000.0f64..1e15]
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (any::<i64>(), date_strategy(), 0u64..400)
        .prop_map(|(id, start, len)| Task::new(id, "task", start, start + Days::new(len)))
}

proptest! {
    #[test]
    fn alignment_is_idempotent(day in date_strategy(), zoom in zoom_strategy()) {
        let step = zoom.step_days();
        for rounding in [Rounding::Down, Rounding::Up] {
            let once = align_to_step(day, step, rounding);
            prop_assert_eq!(align_to_step(once, step, rounding), once);
        }
    }
}

proptest! {
    #[test]
    fn alignment_brackets_input(day in date_strategy(), zoom in zoom_strategy()) {
        let step = i64::from(zoom.step_days());
        let down = align_to_step(day, zoom.step_days(), Rounding::Down);
        let up = align_to_step(day, zoom.step_days(), Rounding::Up);

        prop_assert!(down <= day && day <= up);
        prop_assert!((up - down).num_days() < step + 1);
        prop_assert_eq!((down - EPOCH).num_days().rem_euclid(step), 0);
        prop_assert_eq!((up - EPOCH).num_days().rem_euclid(step), 0);
    }
}

proptest! {
    #[test]
    fn axis_spans_min_divisions_and_viewport(
        tasks in prop::collection::vec(task_strategy(), 1..8),
        zoom in zoom_strategy(),
        viewport in viewport_strategy(),
        ui_scale in 0.25f64..3.0,
        today in date_strategy(),
    ) {
        let config = LayoutConfig { ui_scale, ..LayoutConfig::default() };
        let request = LayoutRequest::new(zoom, viewport, today);
        let plan = layout_timeline(&tasks, &request, &config);

        let axis = plan.axis.expect("axis for non-empty input");
        prop_assert!(axis.end > axis.start);
        prop_assert!(axis.divisions() >= i64::from(config.min_divisions));
        prop_assert!(axis.divisions() <= i64::from(MAX_DIVISIONS));
        let step = i64::from(zoom.step_days());
        prop_assert_eq!((axis.end - EPOCH).num_days().rem_euclid(step), 0);
        prop_assert_eq!((axis.start - EPOCH).num_days().rem_euclid(step), 0);

        let line = plan.axis_line.as_ref().expect("axis line");
        let clamped = viewport.clamp(1.0, LayoutRequest::MAX_VIEWPORT_PX);
        let needed = (clamped - config.left_pad - config.right_pad).max(0.0);
        prop_assert!(line.x_end - line.x_start >= needed - 1e-9);
        prop_assert!(plan.scene.width > clamped);

        prop_assert!(plan.bars.len() <= DISPLAY_CAP);
        prop_assert_eq!(plan.bars.len(), tasks.len().min(DISPLAY_CAP));
        for bar in &plan.bars {
            prop_assert!(bar.width >= config.min_bar_width);
            prop_assert!(bar.x >= line.x_start);
            prop_assert!(bar.x + bar.width <= line.x_end + config.min_bar_width);
        }
    }
}

proptest! {
    #[test]
    fn widening_stays_aligned_for_extreme_inputs(
        start in date_strategy(),
        len in 0i64..400,
        zoom in zoom_strategy(),
        px_per_day in 1e-6f64..500.0,
        min_divisions in 1u32..=u32::MAX,
        viewport in 0.0f64..1e18,
    ) {
        let step = zoom.step_days();
        let end = start + Days::new(len as u64);
        let window = ensure_min_span(start, end, &SpanRequest {
            step_days: step,
            px_per_day,
            min_divisions,
            viewport_width: viewport,
            left_pad: 40.0,
            right_pad: 40.0,
        });

        prop_assert!(window.end > window.start);
        prop_assert!(window.end >= end);
        prop_assert_eq!((window.end - EPOCH).num_days().rem_euclid(i64::from(step)), 0);
        prop_assert!(window.divisions() <= i64::from(MAX_DIVISIONS));
    }
}
