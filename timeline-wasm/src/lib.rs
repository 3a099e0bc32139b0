//! Framework-neutral WASM <-> JavaScript bridge for the timeline layout.

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use timeline_layout::{
    layout_records, LayoutConfig, LayoutRequest, TimelineError, ZoomLevel, DATE_FORMAT,
};
use wasm_bindgen::prelude::*;

/// Options object accepted from JS. Every field is optional.
#[derive(Deserialize, Default)]
struct JsLayoutOptions {
    #[serde(default)]
    zoom_days: Option<u32>,
    #[serde(default)]
    zoom_index: Option<usize>,
    #[serde(default)]
    viewport_width: Option<f64>,
    #[serde(default)]
    today: Option<String>,
    #[serde(default)]
    ui_scale: Option<f64>,
    #[serde(default)]
    base_scale: Option<f64>,
}

impl JsLayoutOptions {
    fn config(&self) -> LayoutConfig {
        let mut base = LayoutConfig::default();
        if let Some(scale) = self.ui_scale {
            base.ui_scale = scale;
        }
        if let Some(scale) = self.base_scale {
            base.base_scale = scale;
        }
        base
    }

    fn request(&self) -> Result<LayoutRequest, TimelineError> {
        let zoom = match (self.zoom_days, self.zoom_index) {
            (Some(days), _) => ZoomLevel::from_step_days(days)?,
            (None, Some(index)) => ZoomLevel::from_index(index)?,
            (None, None) => ZoomLevel::default(),
        };
        let today = match self.today.as_deref() {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                TimelineError::InvalidDate {
                    field: "today",
                    value: raw.to_string(),
                }
            })?,
            None => Local::now().date_naive(),
        };
        let viewport = self
            .viewport_width
            .unwrap_or(LayoutRequest::DEFAULT_VIEWPORT_PX);
        Ok(LayoutRequest::new(zoom, viewport, today))
    }
}

/// Lay out planner task rows (array or `{ tasks: [...] }`) and return the
/// render plan as a JS object.
#[wasm_bindgen]
pub fn layout_timeline(tasks: JsValue, options: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let document = from_value::<serde_json::Value>(tasks)
        .map_err(|err| JsValue::from_str(&format!("Could not read tasks: {err}")))?;
    let records = timeline_tasks::parse_tasks_value(&document)
        .map_err(|err| JsValue::from_str(&format_timeline_error(err)))?;

    let options = match options {
        Some(js_options) if !js_options.is_undefined() && !js_options.is_null() => {
            from_value::<JsLayoutOptions>(js_options)
                .map_err(|err| JsValue::from_str(&format!("Could not read options: {err}")))?
        }
        _ => JsLayoutOptions::default(),
    };
    let request = options
        .request()
        .map_err(|err| JsValue::from_str(&format_timeline_error(err)))?;

    let plan = layout_records(&records, &request, &options.config());

    to_value(&plan).map_err(|err| JsValue::from_str(&format!("Could not serialize plan: {err}")))
}

/// Human label for a zoom index, e.g. for the zoom toolbar.
#[wasm_bindgen]
pub fn zoom_label(zoom_index: usize) -> Result<String, JsValue> {
    ZoomLevel::from_index(zoom_index)
        .map(ZoomLevel::label)
        .map_err(|err| JsValue::from_str(&format_timeline_error(err)))
}

fn format_timeline_error(err: TimelineError) -> String {
    format!("Timeline error: {err}")
}
