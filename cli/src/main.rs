use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use timeline_layout::{
    layout_timeline, LayoutConfig, LayoutRequest, RenderPlan, TickKind, ZoomLevel, DATE_FORMAT,
};
use timeline_tasks::{demo_tasks, parse_tasks_str, valid_tasks};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "timeline-cli",
    about = "Lay out planner tasks on the SMART-goal timeline."
)]
struct Args {
    /// Path to a JSON export of task rows.
    #[arg(short, long, required_unless_present = "demo")]
    input: Option<PathBuf>,

    /// Use the built-in sample goals instead of an export.
    #[arg(long, conflicts_with = "input")]
    demo: bool,

    /// Days per axis division (1, 7, 14 or 30).
    #[arg(short, long, default_value_t = 14)]
    zoom_days: u32,

    /// Viewport width in pixels.
    #[arg(short, long, default_value_t = LayoutRequest::DEFAULT_VIEWPORT_PX)]
    viewport_width: f64,

    /// Reference date (yyyy-MM-dd), defaults to the local date.
    #[arg(long)]
    today: Option<String>,

    /// TOML file overriding layout geometry.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full render plan as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("timeline_layout=debug,timeline_tasks=debug,timeline_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => LayoutConfig::default(),
    };

    let today = match args.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .with_context(|| format!("Invalid --today value {raw:?}, expected yyyy-MM-dd"))?,
        None => Local::now().date_naive(),
    };

    let tasks = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read file {path:?}"))?;
            valid_tasks(&parse_tasks_str(&data)?)
        }
        None => demo_tasks(today),
    };
    info!(tasks = tasks.len(), %today, "tasks loaded");

    let zoom = ZoomLevel::from_step_days(args.zoom_days)?;
    let request = LayoutRequest::new(zoom, args.viewport_width, today);
    let plan = layout_timeline(&tasks, &request, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_summary(&plan, zoom);
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<LayoutConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read config {path:?}"))?;
    let config: LayoutConfig =
        toml::from_str(&raw).with_context(|| format!("Invalid layout config {path:?}"))?;
    info!(?path, "layout config loaded");
    Ok(config)
}

fn print_summary(plan: &RenderPlan, zoom: ZoomLevel) {
    if let Some(placeholder) = &plan.placeholder {
        println!("{}", placeholder.message);
        return;
    }

    println!("Zoom: {}", zoom.label());
    if let Some(axis) = &plan.axis {
        println!(
            "Axis: {} .. {} ({} divisions, {:.2} px/day)",
            axis.start,
            axis.end,
            axis.divisions(),
            plan.px_per_day
        );
    }
    println!(
        "Scene: {:.0} x {:.0}",
        plan.scene.width, plan.scene.height
    );

    for bar in &plan.bars {
        println!(
            "  [{}] {:<32} x={:>8.1} w={:>8.1}  {}",
            bar.task_id, bar.title, bar.x, bar.width, bar.date_label
        );
    }

    let labels: Vec<&str> = plan
        .ticks
        .iter()
        .filter(|tick| tick.kind == TickKind::Division)
        .map(|tick| tick.label.as_str())
        .collect();
    println!("Ticks: {}", labels.join(" "));

    match &plan.today_marker {
        Some(marker) => println!("Today: {} at x={:.1}", marker.date, marker.x),
        None => println!("Today: outside the visible window"),
    }
}
