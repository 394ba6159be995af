use clap::Parser;
use dofplot::{App, AppState, StartupConfig, init_logging};
use dofplot_core::analysis::{FocalRange, SubjectRange, SweepAxis};
use dofplot_core::model::OutputMetric;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dofplot")]
#[command(about = "A terminal depth-of-field plotter")]
struct Args {
    /// Sensor format, e.g. "full frame" or "APS-C"
    #[arg(long)]
    sensor: Option<String>,

    /// f-number, snapped to the nearest standard stop
    #[arg(long)]
    aperture: Option<f64>,

    /// Full-frame-equivalent focal length in mm
    #[arg(long)]
    focal_equiv: Option<f64>,

    /// Subject distance in meters
    #[arg(long)]
    subject: Option<f64>,

    /// Swept input (aperture, focal, subject)
    #[arg(long)]
    axis: Option<SweepAxis>,

    /// Plotted output (hyperfocal, limits, total)
    #[arg(long)]
    metric: Option<OutputMetric>,

    /// Focal sweep preset (wide, normal, tele)
    #[arg(long)]
    focal_range: Option<FocalRange>,

    /// Subject sweep preset (near, normal, far, super-far)
    #[arg(long)]
    subject_range: Option<SubjectRange>,

    /// Read-only YAML file with start-up values; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the log file (default: ~/.dofplot/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the start-up chart as JSON and exit
    #[arg(long)]
    json: bool,
}

impl Args {
    fn overrides(&self) -> StartupConfig {
        StartupConfig {
            sensor: self.sensor.clone(),
            aperture: self.aperture,
            focal_equiv: self.focal_equiv,
            subject: self.subject,
            axis: self.axis,
            metric: self.metric,
            focal_range: self.focal_range,
            subject_range: self.subject_range,
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dofplot")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);

    init_logging(&log_dir, &args.log_level)?;

    let file_config = match &args.config {
        Some(path) => StartupConfig::load(path)?,
        None => StartupConfig::default(),
    };
    let state = AppState::from_config(&file_config.merge(args.overrides()))?;

    if args.json {
        let chart = state.build_chart()?;
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    let mut app = App::new(state);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
