//! spiceplot CLI.
//!
//! Plots the DC sweep, transient and AC output files found in the working
//! directory and saves the figures under `./plots`.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use spiceplot::{FigureStyle, PlotConfig, PlotError, RunReport};

#[derive(Parser)]
#[command(name = "spiceplot")]
#[command(about = "Plot circuit simulator DC sweep, transient and AC output files")]
#[command(version)]
struct Cli {
    /// Directory containing DC sweep output files
    #[arg(long, default_value = "./")]
    dc_dir: PathBuf,

    /// Directory containing transient output files
    #[arg(long, default_value = "./")]
    tran_dir: PathBuf,

    /// Directory containing AC output files
    #[arg(long, default_value = "./")]
    ac_dir: PathBuf,

    /// Root directory for the saved figures
    #[arg(long, default_value = "./plots")]
    plots_dir: PathBuf,

    /// Do not open the figures after saving them
    #[arg(long)]
    no_show: bool,

    /// Program used to open the figures (default: the platform viewer)
    #[arg(long)]
    viewer: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1400)]
    width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> PlotConfig {
        PlotConfig {
            dc_dir: self.dc_dir.clone(),
            tran_dir: self.tran_dir.clone(),
            ac_dir: self.ac_dir.clone(),
            plots_dir: self.plots_dir.clone(),
            show: !self.no_show,
            viewer: self.viewer.clone(),
            style: FigureStyle {
                width: self.width,
                height: self.height,
                ..FigureStyle::default()
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Ctrl-C ends the run quietly with a success status.
    if let Err(e) = ctrlc::set_handler(|| std::process::exit(0)) {
        log::warn!("Could not install interrupt handler: {}", e);
    }

    match run(&cli) {
        Ok(report) => {
            output::print_report(&report, cli.json);
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<PlotError>() {
            // The two deliberate fatal paths keep a zero exit status.
            Some(fatal) if fatal.is_expected_fatal() => {
                println!("{}", fatal);
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> Result<RunReport> {
    let config = cli.config();
    log::debug!("Configuration: {:?}", config);
    spiceplot::run(&config).with_context(|| {
        format!(
            "plotting output into {} failed",
            config.plots_dir.display()
        )
    })
}
