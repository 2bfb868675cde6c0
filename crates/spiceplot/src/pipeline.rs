//! End-to-end plotting run.
//!
//! A run moves through a fixed sequence of stages: discover the output
//! files, check that there is something to plot, prepare the figure
//! directories, build and save the AC, TRAN and DC figures (skipping kinds
//! without files), then optionally open the saved images. Failing to open a viewer
//! is logged and does not fail the run.

use std::path::PathBuf;

use serde::Serialize;

use crate::analysis::AnalysisKind;
use crate::classify::discover;
use crate::config::PlotConfig;
use crate::display;
use crate::error::{PlotError, Result};
use crate::figure::build_figure;
use crate::output::{figure_path, next_figure_number, prepare_paths};
use crate::render::{BitmapRenderer, Renderer};

/// A figure written during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedFigure {
    pub kind: AnalysisKind,
    /// Sequence number in the file name.
    pub number: usize,
    pub path: PathBuf,
    /// Number of output files drawn into the figure.
    pub files: usize,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// Figures in the order they were saved.
    pub figures: Vec<SavedFigure>,
    /// Whether any figure directory had to be created.
    pub created_dirs: bool,
}

impl RunReport {
    /// Paths of all saved figures.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.figures.iter().map(|f| f.path.clone()).collect()
    }

    /// Plain-text listing of the saved figures.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for figure in &self.figures {
            out.push_str(&format!(
                "  {:<5} {} ({} file{})\n",
                figure.kind.dir_name(),
                figure.path.display(),
                figure.files,
                if figure.files == 1 { "" } else { "s" }
            ));
        }
        out
    }
}

/// Run with the PNG renderer configured by `config.style`.
pub fn run(config: &PlotConfig) -> Result<RunReport> {
    let renderer = BitmapRenderer::new(config.style.clone());
    run_with(config, &renderer)
}

/// Run with a caller-supplied renderer.
pub fn run_with<R: Renderer + ?Sized>(config: &PlotConfig, renderer: &R) -> Result<RunReport> {
    log::info!("Discovering simulator output files");
    let buckets = discover(config)?;

    if buckets.is_empty() {
        return Err(PlotError::NoOutputFiles);
    }

    let paths = prepare_paths(config, &buckets)?;
    if paths.created_any() {
        println!("Creating plot directories..........OK");
    }
    println!("Plotting requested analyses........OK");

    let mut report = RunReport {
        figures: Vec::new(),
        created_dirs: paths.created_any(),
    };

    for kind in AnalysisKind::PLOT_ORDER {
        let Some(dir) = paths.get(kind) else {
            log::debug!("No {} output, skipping", kind);
            continue;
        };
        let files = buckets.files(kind);
        log::info!("Plotting {} {} file(s)", files.len(), kind);

        let figure = build_figure(kind, files)?;
        let number = next_figure_number(dir)?;
        let path = figure_path(dir, number, kind);
        renderer.render(&figure, &path)?;
        log::info!("Saved {}", path.display());

        report.figures.push(SavedFigure {
            kind,
            number,
            path,
            files: files.len(),
        });
    }

    if config.show {
        log::info!("Opening {} figure(s)", report.figures.len());
        // Figures are already on disk here.
        if let Err(e) = display::show(&report.paths(), config.viewer.as_deref()) {
            log::warn!("{}", e);
        }
    }
    println!("Saving figures to directories......OK");

    Ok(report)
}
