//! Run configuration.

use std::path::{Path, PathBuf};

use crate::analysis::AnalysisKind;

/// Visual parameters shared by every figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Font size of the figure title.
    pub title_font_size: u32,
    /// Font size of the axis descriptions.
    pub label_font_size: u32,
    /// Stroke width of data lines.
    pub line_width: u32,
    /// Draw grid lines.
    pub grid: bool,
    /// Fraction of the data span added above and below the y range.
    pub y_margin: f64,
    /// Fraction of the width used by the panels; the legend takes the rest.
    pub plot_right: f64,
    /// Draw a drop shadow behind the legend box.
    pub legend_shadow: bool,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 900,
            title_font_size: 18,
            label_font_size: 16,
            line_width: 2,
            grid: true,
            y_margin: 0.05,
            plot_right: 0.89,
            legend_shadow: true,
        }
    }
}

/// Where to look for simulator output and where to put figures.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Directory scanned for DC sweep output.
    pub dc_dir: PathBuf,
    /// Directory scanned for transient output.
    pub tran_dir: PathBuf,
    /// Directory scanned for AC output.
    pub ac_dir: PathBuf,
    /// Root of the per-analysis figure directories.
    pub plots_dir: PathBuf,
    /// Open the saved figures in an image viewer at the end of the run.
    pub show: bool,
    /// Program used to open figures instead of the platform default.
    pub viewer: Option<PathBuf>,
    /// Figure appearance.
    pub style: FigureStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            dc_dir: PathBuf::from("./"),
            tran_dir: PathBuf::from("./"),
            ac_dir: PathBuf::from("./"),
            plots_dir: PathBuf::from("./plots"),
            show: true,
            viewer: None,
            style: FigureStyle::default(),
        }
    }
}

impl PlotConfig {
    /// Configuration reading all output from `input` and writing figures to
    /// `input/plots`, without opening a viewer.
    pub fn in_dir(input: impl AsRef<Path>) -> Self {
        let input = input.as_ref();
        Self {
            dc_dir: input.to_path_buf(),
            tran_dir: input.to_path_buf(),
            ac_dir: input.to_path_buf(),
            plots_dir: input.join("plots"),
            show: false,
            viewer: None,
            style: FigureStyle::default(),
        }
    }

    /// Set whether figures are shown after saving.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Open figures with `program` rather than the platform default.
    pub fn with_viewer(mut self, program: impl Into<PathBuf>) -> Self {
        self.viewer = Some(program.into());
        self
    }

    /// Set the figure style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    /// Input directory for an analysis kind.
    pub fn input_dir(&self, kind: AnalysisKind) -> &Path {
        match kind {
            AnalysisKind::Dc => &self.dc_dir,
            AnalysisKind::Tran => &self.tran_dir,
            AnalysisKind::Ac => &self.ac_dir,
        }
    }

    /// Figure directory for an analysis kind.
    pub fn output_dir(&self, kind: AnalysisKind) -> PathBuf {
        self.plots_dir.join(kind.dir_name())
    }
}
