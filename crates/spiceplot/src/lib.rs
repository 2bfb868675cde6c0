//! Plotting for circuit simulator output files.
//!
//! `spiceplot` collects the DC sweep (`dc_sweep_analysis_*`), transient
//! (`tr_analysis_*`) and AC (`ac_analysis_*`) text files a simulator leaves
//! in its working directory, parses their numeric columns and saves one PNG
//! figure per analysis kind under `plots/DC`, `plots/TRAN` and `plots/AC`.
//!
//! ```no_run
//! use spiceplot::{PlotConfig, run};
//!
//! let report = run(&PlotConfig::default().with_show(false))?;
//! for figure in &report.figures {
//!     println!("{}", figure.path.display());
//! }
//! # Ok::<(), spiceplot::PlotError>(())
//! ```

pub mod analysis;
pub mod classify;
pub mod config;
pub mod display;
pub mod error;
pub mod figure;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod ticks;

pub use analysis::{AnalysisKind, SweepType};
pub use classify::{AnalysisBuckets, OutputFile, classify, detect_sweep, discover, series_label};
pub use config::{FigureStyle, PlotConfig};
pub use error::{PlotError, Result};
pub use figure::{Figure, Panel, Series, XAxis, build_figure};
pub use output::{PathRegistry, figure_path, next_figure_number, prepare_paths};
pub use parser::{AcSeries, XySeries, parse_ac_lines, parse_xy_lines};
pub use pipeline::{RunReport, SavedFigure, run, run_with};
pub use render::{BitmapRenderer, Renderer};
pub use ticks::{LinearTicks, linear_ticks};
