//! Figure composition.
//!
//! A [`Figure`] describes what to draw for one analysis kind: title, panels,
//! axis modes, line series and the figure-level legend. Builders here read
//! and parse the output files; drawing is left to a
//! [`Renderer`](crate::render::Renderer).

use std::ops::Range;

use crate::analysis::{AnalysisKind, SweepType};
use crate::classify::{OutputFile, detect_sweep, series_label};
use crate::error::Result;
use crate::parser::{AcSeries, XySeries, read_ac_file, read_xy_file};
use crate::ticks::{LinearTicks, linear_ticks};

/// X-axis mode of a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum XAxis {
    /// Linear scale with automatic ticks.
    Linear,
    /// Logarithmic scale.
    Log,
    /// Linear scale with fixed limits and tick positions.
    Ticks(LinearTicks),
}

/// One labelled line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// One set of axes within a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub x_label: String,
    pub y_label: String,
    pub x_axis: XAxis,
    pub series: Vec<Series>,
}

impl Panel {
    fn new(x_label: &str, y_label: &str, x_axis: XAxis) -> Self {
        Self {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x_axis,
            series: Vec::new(),
        }
    }

    /// Labels of the panel's series, in drawing order.
    pub fn labels(&self) -> Vec<String> {
        self.series.iter().map(|s| s.label.clone()).collect()
    }

    fn values(&self, pick: impl Fn(&(f64, f64)) -> f64) -> impl Iterator<Item = f64> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(pick)
            .filter(|v| v.is_finite())
    }

    /// X range to draw.
    ///
    /// Tick mode uses its fixed limits. Log mode ignores non-positive values.
    pub fn x_range(&self) -> Range<f64> {
        match &self.x_axis {
            XAxis::Ticks(ticks) => widen(ticks.start as f64, ticks.end as f64),
            XAxis::Log => {
                let (lo, hi) = bounds(self.values(|p| p.0).filter(|&x| x > 0.0));
                match (lo, hi) {
                    (Some(lo), Some(hi)) if lo < hi => lo..hi,
                    (Some(lo), _) => lo / 10.0..lo * 10.0,
                    _ => 1.0..10.0,
                }
            }
            XAxis::Linear => match bounds(self.values(|p| p.0)) {
                (Some(lo), Some(hi)) => widen(lo, hi),
                _ => 0.0..1.0,
            },
        }
    }

    /// Y range to draw, padded by `margin` times the data span on each side.
    pub fn y_range(&self, margin: f64) -> Range<f64> {
        match bounds(self.values(|p| p.1)) {
            (Some(lo), Some(hi)) => {
                let pad = (hi - lo) * margin;
                widen(lo - pad, hi + pad)
            }
            _ => 0.0..1.0,
        }
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values.fold((None, None), |(lo, hi), v| {
        (
            Some(lo.map_or(v, |l: f64| l.min(v))),
            Some(hi.map_or(v, |h: f64| h.max(v))),
        )
    })
}

fn widen(lo: f64, hi: f64) -> Range<f64> {
    if lo < hi { lo..hi } else { lo - 1.0..hi + 1.0 }
}

/// Everything needed to draw one analysis kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub kind: AnalysisKind,
    pub title: String,
    /// Panels from top to bottom.
    pub panels: Vec<Panel>,
    /// Figure-level legend entries, taken from one panel.
    pub legend: Vec<String>,
}

/// Figure for DC sweep or transient output, one series per file.
pub fn xy_figure(kind: AnalysisKind, inputs: Vec<(String, XySeries)>) -> Figure {
    let (x_label, y_label) = match kind {
        AnalysisKind::Dc => ("Voltage sweep (V)", "Voltage (V)"),
        _ => ("Time (s)", "Voltage (V)"),
    };
    let mut panel = Panel::new(x_label, y_label, XAxis::Linear);
    for (label, series) in inputs {
        panel.series.push(Series {
            label,
            points: series.points(),
        });
    }

    Figure {
        kind,
        title: kind.title().to_string(),
        legend: panel.labels(),
        panels: vec![panel],
    }
}

/// Figure for AC output: phase on top, magnitude below.
///
/// For a linear sweep the last file's frequencies fix the x ticks of both
/// panels.
pub fn ac_figure(sweep: SweepType, inputs: Vec<(String, AcSeries)>) -> Figure {
    let mut x_axis = match sweep {
        SweepType::Linear => XAxis::Linear,
        SweepType::Logarithmic => XAxis::Log,
    };
    if sweep == SweepType::Linear {
        if let Some((_, last)) = inputs.last() {
            match linear_ticks(&last.freq) {
                Some(ticks) => x_axis = XAxis::Ticks(ticks),
                None => log::warn!("Leaving AC frequency ticks automatic"),
            }
        }
    }

    let mut phase = Panel::new("Frequency (Hz)", "Phase (°)", x_axis.clone());
    let mut magnitude = Panel::new("Frequency (Hz)", sweep.magnitude_label(), x_axis);
    for (label, series) in inputs {
        phase.series.push(Series {
            label: label.clone(),
            points: series.phase_points(),
        });
        magnitude.series.push(Series {
            label,
            points: series.magnitude_points(),
        });
    }

    Figure {
        kind: AnalysisKind::Ac,
        title: AnalysisKind::Ac.title().to_string(),
        legend: phase.labels(),
        panels: vec![phase, magnitude],
    }
}

/// Read every file of `kind` and compose its figure.
pub fn build_figure(kind: AnalysisKind, files: &[OutputFile]) -> Result<Figure> {
    match kind {
        AnalysisKind::Ac => {
            let sweep = detect_sweep(files)?;
            log::info!("AC sweep type: {:?}", sweep);
            let mut inputs = Vec::with_capacity(files.len());
            for file in files {
                let label = series_label(kind, &file.name)?;
                inputs.push((label, read_ac_file(&file.path)?));
            }
            Ok(ac_figure(sweep, inputs))
        }
        AnalysisKind::Dc | AnalysisKind::Tran => {
            let mut inputs = Vec::with_capacity(files.len());
            for file in files {
                let label = series_label(kind, &file.name)?;
                inputs.push((label, read_xy_file(&file.path)?));
            }
            Ok(xy_figure(kind, inputs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ac_series(freq: &[f64]) -> AcSeries {
        AcSeries {
            freq: freq.to_vec(),
            magnitude: freq.iter().map(|f| 1.0 / f).collect(),
            phase: freq.iter().map(|f| -f / 10.0).collect(),
        }
    }

    #[test]
    fn test_xy_figure_single_panel() {
        let series = XySeries {
            x: vec![0.0, 1.0, 2.0],
            y: vec![0.0, 0.5, 1.0],
        };
        let fig = xy_figure(AnalysisKind::Dc, vec![("V1".to_string(), series)]);

        assert_eq!(fig.title, "DC Sweep Analysis");
        assert_eq!(fig.panels.len(), 1);
        assert_eq!(fig.panels[0].x_label, "Voltage sweep (V)");
        assert_eq!(fig.panels[0].series[0].points[2], (2.0, 1.0));
        assert_eq!(fig.legend, vec!["V1"]);
    }

    #[test]
    fn test_transient_labels() {
        let fig = xy_figure(AnalysisKind::Tran, vec![]);
        assert_eq!(fig.title, "Transient Analysis");
        assert_eq!(fig.panels[0].x_label, "Time (s)");
        assert_eq!(fig.panels[0].y_label, "Voltage (V)");
        assert!(fig.legend.is_empty());
    }

    #[test]
    fn test_ac_linear_uses_last_file_ticks() {
        let fig = ac_figure(
            SweepType::Linear,
            vec![
                ("V(1)".to_string(), ac_series(&[10.0, 20.0, 30.0])),
                ("V(2)".to_string(), ac_series(&[100.0, 200.0, 300.0])),
            ],
        );

        assert_eq!(fig.panels.len(), 2);
        assert_eq!(fig.panels[0].y_label, "Phase (°)");
        assert_eq!(fig.panels[1].y_label, "Magnitude (V)");
        assert_eq!(fig.legend, vec!["V(1)", "V(2)"]);

        for panel in &fig.panels {
            let XAxis::Ticks(ticks) = &panel.x_axis else {
                panic!("expected fixed ticks, got {:?}", panel.x_axis);
            };
            assert_eq!(ticks.ticks, vec![100, 200, 300]);
            assert_eq!(panel.x_range(), 100.0..300.0);
        }
    }

    #[test]
    fn test_ac_linear_degenerate_frequencies_stay_automatic() {
        let fig = ac_figure(
            SweepType::Linear,
            vec![("V(1)".to_string(), ac_series(&[0.1, 0.2, 0.3, 0.4]))],
        );
        assert_eq!(fig.panels[0].x_axis, XAxis::Linear);
    }

    #[test]
    fn test_ac_linear_descending_start_stays_automatic() {
        let fig = ac_figure(
            SweepType::Linear,
            vec![("V(1)".to_string(), ac_series(&[100.0, 5.0, 10.0]))],
        );
        assert_eq!(fig.panels[0].x_axis, XAxis::Linear);
        assert_eq!(fig.panels[0].x_range(), 5.0..100.0);
    }

    #[test]
    fn test_ac_log_panels() {
        let fig = ac_figure(
            SweepType::Logarithmic,
            vec![("V(out)".to_string(), ac_series(&[1.0, 10.0, 100.0]))],
        );
        assert_eq!(fig.panels[0].x_axis, XAxis::Log);
        assert_eq!(fig.panels[1].y_label, "Magnitude (dB)");
        assert_eq!(fig.panels[1].series[0].points[1], (10.0, 0.1));
        assert_eq!(fig.panels[0].series[0].points[2], (100.0, -10.0));
        assert_eq!(fig.panels[0].x_range(), 1.0..100.0);
    }

    #[test]
    fn test_y_range_margin() {
        let series = XySeries {
            x: vec![0.0, 1.0],
            y: vec![0.0, 10.0],
        };
        let fig = xy_figure(AnalysisKind::Tran, vec![("n".to_string(), series)]);
        let range = fig.panels[0].y_range(0.05);
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_ranges_for_empty_and_flat_data() {
        let fig = xy_figure(AnalysisKind::Dc, vec![("V1".to_string(), XySeries::default())]);
        assert_eq!(fig.panels[0].x_range(), 0.0..1.0);
        assert_eq!(fig.panels[0].y_range(0.05), 0.0..1.0);

        let flat = XySeries {
            x: vec![2.0, 2.0],
            y: vec![3.0, 3.0],
        };
        let fig = xy_figure(AnalysisKind::Dc, vec![("V1".to_string(), flat)]);
        assert_eq!(fig.panels[0].x_range(), 1.0..3.0);
        assert_eq!(fig.panels[0].y_range(0.05), 2.0..4.0);
    }

    #[test]
    fn test_build_figure_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let name = "ac_analysis_V(2)_10_30_LIN.txt";
        std::fs::write(
            dir.path().join(name),
            "Frequency (Hz) Magnitude (V) Phase (degrees)\n\
             -----\n\
             10.0 1.00 -10.0\n\
             20.0 0.50 -20.0\n\
             30.0 0.25 -30.0\n",
        )
        .unwrap();
        let files = vec![OutputFile::new(dir.path(), name)];

        let fig = build_figure(AnalysisKind::Ac, &files).unwrap();
        assert_eq!(fig.legend, vec!["V(2)"]);
        assert_eq!(fig.panels[1].series[0].points, vec![(10.0, 1.0), (20.0, 0.5), (30.0, 0.25)]);
        assert!(matches!(fig.panels[0].x_axis, XAxis::Ticks(_)));
    }
}
