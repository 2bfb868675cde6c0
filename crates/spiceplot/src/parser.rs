//! Column parser for simulator output files.
//!
//! Output files start with one header line, followed by rows of
//! whitespace-separated decimal numbers. DC sweep and transient files carry
//! two columns (independent variable, voltage); AC files carry three
//! (frequency, magnitude, phase). Rows that do not contain the expected
//! pattern are skipped.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{PlotError, Result};

/// Two columns: unsigned first field, signed second field.
static XY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+\.?[0-9]+)\s+(-?[0-9]+\.?[0-9]+)").expect("static pattern")
});

/// Three columns: unsigned first field, signed second and third fields.
static AC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+\.?[0-9]+)\s+(-?[0-9]+\.?[0-9]+)\s+(-?[0-9]+\.?[0-9]+)")
        .expect("static pattern")
});

/// Parsed DC sweep or transient output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XySeries {
    /// Sweep step or time values.
    pub x: Vec<f64>,
    /// Node voltages.
    pub y: Vec<f64>,
}

impl XySeries {
    /// Number of parsed rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if no row matched.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Rows as `(x, y)` points.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Parsed AC output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcSeries {
    /// Frequencies (Hz).
    pub freq: Vec<f64>,
    /// Magnitudes, in volts or decibels depending on the sweep type.
    pub magnitude: Vec<f64>,
    /// Phases (degrees).
    pub phase: Vec<f64>,
}

impl AcSeries {
    /// Number of parsed rows.
    pub fn len(&self) -> usize {
        self.freq.len()
    }

    /// True if no row matched.
    pub fn is_empty(&self) -> bool {
        self.freq.is_empty()
    }

    /// `(frequency, magnitude)` points.
    pub fn magnitude_points(&self) -> Vec<(f64, f64)> {
        self.freq
            .iter()
            .copied()
            .zip(self.magnitude.iter().copied())
            .collect()
    }

    /// `(frequency, phase)` points.
    pub fn phase_points(&self) -> Vec<(f64, f64)> {
        self.freq.iter().copied().zip(self.phase.iter().copied()).collect()
    }
}

fn field(caps: &Captures<'_>, group: usize) -> Result<f64> {
    let text = caps.get(group).map_or("", |m| m.as_str());
    text.parse::<f64>().map_err(|_| PlotError::InvalidNumber {
        text: text.to_string(),
    })
}

/// Parse two-column rows, skipping the header line.
pub fn parse_xy_lines<'a, I>(lines: I) -> Result<XySeries>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut series = XySeries::default();
    for line in lines.into_iter().skip(1) {
        let Some(caps) = XY_PATTERN.captures(line) else {
            continue;
        };
        series.x.push(field(&caps, 1)?);
        series.y.push(field(&caps, 2)?);
    }
    Ok(series)
}

/// Parse three-column rows, skipping the header line.
pub fn parse_ac_lines<'a, I>(lines: I) -> Result<AcSeries>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut series = AcSeries::default();
    for line in lines.into_iter().skip(1) {
        let Some(caps) = AC_PATTERN.captures(line) else {
            continue;
        };
        series.freq.push(field(&caps, 1)?);
        series.magnitude.push(field(&caps, 2)?);
        series.phase.push(field(&caps, 3)?);
    }
    Ok(series)
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| PlotError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read and parse a DC sweep or transient output file.
pub fn read_xy_file(path: &Path) -> Result<XySeries> {
    let text = read_text(path)?;
    let series = parse_xy_lines(text.lines())?;
    log::debug!("Parsed {} rows from {}", series.len(), path.display());
    Ok(series)
}

/// Read and parse an AC output file.
pub fn read_ac_file(path: &Path) -> Result<AcSeries> {
    let text = read_text(path)?;
    let series = parse_ac_lines(text.lines())?;
    log::debug!("Parsed {} rows from {}", series.len(), path.display());
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dc_rows() {
        let text = "Step           Value          \n\
                    0.000000       0.000000       \n\
                    0.500000       -0.250000      \n\
                    1.000000       -0.500000      \n";
        let series = parse_xy_lines(text.lines()).unwrap();
        assert_eq!(series.x, vec![0.0, 0.5, 1.0]);
        assert_eq!(series.y, vec![0.0, -0.25, -0.5]);
    }

    #[test]
    fn test_header_is_skipped_even_if_numeric() {
        let text = "1.0 2.0\n3.0 4.0\n";
        let series = parse_xy_lines(text.lines()).unwrap();
        assert_eq!(series.points(), vec![(3.0, 4.0)]);
    }

    #[test]
    fn test_malformed_rows_do_not_abort() {
        let text = "Time Value\n\
                    1.5 2.5\n\
                    garbage\n\
                    7.25\n\
                    ---------------\n\
                    3.5 4.5\n";
        let series = parse_xy_lines(text.lines()).unwrap();
        assert_eq!(series.points(), vec![(1.5, 2.5), (3.5, 4.5)]);
    }

    #[test]
    fn test_first_field_is_unsigned() {
        // The sign of the first column is not part of the match, so the
        // search picks up the digits after it.
        let text = "Step Value\n-1.50 2.50\n";
        let series = parse_xy_lines(text.lines()).unwrap();
        assert_eq!(series.points(), vec![(1.5, 2.5)]);
    }

    #[test]
    fn test_single_digit_fields_do_not_match() {
        // Each field needs at least two digits.
        let text = "Step Value\n1 2\n10 20\n";
        let series = parse_xy_lines(text.lines()).unwrap();
        assert_eq!(series.points(), vec![(10.0, 20.0)]);
    }

    #[test]
    fn test_parse_ac_rows() {
        let text = "Frequency (Hz)                Magnitude (dB)                Phase (degrees)\n\
                    ---------------------------------------------------------------------------\n\
                    10.000000000000               -3.010299956640               -45.000000000000\n\
                    100.000000000000              -20.043213737826              -84.289406862500\n";
        let series = parse_ac_lines(text.lines()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.freq, vec![10.0, 100.0]);
        assert!((series.magnitude[0] + 3.010299956640).abs() < 1e-12);
        assert!((series.phase[1] + 84.2894068625).abs() < 1e-12);
    }

    #[test]
    fn test_ac_needs_three_columns() {
        let text = "header\n10.0 0.5\n20.0 0.25 -12.0\n";
        let series = parse_ac_lines(text.lines()).unwrap();
        assert_eq!(series.freq, vec![20.0]);
        assert_eq!(series.phase_points(), vec![(20.0, -12.0)]);
        assert_eq!(series.magnitude_points(), vec![(20.0, 0.25)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_xy_lines("".lines()).unwrap().is_empty());
        assert!(parse_ac_lines("header only".lines()).unwrap().is_empty());
    }
}
