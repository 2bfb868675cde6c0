//! Evenly spaced x-axis ticks for linear AC sweeps.

/// Manual tick placement for a linear frequency axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTicks {
    /// Tick positions, first to last frequency inclusive.
    pub ticks: Vec<i64>,
    /// Left axis limit.
    pub start: i64,
    /// Right axis limit.
    pub end: i64,
}

/// Compute ticks from a frequency column.
///
/// Frequencies are truncated to integers. Returns `None`, leaving the axis
/// automatic, when more than two frequencies truncate to zero, when fewer
/// than two points exist, when the last two points are not increasing, or
/// when the first frequency is not below the last.
pub fn linear_ticks(freqs: &[f64]) -> Option<LinearTicks> {
    let freqs: Vec<i64> = freqs.iter().map(|&f| f.trunc() as i64).collect();

    if freqs.iter().filter(|&&f| f == 0).count() > 2 {
        return None;
    }

    let &[.., prev, end] = freqs.as_slice() else {
        return None;
    };
    let start = freqs[0];
    let step = end - prev;
    if step <= 0 || start >= end {
        return None;
    }

    let mut ticks: Vec<i64> = (start..end).step_by(step as usize).collect();
    if !ticks.contains(&end) {
        ticks.push(end);
    }

    Some(LinearTicks { ticks, start, end })
}

impl LinearTicks {
    /// Tick positions as axis values.
    pub fn positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|&t| t as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_grid_includes_endpoints() {
        let freqs = [10.0, 20.0, 30.0, 40.0, 50.0];
        let ticks = linear_ticks(&freqs).unwrap();
        assert_eq!(ticks.ticks, vec![10, 20, 30, 40, 50]);
        assert_eq!((ticks.start, ticks.end), (10, 50));
    }

    #[test]
    fn test_step_from_last_two_points() {
        // Step comes from the final gap, not the first.
        let freqs = [100.0, 101.0, 250.0, 400.0, 550.0, 700.0];
        let ticks = linear_ticks(&freqs).unwrap();
        assert_eq!(ticks.ticks, vec![100, 250, 400, 550, 700]);
    }

    #[test]
    fn test_end_appended_when_off_grid() {
        let freqs = [1.0, 4.0, 8.0, 11.0];
        let ticks = linear_ticks(&freqs).unwrap();
        assert_eq!(ticks.ticks, vec![1, 4, 7, 10, 11]);
        assert_eq!(ticks.ticks.first(), Some(&1));
        assert_eq!(ticks.ticks.last(), Some(&11));
    }

    #[test]
    fn test_fractional_frequencies_truncate() {
        let freqs = [1.9, 2.5, 3.7];
        let ticks = linear_ticks(&freqs).unwrap();
        assert_eq!(ticks.ticks, vec![1, 2, 3]);
        assert_eq!(ticks.positions(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_too_many_zeros_skips_customization() {
        let freqs = [0.1, 0.2, 0.3, 0.4];
        assert!(linear_ticks(&freqs).is_none());

        // Two zeros are still accepted.
        let freqs = [0.1, 0.5, 1.0, 2.0];
        let ticks = linear_ticks(&freqs).unwrap();
        assert_eq!(ticks.ticks, vec![0, 1, 2]);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(linear_ticks(&[]).is_none());
        assert!(linear_ticks(&[10.0]).is_none());
        assert!(linear_ticks(&[10.0, 10.0]).is_none());
        assert!(linear_ticks(&[30.0, 20.0]).is_none());
    }

    #[test]
    fn test_first_above_last_stays_automatic() {
        // The final step is positive but the axis would run backwards.
        assert!(linear_ticks(&[100.0, 5.0, 10.0]).is_none());
        assert!(linear_ticks(&[10.0, 5.0, 10.0]).is_none());
    }
}
