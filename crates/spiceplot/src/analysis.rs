//! Analysis kinds and AC sweep types.

use serde::Serialize;

/// The kind of simulation an output file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AnalysisKind {
    /// DC sweep.
    Dc,
    /// Transient analysis.
    Tran,
    /// AC small-signal analysis.
    Ac,
}

impl AnalysisKind {
    /// All kinds, in the order figures are plotted.
    pub const PLOT_ORDER: [AnalysisKind; 3] = [AnalysisKind::Ac, AnalysisKind::Tran, AnalysisKind::Dc];

    /// Substring that marks a file as output of this analysis.
    pub fn prefix(self) -> &'static str {
        match self {
            AnalysisKind::Dc => "dc_sweep_analysis_",
            AnalysisKind::Tran => "tr_analysis_",
            AnalysisKind::Ac => "ac_analysis_",
        }
    }

    /// Name of the per-analysis directory under the plots directory.
    pub fn dir_name(self) -> &'static str {
        match self {
            AnalysisKind::Dc => "DC",
            AnalysisKind::Tran => "TRAN",
            AnalysisKind::Ac => "AC",
        }
    }

    /// Suffix appended to the figure number in the image file name.
    pub fn figure_suffix(self) -> &'static str {
        match self {
            AnalysisKind::Dc => "_DC_Sweep_Analysis",
            AnalysisKind::Tran => "_Transient_Analysis",
            AnalysisKind::Ac => "_AC_Analysis",
        }
    }

    /// Figure title.
    pub fn title(self) -> &'static str {
        match self {
            AnalysisKind::Dc => "DC Sweep Analysis",
            AnalysisKind::Tran => "Transient Analysis",
            AnalysisKind::Ac => "AC Analysis",
        }
    }

    /// Position of the legend label among the `_`-separated file name tokens.
    ///
    /// DC files carry the swept source before the node, so the label sits
    /// one token later than for TRAN and AC.
    pub fn label_token_index(self) -> usize {
        match self {
            AnalysisKind::Dc => 3,
            AnalysisKind::Tran | AnalysisKind::Ac => 2,
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Frequency spacing of an AC analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SweepType {
    /// Linear frequency spacing (`LIN`).
    Linear,
    /// Logarithmic frequency spacing (`LOG`).
    Logarithmic,
}

impl SweepType {
    /// Y-axis label of the magnitude panel.
    pub fn magnitude_label(self) -> &'static str {
        match self {
            SweepType::Linear => "Magnitude (V)",
            SweepType::Logarithmic => "Magnitude (dB)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_index_asymmetry() {
        assert_eq!(AnalysisKind::Dc.label_token_index(), 3);
        assert_eq!(AnalysisKind::Tran.label_token_index(), 2);
        assert_eq!(AnalysisKind::Ac.label_token_index(), 2);
    }

    #[test]
    fn test_plot_order() {
        assert_eq!(
            AnalysisKind::PLOT_ORDER,
            [AnalysisKind::Ac, AnalysisKind::Tran, AnalysisKind::Dc]
        );
    }
}
