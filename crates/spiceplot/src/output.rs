//! Figure directories and file numbering.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::analysis::AnalysisKind;
use crate::classify::AnalysisBuckets;
use crate::config::PlotConfig;
use crate::error::{PlotError, Result};

/// Output directory per analysis kind that has files to plot.
#[derive(Debug, Clone, Default)]
pub struct PathRegistry {
    dirs: BTreeMap<AnalysisKind, PathBuf>,
    created: bool,
}

impl PathRegistry {
    /// Output directory of a kind, if it has files.
    pub fn get(&self, kind: AnalysisKind) -> Option<&Path> {
        self.dirs.get(&kind).map(PathBuf::as_path)
    }

    /// True if preparing the registry created at least one directory.
    pub fn created_any(&self) -> bool {
        self.created
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Ensure an output directory exists for every non-empty bucket.
pub fn prepare_paths(config: &PlotConfig, buckets: &AnalysisBuckets) -> Result<PathRegistry> {
    let mut registry = PathRegistry::default();
    for kind in buckets.non_empty_kinds() {
        let dir = config.output_dir(kind);
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| PlotError::io(&dir, e))?;
            log::debug!("Created {}", dir.display());
            registry.created = true;
        }
        registry.dirs.insert(kind, dir);
    }
    Ok(registry)
}

/// One more than the number of `.png` files already in `dir`.
///
/// Numbering is recounted on every call; deleted files leave the count
/// short, so a number can be reused.
pub fn next_figure_number(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| PlotError::io(dir, e))?;
    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| PlotError::io(dir, e))?;
        if entry.file_name().to_string_lossy().ends_with(".png") {
            count += 1;
        }
    }
    Ok(count + 1)
}

/// `<dir>/<number><suffix>.png`.
pub fn figure_path(dir: &Path, number: usize, kind: AnalysisKind) -> PathBuf {
    dir.join(format!("{}{}.png", number, kind.figure_suffix()))
}
