//! Output file discovery and classification.

use std::path::{Path, PathBuf};

use crate::analysis::{AnalysisKind, SweepType};
use crate::config::PlotConfig;
use crate::error::{PlotError, Result};

/// A simulator output file found in an input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// File name as listed in its directory.
    pub name: String,
    /// Full path used to read the file.
    pub path: PathBuf,
}

impl OutputFile {
    /// Create an output file entry from its directory and name.
    pub fn new(dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: dir.join(&name),
            name,
        }
    }
}

/// Output files grouped by analysis kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisBuckets {
    pub dc: Vec<OutputFile>,
    pub tran: Vec<OutputFile>,
    pub ac: Vec<OutputFile>,
}

impl AnalysisBuckets {
    /// Files of one analysis kind.
    pub fn files(&self, kind: AnalysisKind) -> &[OutputFile] {
        match kind {
            AnalysisKind::Dc => &self.dc,
            AnalysisKind::Tran => &self.tran,
            AnalysisKind::Ac => &self.ac,
        }
    }

    fn files_mut(&mut self, kind: AnalysisKind) -> &mut Vec<OutputFile> {
        match kind {
            AnalysisKind::Dc => &mut self.dc,
            AnalysisKind::Tran => &mut self.tran,
            AnalysisKind::Ac => &mut self.ac,
        }
    }

    /// True if no bucket holds a file.
    pub fn is_empty(&self) -> bool {
        self.dc.is_empty() && self.tran.is_empty() && self.ac.is_empty()
    }

    /// Kinds with at least one file, in plotting order.
    pub fn non_empty_kinds(&self) -> Vec<AnalysisKind> {
        AnalysisKind::PLOT_ORDER
            .into_iter()
            .filter(|&kind| !self.files(kind).is_empty())
            .collect()
    }
}

/// Files of `names` belonging to `kind`, in listing order.
///
/// The prefix may appear anywhere in the name.
pub fn select<S: AsRef<str>>(kind: AnalysisKind, dir: &Path, names: &[S]) -> Vec<OutputFile> {
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| name.contains(kind.prefix()))
        .map(|name| OutputFile::new(dir, name))
        .collect()
}

/// Partition one directory listing into the three buckets.
pub fn classify<S: AsRef<str>>(dir: &Path, names: &[S]) -> AnalysisBuckets {
    let mut buckets = AnalysisBuckets::default();
    for kind in AnalysisKind::PLOT_ORDER {
        *buckets.files_mut(kind) = select(kind, dir, names);
    }
    buckets
}

/// Sorted names of the regular files in `dir`.
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PlotError::io(dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PlotError::io(dir, e))?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Scan each configured input directory for its analysis kind's files.
pub fn discover(config: &PlotConfig) -> Result<AnalysisBuckets> {
    let mut buckets = AnalysisBuckets::default();
    for kind in AnalysisKind::PLOT_ORDER {
        let dir = config.input_dir(kind);
        let names = list_dir(dir)?;
        let files = select(kind, dir, &names);
        log::debug!("Found {} {} file(s) in {}", files.len(), kind, dir.display());
        *buckets.files_mut(kind) = files;
    }
    Ok(buckets)
}

/// Legend label for a file: the `_`-separated token at the kind's fixed index.
pub fn series_label(kind: AnalysisKind, file_name: &str) -> Result<String> {
    let index = kind.label_token_index();
    file_name
        .split('_')
        .nth(index)
        .map(str::to_string)
        .ok_or_else(|| PlotError::MissingLabel {
            file: file_name.to_string(),
            index,
        })
}

/// Sweep type declared by the first AC file naming one.
///
/// Within a single name `LIN` wins over `LOG`.
pub fn detect_sweep(ac_files: &[OutputFile]) -> Result<SweepType> {
    for file in ac_files {
        if file.name.contains("LIN") {
            return Ok(SweepType::Linear);
        } else if file.name.contains("LOG") {
            return Ok(SweepType::Logarithmic);
        }
    }
    Err(PlotError::UnknownSweepType)
}
