//! Opening saved figures in an image viewer.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{PlotError, Result};

/// Command that opens `path` with the desktop's default application.
pub fn viewer_command(path: &Path) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command.arg(path);
    command
}

/// Open every figure and wait for each viewer launch to finish.
///
/// `viewer` replaces the platform default when given. Stops at the first
/// figure that could not be opened.
pub fn show(paths: &[PathBuf], viewer: Option<&Path>) -> Result<()> {
    for path in paths {
        let mut command = match viewer {
            Some(program) => {
                let mut command = Command::new(program);
                command.arg(path);
                command
            }
            None => viewer_command(path),
        };
        let status = command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| PlotError::Viewer {
                path: path.clone(),
                message: e.to_string(),
            })?;
        if !status.success() {
            return Err(PlotError::Viewer {
                path: path.clone(),
                message: format!("viewer exited with {}", status),
            });
        }
        log::debug!("Opened {}", path.display());
    }
    Ok(())
}
