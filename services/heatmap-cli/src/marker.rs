//! Process-wide identification marker.
//!
//! Written once at startup so external tooling can tell which project
//! produced the state directory. Not functionally significant; failures
//! are ignored.

use std::path::Path;

use tracing::debug;

/// Identification value for this renderer.
pub const PROJECT_MARKER: &str = "temperature-heatmap: Monthly Global Land-Surface Temperature";

/// Best-effort write of the marker file into the state directory.
pub fn write_project_marker(state_dir: &Path) {
    let write = || -> std::io::Result<()> {
        std::fs::create_dir_all(state_dir)?;
        std::fs::write(state_dir.join("project-marker"), PROJECT_MARKER)
    };

    if let Err(err) = write() {
        debug!(error = %err, path = %state_dir.display(), "Could not write project marker");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_written() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = dir.path().join("state");

        write_project_marker(&state_dir);

        let content = std::fs::read_to_string(state_dir.join("project-marker")).unwrap();
        assert_eq!(content, PROJECT_MARKER);
    }

    #[test]
    fn test_marker_failure_is_ignored() {
        // A file where the directory should be makes creation fail
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "x").unwrap();

        write_project_marker(&blocker.join("state"));
    }
}
