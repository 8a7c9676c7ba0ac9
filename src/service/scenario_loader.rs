use crate::error::GateError;
use crate::types::scenario::Scenario;
use std::{fs, path::Path};
use tracing::{info, warn};

/// Load scenario JSON files from a directory. Each file holds one array of
/// scenarios; unreadable or unparsable files are skipped with a warning.
pub fn load_from_dir(dir: &Path) -> Result<Vec<Scenario>, GateError> {
    if !dir.exists() {
        info!(path = %dir.display(), "scenario directory not found; skipping load");
        return Ok(Vec::new());
    }

    let loaded: Vec<Scenario> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                let err: GateError = e.into();
                warn!(error = %err, "failed to read scenario dir entry");
                None
            }
        })
        .filter(|path| is_json_file(path))
        .filter_map(|path| {
            load_file(&path)
                .inspect_err(|e| {
                    warn!(path = %path.display(), error = %e, "failed to load scenario file");
                })
                .ok()
        })
        .flatten()
        .collect();

    Ok(loaded)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        == Some(true)
}

fn load_file(path: &Path) -> Result<Vec<Scenario>, GateError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
