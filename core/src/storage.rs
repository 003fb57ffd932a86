use std::path::Path;

use log::info;

use crate::error::{RepGraphError, Result};
use crate::json::parse_payload;
use crate::models::Preferences;

/// Read preferences from a JSON file.
/// A missing file yields the default preferences.
pub fn load_preferences(path: impl AsRef<Path>) -> Result<Preferences> {
    let path = path.as_ref();
    if !path.exists() {
        info!("no preferences at {}, using defaults", path.display());
        return Ok(Preferences::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| RepGraphError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let prefs: Preferences = parse_payload(&contents, "Preferences")?;
    info!(
        "preferences loaded from {} (weight_unit={})",
        path.display(),
        prefs.weight_unit
    );
    Ok(prefs)
}

/// Write preferences as pretty-printed JSON.
pub fn save_preferences(prefs: &Preferences, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, json).map_err(|source| RepGraphError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!(
        "preferences saved to {} (weight_unit={})",
        path.display(),
        prefs.weight_unit
    );
    Ok(())
}
