use std::path::PathBuf;
use anyhow::Result;

/// Returns the application data directory.
/// Uses `dirs::data_dir()` + "parrot" (e.g., %APPDATA%/parrot or ~/.local/share/parrot).
/// Creates the directory if it doesn't exist.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    let path = base.join("parrot");

    if !path.exists() {
        std::fs::create_dir_all(&path)?;
    }

    Ok(path)
}

/// `.env` next to the user config, if one exists.
pub fn env_file() -> Option<PathBuf> {
    get_data_dir()
        .ok()
        .map(|dir| dir.join(".env"))
        .filter(|path| path.exists())
}
