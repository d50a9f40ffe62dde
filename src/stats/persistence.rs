//! Stats persistence (load/save to disk).

use super::types::GameStats;
use crate::constants::{DATA_DIR_NAME, STATS_FILE_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory holding the stats file and logs (~/.pegsol).
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Get the stats save file path (~/.pegsol/stats.json).
pub fn stats_save_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(STATS_FILE_NAME))
}

/// Load stats from disk, or return default if not found.
pub fn load_stats() -> GameStats {
    match stats_save_path() {
        Ok(path) => load_stats_from(&path),
        Err(_) => GameStats::default(),
    }
}

/// Where a corrupt stats file is moved aside (stats.json -> stats.json.bak).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

/// Load stats from `path`. Missing or unreadable files yield defaults.
///
/// A file that exists but does not parse is renamed to its backup path
/// first, so the next save cannot overwrite it.
pub fn load_stats_from(path: &Path) -> GameStats {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return GameStats::default(),
    };

    match serde_json::from_str(&json) {
        Ok(stats) => stats,
        Err(e) => {
            let backup = backup_path(path);
            match fs::rename(path, &backup) {
                Ok(()) => tracing::warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "corrupt stats file moved aside"
                ),
                Err(rename_err) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    rename_error = %rename_err,
                    "corrupt stats file could not be moved aside"
                ),
            }
            GameStats::default()
        }
    }
}

/// Save stats to disk.
pub fn save_stats(stats: &GameStats) -> io::Result<()> {
    save_stats_to(stats, &stats_save_path()?)
}

/// Save stats to `path`, creating parent directories as needed.
pub fn save_stats_to(stats: &GameStats, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(stats)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "stats saved");
    Ok(())
}
