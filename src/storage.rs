use crate::errors::Result;
use crate::models::StreakData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{debug, error, warn};

pub const DATA_PATH_VAR: &str = "STREAKS_DATA_PATH";

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var(DATA_PATH_VAR) {
        return PathBuf::from(path);
    }

    PathBuf::from("data/streaks.json")
}

/// Loads the collection. Missing or corrupt files degrade to an empty collection.
pub async fn load_data(path: &Path) -> StreakData {
    let mut data = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<StreakData>(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                StreakData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no data file at {}, starting empty", path.display());
            StreakData::default()
        }
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            StreakData::default()
        }
    };

    let repaired = data.normalize();
    if repaired > 0 {
        warn!("repaired {repaired} inconsistent streak record(s) from {}", path.display());
    }
    data
}

pub async fn persist_data(path: &Path, data: &StreakData) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    debug!("saved {} streak(s) to {}", data.streaks.len(), path.display());
    Ok(())
}
