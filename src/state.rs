use crate::config::Settings;
use crate::day::Day;
use crate::models::{GapRule, StreakData};
use crate::storage::load_data;
use std::path::PathBuf;

/// The loaded collection plus the context every engine call needs.
pub struct AppState {
    pub data_path: PathBuf,
    pub today: Day,
    pub gap_rule: GapRule,
    pub data: StreakData,
}

impl AppState {
    pub fn new(settings: Settings, data: StreakData) -> Self {
        Self {
            data_path: settings.data_path,
            today: settings.today,
            gap_rule: settings.gap_rule,
            data,
        }
    }

    pub async fn load(settings: Settings) -> Self {
        let data = load_data(&settings.data_path).await;
        Self::new(settings, data)
    }
}
