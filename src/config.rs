use crate::day::Day;
use crate::errors::Result;
use crate::models::GapRule;
use crate::storage::resolve_data_path;
use std::{env, path::PathBuf};

pub const TODAY_VAR: &str = "STREAKS_TODAY";
pub const LENIENT_GAPS_VAR: &str = "STREAKS_LENIENT_GAPS";

/// Settings for one invocation. Flags win over environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_path: PathBuf,
    pub today: Day,
    pub gap_rule: GapRule,
}

impl Settings {
    pub fn resolve(data_path: Option<PathBuf>, today: Option<Day>, lenient_gaps: bool) -> Result<Self> {
        let data_path = data_path.unwrap_or_else(resolve_data_path);

        let today = match today {
            Some(day) => day,
            None => match env::var(TODAY_VAR) {
                Ok(text) if !text.trim().is_empty() => text.parse()?,
                _ => Day::today(),
            },
        };

        let gap_rule = if lenient_gaps || env_flag(LENIENT_GAPS_VAR) {
            GapRule::AllowSingleDayGaps
        } else {
            GapRule::Consecutive
        };

        Ok(Self {
            data_path,
            today,
            gap_rule,
        })
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
