use crate::day::Day;
use crate::errors::{AppError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeSet, fmt};
use unicode_segmentation::UnicodeSegmentation;

/// Glyph shown for streaks created without an emoji.
pub const DEFAULT_EMOJI: &str = "🔥";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub description: String,
    #[serde(default = "default_emoji", deserialize_with = "emoji_or_default")]
    pub emoji: String,
    #[serde(default)]
    pub count: u32,
    pub created_date: Day,
    #[serde(default)]
    pub last_completed: Option<Day>,
    #[serde(default)]
    pub completed_dates: BTreeSet<Day>,
}

impl StreakRecord {
    pub fn new(
        id: i64,
        name: &str,
        description: Option<&str>,
        emoji: Option<&str>,
        created: Day,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let emoji = match emoji.map(str::trim).filter(|glyph| !glyph.is_empty()) {
            Some(glyph) if is_single_grapheme(glyph) => glyph,
            Some(glyph) => return Err(AppError::InvalidEmoji(glyph.to_string())),
            None => DEFAULT_EMOJI,
        };

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.map(str::trim).unwrap_or_default().to_string(),
            emoji: emoji.to_string(),
            count: 0,
            created_date: created,
            last_completed: None,
            completed_dates: BTreeSet::new(),
        })
    }

    /// Re-derives `count` and `last_completed` from `completed_dates`.
    /// Returns true when the record needed repair.
    pub fn normalize(&mut self) -> bool {
        let count = u32::try_from(self.completed_dates.len()).unwrap_or(u32::MAX);
        let last = self.completed_dates.last().copied();
        let emoji_missing = !is_single_grapheme(&self.emoji);
        let repaired = self.count != count || self.last_completed != last || emoji_missing;

        self.count = count;
        self.last_completed = last;
        if emoji_missing {
            self.emoji = DEFAULT_EMOJI.to_string();
        }
        repaired
    }
}

/// Exactly one extended grapheme cluster, so ZWJ sequences and flags count as one.
pub fn is_single_grapheme(text: &str) -> bool {
    text.graphemes(true).count() == 1
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

fn emoji_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|glyph| is_single_grapheme(glyph))
        .unwrap_or_else(default_emoji))
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The persisted streak collection, stored as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreakData {
    pub streaks: Vec<StreakRecord>,
}

impl StreakData {
    /// Returns `candidate` unless it collides with or precedes an existing id.
    pub fn next_id(&self, candidate: i64) -> Result<i64> {
        match self.streaks.iter().map(|streak| streak.id).max() {
            Some(max) if candidate <= max => max.checked_add(1).ok_or(AppError::IdsExhausted),
            _ => Ok(candidate),
        }
    }

    pub fn add(&mut self, record: StreakRecord) -> &StreakRecord {
        self.streaks.push(record);
        &self.streaks[self.streaks.len() - 1]
    }

    pub fn get(&self, id: i64) -> Result<&StreakRecord> {
        self.streaks
            .iter()
            .find(|streak| streak.id == id)
            .ok_or(AppError::NotFound(id))
    }

    /// Replaces the record with `id` by `f(record)` and returns the new state.
    pub fn update<F>(&mut self, id: i64, f: F) -> Result<&StreakRecord>
    where
        F: FnOnce(&StreakRecord) -> StreakRecord,
    {
        let slot = self
            .streaks
            .iter_mut()
            .find(|streak| streak.id == id)
            .ok_or(AppError::NotFound(id))?;
        *slot = f(&*slot);
        Ok(&*slot)
    }

    pub fn remove(&mut self, id: i64) -> Result<StreakRecord> {
        let index = self
            .streaks
            .iter()
            .position(|streak| streak.id == id)
            .ok_or(AppError::NotFound(id))?;
        Ok(self.streaks.remove(index))
    }

    /// Normalizes every record; returns how many were repaired.
    pub fn normalize(&mut self) -> usize {
        self.streaks
            .iter_mut()
            .map(StreakRecord::normalize)
            .filter(|repaired| *repaired)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Completed,
    ReadyToStart,
    PendingToday,
    MissedYesterday,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed Today!",
            Status::ReadyToStart => "Ready to Start",
            Status::PendingToday => "Pending Today",
            Status::MissedYesterday => "Missed Yesterday",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the current-streak walk treats gaps after the first counted day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapRule {
    /// Each further day must immediately precede the previous one.
    #[default]
    Consecutive,
    /// Legacy behaviour: a single skipped day is tolerated at every step.
    AllowSingleDayGaps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekProgress {
    pub completed: u8,
    pub total: u8,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridCell {
    Empty,
    Future,
    Completed,
    Missed,
}

/// Month-by-day completion matrix; `months[m][d - 1]` is day `d` of month `m + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGrid {
    pub year: i32,
    pub months: [[GridCell; 31]; 12],
}

#[derive(Debug, Clone, Serialize)]
pub struct StreakSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub status: Status,
    pub status_label: &'static str,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total: u32,
    pub week: WeekProgress,
    pub created_date: Day,
    pub last_completed: Option<Day>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreakDetail {
    pub summary: StreakSummary,
    pub grid: YearGrid,
}
