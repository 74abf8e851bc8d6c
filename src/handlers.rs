use crate::engine::{complete_today, uncomplete_today};
use crate::errors::Result;
use crate::models::{StreakDetail, StreakRecord, StreakSummary};
use crate::state::AppState;
use crate::stats::{build_detail_at, build_stats_at, summarize};
use crate::storage::persist_data;
use crate::ui::render_report;
use chrono::Utc;
use std::path::Path;
use tokio::fs;
use tracing::info;

pub async fn add_streak(
    state: &mut AppState,
    name: &str,
    description: Option<&str>,
    emoji: Option<&str>,
) -> Result<StreakRecord> {
    let id = state.data.next_id(Utc::now().timestamp_millis())?;
    let record = StreakRecord::new(id, name, description, emoji, state.today)?;
    let created = state.data.add(record).clone();

    persist_data(&state.data_path, &state.data).await?;
    info!(id = created.id, name = %created.name, "streak created");
    Ok(created)
}

pub async fn complete_streak(state: &mut AppState, id: i64) -> Result<StreakSummary> {
    let today = state.today;
    let updated = state.data.update(id, |record| complete_today(record, today))?.clone();

    persist_data(&state.data_path, &state.data).await?;
    info!(id, %today, count = updated.count, "streak completed");
    Ok(summarize(&updated, today, state.gap_rule))
}

pub async fn uncomplete_streak(state: &mut AppState, id: i64) -> Result<StreakSummary> {
    let today = state.today;
    let updated = state.data.update(id, |record| uncomplete_today(record, today))?.clone();

    persist_data(&state.data_path, &state.data).await?;
    info!(id, %today, count = updated.count, "streak uncompleted");
    Ok(summarize(&updated, today, state.gap_rule))
}

pub async fn delete_streak(state: &mut AppState, id: i64) -> Result<StreakRecord> {
    let removed = state.data.remove(id)?;

    persist_data(&state.data_path, &state.data).await?;
    info!(id, name = %removed.name, "streak deleted");
    Ok(removed)
}

pub fn list_streaks(state: &AppState) -> Vec<StreakSummary> {
    build_stats_at(state.today, &state.data, state.gap_rule)
}

pub fn show_streak(state: &AppState, id: i64, year: Option<i32>) -> Result<StreakDetail> {
    let record = state.data.get(id)?;
    let year = year.unwrap_or_else(|| state.today.year());
    Ok(build_detail_at(state.today, record, year, state.gap_rule))
}

pub async fn write_report(state: &AppState, year: Option<i32>, output: &Path) -> Result<usize> {
    let year = year.unwrap_or_else(|| state.today.year());
    let details: Vec<StreakDetail> = state
        .data
        .streaks
        .iter()
        .map(|record| build_detail_at(state.today, record, year, state.gap_rule))
        .collect();

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(output, render_report(year, state.today, &details)).await?;
    info!(year, streaks = details.len(), path = %output.display(), "report written");
    Ok(details.len())
}
