use crate::day::Day;
use crate::engine::{
    classify_status_on, current_streak_length_with, longest_streak_length, week_progress, year_grid,
};
use crate::models::{GapRule, StreakData, StreakDetail, StreakRecord, StreakSummary};

pub fn build_stats_at(today: Day, data: &StreakData, rule: GapRule) -> Vec<StreakSummary> {
    data.streaks
        .iter()
        .map(|record| summarize(record, today, rule))
        .collect()
}

pub fn build_detail_at(today: Day, record: &StreakRecord, year: i32, rule: GapRule) -> StreakDetail {
    StreakDetail {
        summary: summarize(record, today, rule),
        grid: year_grid(record, year, today),
    }
}

pub fn summarize(record: &StreakRecord, today: Day, rule: GapRule) -> StreakSummary {
    let status = classify_status_on(record, today);
    StreakSummary {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        emoji: record.emoji.clone(),
        status,
        status_label: status.label(),
        current_streak: current_streak_length_with(record, today, rule),
        longest_streak: longest_streak_length(record),
        total: record.count,
        week: week_progress(record, today),
        created_date: record.created_date,
        last_completed: record.last_completed,
    }
}
