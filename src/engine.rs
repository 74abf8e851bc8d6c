//! Streak math over a single record.
//!
//! Every function here is pure: "today" is always passed in, nothing is cached
//! between calls, and no input a well-formed [`StreakRecord`] can hold makes
//! any of them fail.

use crate::day::Day;
use crate::models::{GapRule, GridCell, Status, StreakRecord, WeekProgress, YearGrid};

const DAYS_PER_WEEK: u8 = 7;

/// Marks `today` as done. Completing an already completed day is a no-op.
pub fn complete_today(record: &StreakRecord, today: Day) -> StreakRecord {
    if record.last_completed == Some(today) {
        return record.clone();
    }

    let mut next = record.clone();
    next.completed_dates.insert(today);
    next.normalize();
    next
}

/// Retracts today's completion. Earlier days are never edited.
pub fn uncomplete_today(record: &StreakRecord, today: Day) -> StreakRecord {
    if record.last_completed != Some(today) {
        return record.clone();
    }

    let mut next = record.clone();
    next.completed_dates.remove(&today);
    next.normalize();
    next
}

pub fn classify_status(record: &StreakRecord, today: Day, yesterday: Day) -> Status {
    if record.last_completed == Some(today) {
        Status::Completed
    } else if record.count == 0 {
        Status::ReadyToStart
    } else if record.last_completed == Some(yesterday) {
        Status::PendingToday
    } else {
        Status::MissedYesterday
    }
}

pub fn classify_status_on(record: &StreakRecord, today: Day) -> Status {
    classify_status(record, today, today.pred())
}

pub fn current_streak_length(record: &StreakRecord, today: Day) -> u32 {
    current_streak_length_with(record, today, GapRule::Consecutive)
}

/// Walks completions newest first. The first counted day may be today or
/// yesterday; what may follow depends on `rule`.
pub fn current_streak_length_with(record: &StreakRecord, today: Day, rule: GapRule) -> u32 {
    let mut cursor = today;
    let mut length = 0u32;

    for &day in record.completed_dates.iter().rev() {
        let gap = cursor.days_since(day);
        let accepted = match rule {
            GapRule::Consecutive if length > 0 => gap == 0,
            _ => gap == 0 || gap == 1,
        };
        if !accepted {
            break;
        }
        length += 1;
        cursor = day.pred();
    }

    length
}

pub fn longest_streak_length(record: &StreakRecord) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<Day> = None;

    for &day in &record.completed_dates {
        run = match previous {
            Some(prev) if day.days_since(prev) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

/// Completions in the Sunday-to-Saturday week containing `today`.
pub fn week_progress(record: &StreakRecord, today: Day) -> WeekProgress {
    let start = today.week_start();
    let completed = (0..i64::from(DAYS_PER_WEEK))
        .filter(|offset| record.completed_dates.contains(&start.add_days(*offset)))
        .count() as u8;
    let percentage = (f64::from(completed) * 100.0 / f64::from(DAYS_PER_WEEK)).round() as u8;

    WeekProgress {
        completed,
        total: DAYS_PER_WEEK,
        percentage,
    }
}

pub fn year_grid(record: &StreakRecord, year: i32, today: Day) -> YearGrid {
    let mut months = [[GridCell::Empty; 31]; 12];

    for (month_index, row) in months.iter_mut().enumerate() {
        for (day_index, cell) in row.iter_mut().enumerate() {
            let Some(day) = Day::from_ymd(year, month_index as u32 + 1, day_index as u32 + 1) else {
                continue;
            };
            *cell = if day > today {
                GridCell::Future
            } else if record.completed_dates.contains(&day) {
                GridCell::Completed
            } else {
                GridCell::Missed
            };
        }
    }

    YearGrid { year, months }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::from_ymd(y, m, d).unwrap()
    }

    fn record_with(dates: &[Day]) -> StreakRecord {
        let mut record = StreakRecord::new(1, "Read", None, None, day(2024, 1, 1)).unwrap();
        record.completed_dates = dates.iter().copied().collect();
        record.normalize();
        record
    }

    #[test]
    fn complete_today_is_idempotent() {
        let today = day(2024, 1, 5);
        let record = record_with(&[day(2024, 1, 4)]);

        let once = complete_today(&record, today);
        assert_eq!(once.count, 2);
        assert_eq!(once.last_completed, Some(today));
        assert!(once.completed_dates.contains(&today));

        let twice = complete_today(&once, today);
        assert_eq!(twice, once);
    }

    #[test]
    fn uncomplete_restores_previous_state() {
        let today = day(2024, 1, 5);
        let record = record_with(&[day(2024, 1, 1), day(2024, 1, 3)]);

        let undone = uncomplete_today(&complete_today(&record, today), today);
        assert_eq!(undone, record);
        assert_eq!(undone.last_completed, Some(day(2024, 1, 3)));
    }

    #[test]
    fn uncomplete_only_touches_today() {
        let record = record_with(&[day(2024, 1, 4)]);
        let unchanged = uncomplete_today(&record, day(2024, 1, 5));
        assert_eq!(unchanged, record);
    }

    #[test]
    fn uncomplete_last_completion_clears_last_completed() {
        let today = day(2024, 1, 5);
        let record = complete_today(&record_with(&[]), today);
        let undone = uncomplete_today(&record, today);
        assert_eq!(undone.count, 0);
        assert_eq!(undone.last_completed, None);
        assert!(undone.completed_dates.is_empty());
    }

    #[test]
    fn status_decision_order() {
        let today = day(2024, 1, 5);
        let yesterday = today.pred();

        assert_eq!(classify_status(&record_with(&[]), today, yesterday), Status::ReadyToStart);
        assert_eq!(
            classify_status(&record_with(&[today]), today, yesterday),
            Status::Completed
        );
        assert_eq!(
            classify_status(&record_with(&[yesterday]), today, yesterday),
            Status::PendingToday
        );
        assert_eq!(
            classify_status(&record_with(&[day(2024, 1, 2)]), today, yesterday),
            Status::MissedYesterday
        );
    }

    #[test]
    fn zero_count_is_ready_even_with_stale_last_completed() {
        let mut record = record_with(&[]);
        record.last_completed = Some(day(2023, 6, 1));
        assert_eq!(classify_status_on(&record, day(2024, 1, 5)), Status::ReadyToStart);
    }

    #[test]
    fn read_habit_scenario() {
        let created = day(2024, 1, 1);
        let record = StreakRecord::new(7, "  Read  ", None, None, created).unwrap();
        assert_eq!(record.name, "Read");
        assert_eq!(record.count, 0);
        assert_eq!(classify_status_on(&record, created), Status::ReadyToStart);

        let record = complete_today(&record, created);
        assert_eq!(record.count, 1);
        assert_eq!(classify_status_on(&record, created), Status::Completed);
        assert_eq!(current_streak_length(&record, created), 1);

        let third = day(2024, 1, 3);
        assert_eq!(classify_status_on(&record, third), Status::MissedYesterday);
    }

    #[test]
    fn current_streak_counts_consecutive_days() {
        let today = day(2024, 1, 10);
        let record = record_with(&[today, today.pred(), today.pred().pred()]);
        assert_eq!(current_streak_length(&record, today), 3);
    }

    #[test]
    fn current_streak_stops_at_gap() {
        let today = day(2024, 1, 10);
        let record = record_with(&[today, today.add_days(-2)]);
        assert_eq!(current_streak_length(&record, today), 1);
    }

    #[test]
    fn current_streak_alive_from_yesterday() {
        let today = day(2024, 1, 10);
        let record = record_with(&[today.add_days(-1), today.add_days(-2)]);
        assert_eq!(current_streak_length(&record, today), 2);
        assert_eq!(current_streak_length(&record, today.succ()), 0);
    }

    #[test]
    fn lenient_rule_tolerates_single_skipped_days() {
        let today = day(2024, 1, 10);
        let record = record_with(&[today, today.add_days(-2), today.add_days(-4), today.add_days(-7)]);
        assert_eq!(
            current_streak_length_with(&record, today, GapRule::AllowSingleDayGaps),
            3
        );
        assert_eq!(current_streak_length(&record, today), 1);
    }

    #[test]
    fn future_completion_stops_current_streak() {
        let today = day(2024, 1, 10);
        let record = record_with(&[today.add_days(3), today]);
        assert_eq!(current_streak_length(&record, today), 0);
        assert_eq!(
            current_streak_length_with(&record, today, GapRule::AllowSingleDayGaps),
            0
        );
    }

    #[test]
    fn completing_before_a_future_completion_keeps_the_latest_day() {
        let today = day(2024, 1, 5);
        let record = record_with(&[day(2024, 1, 10)]);

        let next = complete_today(&record, today);
        assert_eq!(next.count, 2);
        assert!(next.completed_dates.contains(&today));
        assert_eq!(next.last_completed, Some(day(2024, 1, 10)));
        assert_eq!(classify_status_on(&next, today), Status::MissedYesterday);

        // today is not the latest completion, so it cannot be retracted.
        assert_eq!(uncomplete_today(&next, today), next);
    }

    #[test]
    fn current_streak_of_empty_record_is_zero() {
        assert_eq!(current_streak_length(&record_with(&[]), day(2024, 1, 1)), 0);
    }

    #[test]
    fn longest_streak_finds_best_run() {
        let record = record_with(&[day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3), day(2024, 1, 10)]);
        assert_eq!(longest_streak_length(&record), 3);
        assert_eq!(longest_streak_length(&record_with(&[day(2024, 5, 5)])), 1);
        assert_eq!(longest_streak_length(&record_with(&[])), 0);
    }

    #[test]
    fn longest_streak_spans_month_end() {
        let record = record_with(&[day(2024, 2, 28), day(2024, 2, 29), day(2024, 3, 1)]);
        assert_eq!(longest_streak_length(&record), 3);
    }

    #[test]
    fn week_progress_rounds_percentage() {
        // Week of Sunday 2024-01-07 .. Saturday 2024-01-13.
        let today = day(2024, 1, 12);
        let record = record_with(&[
            day(2024, 1, 6),
            day(2024, 1, 7),
            day(2024, 1, 8),
            day(2024, 1, 9),
            day(2024, 1, 11),
            day(2024, 1, 12),
            day(2024, 1, 14),
        ]);
        assert_eq!(
            week_progress(&record, today),
            WeekProgress {
                completed: 5,
                total: 7,
                percentage: 71,
            }
        );
    }

    #[test]
    fn year_grid_classifies_cells() {
        let today = day(2024, 3, 15);
        let record = record_with(&[day(2024, 1, 1), day(2024, 3, 15)]);
        let grid = year_grid(&record, 2024, today);

        assert_eq!(grid.months[0][0], GridCell::Completed);
        assert_eq!(grid.months[0][1], GridCell::Missed);
        assert_eq!(grid.months[1][28], GridCell::Missed);
        assert_eq!(grid.months[1][29], GridCell::Empty);
        assert_eq!(grid.months[3][30], GridCell::Empty);
        assert_eq!(grid.months[2][14], GridCell::Completed);
        assert_eq!(grid.months[2][15], GridCell::Future);
    }

    #[test]
    fn year_grid_february_follows_leap_years() {
        let record = record_with(&[]);
        let today = day(2030, 1, 1);
        assert_eq!(year_grid(&record, 2023, today).months[1][28], GridCell::Empty);
        assert_eq!(year_grid(&record, 2000, today).months[1][28], GridCell::Missed);
        assert_eq!(year_grid(&record, 1900, today).months[1][28], GridCell::Empty);
    }

    #[test]
    fn year_grid_completed_cells_match_completions() {
        let today = day(2024, 12, 31);
        let dates = [day(2024, 2, 29), day(2024, 7, 4), day(2024, 12, 31), day(2023, 7, 4)];
        let record = record_with(&dates);
        let grid = year_grid(&record, 2024, today);

        let completed = grid
            .months
            .iter()
            .flatten()
            .filter(|cell| **cell == GridCell::Completed)
            .count();
        assert_eq!(completed, 3);
    }
}
