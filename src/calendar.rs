use crate::datekey;
use crate::models::{DayCell, MonthGrid, TaskLedger};
use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Builds the grid for one displayed month: the weekday of day 1 (Sunday = 0)
/// gives the leading blank count, then one cell per day, flagged against
/// `today` and the ledger. `None` when year/month is not a real month.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    ledger: &TaskLedger,
) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading_blanks = first.weekday().num_days_from_sunday();
    let days = days_in_month(year, month)?;

    let mut cells = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let key = datekey::encode(date);
        let has_tasks = ledger.days.get(&key).is_some_and(|tasks| !tasks.is_empty());
        cells.push(DayCell {
            day,
            date: key,
            is_today: date == today,
            has_tasks,
        });
    }

    Some(MonthGrid {
        year,
        month,
        label: format!("{} {year}", MONTH_NAMES[month as usize - 1]),
        leading_blanks,
        cells,
    })
}

/// Day count via the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((first_of_next - first).num_days() as u32)
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::add_task;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn march_2024_has_five_leading_blanks_and_31_cells() {
        let grid = month_grid(2024, 3, fixed_today(), &TaskLedger::default()).unwrap();
        assert_eq!(grid.leading_blanks, 5);
        assert_eq!(grid.cells.len(), 31);
        assert_eq!(grid.label, "March 2024");
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
    }

    #[test]
    fn grid_marks_today_and_task_days() {
        let mut ledger = TaskLedger::default();
        add_task(&mut ledger, "2024-03-02", "tagged");

        let grid = month_grid(2024, 3, fixed_today(), &ledger).unwrap();
        assert!(grid.cells[1].has_tasks);
        assert!(!grid.cells[0].has_tasks);
        assert!(grid.cells[14].is_today);
        assert_eq!(grid.cells.iter().filter(|cell| cell.is_today).count(), 1);
        assert_eq!(grid.cells[1].date, "2024-03-02");
    }

    #[test]
    fn today_outside_displayed_month_marks_nothing() {
        let grid = month_grid(2024, 4, fixed_today(), &TaskLedger::default()).unwrap();
        assert!(grid.cells.iter().all(|cell| !cell.is_today));
    }

    #[test]
    fn month_arithmetic_rolls_over_at_year_boundaries() {
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(prev_month(2024, 7), (2024, 6));
        assert_eq!(next_month(2024, 7), (2024, 8));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(month_grid(2024, 0, fixed_today(), &TaskLedger::default()).is_none());
        assert!(month_grid(2024, 13, fixed_today(), &TaskLedger::default()).is_none());
    }
}
