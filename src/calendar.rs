//! Calendar Grid
//!
//! Gregorian month grids with weeks starting on Monday. Days outside the
//! month are `0`.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

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

/// One week, Monday through Sunday
pub type Week = [u32; 7];

/// A single month of the grid
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: u32,
    pub name: &'static str,
    pub weeks: Vec<Week>,
}

/// All twelve months of a year
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarGrid {
    pub year: i32,
    pub months: Vec<MonthGrid>,
}

impl CalendarGrid {
    /// Build the grid for a year, `None` if the year is out of range
    pub fn for_year(year: i32) -> Option<Self> {
        let months = (1..=12)
            .map(|month| month_grid(year, month))
            .collect::<Option<Vec<_>>>()?;

        Some(Self { year, months })
    }

    /// Grid for the year containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        // Any date chrono can represent has a representable year
        Self::for_year(date.year()).unwrap_or(Self {
            year: date.year(),
            months: Vec::new(),
        })
    }
}

/// Weeks of one month, `None` for an invalid year/month
pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = days_in_month(year, month)?;
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week: Week = [0; 7];
    let mut slot = offset;

    for day in 1..=days {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    Some(MonthGrid {
        month,
        name: MONTH_NAMES[(month - 1) as usize],
        weeks,
    })
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    next.pred_opt().map(|d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_february_2024() {
        let feb = month_grid(2024, 2).unwrap();
        assert_eq!(feb.name, "February");
        assert_eq!(feb.weeks.len(), 5);
        // Feb 1 2024 is a Thursday
        assert_eq!(feb.weeks[0], [0, 0, 0, 1, 2, 3, 4]);
        assert_eq!(feb.weeks[4], [26, 27, 28, 29, 0, 0, 0]);
    }

    #[test]
    fn test_full_year_order() {
        let grid = CalendarGrid::for_year(2024).unwrap();
        assert_eq!(grid.months.len(), 12);

        let names: Vec<&str> = grid.months.iter().map(|m| m.name).collect();
        assert_eq!(names, MONTH_NAMES.to_vec());

        let week_counts: Vec<usize> = grid.months.iter().map(|m| m.weeks.len()).collect();
        assert_eq!(week_counts, vec![5, 5, 5, 5, 5, 5, 5, 5, 6, 5, 5, 6]);
    }

    #[test]
    fn test_february_spanning_four_weeks() {
        // Feb 2021 starts on a Monday and has 28 days
        let feb = month_grid(2021, 2).unwrap();
        assert_eq!(feb.weeks.len(), 4);
        assert_eq!(feb.weeks[0], [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_every_day_appears_once() {
        let grid = CalendarGrid::for_year(2023).unwrap();
        let days: usize = grid
            .months
            .iter()
            .flat_map(|m| m.weeks.iter())
            .flat_map(|w| w.iter())
            .filter(|d| **d > 0)
            .count();
        assert_eq!(days, 365);
    }

    #[test]
    fn test_containing_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(CalendarGrid::containing(date).year, 2026);
    }

    #[test]
    fn test_invalid_month() {
        assert!(month_grid(2024, 13).is_none());
    }
}
