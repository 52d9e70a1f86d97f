//! Calendar Cells
//!
//! Day grids for the month and week views, and the projection of tasks onto
//! day cells. Cells only trim what is rendered; the task data is untouched.

use chrono::{Datelike, Duration, Months, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Tasks previewed per cell before collapsing into "+n more"
pub const PREVIEW_LIMIT: usize = 2;

const MONTH_GRID_CELLS: i64 = 42;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Short day names in display order
    pub fn day_names(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    fn offset_of(&self, date: NaiveDate) -> i64 {
        let weekday = date.weekday();
        let days = match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        };
        i64::from(days)
    }
}

/// One day slot in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date - Duration::days(week_start.offset_of(date))
}

/// Six full weeks covering the month of `focus`
pub fn month_days(focus: NaiveDate, week_start: WeekStart) -> Vec<CalendarDay> {
    let first = focus.with_day(1).unwrap_or(focus);
    let grid_start = start_of_week(first, week_start);
    (0..MONTH_GRID_CELLS)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            CalendarDay {
                date,
                in_current_month: date.month() == focus.month() && date.year() == focus.year(),
            }
        })
        .collect()
}

/// The week containing `focus`
pub fn week_days(focus: NaiveDate, week_start: WeekStart) -> Vec<CalendarDay> {
    let start = start_of_week(focus, week_start);
    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            CalendarDay {
                date,
                in_current_month: date.month() == focus.month() && date.year() == focus.year(),
            }
        })
        .collect()
}

/// Move by whole months, clamping the day to the target month's length
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

pub fn shift_week(date: NaiveDate, delta: i32) -> NaiveDate {
    date + Duration::weeks(i64::from(delta))
}

/// Tasks due on `date` in `tz`, in their original order
pub fn tasks_on<Tz: TimeZone>(tasks: &[Task], date: NaiveDate, tz: &Tz) -> Vec<Task> {
    tasks.iter().filter(|task| task.is_due_on(date, tz)).cloned().collect()
}

/// Highlight ring drawn around a cell; today wins over selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRing {
    Today,
    Selected,
}

/// Rendered view of one day
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub day: CalendarDay,
    pub preview: Vec<Task>,
    pub total: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell {
    pub fn hidden_count(&self) -> usize {
        self.total.saturating_sub(self.preview.len())
    }

    /// `+{n} more` when tasks were left out of the preview
    pub fn more_label(&self) -> Option<String> {
        match self.hidden_count() {
            0 => None,
            n => Some(format!("+{} more", n)),
        }
    }

    pub fn ring(&self) -> Option<CellRing> {
        if self.is_today {
            Some(CellRing::Today)
        } else if self.is_selected {
            Some(CellRing::Selected)
        } else {
            None
        }
    }
}

/// Project tasks onto each day through `tasks_for_date`, previewing at most
/// `limit` per cell.
pub fn build_cells<F>(
    days: &[CalendarDay],
    limit: usize,
    today: NaiveDate,
    selected: NaiveDate,
    mut tasks_for_date: F,
) -> Vec<DayCell>
where
    F: FnMut(NaiveDate) -> Vec<Task>,
{
    days.iter()
        .map(|day| {
            let mut tasks = tasks_for_date(day.date);
            let total = tasks.len();
            tasks.truncate(limit);
            DayCell {
                day: *day,
                preview: tasks,
                total,
                is_today: day.date == today,
                is_selected: day.date == selected,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn due(id: u64, at: &str) -> Task {
        Task {
            due_date: Some(at.into()),
            ..Task::new(id, format!("Task {}", id))
        }
    }

    #[test]
    fn test_month_grid_sunday_start() {
        // May 2024 starts on a Wednesday
        let days = month_days(date(2024, 5, 15), WeekStart::Sunday);
        assert_eq!(days.len(), 42);
        assert_eq!(days[0].date, date(2024, 4, 28));
        assert!(!days[0].in_current_month);
        assert_eq!(days[3].date, date(2024, 5, 1));
        assert!(days[3].in_current_month);
        assert_eq!(days.iter().filter(|d| d.in_current_month).count(), 31);
    }

    #[test]
    fn test_month_grid_monday_start() {
        let days = month_days(date(2024, 5, 15), WeekStart::Monday);
        assert_eq!(days[0].date, date(2024, 4, 29));
        assert_eq!(days[0].date.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_days() {
        let days = week_days(date(2024, 5, 1), WeekStart::Sunday);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(2024, 4, 28));
        assert_eq!(days[6].date, date(2024, 5, 4));
        assert!(!days[0].in_current_month);
    }

    #[test]
    fn test_week_across_new_year() {
        let days = week_days(date(2025, 1, 1), WeekStart::Sunday);
        assert_eq!(days[0].date, date(2024, 12, 29));
        assert!(days[..3].iter().all(|d| !d.in_current_month));
        assert!(days[3..].iter().all(|d| d.in_current_month));
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 15));
        assert_eq!(shift_week(date(2024, 5, 1), -1), date(2024, 4, 24));
    }

    #[test]
    fn test_four_tasks_preview_two_and_count_rest() {
        let day = date(2024, 5, 1);
        let tasks: Vec<Task> = (1..=4).map(|id| due(id, "2024-05-01T10:00:00")).collect();
        let cells = build_cells(
            &[CalendarDay { date: day, in_current_month: true }],
            PREVIEW_LIMIT,
            date(2024, 5, 2),
            day,
            |d| tasks_on(&tasks, d, &Utc),
        );

        let cell = &cells[0];
        let titles: Vec<&str> = cell.preview.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Task 1", "Task 2"]);
        assert_eq!(cell.more_label().as_deref(), Some("+2 more"));
        assert_eq!(tasks.len(), 4);
    }

    #[test]
    fn test_no_more_label_within_limit() {
        let day = date(2024, 5, 1);
        let tasks = vec![due(1, "2024-05-01T10:00:00"), due(2, "2024-05-02T10:00:00")];
        let cells = build_cells(
            &[CalendarDay { date: day, in_current_month: true }],
            PREVIEW_LIMIT,
            day,
            day,
            |d| tasks_on(&tasks, d, &Utc),
        );
        assert_eq!(cells[0].total, 1);
        assert_eq!(cells[0].more_label(), None);
    }

    #[test]
    fn test_today_ring_wins_over_selected() {
        let day = date(2024, 5, 1);
        let days = [
            CalendarDay { date: day, in_current_month: true },
            CalendarDay { date: date(2024, 5, 2), in_current_month: true },
        ];
        let cells = build_cells(&days, PREVIEW_LIMIT, day, day, |_| Vec::new());
        assert!(cells[0].is_today && cells[0].is_selected);
        assert_eq!(cells[0].ring(), Some(CellRing::Today));
        assert_eq!(cells[1].ring(), None);

        let cells = build_cells(&days, PREVIEW_LIMIT, day, date(2024, 5, 2), |_| Vec::new());
        assert_eq!(cells[1].ring(), Some(CellRing::Selected));
    }

    #[test]
    fn test_day_names_follow_week_start() {
        assert_eq!(WeekStart::Sunday.day_names()[0], "Sun");
        assert_eq!(WeekStart::Monday.day_names()[6], "Sun");
    }
}
