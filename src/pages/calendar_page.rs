//! Calendar Page
//!
//! Month or week grid of tasks by due date.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use taskflow_core::{month_days, shift_month, shift_week, week_days, CalendarDay};

use crate::components::calendar::{CalendarSection, HeaderSection, ViewMode};
use crate::components::{Modal, TaskForm};
use crate::context::use_app_context;
use crate::models::Task;
use crate::store::{store_calendar_loading, store_calendar_tasks, store_stats, use_task_store};
use crate::tasks::use_tasks;

/// First and last date shown
fn visible_range(days: &[CalendarDay]) -> Option<(NaiveDate, NaiveDate)> {
    Some((days.first()?.date, days.last()?.date))
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let ui = use_app_context().config().ui;
    let tasks = use_tasks();
    let store = use_task_store();

    let today = Local::now().date_naive();
    let focus = RwSignal::new(today);
    let selected = RwSignal::new(today);
    let mode = RwSignal::new(ViewMode::Month);
    let add_open = RwSignal::new(false);
    let week_start = ui.week_starts_on;

    let days = Memo::new(move |_| match mode.get() {
        ViewMode::Month => month_days(focus.get(), week_start),
        ViewMode::Week => week_days(focus.get(), week_start),
    });

    // Fetch whatever range is on screen
    Effect::new(move |_| {
        if let Some((from, to)) = days.with(|days| visible_range(days)) {
            tasks.load_calendar(from, to, false);
        }
    });
    Effect::new(move |_| tasks.refresh_stats());

    let navigate = move |delta: i32| {
        focus.update(|date| {
            *date = match mode.get_untracked() {
                ViewMode::Month => shift_month(*date, delta),
                ViewMode::Week => shift_week(*date, delta),
            }
        });
    };

    view! {
        <div class="calendar-page">
            <HeaderSection
                focus=focus
                mode=mode
                on_navigate=navigate
                on_add=move || add_open.set(true)
            />
            <CalendarSection
                days=days
                tasks=Signal::derive(move || store_calendar_tasks(&store))
                loading=Signal::derive(move || store_calendar_loading(&store))
                stats=Signal::derive(move || store_stats(&store))
                selected=selected
                week_start=week_start
                preview_limit=ui.calendar_preview_limit
            />
            <Modal open=add_open title="Add Task">
                <TaskForm on_added=move |_: Task| add_open.set(false) />
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::WeekStart;

    #[test]
    fn test_visible_range_spans_grid() {
        let focus = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let days = month_days(focus, WeekStart::Sunday);
        let (from, to) = visible_range(&days).unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 4, 28).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 6, 8).unwrap());
        assert_eq!(visible_range(&[]), None);
    }
}
