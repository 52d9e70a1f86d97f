//! Calendar Section Component
//!
//! Day grid plus the sidebar listing the selected day's tasks. Each cell
//! previews a few tasks and counts the rest.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use taskflow_core::{build_cells, tasks_on, CalendarDay, CellRing, DayCell, WeekStart};

use super::{priority_class, QuickStats};
use crate::components::Loading;
use crate::models::{Task, TaskStats};

fn cell_class(cell: &DayCell) -> String {
    let mut class = String::from("calendar-cell");
    if !cell.day.in_current_month {
        class.push_str(" outside");
    }
    match cell.ring() {
        Some(CellRing::Today) => class.push_str(" today"),
        Some(CellRing::Selected) => class.push_str(" selected"),
        None => {}
    }
    class
}

fn chip_class(task: &Task) -> String {
    let mut class = format!("task-chip {}", priority_class(task.priority));
    if task.is_completed {
        class.push_str(" done");
    }
    class
}

#[component]
pub fn CalendarSection(
    #[prop(into)] days: Signal<Vec<CalendarDay>>,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] stats: Signal<Option<TaskStats>>,
    selected: RwSignal<NaiveDate>,
    week_start: WeekStart,
    preview_limit: usize,
) -> impl IntoView {
    let cells = Memo::new(move |_| {
        let today = Local::now().date_naive();
        tasks.with(|tasks| {
            build_cells(&days.get(), preview_limit, today, selected.get(), |date| {
                tasks_on(tasks, date, &Local)
            })
        })
    });
    let selected_tasks = move || tasks.with(|tasks| tasks_on(tasks, selected.get(), &Local));

    view! {
        <div class="calendar-layout">
            <div class="calendar-grid card">
                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    // Day headers
                    <div class="day-names">
                        {week_start.day_names().iter().map(|name| view! {
                            <div class="day-name">{*name}</div>
                        }).collect_view()}
                    </div>

                    <div class="day-cells">
                        <For
                            each=move || cells.get()
                            key=|cell| cell.clone()
                            children=move |cell| {
                                let date = cell.day.date;
                                let more = cell.more_label();
                                view! {
                                    <div class=cell_class(&cell) on:click=move |_| selected.set(date)>
                                        <div class="cell-day">{date.format("%-d").to_string()}</div>
                                        <div class="cell-tasks">
                                            {cell.preview.iter().map(|task| view! {
                                                <div class=chip_class(task)>{task.title.clone()}</div>
                                            }).collect_view()}
                                            {more.map(|label| view! { <div class="cell-more">{label}</div> })}
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>

            <div class="calendar-sidebar">
                <div class="card">
                    <h3>{move || selected.get().format("%A, %B %-d, %Y").to_string()}</h3>
                    {move || {
                        let tasks = selected_tasks();
                        if tasks.is_empty() {
                            return view! {
                                <div class="no-tasks muted">"No tasks for this day"</div>
                            }.into_any();
                        }
                        tasks.into_iter().map(|task| {
                            let time = task.due_at(&Local).map(|due| due.format("%H:%M").to_string());
                            let class = format!(
                                "day-task {}{}",
                                priority_class(task.priority),
                                if task.is_completed { " done" } else { "" },
                            );
                            view! {
                                <div class=class>
                                    <div>
                                        <h4>{task.title.clone()}</h4>
                                        {time.map(|time| view! { <p class="day-task-time">{time}</p> })}
                                    </div>
                                    <span class="priority-label">{task.priority.label()}</span>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>

                <QuickStats stats=stats />
            </div>
        </div>
    }
}
