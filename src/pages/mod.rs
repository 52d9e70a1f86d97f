//! Pages
//!
//! One component per top-level screen.

mod analytics_page;
mod calendar_page;
mod task_page;

pub use analytics_page::AnalyticsPage;
pub use calendar_page::CalendarPage;
pub use task_page::TaskPage;
