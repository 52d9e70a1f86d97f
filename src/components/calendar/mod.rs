//! Calendar Components
//!
//! Header with navigation, the day grid with its selected-day sidebar, and
//! the quick stats card.

mod calendar_section;
mod header_section;
mod quick_stats;

pub use calendar_section::CalendarSection;
pub use header_section::HeaderSection;
pub use quick_stats::QuickStats;

use taskflow_core::Priority;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

/// Colour class for task chips and sidebar entries
pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-high",
        Priority::Medium => "priority-medium",
        Priority::Low => "priority-low",
        Priority::Unset => "priority-unset",
    }
}
