//! View-model layer for the reminders screens.
//!
//! # Responsibility
//! - Orchestrate data-source calls for the list and save screens.
//! - Expose observable state the UI renders, instead of raw results.
//!
//! # Invariants
//! - View-models depend on the `ReminderDataSource` trait, never on SQLite.
//! - Every load/save attempt ends in a terminal state; loading never sticks.

pub mod reminders_list;
pub mod save_reminder;

/// Navigation side effect requested by a view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Pop back to the previous screen.
    Back,
}
