//! Core domain logic for PinDrop, a location-based reminders app.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod db;
pub mod geo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod viewmodel;

pub use auth::{AuthenticationState, AuthenticationViewModel, IdentityProvider, SignInOutcome};
pub use geo::{poi_from_map_click, GeocodeError, PointOfInterest, ReverseGeocoder};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{Reminder, ReminderId, ReminderValidationError};
pub use repo::reminder_repo::{
    ReminderDataSource, SourceError, SourceResult, SqliteReminderRepository,
};
pub use viewmodel::reminders_list::{ListState, ReminderItem, RemindersListViewModel};
pub use viewmodel::save_reminder::SaveReminderViewModel;
pub use viewmodel::NavigationCommand;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
