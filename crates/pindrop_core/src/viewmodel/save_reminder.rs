//! Save-reminder view-model.
//!
//! # Responsibility
//! - Hold the draft state for the reminder being composed, including the
//!   point selected on the map.
//! - Validate the draft and persist it in a single attempt.
//! - Expose snackbar / toast / navigation effects for the save screen.
//!
//! # Invariants
//! - Validation runs before any persistence call and checks title, then
//!   location.
//! - A save attempt publishes exactly one of: validation snackbar, storage
//!   snackbar, or saved-toast plus back navigation.
//! - A successful save clears the draft.

use crate::geo::PointOfInterest;
use crate::model::reminder::Reminder;
use crate::repo::reminder_repo::ReminderDataSource;
use crate::viewmodel::reminders_list::ReminderItem;
use crate::viewmodel::NavigationCommand;
use log::{info, warn};

const REMINDER_SAVED_TOAST: &str = "Reminder saved";

/// View-model backing the save-reminder and select-location screens.
pub struct SaveReminderViewModel<S: ReminderDataSource> {
    source: S,
    /// Draft title entered on the save screen.
    pub reminder_title: Option<String>,
    /// Draft description entered on the save screen.
    pub reminder_description: Option<String>,
    /// Point confirmed on the select-location screen.
    pub selected_location: Option<PointOfInterest>,
    snackbar: Option<String>,
    toast: Option<String>,
    navigation: Option<NavigationCommand>,
}

impl<S: ReminderDataSource> SaveReminderViewModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            reminder_title: None,
            reminder_description: None,
            selected_location: None,
            snackbar: None,
            toast: None,
            navigation: None,
        }
    }

    /// Records the point confirmed on the map.
    pub fn select_location(&mut self, poi: PointOfInterest) {
        self.selected_location = Some(poi);
    }

    /// Resets the draft so the next reminder starts clean.
    pub fn on_clear(&mut self) {
        self.reminder_title = None;
        self.reminder_description = None;
        self.selected_location = None;
    }

    /// Builds the candidate item from the current draft.
    pub fn draft_item(&self) -> ReminderItem {
        ReminderItem {
            id: uuid::Uuid::new_v4(),
            title: self.reminder_title.clone(),
            description: self.reminder_description.clone(),
            location: self
                .selected_location
                .as_ref()
                .map(|poi| poi.name.clone()),
            latitude: self.selected_location.as_ref().map(|poi| poi.latitude),
            longitude: self.selected_location.as_ref().map(|poi| poi.longitude),
        }
    }

    /// Validates the candidate and persists it in a single attempt.
    ///
    /// # Contract
    /// - Title is checked before location; a validation failure publishes the
    ///   field message and nothing is persisted.
    /// - On success: toast, back navigation, and the draft is cleared.
    /// - A storage failure publishes the error message; no retry.
    pub fn validate_and_save_reminder(&mut self, item: ReminderItem) {
        self.snackbar = None;
        self.toast = None;
        self.navigation = None;

        let reminder = Reminder::from(item);
        if let Err(err) = reminder.validate() {
            info!("event=reminder_save module=viewmodel status=rejected reason={err}");
            self.snackbar = Some(err.to_string());
            return;
        }

        match self.source.save_reminder(&reminder) {
            Ok(()) => {
                info!(
                    "event=reminder_save module=viewmodel status=ok id={}",
                    reminder.id
                );
                self.toast = Some(REMINDER_SAVED_TOAST.to_string());
                self.navigation = Some(NavigationCommand::Back);
                self.on_clear();
            }
            Err(err) => {
                warn!(
                    "event=reminder_save module=viewmodel status=error id={} error={err}",
                    reminder.id
                );
                self.snackbar = Some(err.to_string());
            }
        }
    }

    /// Pending snackbar message (validation or storage failure).
    pub fn show_snackbar(&self) -> Option<&str> {
        self.snackbar.as_deref()
    }

    /// Pending toast message (save confirmation).
    pub fn show_toast(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    /// Pending navigation command.
    pub fn navigation_command(&self) -> Option<NavigationCommand> {
        self.navigation
    }
}
