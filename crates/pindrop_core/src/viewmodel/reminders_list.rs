//! Reminders list view-model.
//!
//! # Responsibility
//! - Load all reminders through the data source and project them into
//!   display items.
//! - Expose loading / empty / error state for the list screen.
//!
//! # Invariants
//! - State transitions: `Idle -> Loading -> {Loaded, Empty, Failed}`.
//! - `Loaded` never carries an empty list; an empty result is `Empty`.
//! - Loading is reported false in every terminal state.

use crate::model::reminder::{Reminder, ReminderId};
use crate::repo::reminder_repo::ReminderDataSource;
use log::{info, warn};

/// Display projection of a reminder for the list and save screens.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderItem {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Reminder> for ReminderItem {
    fn from(value: Reminder) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

impl From<ReminderItem> for Reminder {
    fn from(value: ReminderItem) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Observable state of the reminders list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Nothing requested yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// Load succeeded with at least one item.
    Loaded(Vec<ReminderItem>),
    /// Load succeeded with no items; the screen shows the no-data view.
    Empty,
    /// Load failed; the message renders as a transient snackbar.
    Failed(String),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Empty-state flag the screen binds to.
    pub fn show_no_data(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn items(&self) -> &[ReminderItem] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Error message to surface, if the last load failed.
    pub fn snackbar_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// View-model backing the reminders list screen.
pub struct RemindersListViewModel<S: ReminderDataSource> {
    source: S,
    state: ListState,
}

impl<S: ReminderDataSource> RemindersListViewModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ListState::Idle,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Loads all reminders and settles into a terminal state.
    pub fn load_reminders(&mut self) {
        self.state = ListState::Loading;

        self.state = match self.source.get_reminders() {
            Ok(reminders) if reminders.is_empty() => {
                info!("event=reminders_load module=viewmodel status=ok count=0");
                ListState::Empty
            }
            Ok(reminders) => {
                info!(
                    "event=reminders_load module=viewmodel status=ok count={}",
                    reminders.len()
                );
                ListState::Loaded(reminders.into_iter().map(ReminderItem::from).collect())
            }
            Err(err) => {
                warn!("event=reminders_load module=viewmodel status=error error={err}");
                ListState::Failed(err.to_string())
            }
        };
    }
}
