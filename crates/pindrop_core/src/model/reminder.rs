//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record shared by list/save flows.
//! - Enforce the save-time validation policy for user input.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - Text and coordinate fields stay optional until the save flow validates
//!   them; a persisted reminder may still carry `None` coordinates.
//! - Validation checks title before location, always in that order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a reminder.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = Uuid;

/// Canonical record pairing text content with a geographic point.
///
/// All payload fields are optional: drafts flow through the save view-model
/// before validation, and the storage schema mirrors this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable global ID used for lookups and geofence registration mapping.
    pub id: ReminderId,
    /// Short user-facing title shown in the list and the notification.
    pub title: Option<String>,
    /// Longer free-form body.
    pub description: Option<String>,
    /// Human-readable label of the selected place.
    pub location: Option<String>,
    /// Latitude of the selected point, decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude of the selected point, decimal degrees.
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a reminder with a generated stable ID.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            title,
            description,
            location,
            latitude,
            longitude,
        )
    }

    /// Creates a reminder with a caller-provided stable ID.
    ///
    /// Used by persistence read paths and upsert flows where identity
    /// already exists.
    pub fn with_id(
        id: ReminderId,
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }

    /// Checks the save-time input policy.
    ///
    /// # Contract
    /// - Title is checked first, then location.
    /// - Empty strings count as missing, matching the entry form behavior.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.title.as_deref().is_none_or(str::is_empty) {
            return Err(ReminderValidationError::MissingTitle);
        }
        if self.location.as_deref().is_none_or(str::is_empty) {
            return Err(ReminderValidationError::MissingLocation);
        }
        Ok(())
    }
}

/// Save-flow validation failure with a field-specific user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Title is absent or empty.
    MissingTitle,
    /// Location label is absent or empty.
    MissingLocation,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "enter a title"),
            Self::MissingLocation => write!(f, "select a location"),
        }
    }
}

impl Error for ReminderValidationError {}

#[cfg(test)]
mod tests {
    use super::{Reminder, ReminderValidationError};

    fn full_reminder() -> Reminder {
        Reminder::new(
            Some("water the plants".to_string()),
            Some("balcony pots".to_string()),
            Some("Home".to_string()),
            Some(52.52),
            Some(13.405),
        )
    }

    #[test]
    fn valid_reminder_passes() {
        assert!(full_reminder().validate().is_ok());
    }

    #[test]
    fn missing_title_is_checked_before_location() {
        let mut reminder = full_reminder();
        reminder.title = None;
        reminder.location = None;
        assert_eq!(
            reminder.validate(),
            Err(ReminderValidationError::MissingTitle)
        );
    }

    #[test]
    fn empty_title_counts_as_missing() {
        let mut reminder = full_reminder();
        reminder.title = Some(String::new());
        assert_eq!(
            reminder.validate(),
            Err(ReminderValidationError::MissingTitle)
        );
    }

    #[test]
    fn missing_location_is_reported_when_title_present() {
        let mut reminder = full_reminder();
        reminder.location = Some(String::new());
        assert_eq!(
            reminder.validate(),
            Err(ReminderValidationError::MissingLocation)
        );
    }

    #[test]
    fn coordinates_are_not_part_of_the_policy() {
        let mut reminder = full_reminder();
        reminder.latitude = None;
        reminder.longitude = None;
        assert!(reminder.validate().is_ok());
    }

    #[test]
    fn reminder_serializes_to_stable_json_shape() {
        let reminder = full_reminder();
        let json = serde_json::to_value(&reminder).expect("reminder should serialize");
        assert!(json["id"].is_string());
        assert_eq!(json["title"], "water the plants");
        assert_eq!(json["location"], "Home");
        assert_eq!(json["latitude"], 52.52);
    }

    #[test]
    fn validation_messages_match_user_strings() {
        assert_eq!(
            ReminderValidationError::MissingTitle.to_string(),
            "enter a title"
        );
        assert_eq!(
            ReminderValidationError::MissingLocation.to_string(),
            "select a location"
        );
    }
}
