//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the mobile shell via FRB.
//! - Keep error semantics simple for the UI: envelopes, not exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings and plain structs with stable meaning.

use pindrop_core::db::open_db;
use pindrop_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ListState, ReminderDataSource, ReminderItem, RemindersListViewModel, SaveReminderViewModel,
    SqliteReminderRepository,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const DB_FILE_NAME: &str = "pindrop.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Reminder row shape handed to the UI list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderView {
    /// Stable reminder ID in string form.
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// List response envelope for the reminders screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListResponse {
    /// Reminders in stable insertion order (empty on failure or no data).
    pub items: Vec<ReminderView>,
    /// Whether the screen should show the no-data view.
    pub no_data: bool,
    /// Error message for a transient snackbar; empty on success.
    pub message: String,
}

/// Generic action response envelope for save/clear flows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Saved reminder ID on success.
    pub reminder_id: Option<String>,
    /// Toast text on success; validation or storage message on failure.
    pub message: String,
}

impl ReminderActionResponse {
    fn success(message: impl Into<String>, reminder_id: Option<String>) -> Self {
        Self {
            ok: true,
            reminder_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            reminder_id: None,
            message: message.into(),
        }
    }
}

/// Loads all reminders for the list screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Failure is reported in `message` with an empty item list.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_list() -> ReminderListResponse {
    let db_path = resolve_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            return ReminderListResponse {
                items: Vec::new(),
                no_data: false,
                message: format!("reminder_list failed: {err}"),
            };
        }
    };
    let repo = match SqliteReminderRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            return ReminderListResponse {
                items: Vec::new(),
                no_data: false,
                message: format!("reminder_list failed: {err}"),
            };
        }
    };

    let mut view_model = RemindersListViewModel::new(repo);
    view_model.load_reminders();

    match view_model.state() {
        ListState::Loaded(items) => ReminderListResponse {
            items: items.iter().cloned().map(to_reminder_view).collect(),
            no_data: false,
            message: String::new(),
        },
        ListState::Empty => ReminderListResponse {
            items: Vec::new(),
            no_data: true,
            message: String::new(),
        },
        ListState::Failed(message) => ReminderListResponse {
            items: Vec::new(),
            no_data: false,
            message: message.clone(),
        },
        // load_reminders always settles into a terminal state.
        ListState::Idle | ListState::Loading => ReminderListResponse {
            items: Vec::new(),
            no_data: false,
            message: String::new(),
        },
    }
}

/// Validates and saves one reminder from the save screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Validation failures come back as `ok=false` with the field message;
///   nothing is persisted in that case.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_save(
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ReminderActionResponse {
    let db_path = resolve_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => return ReminderActionResponse::failure(format!("reminder_save failed: {err}")),
    };
    let repo = match SqliteReminderRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => return ReminderActionResponse::failure(format!("reminder_save failed: {err}")),
    };

    let item = ReminderItem {
        id: Uuid::new_v4(),
        title,
        description,
        location,
        latitude,
        longitude,
    };
    let saved_id = item.id;

    let mut view_model = SaveReminderViewModel::new(repo);
    view_model.validate_and_save_reminder(item);

    if let Some(toast) = view_model.show_toast() {
        ReminderActionResponse::success(toast, Some(saved_id.to_string()))
    } else {
        ReminderActionResponse::failure(
            view_model
                .show_snackbar()
                .unwrap_or("reminder_save failed")
                .to_string(),
        )
    }
}

/// Removes every stored reminder. Used by sign-out and reset flows.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_clear_all() -> ReminderActionResponse {
    let db_path = resolve_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            return ReminderActionResponse::failure(format!("reminder_clear_all failed: {err}"))
        }
    };
    let repo = match SqliteReminderRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            return ReminderActionResponse::failure(format!("reminder_clear_all failed: {err}"))
        }
    };

    match repo.delete_all_reminders() {
        Ok(()) => ReminderActionResponse::success("All reminders cleared.", None),
        Err(err) => ReminderActionResponse::failure(format!("reminder_clear_all failed: {err}")),
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("PINDROP_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn to_reminder_view(item: ReminderItem) -> ReminderView {
    ReminderView {
        id: item.id.to_string(),
        title: item.title,
        description: item.description,
        location: item.location,
        latitude: item.latitude,
        longitude: item.longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, reminder_clear_all, reminder_list, reminder_save,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn save_without_title_is_rejected_in_envelope() {
        let response = reminder_save(None, None, Some("somewhere".to_string()), None, None);
        assert!(!response.ok);
        assert_eq!(response.message, "enter a title");
        assert_eq!(response.reminder_id, None);
    }

    #[test]
    fn save_without_location_is_rejected_in_envelope() {
        let response = reminder_save(Some("title".to_string()), None, None, None, None);
        assert!(!response.ok);
        assert_eq!(response.message, "select a location");
    }

    #[test]
    fn save_list_clear_roundtrip() {
        let cleared = reminder_clear_all();
        assert!(cleared.ok, "{}", cleared.message);

        let saved = reminder_save(
            Some("water the plants".to_string()),
            Some("balcony pots".to_string()),
            Some("Home".to_string()),
            Some(52.52),
            Some(13.405),
        );
        assert!(saved.ok, "{}", saved.message);
        let saved_id = saved.reminder_id.expect("saved reminder should have an id");

        let listed = reminder_list();
        assert!(listed.message.is_empty(), "{}", listed.message);
        assert!(!listed.no_data);
        assert!(listed.items.iter().any(|item| item.id == saved_id));

        let cleared = reminder_clear_all();
        assert!(cleared.ok, "{}", cleared.message);
        let listed = reminder_list();
        assert!(listed.no_data);
        assert!(listed.items.is_empty());
    }
}
