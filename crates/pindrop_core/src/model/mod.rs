//! Domain model for the reminders core.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one record shape shared by persistence and view-model layers.
//!
//! # Invariants
//! - Every reminder is identified by a stable `ReminderId`.
//! - Deletion only happens as a bulk clear; there is no per-row delete.

pub mod reminder;
