//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for reminders.
//! - Isolate SQLite query details from view-model orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Input validation belongs to the save flow, not the repository; a
//!   repository write persists exactly what it was handed.

pub mod reminder_repo;
