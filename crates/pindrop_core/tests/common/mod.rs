//! Shared in-memory test double for the reminder data source.
#![allow(dead_code)]

use pindrop_core::{Reminder, ReminderDataSource, SourceError, SourceResult};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory stand-in for the local repository.
///
/// Clones share the same backing store, so one test can drive a save
/// view-model and a list view-model against the same data.
#[derive(Clone, Default)]
pub struct FakeDataSource {
    items: Rc<RefCell<Vec<Reminder>>>,
    fail: Rc<Cell<bool>>,
}

impl FakeDataSource {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeds three reminders, mirroring typical fixture data.
    pub fn seeded() -> Self {
        let source = Self::default();
        for (index, (lat, lng)) in [(37.1, -122.2), (38.2, -100.3), (35.1, -120.1)]
            .into_iter()
            .enumerate()
        {
            let n = index + 1;
            source.items.borrow_mut().push(Reminder::new(
                Some(format!("Title {n}")),
                Some(format!("Description {n}")),
                Some(format!("Location {n}")),
                Some(lat),
                Some(lng),
            ));
        }
        source
    }

    /// Makes every subsequent operation fail with a storage error.
    pub fn set_return_error(&self) {
        self.fail.set(true);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    fn check_failure(&self) -> SourceResult<()> {
        if self.fail.get() {
            return Err(SourceError::Storage("Test exception".to_string()));
        }
        Ok(())
    }
}

impl ReminderDataSource for FakeDataSource {
    fn get_reminders(&self) -> SourceResult<Vec<Reminder>> {
        self.check_failure()?;
        Ok(self.items.borrow().clone())
    }

    fn get_reminder(&self, id: pindrop_core::ReminderId) -> SourceResult<Reminder> {
        self.check_failure()?;
        self.items
            .borrow()
            .iter()
            .find(|reminder| reminder.id == id)
            .cloned()
            .ok_or(SourceError::NotFound(id))
    }

    fn save_reminder(&self, reminder: &Reminder) -> SourceResult<()> {
        self.check_failure()?;
        let mut items = self.items.borrow_mut();
        if let Some(existing) = items.iter_mut().find(|entry| entry.id == reminder.id) {
            *existing = reminder.clone();
        } else {
            items.push(reminder.clone());
        }
        Ok(())
    }

    fn delete_all_reminders(&self) -> SourceResult<()> {
        self.check_failure()?;
        self.items.borrow_mut().clear();
        Ok(())
    }
}
