// src/dialog.rs
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::icons::{IconCatalog, IconDescriptor};
use crate::model::{Difficulty, WorkoutRecord};
use crate::panel::ListPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Name,
    Description,
    Duration,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Description is required")]
    MissingDescription,
    #[error("Duration is required")]
    MissingDuration,
}

impl ValidationError {
    pub const fn field(&self) -> DialogField {
        match self {
            ValidationError::MissingName => DialogField::Name,
            ValidationError::MissingDescription => DialogField::Description,
            ValidationError::MissingDuration => DialogField::Duration,
        }
    }
}

/// Form state for a new workout. Lives only while the dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationDialog {
    pub name: String,
    pub description: String,
    pub duration: String,
    difficulty: Difficulty,
    icon_index: Option<usize>, // None until the user touches the picker
    open: bool,
}

impl Default for CreationDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationDialog {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            duration: String::new(),
            difficulty: Difficulty::default(),
            icon_index: None,
            open: true,
        }
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Steps through the difficulty list, wrapping at either end.
    pub fn cycle_difficulty(&mut self, forward: bool) {
        let all: Vec<Difficulty> = Difficulty::iter().collect();
        let current = all.iter().position(|d| *d == self.difficulty).unwrap_or(0);
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.difficulty = all[next];
    }

    pub fn select_icon(&mut self, index: usize) {
        self.icon_index = Some(index);
    }

    pub fn cycle_icon(&mut self, forward: bool) {
        let count = IconCatalog::all().len();
        let current = self.icon_index.unwrap_or(0).min(count - 1);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.icon_index = Some(next);
    }

    pub fn selected_icon_index(&self) -> usize {
        self.icon_index
            .filter(|i| *i < IconCatalog::all().len())
            .unwrap_or(0)
    }

    /// The picked icon; the first catalog entry when nothing valid is picked.
    pub fn selected_icon(&self) -> IconDescriptor {
        let mut icons = IconCatalog::all();
        icons.swap_remove(self.selected_icon_index())
    }

    /// Checks name, description and duration in that order; the first empty
    /// field is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.duration.trim().is_empty() {
            return Err(ValidationError::MissingDuration);
        }
        Ok(())
    }

    /// Builds the record with an id from the list's store, appends it and
    /// closes the dialog. On a validation error the dialog stays open.
    pub fn submit(&mut self, list: &ListPanel) -> Result<WorkoutRecord, ValidationError> {
        self.validate()?;

        let record = WorkoutRecord::new(
            list.next_id(),
            self.name.trim(),
            self.description.trim(),
            self.duration.trim(),
            self.difficulty,
            self.selected_icon().icon_id,
        );
        list.add(record.clone());
        self.open = false;
        tracing::info!(id = record.id, name = %record.name, "workout created");
        Ok(record)
    }

    /// Cancel: drops everything typed so far without touching the store.
    pub fn dismiss(&mut self) {
        *self = Self {
            open: false,
            ..Self::new()
        };
    }
}
