// src/panel.rs
use std::fmt;

use crate::icons::{IconCatalog, IconDescriptor};
use crate::model::WorkoutRecord;
use crate::store::SharedStore;

/// Emitted by a ListPanel when the user picks a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    pub record_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub record_id: i64,
    pub name: String,
    pub icon: IconDescriptor,
}

/// Master panel: shows every record in the store.
#[derive(Debug, Clone)]
pub struct ListPanel {
    store: SharedStore,
    seen_revision: Option<u64>,
}

impl ListPanel {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            seen_revision: None,
        }
    }

    pub fn rows(&self) -> Vec<ListRow> {
        self.store
            .borrow()
            .records()
            .iter()
            .map(|r| ListRow {
                record_id: r.id,
                name: r.name.clone(),
                icon: IconCatalog::find_by_id(&r.icon_id),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Translates a click on row `index` into a selection event.
    pub fn select_at(&self, index: usize) -> Option<SelectionEvent> {
        self.store
            .borrow()
            .records()
            .get(index)
            .map(|r| SelectionEvent { record_id: r.id })
    }

    /// Returns true once per store change. The first call after mounting
    /// always reports a refresh.
    pub fn take_refresh(&mut self) -> bool {
        let current = self.store.borrow().revision();
        if self.seen_revision == Some(current) {
            return false;
        }
        self.seen_revision = Some(current);
        true
    }

    pub fn next_id(&self) -> i64 {
        self.store.borrow().next_id()
    }

    pub fn add(&self, record: WorkoutRecord) {
        self.store.borrow_mut().add(record);
    }
}

/// Lines a DetailPanel draws for its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub icon: IconDescriptor,
    pub name: String,
    pub description: String,
    pub duration_line: String,
    pub difficulty_line: String,
}

/// Detail panel, bound to one record id for its whole life.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    record_id: i64,
    store: SharedStore,
}

impl DetailPanel {
    pub fn new(record_id: i64, store: SharedStore) -> Self {
        Self { record_id, store }
    }

    pub const fn record_id(&self) -> i64 {
        self.record_id
    }

    pub fn record(&self) -> Option<WorkoutRecord> {
        self.store.borrow().find_by_id(self.record_id).cloned()
    }

    /// `None` when the bound id is not in the store; callers draw nothing.
    pub fn view(&self) -> Option<DetailView> {
        self.record().map(|r| DetailView {
            icon: IconCatalog::find_by_id(&r.icon_id),
            duration_line: format!("Duration: {}", r.duration),
            difficulty_line: format!("Difficulty: {}", r.difficulty),
            name: r.name,
            description: r.description,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    List,
    Detail,
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelKind::List => write!(f, "list"),
            PanelKind::Detail => write!(f, "detail"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Panel {
    List(ListPanel),
    Detail(DetailPanel),
}

impl Panel {
    pub const fn kind(&self) -> PanelKind {
        match self {
            Panel::List(_) => PanelKind::List,
            Panel::Detail(_) => PanelKind::Detail,
        }
    }

    pub fn as_list(&self) -> Option<&ListPanel> {
        match self {
            Panel::List(list) => Some(list),
            Panel::Detail(_) => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListPanel> {
        match self {
            Panel::List(list) => Some(list),
            Panel::Detail(_) => None,
        }
    }

    pub fn as_detail(&self) -> Option<&DetailPanel> {
        match self {
            Panel::Detail(detail) => Some(detail),
            Panel::List(_) => None,
        }
    }

    /// Record id for detail panels, `None` for lists.
    pub fn bound_record_id(&self) -> Option<i64> {
        self.as_detail().map(DetailPanel::record_id)
    }
}
