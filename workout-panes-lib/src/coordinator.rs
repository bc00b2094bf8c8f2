// src/coordinator.rs
//! Decides which panels are mounted for the current layout and carries the
//! selected detail across single-pane / dual-pane switches.
//!
//! Panels cannot move between containers, so any change in pane count is a
//! full teardown followed by a rebuild. Teardown and rebuild both go through
//! `Host::commit_now`, which never lets two panels claim one slot.

use crate::host::{Host, PresentationMode, Slot, Transaction};
use crate::panel::{DetailPanel, ListPanel, Panel, PanelKind, SelectionEvent};
use crate::store::SharedStore;

/// Bound to the detail slot when the store is empty; the detail panel then
/// renders nothing.
pub const FALLBACK_RECORD_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Uninitialized,
    SinglePaneActive,
    DualPaneActive,
}

impl From<PresentationMode> for CoordinatorState {
    fn from(mode: PresentationMode) -> Self {
        match mode {
            PresentationMode::SinglePane => CoordinatorState::SinglePaneActive,
            PresentationMode::DualPane => CoordinatorState::DualPaneActive,
        }
    }
}

/// Inputs for one activation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub fresh_start: bool,
    pub mode: PresentationMode,
}

impl Activation {
    /// First activation of the process; mode read from the host.
    pub fn fresh<H: Host + ?Sized>(host: &H) -> Self {
        Self {
            fresh_start: true,
            mode: PresentationMode::detect(host),
        }
    }

    /// Re-activation after a layout change.
    pub fn recreated<H: Host + ?Sized>(host: &H) -> Self {
        Self {
            fresh_start: false,
            mode: PresentationMode::detect(host),
        }
    }
}

pub struct LayoutCoordinator {
    store: SharedStore,
    state: CoordinatorState,
}

impl LayoutCoordinator {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            state: CoordinatorState::Uninitialized,
        }
    }

    pub const fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn activate<H: Host + ?Sized>(&mut self, host: &mut H, activation: Activation) {
        let Activation { fresh_start, mode } = activation;
        tracing::info!(fresh_start, %mode, state = ?self.state, "activating layout");

        match (self.state, fresh_start) {
            (CoordinatorState::Uninitialized, true) => self.mount_initial(host, mode),
            // Fresh start on an initialized coordinator or recreation before
            // any activation: the registry is the source of truth either way.
            _ => match mode {
                PresentationMode::DualPane => self.rebuild_dual_pane(host),
                PresentationMode::SinglePane => self.reconcile_single_pane(host),
            },
        }
        self.state = mode.into();
    }

    /// Routes a list selection to the detail slot for the current state.
    pub fn on_select<H: Host + ?Sized>(&mut self, host: &mut H, event: SelectionEvent) {
        let detail = self.detail_panel(event.record_id);
        match self.state {
            CoordinatorState::DualPaneActive => {
                tracing::info!(record_id = event.record_id, "selection shown in secondary slot");
                host.commit(Transaction::new().replace(Slot::Secondary, detail));
            }
            CoordinatorState::SinglePaneActive => {
                tracing::info!(record_id = event.record_id, "selection shown in primary slot");
                host.commit(
                    Transaction::new()
                        .replace(Slot::Primary, detail)
                        .add_to_history(),
                );
            }
            CoordinatorState::Uninitialized => {
                tracing::warn!(record_id = event.record_id, "selection before activation ignored");
            }
        }
    }

    /// Back navigation. False when there was nothing to go back to.
    pub fn on_back<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        let popped = host.pop_history();
        tracing::debug!(popped, depth = host.history_depth(), "back navigation");
        popped
    }

    /// The ListPanel currently mounted, if any. The creation dialog reaches
    /// the store through it.
    pub fn list_panel<'h, H: Host + ?Sized>(&self, host: &'h H) -> Option<&'h ListPanel> {
        [Slot::Primary, Slot::Secondary]
            .into_iter()
            .filter_map(|slot| host.panel_in(slot))
            .find_map(|m| m.panel.as_list())
    }

    fn first_record_id(&self) -> i64 {
        self.store.borrow().first_id().unwrap_or(FALLBACK_RECORD_ID)
    }

    fn list(&self) -> Panel {
        Panel::List(ListPanel::new(self.store.clone()))
    }

    fn detail_panel(&self, record_id: i64) -> Panel {
        Panel::Detail(DetailPanel::new(record_id, self.store.clone()))
    }

    fn mount_initial<H: Host + ?Sized>(&self, host: &mut H, mode: PresentationMode) {
        host.commit(Transaction::new().replace(Slot::Primary, self.list()));
        if mode == PresentationMode::DualPane {
            let detail = self.detail_panel(self.first_record_id());
            host.commit(Transaction::new().replace(Slot::Secondary, detail));
        }
    }

    fn rebuild_dual_pane<H: Host + ?Sized>(&self, host: &mut H) {
        self.teardown(host);
        host.commit_now(Transaction::new().replace(Slot::Primary, self.list()));
        let detail = self.detail_panel(self.first_record_id());
        host.commit_now(Transaction::new().replace(Slot::Secondary, detail));
    }

    fn reconcile_single_pane<H: Host + ?Sized>(&self, host: &mut H) {
        host.execute_pending();

        let detail_id = [Slot::Secondary, Slot::Primary]
            .into_iter()
            .filter_map(|slot| host.panel_in(slot))
            .find_map(|m| m.panel.bound_record_id());
        let primary_kind = host.panel_in(Slot::Primary).map(|m| m.kind());

        let replacement = match (detail_id, primary_kind) {
            // A detail that already fills the primary slot, e.g. reached by
            // selection, stays put with its history.
            (Some(_), Some(PanelKind::Detail))
                if host.panel_in(Slot::Secondary).is_none() =>
            {
                tracing::debug!("detail already in primary slot, kept");
                return;
            }
            (Some(id), _) => self.detail_panel(id),
            (None, Some(PanelKind::List)) if host.panel_in(Slot::Secondary).is_none() => {
                tracing::debug!("list already in primary slot, kept");
                return;
            }
            (None, _) => self.list(),
        };

        self.teardown(host);
        host.commit_now(Transaction::new().replace(Slot::Primary, replacement));
    }

    /// Unmounts every registered panel, one synchronous transaction each.
    fn teardown<H: Host + ?Sized>(&self, host: &mut H) {
        host.execute_pending();
        let ids: Vec<_> = host.mounted().iter().map(|m| m.id).collect();
        for id in ids {
            host.commit_now(Transaction::new().remove(id));
        }
        // History entries point at panels that no longer exist.
        host.clear_history();
    }
}
