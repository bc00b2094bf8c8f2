// workout-panes-tui/src/app/layout.rs
use super::state::App;
use workout_panes_lib::{Activation, Host, PanelKind, PresentationMode, Slot};

// Per-frame housekeeping and the layout events the coordinator reacts to
impl App {
    pub fn tick(&mut self) {
        self.clear_expired_error();
        self.host.execute_pending();
        self.refresh_list_rows();
    }

    /// A resize that crosses the dual-pane threshold recreates the layout,
    /// the same way a rotation would.
    pub fn handle_resize(&mut self, width: u16) {
        let mode = self.service.mode_for_width(width);
        if mode == self.mode {
            return;
        }
        tracing::info!(width, from = %self.mode, to = %mode, "resize changed presentation mode");
        self.host.reconfigure(mode);
        let activation = Activation::recreated(&self.host);
        self.coordinator.activate(&mut self.host, activation);
        self.mode = mode;
    }

    /// Sends the highlighted row to the coordinator as a selection.
    pub fn select_highlighted(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let event = self
            .coordinator
            .list_panel(&self.host)
            .and_then(|list| list.select_at(index));
        if let Some(event) = event {
            self.coordinator.on_select(&mut self.host, event);
        }
    }

    pub fn go_back(&mut self) {
        if self.coordinator.on_back(&mut self.host) {
            return;
        }
        // A detail restored by a rotation has no history behind it
        if self.mode == PresentationMode::SinglePane && self.primary_kind() == Some(PanelKind::Detail)
        {
            self.set_error("Nothing to go back to.".to_string());
        }
    }

    pub fn primary_kind(&self) -> Option<PanelKind> {
        self.host.panel_in(Slot::Primary).map(|m| m.kind())
    }

    pub fn list_is_mounted(&self) -> bool {
        self.coordinator.list_panel(&self.host).is_some()
    }

    fn refresh_list_rows(&mut self) {
        // Lists only ever live in the primary slot
        let Some(list) = self
            .host
            .panel_in_mut(Slot::Primary)
            .and_then(|m| m.panel.as_list_mut())
        else {
            return;
        };
        if !list.take_refresh() {
            return;
        }
        self.list_rows = list.rows();

        // Clamp selection index
        if self.list_state.selected().unwrap_or(0) >= self.list_rows.len() {
            self.list_state.select(if self.list_rows.is_empty() {
                None
            } else {
                Some(self.list_rows.len() - 1)
            });
        }
    }
}
