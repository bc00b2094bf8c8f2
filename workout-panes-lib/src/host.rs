// src/host.rs
use std::collections::VecDeque;
use std::fmt;

use crate::panel::{Panel, PanelKind};

/// Container slots a layout can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Secondary,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Primary => write!(f, "primary"),
            Slot::Secondary => write!(f, "secondary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    SinglePane,
    DualPane,
}

impl PresentationMode {
    /// Dual pane iff the current layout offers a secondary container.
    pub fn detect<H: Host + ?Sized>(host: &H) -> Self {
        if host.has_container(Slot::Secondary) {
            PresentationMode::DualPane
        } else {
            PresentationMode::SinglePane
        }
    }

    pub fn slots(self) -> &'static [Slot] {
        match self {
            PresentationMode::SinglePane => &[Slot::Primary],
            PresentationMode::DualPane => &[Slot::Primary, Slot::Secondary],
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationMode::SinglePane => write!(f, "single-pane"),
            PresentationMode::DualPane => write!(f, "dual-pane"),
        }
    }
}

/// Identity handed out by the host on every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Mounted {
    pub id: PanelId,
    pub slot: Slot,
    pub panel: Panel,
}

impl Mounted {
    pub const fn kind(&self) -> PanelKind {
        self.panel.kind()
    }
}

#[derive(Debug)]
enum Op {
    Replace { slot: Slot, panel: Panel },
    Remove { id: PanelId },
}

/// A batch of mount/unmount operations applied together.
#[derive(Debug, Default)]
pub struct Transaction {
    ops: Vec<Op>,
    add_to_history: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `panel` into `slot`, unmounting whatever was there.
    pub fn replace(mut self, slot: Slot, panel: Panel) -> Self {
        self.ops.push(Op::Replace { slot, panel });
        self
    }

    pub fn remove(mut self, id: PanelId) -> Self {
        self.ops.push(Op::Remove { id });
        self
    }

    /// Records the transaction so `pop_history` can undo it.
    pub fn add_to_history(mut self) -> Self {
        self.add_to_history = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// What the layout coordinator needs from the UI host.
pub trait Host {
    fn has_container(&self, slot: Slot) -> bool;

    /// Panel registered for `slot`, even if the slot's container is gone
    /// after a layout change.
    fn panel_in(&self, slot: Slot) -> Option<&Mounted>;

    fn mounted(&self) -> Vec<&Mounted>;

    /// Queues `tx`; it is applied by the next `execute_pending`.
    fn commit(&mut self, tx: Transaction);

    /// Flushes the queue, then applies `tx` before returning.
    fn commit_now(&mut self, tx: Transaction);

    fn execute_pending(&mut self);

    /// Undoes the most recent history transaction. False when empty.
    fn pop_history(&mut self) -> bool;

    fn clear_history(&mut self);

    fn history_depth(&self) -> usize;
}

#[derive(Debug)]
struct Reversal {
    slot: Slot,
    pushed: PanelId,
    previous: Option<Mounted>,
}

/// In-memory host: the panel registry, pending queue and history stack the
/// TUI draws from.
#[derive(Debug)]
pub struct PanelHost {
    containers: Vec<Slot>,
    panels: Vec<Mounted>,
    pending: VecDeque<Transaction>,
    history: Vec<Vec<Reversal>>,
    next_id: u64,
}

impl PanelHost {
    pub fn new(mode: PresentationMode) -> Self {
        Self::with_containers(mode.slots())
    }

    /// Builds a host from an explicit container list; a layout missing the
    /// primary slot is tolerated.
    pub fn with_containers(containers: &[Slot]) -> Self {
        Self {
            containers: containers.to_vec(),
            panels: Vec::new(),
            pending: VecDeque::new(),
            history: Vec::new(),
            next_id: 1,
        }
    }

    /// Swaps the container layout, as a recreation would. Registered panels
    /// survive; reconciling them is the coordinator's job.
    pub fn reconfigure(&mut self, mode: PresentationMode) {
        tracing::debug!(%mode, "host layout reconfigured");
        self.containers = mode.slots().to_vec();
    }

    pub fn panel_in_mut(&mut self, slot: Slot) -> Option<&mut Mounted> {
        self.panels.iter_mut().find(|m| m.slot == slot)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn take_from_slot(&mut self, slot: Slot) -> Option<Mounted> {
        let index = self.panels.iter().position(|m| m.slot == slot)?;
        Some(self.panels.remove(index))
    }

    fn apply(&mut self, tx: Transaction) {
        let mut reversals = Vec::new();
        for op in tx.ops {
            match op {
                Op::Replace { slot, panel } => {
                    if !self.has_container(slot) {
                        tracing::warn!(%slot, kind = %panel.kind(), "no container for slot, mount skipped");
                        continue;
                    }
                    let previous = self.take_from_slot(slot);
                    let id = PanelId(self.next_id);
                    self.next_id += 1;
                    tracing::debug!(%slot, %id, kind = %panel.kind(), "panel mounted");
                    self.panels.push(Mounted { id, slot, panel });
                    if tx.add_to_history {
                        reversals.push(Reversal {
                            slot,
                            pushed: id,
                            previous,
                        });
                    }
                }
                Op::Remove { id } => {
                    if let Some(index) = self.panels.iter().position(|m| m.id == id) {
                        let removed = self.panels.remove(index);
                        tracing::debug!(slot = %removed.slot, %id, kind = %removed.kind(), "panel unmounted");
                    }
                }
            }
        }
        if !reversals.is_empty() {
            self.history.push(reversals);
            tracing::debug!(depth = self.history.len(), "history entry pushed");
        }
    }
}

impl Host for PanelHost {
    fn has_container(&self, slot: Slot) -> bool {
        self.containers.contains(&slot)
    }

    fn panel_in(&self, slot: Slot) -> Option<&Mounted> {
        self.panels.iter().find(|m| m.slot == slot)
    }

    fn mounted(&self) -> Vec<&Mounted> {
        self.panels.iter().collect()
    }

    fn commit(&mut self, tx: Transaction) {
        if !tx.is_empty() {
            self.pending.push_back(tx);
        }
    }

    fn commit_now(&mut self, tx: Transaction) {
        self.execute_pending();
        self.apply(tx);
    }

    fn execute_pending(&mut self) {
        while let Some(tx) = self.pending.pop_front() {
            self.apply(tx);
        }
    }

    fn pop_history(&mut self) -> bool {
        self.execute_pending();
        let Some(reversals) = self.history.pop() else {
            return false;
        };
        for reversal in reversals.into_iter().rev() {
            // One panel per slot: whatever sits there now makes way.
            if let Some(current) = self.take_from_slot(reversal.slot) {
                if current.id != reversal.pushed {
                    tracing::debug!(slot = %current.slot, id = %current.id, "unrecorded panel dropped on pop");
                }
            }
            if let Some(previous) = reversal.previous {
                tracing::debug!(slot = %previous.slot, id = %previous.id, "panel restored from history");
                self.panels.push(previous);
            }
        }
        tracing::debug!(depth = self.history.len(), "history entry popped");
        true
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }

    fn history_depth(&self) -> usize {
        self.history.len()
    }
}
