use crate::flash::FlashStore;
use crate::flow::FlowEffect;
use crate::store::{BackupCommand, BackupStore};
use crate::types::ServerId;

/// State shared by the widgets of one server's backup page.
///
/// Flows never mutate this directly; they return [`FlowEffect`]s which the
/// page applies here, on the UI thread.
#[derive(Debug, Clone)]
pub struct PanelState {
    /// The server whose backups are shown.
    pub server: ServerId,
    /// Flash messages of the page, keyed per widget.
    pub flashes: FlashStore,
    /// The server's backups, oldest first.
    pub backups: BackupStore,
}

impl PanelState {
    pub fn new(server: ServerId) -> Self {
        Self { server, flashes: FlashStore::new(), backups: BackupStore::new() }
    }

    pub fn apply(&mut self, effect: FlowEffect) {
        match effect {
            FlowEffect::Flash(cmd) => self.flashes.apply(cmd),
            FlowEffect::Store(cmd) => self.backups.apply(cmd),
        }
    }

    pub fn apply_all(&mut self, effects: impl IntoIterator<Item = FlowEffect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn dispatch(&mut self, command: BackupCommand) {
        self.backups.apply(command);
    }
}
