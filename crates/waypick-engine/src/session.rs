use tracing::{debug, warn};

use waypick_core::command::InputEvent;
use waypick_core::protocol::PageSnapshot;

use crate::config::WaypickConfig;
use crate::host::{HostError, PanelSurface};
use crate::picker::{Disposition, Picker};
use crate::storage::StateStore;
use crate::store::ActionStore;

/// One active installation of panel + picker + store.
///
/// Created only through [`SessionManager::install`]. After teardown the
/// session stays inert: dispatch becomes a pass-through no-op and a second
/// teardown does nothing.
pub struct Session<S: StateStore> {
    picker: Picker,
    store: ActionStore<S>,
    panel: Box<dyn PanelSurface>,
    live: bool,
}

impl<S: StateStore> Session<S> {
    fn install(mut panel: Box<dyn PanelSurface>, backing: S, config: &WaypickConfig) -> Self {
        let store = ActionStore::load(backing, &config.storage_key);
        // Seed the panel path field from persisted state.
        panel.set_path_value(store.path());
        Self {
            picker: Picker::new(config.highlight_ms),
            store,
            panel,
            live: true,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn store(&self) -> &ActionStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ActionStore<S> {
        &mut self.store
    }

    /// Applies an operator edit of the path field: writes the value back to
    /// the panel and persists it, so edits survive the session the same way
    /// picker-driven path changes do. Inert after teardown.
    pub fn path_edited(&mut self, value: &str) {
        if !self.live {
            return;
        }
        self.panel.set_path_value(value);
        self.store.set_path(value);
    }

    /// Routes one input event against the current page state.
    pub fn dispatch(&mut self, page: &PageSnapshot, event: &InputEvent) -> Disposition {
        if !self.live {
            return Disposition::PassThrough;
        }
        self.picker
            .handle(page, self.panel.as_mut(), &mut self.store, event)
    }

    /// Removes the rendered UI. Idempotent.
    pub fn teardown(&mut self) -> Result<(), HostError> {
        if !self.live {
            return Ok(());
        }
        self.live = false;
        self.panel.remove()
    }
}

/// The single process-wide session slot.
///
/// Owned by the hosting application; guarantees at most one active session
/// and that a broken prior session can never block installing a new one.
pub struct SessionManager<S: StateStore> {
    active: Option<Session<S>>,
}

impl<S: StateStore> Default for SessionManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateStore> SessionManager<S> {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Tears down any existing session (swallowing teardown failures), then
    /// installs and returns the new one. The slot is replaced only after
    /// setup succeeds.
    pub fn install(
        &mut self,
        panel: Box<dyn PanelSurface>,
        backing: S,
        config: &WaypickConfig,
    ) -> &mut Session<S> {
        if let Some(mut stale) = self.active.take() {
            if let Err(e) = stale.teardown() {
                warn!(error = %e, "stale session teardown failed");
            }
        }
        let session = Session::install(panel, backing, config);
        debug!(storage_key = %config.storage_key, "session installed");
        self.active.insert(session)
    }

    pub fn active_mut(&mut self) -> Option<&mut Session<S>> {
        self.active.as_mut()
    }

    pub fn is_installed(&self) -> bool {
        self.active.is_some()
    }

    /// Tears down and clears the slot, if occupied.
    pub fn teardown(&mut self) {
        if let Some(mut session) = self.active.take() {
            if let Err(e) = session.teardown() {
                warn!(error = %e, "session teardown failed");
            }
        }
    }
}
