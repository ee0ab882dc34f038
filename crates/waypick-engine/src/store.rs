use serde::{Deserialize, Serialize};
use tracing::warn;

use waypick_core::record::ActionRecord;

use crate::storage::StateStore;

/// Storage key shared by every session; re-installs and history
/// de-duplication both rely on it staying fixed.
pub const DEFAULT_STORAGE_KEY: &str = "__action_picker_store__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct PersistedState {
    path: String,
    actions: Vec<ActionRecord>,
}

/// The session's action collection plus the current path string, persisted
/// whole to the backing store on every mutation.
///
/// Records are append-only and immutable; the only destructive operation is
/// [`clear`](ActionStore::clear). Malformed persisted state resets to the
/// empty default without surfacing an error.
pub struct ActionStore<S: StateStore> {
    key: String,
    state: PersistedState,
    backing: S,
}

impl<S: StateStore> ActionStore<S> {
    pub fn load(backing: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match backing.get(&key) {
            None => PersistedState::default(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(e) => {
                    warn!(key = %key, error = %e, "discarding malformed persisted state");
                    PersistedState::default()
                }
            },
        };
        Self {
            key,
            state,
            backing,
        }
    }

    pub fn path(&self) -> &str {
        &self.state.path
    }

    pub fn set_path(&mut self, value: &str) {
        self.state.path = value.to_string();
        self.persist();
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.state.actions
    }

    pub fn append(&mut self, record: ActionRecord) {
        self.state.actions.push(record);
        self.persist();
    }

    /// Drops every record. The current path survives a clear.
    pub fn clear(&mut self) {
        self.state.actions.clear();
        self.persist();
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.state) {
            Ok(raw) => self.backing.set(&self.key, &raw),
            Err(e) => warn!(key = %self.key, error = %e, "failed to serialize store state"),
        }
    }
}
