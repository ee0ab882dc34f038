use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::picker::DEFAULT_HIGHLIGHT_MS;
use crate::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypickConfig {
    /// Key the store persists under. Sessions sharing a key share history.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Duration of the transient pick highlight.
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
    /// Interaction kinds offered by the panel selector, in wheel order.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<String>,
    /// Directory for the file-backed store. Defaults to `~/.waypick`.
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

impl Default for WaypickConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            highlight_ms: default_highlight_ms(),
            kinds: default_kinds(),
            store_dir: None,
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_highlight_ms() -> u64 {
    DEFAULT_HIGHLIGHT_MS
}

fn default_kinds() -> Vec<String> {
    [
        "click",
        "form-fill",
        "list-item-double-click",
        "list-item-click",
    ]
    .iter()
    .map(|kind| kind.to_string())
    .collect()
}
