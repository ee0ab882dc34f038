use std::time::Duration;

use tracing::info;

use waypick_core::protocol::Rect;
use waypick_engine::host::{HostError, PanelSurface};

/// In-process panel: the CLI's stand-in for the floating DOM panel.
///
/// Holds the path field and the kind selector as plain state and logs the
/// visual effects (highlights, field updates) instead of rendering them.
pub struct TextPanel {
    path: String,
    kinds: Vec<String>,
    kind_index: usize,
    removed: bool,
}

impl TextPanel {
    pub fn new(kinds: Vec<String>) -> Self {
        Self {
            path: String::new(),
            kinds,
            kind_index: 0,
            removed: false,
        }
    }
}

impl PanelSurface for TextPanel {
    fn path_value(&self) -> String {
        self.path.clone()
    }

    fn set_path_value(&mut self, value: &str) {
        self.path = value.to_string();
        info!(path = %self.path, "path updated");
    }

    fn kind_count(&self) -> usize {
        self.kinds.len()
    }

    fn kind_index(&self) -> usize {
        self.kind_index
    }

    fn set_kind_index(&mut self, index: usize) {
        if index < self.kinds.len() {
            self.kind_index = index;
            info!(kind = %self.kinds[index], "interaction kind changed");
        }
    }

    fn kind_value(&self) -> String {
        self.kinds.get(self.kind_index).cloned().unwrap_or_default()
    }

    fn highlight(&mut self, rect: &Rect, duration: Duration) {
        info!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            ms = duration.as_millis() as u64,
            "highlight"
        );
    }

    fn remove(&mut self) -> Result<(), HostError> {
        if !self.removed {
            self.removed = true;
            info!("panel removed");
        }
        Ok(())
    }
}
