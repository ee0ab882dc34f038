use std::time::Duration;

use tracing::debug;

use waypick_core::command::{InputEvent, PickCommand, WheelDirection, classify};
use waypick_core::label::{UNLABELED, effective_title, resolve_label};
use waypick_core::path::UiPath;
use waypick_core::protocol::{Element, PageSnapshot};
use waypick_core::record::ActionRecord;
use waypick_core::visibility::is_visible;

use crate::host::PanelSurface;
use crate::storage::StateStore;
use crate::store::ActionStore;

/// Interaction kind assumed when no selector is bound.
pub const DEFAULT_KIND: &str = "click";

pub const DEFAULT_HIGHLIGHT_MS: u64 = 800;

/// What the host should do with the event after dispatch.
///
/// `Consumed` means the default action and further propagation must be
/// suppressed; `PassThrough` leaves the event untouched. Wheel events are
/// observed passively and are never consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Consumed,
    PassThrough,
}

/// Interprets raw input events as commands against the path model, the
/// action store, and the kind selector.
///
/// Every lookup miss (absent target, invisible target, empty option list)
/// degrades to a no-op; nothing here can fail the hosting page.
pub struct Picker {
    highlight: Duration,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_MS)
    }
}

impl Picker {
    pub fn new(highlight_ms: u64) -> Self {
        Self {
            highlight: Duration::from_millis(highlight_ms),
        }
    }

    pub fn handle<S: StateStore>(
        &self,
        page: &PageSnapshot,
        panel: &mut dyn PanelSurface,
        store: &mut ActionStore<S>,
        event: &InputEvent,
    ) -> Disposition {
        let commands = classify(event);
        if commands.is_empty() {
            return Disposition::PassThrough;
        }

        match *event {
            InputEvent::Wheel { .. } => {
                for command in commands {
                    if let PickCommand::CycleKind { direction } = command {
                        self.cycle_kind(panel, direction);
                    }
                }
                Disposition::PassThrough
            }
            InputEvent::Click { target, .. } => {
                let Some(element) = page.element(target) else {
                    return Disposition::PassThrough;
                };
                if !is_visible(element) {
                    return Disposition::PassThrough;
                }
                for command in commands {
                    self.execute(command, element, page, panel, store);
                }
                Disposition::Consumed
            }
        }
    }

    fn execute<S: StateStore>(
        &self,
        command: PickCommand,
        element: &Element,
        page: &PageSnapshot,
        panel: &mut dyn PanelSurface,
        store: &mut ActionStore<S>,
    ) {
        match command {
            PickCommand::PopSegment => {
                let mut path = UiPath::parse(&panel.path_value());
                path.pop();
                self.write_path(&path, panel, store);
            }
            PickCommand::PushSegment { .. } => {
                let mut path = UiPath::parse(&panel.path_value());
                path.push(self.picked_title(page, element, panel));
                self.write_path(&path, panel, store);
            }
            PickCommand::Record { .. } => {
                let path = UiPath::parse(&panel.path_value());
                let title = self.picked_title(page, element, panel);
                let record = ActionRecord::build(&path, &title, page.route(), &self.kind(panel));
                debug!(id = %record.id, route = %record.route, "recorded action");
                store.append(record);
                panel.highlight(&element.rect, self.highlight);
            }
            PickCommand::CycleKind { direction } => self.cycle_kind(panel, direction),
        }
    }

    fn write_path<S: StateStore>(
        &self,
        path: &UiPath,
        panel: &mut dyn PanelSurface,
        store: &mut ActionStore<S>,
    ) {
        let display = path.to_string();
        panel.set_path_value(&display);
        store.set_path(&display);
    }

    fn picked_title(
        &self,
        page: &PageSnapshot,
        element: &Element,
        panel: &dyn PanelSurface,
    ) -> String {
        let label = resolve_label(page, element);
        let label = if label.is_empty() {
            UNLABELED.to_string()
        } else {
            label
        };
        effective_title(&self.kind(panel), &label)
    }

    fn kind(&self, panel: &dyn PanelSurface) -> String {
        let value = panel.kind_value();
        if value.is_empty() {
            DEFAULT_KIND.to_string()
        } else {
            value
        }
    }

    fn cycle_kind(&self, panel: &mut dyn PanelSurface, direction: WheelDirection) {
        let len = panel.kind_count();
        if len == 0 {
            return;
        }
        let current = panel.kind_index().min(len - 1);
        let next = match direction {
            WheelDirection::Next => (current + 1) % len,
            WheelDirection::Prev => (current + len - 1) % len,
        };
        panel.set_kind_index(next);
    }
}
