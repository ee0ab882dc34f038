use std::time::Duration;

use waypick_core::protocol::Rect;

#[derive(Debug, thiserror::Error)]
#[error("host surface error: {0}")]
pub struct HostError(pub String);

/// The panel contract the presentation layer implements.
///
/// The engine only needs the path field, the interaction-kind selector, a
/// transient highlight, and teardown of the rendered UI. Rendering, styling
/// and event wiring stay on the implementation's side; in particular,
/// implementations fire their own change notifications when
/// [`set_path_value`](PanelSurface::set_path_value) or
/// [`set_kind_index`](PanelSurface::set_kind_index) is called.
pub trait PanelSurface {
    fn path_value(&self) -> String;

    fn set_path_value(&mut self, value: &str);

    /// Number of options in the interaction-kind selector. Zero when no
    /// selector is bound.
    fn kind_count(&self) -> usize;

    fn kind_index(&self) -> usize;

    fn set_kind_index(&mut self, index: usize);

    /// Value of the currently selected interaction kind, empty when no
    /// selector is bound.
    fn kind_value(&self) -> String;

    /// Show a transient outline at the given box. Removal after `duration`
    /// is the implementation's concern; a new highlight stacks rather than
    /// replacing one in flight.
    fn highlight(&mut self, rect: &Rect, duration: Duration);

    /// Remove the rendered panel. Must be idempotent.
    fn remove(&mut self) -> Result<(), HostError>;
}
