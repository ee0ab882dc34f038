//! Event-to-command dispatch.
//!
//! Raw input events map to picker commands through an explicit table over
//! the modifier combination (clicks) or the wheel delta sign, so each
//! interaction combination is testable on its own.

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        shift: false,
    };

    pub const ALT: Self = Self {
        alt: true,
        ctrl: false,
        shift: false,
    };

    pub const CTRL: Self = Self {
        alt: false,
        ctrl: true,
        shift: false,
    };

    pub const CTRL_SHIFT: Self = Self {
        alt: false,
        ctrl: true,
        shift: true,
    };

    pub const CTRL_ALT: Self = Self {
        alt: true,
        ctrl: true,
        shift: false,
    };
}

/// A raw operator input event, as delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click { target: u32, modifiers: Modifiers },
    Wheel { delta_y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Next,
    Prev,
}

impl WheelDirection {
    /// Positive delta scrolls to the next option, negative to the previous,
    /// zero is a no-op.
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Next)
        } else if delta_y < 0.0 {
            Some(Self::Prev)
        } else {
            None
        }
    }
}

/// A command against the path model, store, or kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickCommand {
    /// Append the target's label to the current path.
    PushSegment { target: u32 },
    /// Drop the last path segment (no-op when the path is empty).
    PopSegment,
    /// Append an action record for the target under the current path.
    Record { target: u32 },
    /// Cycle the interaction-kind selector.
    CycleKind { direction: WheelDirection },
}

/// Classifies an input event into the commands it triggers, in execution
/// order. An empty result means the event passes through untouched.
///
/// Ctrl and Alt may be held together; the path adjustment always runs
/// before the record.
pub fn classify(event: &InputEvent) -> Vec<PickCommand> {
    match *event {
        InputEvent::Wheel { delta_y } => WheelDirection::from_delta(delta_y)
            .map(|direction| vec![PickCommand::CycleKind { direction }])
            .unwrap_or_default(),
        InputEvent::Click { target, modifiers } => {
            match (modifiers.ctrl, modifiers.shift, modifiers.alt) {
                (true, false, false) => vec![PickCommand::PushSegment { target }],
                (true, true, false) => vec![PickCommand::PopSegment],
                (false, _, true) => vec![PickCommand::Record { target }],
                (true, false, true) => vec![
                    PickCommand::PushSegment { target },
                    PickCommand::Record { target },
                ],
                (true, true, true) => vec![PickCommand::PopSegment, PickCommand::Record { target }],
                (false, _, false) => Vec::new(),
            }
        }
    }
}
