//! Event-script parsing for the replay harness.
//!
//! One command per line: `click <id> [alt][+ctrl][+shift]`,
//! `wheel up|down|<delta>`, or `path <display string>` (an operator edit
//! of the path field; the rest of the line, trimmed, is the value). Blank
//! lines and `#` comments are skipped.

use thiserror::Error;

use waypick_core::command::{InputEvent, Modifiers};

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown directive '{directive}'")]
    UnknownDirective { line: usize, directive: String },
    #[error("line {line}: missing argument for '{directive}'")]
    MissingArgument { line: usize, directive: String },
    #[error("line {line}: invalid element id '{value}'")]
    InvalidTarget { line: usize, value: String },
    #[error("line {line}: unknown modifier '{value}'")]
    UnknownModifier { line: usize, value: String },
    #[error("line {line}: invalid wheel delta '{value}'")]
    InvalidDelta { line: usize, value: String },
}

/// A parsed script line: a raw input event, or an operator edit of the
/// panel path field.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Event(InputEvent),
    PathEdit(String),
}

/// Parses a whole script, line numbers starting at 1.
pub fn parse_script(input: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        commands.push(parse_line(line, index + 1)?);
    }
    Ok(commands)
}

/// Parses a single non-blank command line.
pub fn parse_line(line: &str, number: usize) -> Result<ScriptCommand, ScriptError> {
    // The path value may contain spaces, so the directive takes the rest of
    // the line verbatim. A bare `path` clears the field.
    if let Some(rest) = line.strip_prefix("path") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Ok(ScriptCommand::PathEdit(rest.trim().to_string()));
        }
    }
    parse_event(line, number).map(ScriptCommand::Event)
}

fn parse_event(line: &str, number: usize) -> Result<InputEvent, ScriptError> {
    let mut tokens = line.split_whitespace();
    let directive = tokens.next().unwrap_or_default();
    match directive {
        "click" => {
            let id_token = tokens.next().ok_or_else(|| ScriptError::MissingArgument {
                line: number,
                directive: directive.to_string(),
            })?;
            let target: u32 = id_token.parse().map_err(|_| ScriptError::InvalidTarget {
                line: number,
                value: id_token.to_string(),
            })?;
            let mut modifiers = Modifiers::default();
            for token in tokens {
                for part in token.split('+').filter(|part| !part.is_empty()) {
                    match part {
                        "alt" => modifiers.alt = true,
                        "ctrl" => modifiers.ctrl = true,
                        "shift" => modifiers.shift = true,
                        other => {
                            return Err(ScriptError::UnknownModifier {
                                line: number,
                                value: other.to_string(),
                            });
                        }
                    }
                }
            }
            Ok(InputEvent::Click { target, modifiers })
        }
        "wheel" => {
            let argument = tokens.next().ok_or_else(|| ScriptError::MissingArgument {
                line: number,
                directive: directive.to_string(),
            })?;
            let delta_y = match argument {
                // Scrolling down is a positive delta: next option.
                "down" | "next" => 1.0,
                "up" | "prev" => -1.0,
                other => other.parse().map_err(|_| ScriptError::InvalidDelta {
                    line: number,
                    value: other.to_string(),
                })?,
            };
            Ok(InputEvent::Wheel { delta_y })
        }
        other => Err(ScriptError::UnknownDirective {
            line: number,
            directive: other.to_string(),
        }),
    }
}
