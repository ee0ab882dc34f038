use waypick_core::command::{InputEvent, Modifiers};
use waypick_engine::script::{ScriptCommand, ScriptError, parse_line, parse_script};

#[test]
fn test_parse_script_skips_blanks_and_comments() {
    let script = "\n# capture the settings menu\nclick 3 ctrl\n\nwheel down\nclick 3 alt\n";
    let commands = parse_script(script).unwrap();

    assert_eq!(
        commands,
        vec![
            ScriptCommand::Event(InputEvent::Click {
                target: 3,
                modifiers: Modifiers::CTRL,
            }),
            ScriptCommand::Event(InputEvent::Wheel { delta_y: 1.0 }),
            ScriptCommand::Event(InputEvent::Click {
                target: 3,
                modifiers: Modifiers::ALT,
            }),
        ]
    );
}

#[test]
fn test_parse_click_modifier_forms() {
    let combined = parse_line("click 7 ctrl+alt", 1).unwrap();
    assert_eq!(
        combined,
        ScriptCommand::Event(InputEvent::Click {
            target: 7,
            modifiers: Modifiers::CTRL_ALT,
        })
    );

    let separate = parse_line("click 7 ctrl shift", 1).unwrap();
    assert_eq!(
        separate,
        ScriptCommand::Event(InputEvent::Click {
            target: 7,
            modifiers: Modifiers::CTRL_SHIFT,
        })
    );

    let bare = parse_line("click 7", 1).unwrap();
    assert_eq!(
        bare,
        ScriptCommand::Event(InputEvent::Click {
            target: 7,
            modifiers: Modifiers::NONE,
        })
    );
}

#[test]
fn test_parse_wheel_forms() {
    assert_eq!(
        parse_line("wheel down", 1).unwrap(),
        ScriptCommand::Event(InputEvent::Wheel { delta_y: 1.0 })
    );
    assert_eq!(
        parse_line("wheel up", 1).unwrap(),
        ScriptCommand::Event(InputEvent::Wheel { delta_y: -1.0 })
    );
    assert_eq!(
        parse_line("wheel -2.5", 1).unwrap(),
        ScriptCommand::Event(InputEvent::Wheel { delta_y: -2.5 })
    );
    assert_eq!(
        parse_line("wheel 0", 1).unwrap(),
        ScriptCommand::Event(InputEvent::Wheel { delta_y: 0.0 })
    );
}

#[test]
fn test_parse_path_edit_takes_rest_of_line() {
    assert_eq!(
        parse_line("path Personal > Add", 1).unwrap(),
        ScriptCommand::PathEdit("Personal > Add".to_string())
    );

    // A bare `path` clears the field.
    assert_eq!(
        parse_line("path", 1).unwrap(),
        ScriptCommand::PathEdit(String::new())
    );

    let script = "path Personal\nclick 3 alt\n";
    let commands = parse_script(script).unwrap();
    assert_eq!(
        commands[0],
        ScriptCommand::PathEdit("Personal".to_string())
    );
}

#[test]
fn test_path_prefixed_directive_is_not_a_path_edit() {
    assert_eq!(
        parse_line("pathway", 3).unwrap_err(),
        ScriptError::UnknownDirective {
            line: 3,
            directive: "pathway".to_string(),
        }
    );
}

#[test]
fn test_parse_errors_carry_line_numbers() {
    let err = parse_script("click 1 ctrl\nhover 2\n").unwrap_err();
    assert_eq!(
        err,
        ScriptError::UnknownDirective {
            line: 2,
            directive: "hover".to_string(),
        }
    );

    assert_eq!(
        parse_line("click abc", 4).unwrap_err(),
        ScriptError::InvalidTarget {
            line: 4,
            value: "abc".to_string(),
        }
    );

    assert_eq!(
        parse_line("click 3 meta", 9).unwrap_err(),
        ScriptError::UnknownModifier {
            line: 9,
            value: "meta".to_string(),
        }
    );

    assert_eq!(
        parse_line("wheel", 2).unwrap_err(),
        ScriptError::MissingArgument {
            line: 2,
            directive: "wheel".to_string(),
        }
    );

    assert_eq!(
        parse_line("wheel sideways", 5).unwrap_err(),
        ScriptError::InvalidDelta {
            line: 5,
            value: "sideways".to_string(),
        }
    );
}
