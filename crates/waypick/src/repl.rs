use std::io::{self, BufRead, Write};

use waypick_core::protocol::PageSnapshot;
use waypick_engine::script::{ScriptCommand, parse_line};
use waypick_engine::session::Session;
use waypick_engine::storage::StateStore;

const BANNER: &[&str] = &[
    "Session installed. Enter commands against the loaded snapshot.",
    "  click <id> [alt][+ctrl][+shift]   e.g. 'click 3 ctrl+alt'",
    "  wheel up|down|<delta>",
    "  path <display string>             edit the path field",
    "Type 'exit' or 'quit' to close.",
];

const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

/// Synchronous command prompt against a captured snapshot.
pub fn run<S: StateStore>(session: &mut Session<S>, snapshot: &PageSnapshot) -> io::Result<()> {
    for line in BANNER {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();
    let mut entry = 0usize;

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.contains(&input) {
            break;
        }

        entry += 1;
        match parse_line(input, entry) {
            Ok(ScriptCommand::Event(event)) => {
                let disposition = session.dispatch(snapshot, &event);
                println!("{disposition:?} | path: \"{}\"", session.store().path());
            }
            Ok(ScriptCommand::PathEdit(value)) => {
                session.path_edited(&value);
                println!("path: \"{}\"", session.store().path());
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    Ok(())
}
