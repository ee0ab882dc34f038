mod panel;
mod repl;

use std::path::PathBuf;
use std::time::SystemTime;

use clap::{Parser, Subcommand};

use waypick_core::command::InputEvent;
use waypick_core::protocol::PageSnapshot;
use waypick_engine::config::ConfigLoader;
use waypick_engine::export::{export_file_name, write_export};
use waypick_engine::picker::Disposition;
use waypick_engine::script::{ScriptCommand, parse_script};
use waypick_engine::session::SessionManager;
use waypick_engine::storage::FileStore;
use waypick_engine::store::ActionStore;

use panel::TextPanel;

#[derive(Parser)]
#[command(name = "waypick", version, about = "Replay and inspect UI path-picking sessions")]
struct Args {
    /// Config file (defaults to ./waypick.yaml, then ~/.waypick/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the store directory
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay an event script against a captured page snapshot
    Replay {
        /// Page snapshot (JSON)
        #[arg(long)]
        page: PathBuf,
        /// Event script, one event per line
        #[arg(long)]
        file: PathBuf,
    },
    /// Interactive event prompt against a captured page snapshot
    Repl {
        /// Page snapshot (JSON)
        #[arg(long)]
        page: PathBuf,
    },
    /// Export recorded actions as newline-delimited JSON
    Export {
        /// Output file (defaults to a timestamped name)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the current path and recorded actions
    Show,
    /// Drop all recorded actions
    Clear,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays clean for command output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from(path)?,
        None => ConfigLoader::load_default()?,
    };

    let store_dir = args
        .store
        .clone()
        .or_else(|| config.store_dir.clone())
        .unwrap_or_else(FileStore::default_dir);
    let backing = FileStore::new(store_dir);

    match args.command {
        Command::Replay { page, file } => {
            let snapshot = load_snapshot(&page)?;
            let script = std::fs::read_to_string(&file)?;
            let commands = parse_script(&script)?;

            let mut manager = SessionManager::new();
            let session = manager.install(
                Box::new(TextPanel::new(config.kinds.clone())),
                backing,
                &config,
            );

            for command in &commands {
                match command {
                    ScriptCommand::Event(event) => {
                        let disposition = session.dispatch(&snapshot, event);
                        println!("{}", describe(event, disposition));
                    }
                    ScriptCommand::PathEdit(value) => {
                        session.path_edited(value);
                        println!("path set to \"{value}\"");
                    }
                }
            }
            println!(
                "path: \"{}\" | {} recorded action(s)",
                session.store().path(),
                session.store().records().len()
            );
            manager.teardown();
        }
        Command::Repl { page } => {
            let snapshot = load_snapshot(&page)?;
            let mut manager = SessionManager::new();
            let session = manager.install(
                Box::new(TextPanel::new(config.kinds.clone())),
                backing,
                &config,
            );
            repl::run(session, &snapshot)?;
            manager.teardown();
        }
        Command::Export { out } => {
            let store = ActionStore::load(backing, &config.storage_key);
            let target =
                out.unwrap_or_else(|| PathBuf::from(export_file_name(SystemTime::now())));
            write_export(&target, store.records())?;
            println!(
                "wrote {} record(s) to {}",
                store.records().len(),
                target.display()
            );
        }
        Command::Show => {
            let store = ActionStore::load(backing, &config.storage_key);
            println!("path: \"{}\"", store.path());
            for record in store.records() {
                println!("{}", serde_json::to_string(record)?);
            }
        }
        Command::Clear => {
            let mut store = ActionStore::load(backing, &config.storage_key);
            let dropped = store.records().len();
            store.clear();
            println!("cleared {dropped} record(s)");
        }
    }

    Ok(())
}

fn load_snapshot(path: &PathBuf) -> Result<PageSnapshot, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn describe(event: &InputEvent, disposition: Disposition) -> String {
    let verdict = match disposition {
        Disposition::Consumed => "consumed",
        Disposition::PassThrough => "pass-through",
    };
    match event {
        InputEvent::Click { target, modifiers } => {
            let mut mods = Vec::new();
            if modifiers.ctrl {
                mods.push("ctrl");
            }
            if modifiers.shift {
                mods.push("shift");
            }
            if modifiers.alt {
                mods.push("alt");
            }
            format!("click {} [{}] -> {verdict}", target, mods.join("+"))
        }
        InputEvent::Wheel { delta_y } => format!("wheel {delta_y} -> {verdict}"),
    }
}
