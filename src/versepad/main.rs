use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use versepad::api::{CmdMessage, ConfigAction, MessageLevel, VersepadApi, VersepadPaths};
use versepad::config::{VersepadConfig, KEYS};
use versepad::error::{Result, VersepadError};
use versepad::esv::EsvClient;
use versepad::model::Cursor;
use versepad::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "VERSEPAD_HOME";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "versepad=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

type App = VersepadApi<FileStore, EsvClient>;

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api(&cli)?;

    match cli.command {
        Commands::Fetch { note, line, ch } => handle_fetch(&mut api, &note, line, ch),
        Commands::Preview { reference } => handle_preview(&api, reference),
        Commands::Config { key, value } => handle_config(&api, key, value),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "versepad", "versepad")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            VersepadError::Config(format!(
                "Could not determine config dir; set {} instead",
                HOME_ENV
            ))
        })
}

fn init_api(cli: &Cli) -> Result<App> {
    let vault = match &cli.vault {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let config_dir = config_dir()?;
    let config = VersepadConfig::load(&config_dir)?;

    let store = FileStore::new(vault);
    let source = EsvClient::from_config(&config);
    Ok(VersepadApi::new(store, source, VersepadPaths { config_dir }))
}

fn handle_fetch(api: &mut App, note: &str, line: Option<usize>, ch: Option<usize>) -> Result<()> {
    let cursor = match (line, ch) {
        (Some(line), Some(ch)) => Some(Cursor::new(line, ch)),
        _ => None,
    };
    let result = api.fetch_passage(note, cursor)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_preview(api: &App, reference: Vec<String>) -> Result<()> {
    let title = reference.join(" ");
    let result = api.preview(&title)?;
    if let Some(text) = &result.rendered {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &App, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let is_show_all = matches!(action, ConfigAction::ShowAll);
    let result = api.config(action)?;
    if is_show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
