//! Sky Folder Selector: entry point.
//!
//! Opens the Sky: Children of the Light screenshot (`images`) and recording
//! (`Record`) folders in the platform file manager, and manages the settings
//! file that overrides their default locations.
//!
//! # Usage
//!
//! ```text
//! sky-folder [OPTIONS] <COMMAND>
//!
//! Commands:
//!   images            Open the screenshots folder
//!   record            Open the recordings folder
//!   both              Open both folders
//!   settings show     Show platform, defaults, stored and resolved folders
//!   settings set      Change one or both folders and save
//!   settings reset    Restore the platform defaults and save
//!   settings path     Print the settings file location
//!
//! Options:
//!   --settings <FILE>  Settings file to use [env: SKY_FOLDER_SETTINGS]
//!   --portable         Keep settings in ./sky_settings.json
//! ```
//!
//! `--settings` wins over `--portable`; without either the file lives in
//! `~/.sky_folder_selector/settings.json`.  If the home directory is unknown the
//! portable file in the working directory is used instead, with a warning.
//!
//! Problems with a folder are printed as warnings with the offending path and
//! what to do about it.  The exit code is 1 when any requested folder could
//! not be opened or the settings could not be saved.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ SystemEnvironment::new()     -- detects the platform once
//!  └─ SettingsStore::load()        -- reads or creates the settings file
//!  └─ FolderLauncher::new(native_opener(platform))
//!  └─ dispatch subcommand
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use skyfolder::application::open_folders::{FolderError, FolderLauncher};
use skyfolder::infrastructure::environment::SystemEnvironment;
use skyfolder::infrastructure::opener::native_opener;
use skyfolder::infrastructure::storage::settings::{
    SettingsLocation, SettingsSource, SettingsStore,
};
use skyfolder_core::{default_base_path, Environment, FolderKind, Settings};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Open the Sky: Children of the Light screenshot and recording folders.
#[derive(Debug, Parser)]
#[command(name = "sky-folder", version)]
struct Cli {
    /// Settings file to use instead of the default location.
    #[arg(long, global = true, value_name = "FILE", env = "SKY_FOLDER_SETTINGS")]
    settings: Option<PathBuf>,

    /// Keep the settings file in the current directory (sky_settings.json).
    #[arg(long, global = true)]
    portable: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn settings_location(&self) -> SettingsLocation {
        match (&self.settings, self.portable) {
            (Some(path), _) => SettingsLocation::Explicit(path.clone()),
            (None, true) => SettingsLocation::WorkingDir,
            (None, false) => SettingsLocation::HomeDotDir,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the screenshots (images) folder.
    Images,
    /// Open the screen recordings (Record) folder.
    Record,
    /// Open both folders.
    Both,
    /// Show or edit the folder settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show the platform, default location, stored and resolved folders.
    Show {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Change one or both folders and save.  An empty value restores the default.
    #[command(group(ArgGroup::new("folders").required(true).multiple(true).args(["images", "record"])))]
    Set {
        /// Screenshots folder.
        #[arg(long, value_name = "DIR")]
        images: Option<String>,
        /// Recordings folder.
        #[arg(long, value_name = "DIR")]
        record: Option<String>,
    },
    /// Restore both folders to the platform defaults and save.
    Reset,
    /// Print the settings file location.
    Path,
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SettingsReport {
    platform: &'static str,
    settings_file: String,
    source: SettingsSource,
    default_base_path: Option<String>,
    folders: Vec<FolderReport>,
}

#[derive(Debug, Serialize)]
struct FolderReport {
    kind: &'static str,
    key: &'static str,
    stored: Option<String>,
    resolved: Option<String>,
    exists: bool,
    error: Option<String>,
}

fn build_report(store: &SettingsStore, source: SettingsSource) -> SettingsReport {
    let env = store.environment();
    let folders = FolderKind::ALL
        .iter()
        .map(|&kind| {
            let resolved = store.resolve_folder(kind);
            FolderReport {
                kind: kind.label(),
                key: kind.settings_key(),
                stored: store.settings().folder(kind).map(str::to_string),
                exists: resolved.as_ref().is_ok_and(|path| path.exists()),
                resolved: resolved
                    .as_ref()
                    .ok()
                    .map(|path| path.display().to_string()),
                error: resolved.err().map(|e| e.to_string()),
            }
        })
        .collect();

    SettingsReport {
        platform: env.platform().label(),
        settings_file: store.path().display().to_string(),
        source,
        default_base_path: default_base_path(env)
            .ok()
            .map(|path| path.display().to_string()),
        folders,
    }
}

fn print_report(report: &SettingsReport) {
    println!("platform:       {}", report.platform);
    println!("settings file:  {}", report.settings_file);
    println!(
        "default base:   {}",
        report.default_base_path.as_deref().unwrap_or("(none)")
    );
    for folder in &report.folders {
        let stored = folder.stored.as_deref().unwrap_or("(default)");
        let resolved = match (&folder.resolved, &folder.error) {
            (Some(path), _) if folder.exists => path.clone(),
            (Some(path), _) => format!("{path} (missing)"),
            (None, Some(error)) => format!("unresolved: {error}"),
            (None, None) => "unresolved".to_string(),
        };
        println!("{:<15} {stored}\n{:<15} -> {resolved}", format!("{}:", folder.kind), "");
    }
}

/// Prints a folder problem the way the user should see it.
fn report_folder_error(kind: FolderKind, error: &FolderError) {
    eprintln!("warning: {} folder: {error}", kind.label());
    eprintln!("         {}", error.guidance());
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn report_outcomes(outcomes: Vec<(FolderKind, Result<PathBuf, FolderError>)>) -> ExitCode {
    let mut failed = false;
    for (kind, outcome) in outcomes {
        match outcome {
            Ok(path) => println!("opened {}: {}", kind.label(), path.display()),
            Err(e) => {
                report_folder_error(kind, &e);
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Makes a user-entered folder absolute against the working directory.
fn absolute_folder(env: &dyn Environment, value: String) -> String {
    let path = PathBuf::from(&value);
    if value.is_empty() || path.is_absolute() {
        return value;
    }
    match env.current_dir() {
        Some(cwd) => cwd.join(path).display().to_string(),
        None => value,
    }
}

fn save_settings(store: &mut SettingsStore, settings: Settings) -> ExitCode {
    match store.save(settings) {
        Ok(()) => {
            println!("saved {}", store.path().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("warning: could not save settings: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_settings(store: &mut SettingsStore, source: SettingsSource, command: SettingsCommand) -> anyhow::Result<ExitCode> {
    match command {
        SettingsCommand::Show { json } => {
            let report = build_report(store, source);
            if json {
                let text = serde_json::to_string_pretty(&report).context("serializing report")?;
                println!("{text}");
            } else {
                print_report(&report);
            }
            Ok(ExitCode::SUCCESS)
        }
        SettingsCommand::Set { images, record } => {
            let mut edited = store.settings().clone();
            for (kind, value) in [(FolderKind::Images, images), (FolderKind::Record, record)] {
                let Some(value) = value else { continue };
                let value = absolute_folder(store.environment(), value);
                if !value.is_empty() && !PathBuf::from(&value).exists() {
                    warn!(folder = kind.label(), path = %value, "folder does not exist yet");
                }
                edited.set_folder(kind, value);
            }
            Ok(save_settings(store, edited))
        }
        SettingsCommand::Reset => match store.reset_to_default() {
            Ok(defaults) => Ok(save_settings(store, defaults)),
            Err(e) => {
                eprintln!("warning: {e}");
                eprintln!("         {}", e.guidance());
                Ok(ExitCode::FAILURE)
            }
        },
        SettingsCommand::Path => {
            println!("{}", store.path().display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so command output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let env: Arc<dyn Environment> = Arc::new(SystemEnvironment::new());
    let platform = env.platform();
    info!(%platform, "Sky Folder Selector starting");

    let location = cli.settings_location();
    let (mut store, location_error) = SettingsStore::new_or_fallback(&location, Arc::clone(&env));
    if let Some(e) = &location_error {
        eprintln!("warning: {e}; using {}", store.path().display());
    }
    let loaded = store.load();
    if let Some(e) = &loaded.persist_error {
        eprintln!("warning: could not save default settings: {e}");
    }

    let launcher = FolderLauncher::new(native_opener(platform));

    let code = match cli.command {
        Command::Images => report_outcomes(vec![(
            FolderKind::Images,
            launcher.open_kind(&store, FolderKind::Images),
        )]),
        Command::Record => report_outcomes(vec![(
            FolderKind::Record,
            launcher.open_kind(&store, FolderKind::Record),
        )]),
        Command::Both => report_outcomes(launcher.open_all(&store)),
        Command::Settings(command) => run_settings(&mut store, loaded.source, command)?,
    };
    Ok(code)
}
