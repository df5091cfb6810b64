//! Focus selection commands backed by the local storage file.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::focus::{FileStore, FocusContext, FocusKey, FocusStorage};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Show or change the stored focus
#[derive(Args, Debug)]
pub struct FocusArgs {
    #[command(subcommand)]
    command: FocusCommand,
}

#[derive(Subcommand, Debug)]
enum FocusCommand {
    /// Display the stored focus
    Show(FocusShowArgs),
    /// Store a focus
    Set(FocusSetArgs),
    /// Remove the stored focus
    Clear,
}

/// Display the stored focus
#[derive(Args, Debug)]
pub struct FocusShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Store a focus
#[derive(Args, Debug)]
pub struct FocusSetArgs {
    /// One of: crm, tee-sheet, ai-ml, web, all-solutions
    #[arg(value_name = "KEY")]
    key: String,
}

#[derive(Serialize, Debug)]
struct FocusOutput {
    focus: Option<FocusKey>,
    label: Option<&'static str>,
    storage: String,
}

impl FocusArgs {
    /// Execute focus subcommand
    pub fn execute(&self) -> CliResult<()> {
        let path = storage_path()?;
        let mut ctx = FocusContext::hydrated(FocusStorage::new(FileStore::new(&path)));

        match &self.command {
            FocusCommand::Show(args) => show(&ctx, &path, args.json),
            FocusCommand::Set(args) => {
                let key: FocusKey = args
                    .key
                    .parse()
                    .map_err(|e| CliError::validation(format!("{e}")))?;
                ctx.set_focus(key);
                ensure_persisted(&ctx, Some(key), &path)?;
                println!("Focus set to {key} ({}).", key.label());
                Ok(())
            }
            FocusCommand::Clear => {
                ctx.clear_focus();
                ensure_persisted(&ctx, None, &path)?;
                println!("Focus cleared.");
                Ok(())
            }
        }
    }
}

fn storage_path() -> CliResult<PathBuf> {
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
    config
        .storage_file()
        .map_err(|e| CliError::io(format!("Failed to resolve storage file: {e}")))
}

/// Storage writes are best-effort; the CLI reads back to report failures.
fn ensure_persisted(
    ctx: &FocusContext<FileStore>,
    expected: Option<FocusKey>,
    path: &std::path::Path,
) -> CliResult<()> {
    if ctx.storage().load() == expected {
        Ok(())
    } else {
        Err(CliError::io(format!(
            "Failed to write focus to {}",
            path.display()
        )))
    }
}

fn show(ctx: &FocusContext<FileStore>, path: &std::path::Path, json: bool) -> CliResult<()> {
    let focus = ctx.focus();

    if json {
        return print_json(&FocusOutput {
            focus,
            label: focus.map(FocusKey::label),
            storage: path.display().to_string(),
        });
    }

    match focus {
        Some(key) => println!("Focus: {key} ({})", key.label()),
        None => println!("Focus: (none)"),
    }
    println!("Storage: {}", path.display());
    Ok(())
}
