//! Content bundle commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::content::{ContentLibrary, FocusContent};
use crate::focus::FocusKey;
use crate::render::Icon;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// Inspect and check focus content bundles
#[derive(Args, Debug)]
pub struct ContentArgs {
    #[command(subcommand)]
    command: ContentCommand,
}

#[derive(Subcommand, Debug)]
enum ContentCommand {
    /// Print the bundle for a focus key
    Show(ContentShowArgs),
    /// Validate every bundle
    Check(ContentCheckArgs),
}

/// Print the bundle for a focus key
#[derive(Args, Debug)]
pub struct ContentShowArgs {
    /// Focus key
    #[arg(value_name = "KEY")]
    key: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Validate every bundle
#[derive(Args, Debug)]
pub struct ContentCheckArgs {
    /// Bundle directory (defaults to the configured or embedded bundles)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct CheckReport {
    valid: bool,
    bundles: Vec<FocusKey>,
    missing: Vec<FocusKey>,
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ContentArgs {
    /// Execute content subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ContentCommand::Show(args) => args.execute(),
            ContentCommand::Check(args) => args.execute(),
        }
    }
}

impl ContentShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let key: FocusKey = self
            .key
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let library = configured_library()?;
        let Some(content) = library.resolve(Some(key)) else {
            return Err(CliError::validation(format!(
                "No content bundle for focus '{key}'"
            )));
        };

        if self.json {
            return print_json(content);
        }

        print_human_readable(content);
        Ok(())
    }
}

impl ContentCheckArgs {
    /// Execute check command
    pub fn execute(&self) -> CliResult<()> {
        let loaded = match &self.dir {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(CliError::io(format!(
                        "Content directory not found: {}",
                        dir.display()
                    )));
                }
                ContentLibrary::from_dir(dir)
            }
            None => ContentLibrary::embedded(),
        };

        let report = match loaded {
            Ok(library) => {
                let bundles: Vec<FocusKey> = library.keys().collect();
                let missing = FocusKey::ALL
                    .into_iter()
                    .filter(|key| !bundles.contains(key))
                    .collect();
                let warnings = bundles
                    .iter()
                    .filter_map(|key| library.resolve(Some(*key)))
                    .flat_map(icon_warnings)
                    .collect();
                CheckReport {
                    valid: true,
                    bundles,
                    missing,
                    warnings,
                    error: None,
                }
            }
            Err(err) => CheckReport {
                valid: false,
                bundles: Vec::new(),
                missing: Vec::new(),
                warnings: Vec::new(),
                error: Some(err.to_string()),
            },
        };

        if self.json {
            print_json(&report)?;
        } else {
            for warning in &report.warnings {
                println!("warning: {warning}");
            }
            if report.valid {
                let names: Vec<&str> = report.bundles.iter().map(|k| k.as_str()).collect();
                println!("✓ {} bundle(s) valid: {}", names.len(), names.join(", "));
            }
        }

        match report.error {
            Some(error) => Err(CliError::validation(format!(
                "Content check failed: {error}"
            ))),
            None => Ok(()),
        }
    }
}

fn configured_library() -> CliResult<ContentLibrary> {
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
    config
        .content_library()
        .map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Icon names in a bundle that will render as the fallback icon.
fn icon_warnings(content: &FocusContent) -> Vec<String> {
    content
        .capabilities
        .iter()
        .filter(|tile| Icon::lookup(&tile.icon).is_none())
        .map(|tile| {
            warn!(focus = %content.focus, icon = %tile.icon, "unknown icon name");
            format!(
                "{}: capability '{}' uses unknown icon '{}' (renders as '{}')",
                content.focus,
                tile.title,
                tile.icon,
                Icon::FALLBACK.name()
            )
        })
        .collect()
}

fn print_human_readable(content: &FocusContent) {
    println!("{} ({})", content.seo.title, content.focus);
    println!("{}", "=".repeat(content.seo.title.len()));
    println!();
    println!("{}", content.hero.subline);
    println!();

    if !content.bullets.is_empty() {
        for bullet in &content.bullets {
            println!("  • {bullet}");
        }
        println!();
    }

    if !content.capabilities.is_empty() {
        println!("Capabilities:");
        for tile in &content.capabilities {
            println!("  [{}] {}: {}", tile.icon, tile.title, tile.summary);
        }
        println!();
    }

    if !content.outcomes.is_empty() {
        println!("Outcomes:");
        for outcome in &content.outcomes {
            println!(
                "  {}{} {} ({})",
                outcome.value,
                outcome.unit.as_deref().unwrap_or_default(),
                outcome.description,
                outcome.timeframe
            );
        }
        println!();
    }

    if !content.modules.is_empty() {
        println!("Modules: {}", content.modules.join(", "));
    }
}
