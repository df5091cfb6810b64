//! Configuration CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    server: ServerOutput,
    content: ContentOutput,
    theme: ThemeOutput,
    scheduling: SchedulingOutput,
    storage: StorageOutput,
}

#[derive(Serialize, Debug)]
struct ServerOutput {
    host: String,
    port: u16,
}

#[derive(Serialize, Debug)]
struct ContentOutput {
    /// `None` means the embedded bundles are used
    dir: Option<String>,
}

#[derive(Serialize, Debug)]
struct ThemeOutput {
    forced_scheme: Option<String>,
}

#[derive(Serialize, Debug)]
struct SchedulingOutput {
    url: String,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    file: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let output = ConfigOutput::from_config(&config)?;

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigOutput {
    fn from_config(config: &Config) -> CliResult<Self> {
        let storage = config
            .storage_file()
            .map_err(|e| CliError::io(format!("Failed to resolve storage file: {e}")))?;

        Ok(Self {
            server: ServerOutput {
                host: config.server.host.clone(),
                port: config.server.port,
            },
            content: ContentOutput {
                dir: config
                    .content
                    .dir
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            theme: ThemeOutput {
                forced_scheme: config.theme.forced_scheme.map(|key| key.to_string()),
            },
            scheduling: SchedulingOutput {
                url: config.scheduling.url.clone(),
            },
            storage: StorageOutput {
                file: storage.to_string_lossy().to_string(),
            },
        })
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Lumen Site Configuration");
    println!("========================");
    println!();

    println!("Server:");
    println!("  Address: {}:{}", output.server.host, output.server.port);
    println!();

    println!("Content:");
    match &output.content.dir {
        Some(dir) => println!("  Directory: {dir}"),
        None => println!("  Directory: (embedded bundles)"),
    }
    println!();

    println!("Theme:");
    match &output.theme.forced_scheme {
        Some(key) => println!("  Forced Scheme: {key}"),
        None => println!("  Forced Scheme: (route-derived)"),
    }
    println!();

    println!("Scheduling:");
    println!("  URL: {}", output.scheduling.url);
    println!();

    println!("Storage:");
    println!("  File: {}", output.storage.file);
}
