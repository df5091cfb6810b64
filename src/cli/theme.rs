//! Route theme inspection command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::theme::ThemeReport;
use clap::Args;

/// Show the color scheme a route path resolves to
#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Route path (e.g. /ai-automation/case-studies)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Ignore `theme.forced_scheme` from the configuration
    #[arg(long)]
    pub no_override: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ThemeArgs {
    /// Execute the theme command
    pub fn execute(&self) -> CliResult<()> {
        let forced = if self.no_override {
            None
        } else {
            Config::load()
                .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?
                .theme
                .forced_scheme
        };
        let report = ThemeReport::with_override(&self.path, forced);

        if self.json {
            return print_json(&report);
        }

        print_human_readable(&report);
        Ok(())
    }
}

fn print_human_readable(report: &ThemeReport) {
    println!("Path:      {}", report.path);
    if report.forced {
        println!("Scheme:    {} (forced by configuration)", report.scheme);
    } else {
        println!("Scheme:    {}", report.scheme);
    }
    println!(
        "Primary:   {}  ({})",
        report.colors.primary, report.rgb.primary
    );
    println!(
        "Secondary: {}  ({})",
        report.colors.secondary, report.rgb.secondary
    );
    println!("Accent:    {}  ({})", report.colors.accent, report.rgb.accent);
    println!("Dark:      {}  ({})", report.colors.dark, report.rgb.dark);
    println!("Gradient:  {}", report.gradient);
}
