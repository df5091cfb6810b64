//! Lumen Site - marketing site server and content tooling
//!
//! `lumen-site serve` runs the themed web server; the other subcommands
//! inspect route theming, the stored focus, content bundles and the
//! configuration from the command line.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumen_site::cli::{
    CliError, CliResult, ConfigArgs, ContentArgs, ExitCode, FocusArgs, ThemeArgs,
};

/// Lumen Site - themed marketing site with focus personalization
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server
    Serve(ServeArgs),
    /// Show the color scheme a route path resolves to
    Theme(ThemeArgs),
    /// Show or change the stored focus
    Focus(FocusArgs),
    /// Inspect and check content bundles
    Content(ContentArgs),
    /// Show configuration
    Config(ConfigArgs),
}

/// Run the web server
#[derive(Args, Debug)]
struct ServeArgs {
    /// Host to bind to (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory of content bundles (overrides content.dir)
    #[arg(long, value_name = "DIR")]
    content_dir: Option<PathBuf>,
}

fn init_tracing(verbose: bool, serving: bool) {
    let filter = match (verbose, serving) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, matches!(cli.command, Command::Serve(_)));

    let result = match &cli.command {
        Command::Serve(args) => serve(args),
        Command::Theme(args) => args.execute(),
        Command::Focus(args) => args.execute(),
        Command::Content(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
    std::process::exit(ExitCode::Success.code());
}

#[cfg(feature = "web")]
fn serve(args: &ServeArgs) -> CliResult<()> {
    use lumen_site::branding::SITE_DISPLAY_NAME;
    use lumen_site::config::Config;
    use std::net::SocketAddr;

    let mut config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = &args.content_dir {
        config.content.dir = Some(dir.clone());
    }
    config
        .validate()
        .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| CliError::validation(format!("Invalid listen address: {e}")))?;

    tracing::info!("{} v{}", SITE_DISPLAY_NAME, env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

    runtime
        .block_on(lumen_site::web::run_server(config, addr))
        .map_err(|e| CliError::io(format!("Server error: {e:#}")))
}

#[cfg(not(feature = "web"))]
fn serve(_args: &ServeArgs) -> CliResult<()> {
    Err(CliError::validation(
        "This build does not include the web server; rebuild with `--features web`",
    ))
}
