//! docgrid — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use docgrid_cli::config::Settings;
use docgrid_cli::pipeline;

#[derive(Parser)]
#[command(
    name = "docgrid",
    about = "docgrid — print the character grid encoded in a published document's tables",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// URL of the published document (falls back to DOCGRID_URL).
    url: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, default_value = "30000", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: u64,

    /// Override the HTTP User-Agent header.
    #[arg(long)]
    user_agent: Option<String>,

    /// Print the grid as JSON instead of the text canvas.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   docgrid completions bash > ~/.local/share/bash-completion/completions/docgrid
    ///   docgrid completions zsh > ~/.zfunc/_docgrid
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "docgrid", &mut std::io::stdout());
        return Ok(());
    }

    let result = run(&cli).await;

    // 0 = rendered (or nothing to render), 1 = error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::from_args(
        cli.url.as_deref(),
        cli.timeout_ms,
        cli.user_agent.as_deref(),
        cli.json,
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pipeline::run(&settings, &mut out).await?;
    Ok(())
}
