use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowscout::{ConfigLoader, ContentProvider, FlowAccessClient, GithubClient, Processor, Result};

#[derive(Parser)]
#[command(name = "flowscout")]
#[command(
    version,
    about = "Repository manifest extractor for Cadence projects on Flow"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, short, help = "Only log errors")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce the contract manifest of a repository
    Process {
        #[arg(help = "Repository owner")]
        owner: String,
        #[arg(help = "Repository name")]
        repo: String,
        #[arg(
            long,
            short,
            default_value = "testnet",
            help = "Target network: testnet or mainnet"
        )]
        network: String,
        #[arg(long, env = "GITHUB_TOKEN", help = "GitHub API token")]
        token: Option<String>,
        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },

    /// Print the latest revision of a repository (cache fingerprint input)
    Revision {
        #[arg(help = "Repository owner")]
        owner: String,
        #[arg(help = "Repository name")]
        repo: String,
        #[arg(long, env = "GITHUB_TOKEN", help = "GitHub API token")]
        token: Option<String>,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "flowscout=debug"
    } else {
        "flowscout=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // Logs go to stderr; stdout carries the JSON result.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Process {
            owner,
            repo,
            network,
            token,
            pretty,
        } => {
            let mut config = ConfigLoader::load()?;
            if token.is_some() {
                config.github.token = token;
            }

            let processor = Processor::new(
                Arc::new(GithubClient::new(&config.github)?),
                Arc::new(FlowAccessClient::new(&config.flow)?),
            );

            let result = processor.process(&owner, &repo, &network).await?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{rendered}");
            Ok(())
        }

        Commands::Revision { owner, repo, token } => {
            let mut config = ConfigLoader::load()?;
            if token.is_some() {
                config.github.token = token;
            }

            let client = GithubClient::new(&config.github)?;
            let revision = client.latest_revision(&owner, &repo).await?;
            println!("{revision}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "request failed");
            ExitCode::FAILURE
        }
    }
}
