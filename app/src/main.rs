#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, ExampleStrategy, ExplainInput, ExplainStrategy, InfoStrategy, InitStrategy,
    InterpretInput, InterpretStrategy, VersionStrategy,
};
use loophole_core::Mode;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "loophole")]
#[command(about = "Regulation interpreter: heuristic summaries of compliance text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an offline report from regulation text
    Explain {
        /// Report mode: neutral, simple, trader or risks
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Text to explain (otherwise --file or stdin)
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also save the report; defaults to the configured output file
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },
    /// Ask the remote model for a structured interpretation
    Interpret {
        /// Text to interpret (otherwise --file or stdin)
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Jurisdiction hint passed to the model
        #[arg(short, long)]
        jurisdiction: Option<String>,

        /// Tone of the explanation
        #[arg(long)]
        tone: Option<String>,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// Print the raw JSON answer
        #[arg(long)]
        json: bool,
    },
    /// Print a sample regulation text
    Example,
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Explain {
            mode,
            text,
            file,
            save,
        } => {
            ExplainStrategy
                .execute(ExplainInput {
                    mode,
                    text,
                    file,
                    save,
                })
                .await
        }
        Commands::Interpret {
            text,
            file,
            jurisdiction,
            tone,
            model,
            json,
        } => {
            InterpretStrategy
                .execute(InterpretInput {
                    text,
                    file,
                    jurisdiction,
                    tone,
                    model,
                    json,
                })
                .await
        }
        Commands::Example => ExampleStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
