//! protodump CLI - JSON and literal-dump code generator
//!
//! Commands:
//! - `protodump generate` - Generate `impl` blocks for every message in a schema
//! - `protodump check` - Validate a schema and report which messages can be generated

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "protodump")]
#[command(author, version, about = "Generate JSON and literal-dump routines for protobuf messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for every message type in a schema
    Generate {
        /// Path to the schema document (.json or .toml)
        #[arg(short, long)]
        schema: String,

        /// Path to a protodump.toml generator configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Directory to write one file per message into (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a schema and dry-run generation for each message
    Check {
        /// Path to the schema document (.json or .toml)
        #[arg(short, long)]
        schema: String,

        /// Path to a protodump.toml generator configuration
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries generated code
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            config,
            output,
        } => {
            generate::run(&schema, config.as_deref(), output.as_deref())?;
        }
        Commands::Check { schema, config } => {
            check::run(&schema, config.as_deref())?;
        }
    }

    Ok(())
}
