//! doctypegen CLI - Rust model generator for DocType schemas
//!
//! Commands:
//! - `doctypegen generate` - Generate a Rust struct from a DocType JSON export
//! - `doctypegen check` - Validate that a DocType export can be generated

use clap::{Parser, Subcommand};
use doctypegen_cli::{Config, logging};
use std::path::PathBuf;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "doctypegen")]
#[command(author, version, about = "Generate Rust models from DocType schemas", long_about = None)]
struct Cli {
    /// Path to doctypegen.toml (default: ./doctypegen.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Rust struct from a DocType JSON export
    Generate {
        /// Path to the DocType JSON export
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the generated model (default: ./models)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the model to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Leave out doc comments built from descriptions
        #[arg(long)]
        no_docs: bool,
    },

    /// Validate that a DocType export can be generated
    Check {
        /// Path to the DocType JSON export
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;
    logging::init_logging(&config.logging.level);

    match cli.command {
        Commands::Generate {
            input,
            output,
            stdout,
            no_docs,
        } => {
            let args = generate::GenerateArgs {
                input,
                output,
                stdout,
                no_docs,
            };
            generate::run(&args, &config)?;
        }
        Commands::Check { input } => {
            check::run(&input)?;
        }
    }

    Ok(())
}
