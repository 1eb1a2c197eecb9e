//! memverse CLI — scripture memorization drills on the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "memverse",
    version,
    about = "Memorize scripture by hiding one word at a time"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drill a passage until every word is hidden
    Drill {
        /// Scripture reference, e.g. "John 3:16" (prompted if omitted)
        #[arg(long, conflicts_with = "passage")]
        reference: Option<String>,

        /// Passage text (prompted if omitted)
        #[arg(long, conflicts_with = "passage")]
        text: Option<String>,

        /// Drill a passage from the library by id
        #[arg(long)]
        passage: Option<String>,

        /// Passage library file or directory
        #[arg(long)]
        library: Option<PathBuf>,

        /// Seed for reproducible word order
        #[arg(long)]
        seed: Option<u64>,

        /// Words to hide per round
        #[arg(long)]
        words_per_step: Option<usize>,

        /// Hide words without waiting for Enter
        #[arg(long)]
        auto: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List passages in a library
    List {
        /// Passage library file or directory
        #[arg(long)]
        library: Option<PathBuf>,

        /// Only show passages with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate passage library TOML files
    Validate {
        /// Path to library file or directory
        #[arg(long)]
        library: PathBuf,
    },

    /// Create starter config and example passage library
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memverse=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Drill {
            reference,
            text,
            passage,
            library,
            seed,
            words_per_step,
            auto,
            config,
        } => commands::drill::execute(commands::drill::DrillArgs {
            reference,
            text,
            passage,
            library,
            seed,
            words_per_step,
            auto,
            config,
        }),
        Commands::List {
            library,
            tag,
            format,
            config,
        } => commands::list::execute(library, tag, format, config),
        Commands::Validate { library } => commands::validate::execute(library),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
