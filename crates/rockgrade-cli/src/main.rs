//! rockgrade CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::Pair;

#[derive(Parser)]
#[command(
    name = "rockgrade",
    version,
    about = "Rock classification and blast quality assessment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog TOML files
    Validate {
        /// Path to catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Score blast quality criteria
    Evaluate {
        /// Catalog file (default: search rockgrade.toml, then the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Criterion choice as name=value, applied in order (repeatable)
        #[arg(long = "select", value_parser = commands::parse_pair)]
        selections: Vec<Pair>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Classify a rock specimen into one exclusive group
    Classify {
        /// Catalog file (default: search rockgrade.toml, then the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Rock type service response (JSON) replacing the catalog groups
        #[arg(long)]
        records: Option<PathBuf>,

        /// Group choice as group=value, applied in order (repeatable)
        #[arg(long = "select", value_parser = commands::parse_pair)]
        selections: Vec<Pair>,
    },

    /// Look up a uniaxial compressive strength band
    Strength {
        /// Strength in MPa
        #[arg(long, conflicts_with = "band")]
        value: Option<f64>,

        /// Band index (0 = strongest)
        #[arg(long)]
        band: Option<usize>,
    },

    /// Create a starter catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rockgrade=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Evaluate {
            catalog,
            selections,
            format,
        } => commands::evaluate::execute(catalog, selections, format),
        Commands::Classify {
            catalog,
            records,
            selections,
        } => commands::classify::execute(catalog, records, selections),
        Commands::Strength { value, band } => commands::strength::execute(value, band),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
