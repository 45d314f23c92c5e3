use anyhow::Result;
use clap::{Parser, Subcommand};
use recetario::cli::{analyze_command, batch_command, OutputFormat};
use std::path::PathBuf;

/// recetario - Recipe compatibility analysis
#[derive(Parser)]
#[command(name = "recetario")]
#[command(about = "Analyze recipes against a user's health profile", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one recipe against a user profile
    Analyze {
        /// Recipe JSON file
        #[arg(long)]
        recipe: PathBuf,

        /// Profile JSON file (omit for an unauthenticated user)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Render one compact risk badge per recipe in a list
    Batch {
        /// JSON file holding an array of recipes
        #[arg(long)]
        recipes: PathBuf,

        /// Profile JSON file (omit for an unauthenticated user)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = recetario::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    recetario::observability::init_observability(
        "recetario",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Analyze {
            recipe,
            profile,
            format,
        } => analyze_command(config, recipe, profile, format)?,
        Commands::Batch {
            recipes,
            profile,
            format,
        } => batch_command(config, recipes, profile, format)?,
    }

    Ok(())
}
