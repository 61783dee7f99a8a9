// ABOUTME: Smart Recipe CLI - scales recipes and estimates nutrition from the command line
// ABOUTME: Loads the reference dataset once and prints results as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Scale a recipe to 4 servings
//! smart-recipe scale --recipe "Pongal" --servings 4
//!
//! # Scale using a Tamil recipe name, pretty-printed
//! smart-recipe --pretty scale --recipe "பொங்கல்" --servings 6
//!
//! # Nutrition with Hindi nutrient names
//! smart-recipe nutrition --recipe "Dal Tadka" --lang hn
//!
//! # Use a specific dataset directory with debug logs
//! smart-recipe --data-dir ./data -v scale --recipe "Kheer" --servings 3
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use smart_recipe::config::AppConfig;
use smart_recipe::dataset::ReferenceContext;
use smart_recipe::errors::AppResult;
use smart_recipe::logging::LoggingConfig;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "smart-recipe",
    about = "Smart Recipe scaling CLI",
    long_about = "Scale multilingual recipes to a new number of servings and estimate their nutrition."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dataset directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Scale a recipe to a new number of servings
    Scale {
        /// Recipe name in any supported language
        #[arg(long)]
        recipe: String,

        /// Target number of servings
        #[arg(long, allow_negative_numbers = true)]
        servings: i64,
    },

    /// Total nutrition of a recipe at its base servings
    Nutrition {
        /// Recipe name in any supported language
        #[arg(long)]
        recipe: String,

        /// Language code for nutrient names (defaults to the recipe's language)
        #[arg(long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug")
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            commands::print_error(e)
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    info!(data_dir = %config.data_dir.display(), "Smart Recipe CLI");

    let ctx = Arc::new(ReferenceContext::from_directory(&config.data_dir, config.scaling).await?);

    match cli.command {
        Command::Scale { recipe, servings } => {
            commands::scale::run(&ctx, &recipe, servings, cli.pretty)
        }
        Command::Nutrition { recipe, lang } => {
            commands::nutrition::run(&ctx, &recipe, lang.as_deref(), cli.pretty)
        }
    }
}
