use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-fix")]
#[command(about = "Menu data maintenance: ingredient correction and resale price derivation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print per-record corrections, match scores and rejections
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Correct ingredient data and derive resale buying prices
    Correct {
        /// Menu document (defaults to the configured path, then ./menus.json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Report output path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Run both passes and write the report without touching the document
        #[arg(long)]
        dry_run: bool,
    },

    /// Refresh ingredient costs from a wholesale price list CSV
    Refresh {
        /// Price list CSV (ingredient, category, unit, VAT-inclusive price)
        #[arg(short, long, required = true)]
        prices: PathBuf,

        /// Extra ingredient-name aliases (JSON object, alias -> supplier name)
        #[arg(short, long)]
        aliases: Option<PathBuf>,

        /// Menu document
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Report output path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Backfill item descriptions from a dish lexicon
    Describe {
        /// Lexicon JSON: array of {name, description}
        #[arg(short, long, required = true)]
        lexicon: PathBuf,

        /// Menu document
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Report output path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Repair document shape: recipe flags, default buying prices, bulk units
    Fix {
        /// Menu document
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Report output path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Show or edit tool configuration
    Config {
        /// Set the default menu document path
        #[arg(long)]
        set_file: Option<PathBuf>,

        /// Set the directory run reports are written into
        #[arg(long)]
        set_report_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
