pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalogo")]
#[command(about = "Browse a product catalog published as an Atom feed", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/catalogo/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Feed URL, overriding the configured one
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every product in the feed
    Products,
    /// Find products whose title or summary contains a term
    Search {
        /// Term to look for, case-insensitive
        term: String,
    },
    /// Show the product at a position in the feed
    Product {
        /// Zero-based position
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// List the categories present in the feed
    Categories,
    /// List the products in one category
    Category {
        /// Category name, case-insensitive
        name: String,
    },
}
