use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use catalogo::app::{AppContext, CatalogError};
use catalogo::cli::{commands, Cli, Commands};
use catalogo::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable with --json
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.url.clone() {
        config.feed.url = url;
    }

    let ctx = AppContext::new(config)?;

    let result = tokio::select! {
        result = run(&ctx, &cli) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, abandoning fetch");
            return Ok(());
        }
    };

    if let Err(e) = &result {
        if e.is_transient() {
            eprintln!("The catalog is temporarily unavailable. Please try again later.");
        }
    }

    result.map_err(Into::into)
}

async fn run(ctx: &AppContext, cli: &Cli) -> Result<(), CatalogError> {
    match &cli.command {
        Commands::Products => commands::list_products(ctx, cli.json).await,
        Commands::Search { term } => commands::search(ctx, term, cli.json).await,
        Commands::Product { index } => commands::show_product(ctx, *index, cli.json).await,
        Commands::Categories => commands::list_categories(ctx, cli.json).await,
        Commands::Category { name } => commands::list_category(ctx, name, cli.json).await,
    }
}
