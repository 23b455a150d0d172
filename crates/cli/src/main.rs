use anyhow::{Context, Result};
use catalog::{Catalog, Product};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::FilterEngine;
use query::{FilterKey, FilterSpec};
use std::path::{Path, PathBuf};

/// catalog-filter - filter a product catalog with a shareable query string
#[derive(Parser)]
#[command(name = "catalog-filter")]
#[command(about = "Filter a product catalog by category, price, stock and brand", long_about = None)]
struct Cli {
    /// Path to a JSON product catalog (built-in sample when unset)
    #[arg(short, long, env = "CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a query string
    List {
        /// Query string, e.g. "category=Electronics&maxPrice=500"
        #[arg(default_value = "")]
        query: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one field of a query string and print the new query
    Set {
        /// Field to change (category, minPrice, maxPrice, stockAvailable, brand)
        #[arg(value_parser = parse_key)]
        key: FilterKey,

        /// New value; omit or pass "" to clear the field
        #[arg(default_value = "")]
        value: String,

        /// Query string to edit
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Show how a query string decodes and its canonical form
    Show {
        #[arg(default_value = "")]
        query: String,

        /// Print the decoded filter as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the categories present in the catalog
    Categories,
}

fn parse_key(raw: &str) -> Result<FilterKey, query::UnknownKey> {
    raw.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List { query, json } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            handle_list(&catalog, &query, json)?
        }
        Commands::Set { key, value, query } => handle_set(&query, key, &value)?,
        Commands::Show { query, json } => handle_show(&query, json)?,
        Commands::Categories => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            handle_categories(&catalog)
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            tracing::debug!("no catalog path configured, using built-in sample");
            Ok(Catalog::sample())
        }
    }
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, query: &str, json: bool) -> Result<()> {
    let spec = query::decode(query).with_context(|| format!("Malformed query string {query:?}"))?;
    let engine = FilterEngine::new(&spec).context("Cannot apply filter")?;
    let matches = engine.apply(catalog.iter());

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{} of {} products match '{}'", matches.len(), catalog.len(), spec).bold().blue()
    );
    for product in matches {
        print_product(product);
    }
    Ok(())
}

/// Handle the 'set' command
fn handle_set(query: &str, key: FilterKey, value: &str) -> Result<()> {
    let updated = query::update_query(query, key, value)
        .with_context(|| format!("Malformed query string {query:?}"))?;
    println!("{updated}");
    Ok(())
}

/// Handle the 'show' command
fn handle_show(query: &str, json: bool) -> Result<()> {
    let spec = query::decode(query).with_context(|| format!("Malformed query string {query:?}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
    } else {
        print_spec(&spec);
    }

    // Compile too, so a bad brand pattern fails here as it does for 'list'.
    FilterEngine::new(&spec).context("Cannot apply filter")?;
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    for category in catalog.categories() {
        println!("{}", category);
    }
}

fn print_spec(spec: &FilterSpec) {
    println!("{}", "Filter:".bold().blue());
    for key in FilterKey::ALL {
        let value = match key {
            FilterKey::Category => spec.category.as_deref().map(|v| format!("{v:?}")),
            FilterKey::Brand => spec.brand.as_deref().map(|v| format!("/{v}/i")),
            FilterKey::MinPrice => spec.min_price.map(|v| v.to_string()),
            FilterKey::MaxPrice => spec.max_price.map(|v| v.to_string()),
            FilterKey::StockAvailable => spec.stock_available.map(|v| v.to_string()),
        };
        match value {
            Some(value) => println!("{}{}: {}", "• ".green(), key, value),
            None => println!("{}{}: {}", "• ".dimmed(), key, "(any)".dimmed()),
        }
    }
    println!("{} {}", "Canonical:".bold(), spec);
}

fn print_product(product: &Product) {
    let stock = if product.in_stock() {
        format!("{} in stock", product.stock).green()
    } else {
        "out of stock".red()
    };
    println!(
        "{}. {} [{}] {} - {:.2} ({})",
        product.id.to_string().green(),
        product.name,
        product.category,
        product.brand,
        product.price,
        stock
    );
}
