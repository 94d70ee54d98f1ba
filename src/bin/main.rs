// Command-line catalog browser
//
// This binary:
// - Reads settings from the environment (.env supported)
// - Loads the catalog (a JSON file, or the embedded curated collection)
// - Derives the view for --category / --query / --sort
// - Prints the summary line and the products, as text or JSON

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use robot_finder::catalog::{
    results_summary, Catalog, CategoryFilter, Product, QueryDescriptor, SortKey,
    EMPTY_VIEW_MESSAGE,
};
use robot_finder::config::Settings;
use robot_finder::fixtures::{CatalogFixture, CuratedRobots};

#[derive(Debug, Parser)]
#[command(name = "robot_finder", about = "Browse the curated AI robot catalog")]
struct Args {
    /// Category id to show, or "all"
    #[arg(long, default_value = "all")]
    category: String,

    /// Free-text search over names, descriptions and features
    #[arg(long, default_value = "")]
    query: String,

    /// Sort mode: default, price-low, price-high, rating, reviews
    #[arg(long)]
    sort: Option<String>,

    /// Catalog JSON file (overrides ROBOT_FINDER_CATALOG)
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,

    /// List category tabs with their counts and exit
    #[arg(long)]
    list_categories: bool,

    /// List sort modes and exit
    #[arg(long)]
    list_sorts: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_env();

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(args.catalog.clone().or(settings.catalog_path.clone()))?;

    if args.list_sorts {
        for key in SortKey::ALL {
            println!("{:<12} {}", key.id(), key);
        }
        return Ok(());
    }

    if args.list_categories {
        for category in catalog.categories() {
            let emoji = category.emoji.as_deref().unwrap_or(" ");
            println!("{} {:<10} {:<22} {}", emoji, category.id, category.name, category.count);
        }
        return Ok(());
    }

    let sort = match args.sort.as_deref() {
        Some(id) => SortKey::from_id(id).unwrap_or_else(|| {
            tracing::warn!("Unknown sort mode '{}', keeping catalog order", id);
            SortKey::Default
        }),
        None => settings.default_sort,
    };

    let descriptor = QueryDescriptor::new(CategoryFilter::from(args.category), args.query, sort);
    let view = catalog.view(&descriptor);

    if args.json {
        println!("{}", render_json(&view)?);
        return Ok(());
    }

    println!(
        "{}",
        results_summary(view.len(), &descriptor.category, catalog.categories())
    );
    if view.is_empty() {
        println!("{}", EMPTY_VIEW_MESSAGE);
    }
    for product in view {
        println!("{}", format_line(product));
    }

    Ok(())
}

fn load_catalog(path: Option<std::path::PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            tracing::debug!("No catalog file configured, using the embedded collection");
            CuratedRobots::load().context("Embedded catalog is invalid")
        }
    }
}

fn render_json(view: &[&Product]) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize view")
}

fn format_line(product: &Product) -> String {
    format!(
        "{:>3}  {:<34} {:<16} {:.1}★  {:>6} reviews  {}",
        product.id,
        product.name,
        product.price,
        product.rating,
        product.reviews,
        product.link.as_deref().unwrap_or("-"),
    )
}
