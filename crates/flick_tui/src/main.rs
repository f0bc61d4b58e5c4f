//! Flick - terminal movie browser
//!
//! A standalone application for browsing a movie catalog. Provides:
//! - Card list with title, rating, and poster reference
//! - Minimum-rating filter driven by a slider-style control
//! - Runtime language switching for every fixed UI string (en, fr, ar)
//! - A placeholder watch action that raises a blocking notice

mod app;
mod config;
mod panels;
mod theme;
mod ui;


use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flick_core::{CatalogProvider, StaticCatalog, StubWatchHandler};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::FlickConfig;

/// Terminal movie browser
#[derive(Parser, Debug)]
#[command(name = "flick")]
#[command(about = "Browse a movie catalog by minimum rating")]
#[command(version)]
struct Args {
    /// Startup language code (en, fr, ar)
    #[arg(short, long)]
    lang: Option<String>,

    /// Startup minimum-rating threshold (0-10)
    #[arg(short, long)]
    min_rating: Option<f64>,

    /// JSON catalog file instead of the built-in sample
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Configuration file (default: flick.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Startup values after applying precedence: CLI flag over config file
/// over built-in default.
struct Startup {
    language: String,
    min_rating: f64,
    catalog_path: Option<PathBuf>,
}

fn resolve_startup(args: Args, config: &FlickConfig) -> Startup {
    Startup {
        language: args.lang.unwrap_or_else(|| config.ui.language.clone()),
        min_rating: args.min_rating.unwrap_or(config.ui.min_rating),
        catalog_path: args.catalog.or_else(|| config.catalog.path.clone()),
    }
}

fn main() -> Result<()> {
    // Quiet unless RUST_LOG asks for output. Logs go to stderr, so pipe it
    // to a file to capture them without tearing the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = Args::parse();

    let (config_path, explicit) = match args.config.take() {
        Some(path) => (path, true),
        None => (PathBuf::from("flick.toml"), false),
    };
    let config = FlickConfig::load(&config_path, explicit)?;
    let startup = resolve_startup(args, &config);

    let catalog = match &startup.catalog_path {
        Some(path) => StaticCatalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => StaticCatalog::sample(),
    };

    tracing::info!(
        "starting flick with {} movies, language {}",
        catalog.movies().len(),
        startup.language
    );

    let app = App::new(
        Box::new(catalog),
        Box::new(StubWatchHandler),
        &startup.language,
        startup.min_rating,
    );

    let terminal = ratatui::init();
    let result = app::run(terminal, app);
    ratatui::restore();
    result
}
