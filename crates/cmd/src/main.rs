// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use folio::{PageRegistry, ProjectCatalog, SiteConfig, build_site, check_site};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "folio")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the complete static site
    Build {
        /// Output directory for generated files
        #[arg(default_value = "dist")]
        output_dir: PathBuf,
        /// Directory holding site.yaml, pages, and static assets
        #[arg(short, long, default_value = "site")]
        site: PathBuf,
    },
    /// Validate the site config and catalog without writing output
    Check {
        /// Directory holding site.yaml, pages, and static assets
        #[arg(short, long, default_value = "site")]
        site: PathBuf,
    },
}

fn load_site(site_dir: &Path) -> Result<(SiteConfig, ProjectCatalog, PageRegistry)> {
    let config = SiteConfig::load(site_dir)
        .with_context(|| format!("loading site config from {:?}", site_dir))?;
    let catalog = ProjectCatalog::new(config.projects.clone()).context("building catalog")?;
    let registry =
        PageRegistry::build(&config, &catalog, site_dir).context("building page registry")?;
    Ok((config, catalog, registry))
}

fn build_command(site_dir: &Path, output_dir: &Path) -> Result<()> {
    let (config, catalog, registry) = load_site(site_dir)?;
    let year = chrono::Utc::now().year();
    let summary = build_site(&config, &catalog, &registry, site_dir, output_dir, year)
        .context("site build failed")?;
    println!(
        "Built {} pages and copied {} assets to {}",
        summary.pages_written,
        summary.assets_copied,
        output_dir.display()
    );
    Ok(())
}

fn check_command(site_dir: &Path) -> Result<()> {
    let (config, catalog, registry) = load_site(site_dir)?;
    let report = check_site(&config, &catalog, &registry).context("site check failed")?;
    println!(
        "OK: {} pages, {} projects, no dangling links",
        report.pages, report.projects
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        Commands::Build { output_dir, site } => build_command(site, output_dir),
        Commands::Check { site } => check_command(site),
    }
}
