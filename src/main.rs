//! pf-classmap - Class-map generation for PatternFly-style CSS distributions
//!
//! Main entry point for the CLI.
//!
//! # Overview
//!
//! This binary scans two stylesheet trees - a distributed style package and
//! a local source CSS tree - and emits a JSON index mapping each stylesheet
//! path to its class map (semantic keys to versioned class names, with
//! modifier classes nested under a `modifiers` key). The index feeds
//! downstream code generation that emits per-file lookup modules.
//!
//! # Execution Flow
//!
//! 1. Initialize logging -> logs/pf-classmap.<date>
//! 2. Load `classmap.yaml` from the config directory (defaults if absent)
//! 3. Apply CLI overrides for the styles and source CSS directories
//! 4. Run the generator over both trees
//! 5. Write the index as pretty JSON to `--out`, or stdout
//!
//! # Configuration File
//!
//! `classmap.yaml` holds the CSS version tag, the style-tree locations, and
//! the unreadable-file policy (`fail` aborts the run, `skip` logs and omits
//! the file).

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use pf_classmap::{APP_NAME, ClassMapGenerator, ConfigManager, VERSION};
use std::fs;

#[derive(Debug, Parser)]
#[command(name = "pf-classmap", version, about = "Generate class-name lookup maps from CSS distributions")]
struct Cli {
    /// Directory containing classmap.yaml
    #[arg(long, default_value = ".")]
    config_dir: Utf8PathBuf,

    /// Root of the distributed style package (overrides the config file)
    #[arg(long)]
    styles_dir: Option<Utf8PathBuf>,

    /// Local source CSS tree (overrides the config file)
    #[arg(long)]
    src_css_dir: Option<Utf8PathBuf>,

    /// Write the JSON index to this file instead of stdout
    #[arg(short, long)]
    out: Option<Utf8PathBuf>,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console layer goes to stderr, so stdout stays clean for the index
    let _guard =
        pf_classmap::logging::setup_logging_with_console("logs", "pf-classmap", cli.debug, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Load configuration
    let config_manager = ConfigManager::new(&cli.config_dir)?;
    let config = config_manager.load_config()?;
    let settings = config.classmap_settings;

    // CLI overrides win over the config file; the generator itself never
    // resolves installed packages
    let styles_dir = cli
        .styles_dir
        .unwrap_or_else(|| Utf8PathBuf::from(&settings.styles_dir));
    let src_css_dir = cli
        .src_css_dir
        .unwrap_or_else(|| Utf8PathBuf::from(&settings.src_css_dir));

    tracing::info!(
        "Generating class maps: styles_dir={}, src_css_dir={}, version_tag=v{}",
        styles_dir,
        src_css_dir,
        settings.css_version
    );

    let generator = ClassMapGenerator::new(&settings);
    let report = generator.generate(&styles_dir, &src_css_dir)?;

    tracing::info!(
        "Generation complete in {:.2?}: {}",
        report.duration,
        report.stats.summary()
    );

    let json = serde_json::to_string_pretty(&report.index)
        .context("Failed to serialize class-map index")?;

    match &cli.out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write class-map index: {}", path))?;
            tracing::info!("Wrote class-map index to {}", path);
        }
        None => println!("{json}"),
    }

    Ok(())
}
