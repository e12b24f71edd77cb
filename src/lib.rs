// pf-classmap - Class-map generation for PatternFly-style CSS distributions
//
// This is the library crate containing the extraction, naming, and generation
// logic. The binary crate (main.rs) provides the CLI entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{ClassMap, ClassMapIndex, GeneratorConfig, GeneratorSettings, UnreadablePolicy};
pub use services::{ClassMapGenerator, GenerationReport, GenerationStats};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
