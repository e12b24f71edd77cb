//! Core services for class-map generation.
//!
//! - [`extract`]: lexical extraction of class selector tokens from CSS text
//! - [`naming`]: prefix stripping and semantic key derivation
//! - [`generate`]: stylesheet discovery and class-map index generation

pub mod extract;
pub mod generate;
pub mod naming;

pub use extract::SelectorExtractor;
pub use generate::{ClassMapGenerator, GenerateError, GenerationReport, GenerationStats};
pub use naming::{KeyDeriver, MODIFIER_PREFIX, PrefixTag, is_modifier};
