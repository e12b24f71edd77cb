//! Data models for the pf-classmap generator.
//!
//! This module contains the core data structures used throughout the tool:
//! - [`ClassMap`]: per-stylesheet lookup table of semantic keys to versioned class names
//! - [`ClassMapIndex`]: the full output of one generation run, keyed by normalized file path
//! - [`GeneratorConfig`]: settings loaded from `classmap.yaml`
//! - [`UnreadablePolicy`]: abort-or-skip policy for unreadable stylesheets
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: config structs round-trip through YAML; class maps serialize to JSON
//! - **Deterministic**: map key order is fixed by explicit sorting, never by scan order
//! - **Immutable after construction**: a [`ClassMap`] is sorted once and then only read

pub mod class_map;
pub mod config;

pub use class_map::{ClassMap, ClassMapIndex};
pub use config::{GeneratorConfig, GeneratorSettings, UnreadablePolicy};
