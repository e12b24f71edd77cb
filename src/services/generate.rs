use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;
use std::fs;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::models::{ClassMap, ClassMapIndex, GeneratorSettings, UnreadablePolicy};
use crate::services::extract::SelectorExtractor;
use crate::services::naming::{KeyDeriver, is_modifier};

/// Distribution subdirectories whose stylesheets are never scanned.
const EXCLUDED_DIST_DIRS: [&str; 2] = ["assets", "base"];

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub index: ClassMapIndex,
    pub stats: GenerationStats,
    pub duration: Duration,
}

/// Statistics from a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub base_classes: usize,
    pub modifier_classes: usize,
}

impl GenerationStats {
    /// Get a summary string of what was generated
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} files", self.files_scanned)];

        if self.files_skipped > 0 {
            parts.push(format!("{} skipped", self.files_skipped));
        }
        parts.push(format!("{} base classes", self.base_classes));
        parts.push(format!("{} modifier classes", self.modifier_classes));

        parts.join(", ")
    }
}

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Unreadable stylesheet: {path}")]
    UnreadableFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid discovery pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Non-UTF-8 stylesheet path: {0}")]
    NonUtf8Path(String),
}

/// Service that scans stylesheet trees and produces a [`ClassMapIndex`].
///
/// Two trees are scanned per run: the distributed style package (with its
/// `assets/`, `base/`, and top-level aggregate files excluded) and the local
/// source CSS tree. Both directories are explicit inputs resolved by the
/// caller. The per-file transformation is pure, so the index contents depend
/// only on the file set and the stylesheet text, never on scan order.
///
/// # Design Philosophy
///
/// - **Stateless**: no state is retained between `generate` calls
/// - **Deterministic**: distinct raw tokens, then sorted keys, then sorted paths
/// - **Best-effort scanning**: malformed CSS is never an error, only unreadable files are
pub struct ClassMapGenerator {
    extractor: SelectorExtractor,
    key_deriver: KeyDeriver,
    css_version: u32,
    unreadable_files: UnreadablePolicy,
}

impl ClassMapGenerator {
    /// Create a new ClassMapGenerator from generator settings.
    pub fn new(settings: &GeneratorSettings) -> Self {
        Self {
            extractor: SelectorExtractor::new(),
            key_deriver: KeyDeriver::new(),
            css_version: settings.css_version,
            unreadable_files: settings.unreadable_files,
        }
    }

    /// Build the class map for a single stylesheet.
    ///
    /// Extracts all selector tokens, collapses them to the distinct raw
    /// token set, derives (key, versioned class name) pairs, routes them
    /// into the base or modifier map, and sorts both maps' keys. Malformed
    /// CSS never fails; it yields best-effort (possibly empty) output.
    ///
    /// The distinct set preserves first-appearance order, so when two raw
    /// tokens derive the same key the later token wins deterministically.
    pub fn build_class_map(&self, css_text: &str) -> ClassMap {
        let distinct: IndexSet<&str> = self.extractor.extract(css_text).into_iter().collect();

        let mut class_map = ClassMap::default();
        for token in distinct {
            let key = self.key_deriver.derive_key(token);
            let class_name = format!(
                "{}-v{}",
                token.trim_start_matches('.').trim(),
                self.css_version
            );

            if is_modifier(token) {
                class_map.insert_modifier(key, class_name);
            } else {
                class_map.insert_base(key, class_name);
            }
        }

        class_map.sort_keys();
        class_map
    }

    /// Generate the class-map index for the configured stylesheet trees.
    ///
    /// # Arguments
    /// * `styles_dir` - Root of the distributed style package
    /// * `src_css_dir` - Local source CSS tree
    ///
    /// # Errors
    ///
    /// Fails on an invalid discovery pattern, or on an unreadable stylesheet
    /// when the unreadable-file policy is [`UnreadablePolicy::Fail`]. With
    /// [`UnreadablePolicy::Skip`] unreadable files are logged and omitted.
    pub fn generate(
        &self,
        styles_dir: &Utf8Path,
        src_css_dir: &Utf8Path,
    ) -> Result<GenerationReport> {
        let started = Instant::now();

        let mut files = discover_distribution_css(styles_dir)?;
        files.extend(discover_source_css(src_css_dir)?);

        tracing::info!(
            "Discovered {} stylesheet(s) under {} and {}",
            files.len(),
            styles_dir,
            src_css_dir
        );

        let mut index = ClassMapIndex::new();
        let mut stats = GenerationStats::default();

        for file in files {
            // Normalize to an absolute canonical path so index keys are
            // identical across environments and working directories.
            let normalized = match file.canonicalize_utf8() {
                Ok(path) => path,
                Err(source) => {
                    self.handle_unreadable(&file, source, &mut stats)?;
                    continue;
                }
            };

            let css_text = match fs::read_to_string(&normalized) {
                Ok(text) => text,
                Err(source) => {
                    self.handle_unreadable(&normalized, source, &mut stats)?;
                    continue;
                }
            };

            let class_map = self.build_class_map(&css_text);
            tracing::debug!(
                "Mapped {}: {} base, {} modifier",
                normalized,
                class_map.base().len(),
                class_map.modifiers().len()
            );

            stats.files_scanned += 1;
            stats.base_classes += class_map.base().len();
            stats.modifier_classes += class_map.modifiers().len();
            index.insert(normalized, class_map);
        }

        index.sort_paths();

        Ok(GenerationReport {
            index,
            stats,
            duration: started.elapsed(),
        })
    }

    /// Apply the unreadable-file policy: abort the run or log and skip.
    fn handle_unreadable(
        &self,
        path: &Utf8Path,
        source: std::io::Error,
        stats: &mut GenerationStats,
    ) -> Result<()> {
        match self.unreadable_files {
            UnreadablePolicy::Fail => Err(GenerateError::UnreadableFile {
                path: path.to_path_buf(),
                source,
            }
            .into()),
            UnreadablePolicy::Skip => {
                tracing::warn!("Skipping unreadable stylesheet {}: {}", path, source);
                stats.files_skipped += 1;
                Ok(())
            }
        }
    }
}

/// Discover stylesheet files in the distributed style package.
///
/// Matches `**/*.css` under `styles_dir`, excluding the `assets/` and
/// `base/` subtrees and the top-level aggregate files (e.g.
/// `patternfly.css`). A missing or empty directory yields an empty set.
pub fn discover_distribution_css(styles_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();

    for file in glob_css(styles_dir)? {
        let Ok(relative) = file.strip_prefix(styles_dir) else {
            continue;
        };

        // Top-level aggregates have a bare filename as their relative path.
        if relative.parent().is_none_or(|p| p.as_str().is_empty()) {
            continue;
        }
        if relative
            .components()
            .next()
            .is_some_and(|c| EXCLUDED_DIST_DIRS.contains(&c.as_str()))
        {
            continue;
        }

        files.push(file);
    }

    Ok(files)
}

/// Discover stylesheet files in the local source CSS tree.
///
/// Matches `**/*.css` under `src_css_dir` with no exclusions. A missing or
/// empty directory yields an empty set.
pub fn discover_source_css(src_css_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    glob_css(src_css_dir)
}

/// Match all `.css` files under a directory, in sorted traversal order.
///
/// The directory portion is escaped so paths containing glob
/// metacharacters (`[`, `?`, `*`) match literally.
fn glob_css(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let pattern = format!("{}/**/*.css", glob::Pattern::escape(dir.as_str()));
    let entries = glob::glob(&pattern)
        .map_err(GenerateError::from)
        .with_context(|| format!("Failed to build discovery pattern for {}", dir))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                let path = Utf8PathBuf::try_from(path)
                    .map_err(|e| GenerateError::NonUtf8Path(e.into_path_buf().display().to_string()))?;
                files.push(path);
            }
            Err(e) => {
                // Unreadable directory entries during traversal are logged
                // and skipped; unreadable files are handled by policy later.
                tracing::warn!("Skipping unreadable path during discovery: {}", e);
            }
        }
    }

    Ok(files)
}
