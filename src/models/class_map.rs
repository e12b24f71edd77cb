use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::Serialize;

/// Lookup table generated from a single stylesheet.
///
/// Maps semantic (camel-cased) keys to versioned class-name strings. Base
/// classes live at the top level; modifier classes (`.pf-m-*`) are nested
/// under a reserved `modifiers` key. Both maps are sorted alphabetically
/// before a map is handed out, so serialization order is deterministic.
///
/// Serialized shape:
///
/// ```json
/// { "button": "pf-c-button-v5", "modifiers": { "small": "pf-m-small-v5" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassMap {
    #[serde(flatten)]
    base: IndexMap<String, String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    modifiers: IndexMap<String, String>,
}

impl ClassMap {
    /// Insert a base-class entry. A later entry for the same key overwrites
    /// the earlier one.
    pub fn insert_base(&mut self, key: String, class_name: String) {
        self.base.insert(key, class_name);
    }

    /// Insert a modifier-class entry. A later entry for the same key
    /// overwrites the earlier one.
    pub fn insert_modifier(&mut self, key: String, class_name: String) {
        self.modifiers.insert(key, class_name);
    }

    /// Sort base and modifier keys alphabetically.
    ///
    /// Called once after the map is fully populated; after this the map is
    /// treated as immutable.
    pub fn sort_keys(&mut self) {
        self.base.sort_unstable_keys();
        self.modifiers.sort_unstable_keys();
    }

    /// Base-class entries, in key order after [`sort_keys`](Self::sort_keys).
    pub fn base(&self) -> &IndexMap<String, String> {
        &self.base
    }

    /// Modifier-class entries, in key order after [`sort_keys`](Self::sort_keys).
    pub fn modifiers(&self) -> &IndexMap<String, String> {
        &self.modifiers
    }

    /// True when the map holds neither base nor modifier entries.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.modifiers.is_empty()
    }

    /// Total number of entries across both categories.
    pub fn len(&self) -> usize {
        self.base.len() + self.modifiers.len()
    }
}

/// Complete output of one generation run: one [`ClassMap`] per scanned
/// stylesheet, keyed by the normalized absolute file path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassMapIndex {
    #[serde(flatten)]
    entries: IndexMap<Utf8PathBuf, ClassMap>,
}

impl ClassMapIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the class map for one stylesheet. Paths are unique per run, so
    /// this never merges maps.
    pub fn insert(&mut self, path: Utf8PathBuf, class_map: ClassMap) {
        self.entries.insert(path, class_map);
    }

    /// Look up the class map for a stylesheet path.
    pub fn get(&self, path: &Utf8Path) -> Option<&ClassMap> {
        self.entries.get(path)
    }

    /// Sort entries by path so the index is deterministic regardless of the
    /// order files were read in.
    pub fn sort_paths(&mut self) {
        self.entries.sort_unstable_keys();
    }

    /// Iterate over (path, class map) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Utf8PathBuf, &ClassMap)> {
        self.entries.iter()
    }

    /// Iterate over the stylesheet paths in the index.
    pub fn paths(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
