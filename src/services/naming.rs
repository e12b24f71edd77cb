//! Semantic key derivation for class tokens.
//!
//! Class tokens carry structural prefixes (`pf-c-`, `pf-m-`, ...) that mark
//! the naming convention a class belongs to. Keys strip those prefixes and
//! camel-case the remainder, so `.pf-c-button` becomes `button` and
//! `.pf-m-display-lg` becomes `displayLg`.

use heck::ToLowerCamelCase;
use regex::Regex;

/// Raw prefix marking a modifier class, checked before any stripping.
pub const MODIFIER_PREFIX: &str = ".pf-m-";

/// Recognized structural prefix tags.
///
/// The strip rule removes every occurrence of `pf-` optionally followed by
/// one of these tag codes and a `-`. Keeping the set as an explicit
/// enumeration (rather than a bare regex) makes additions to the convention
/// visible in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixTag {
    /// `pf-c-`: component classes
    Component,
    /// `pf-l-`: layout classes
    Layout,
    /// `pf-m-`: modifier classes
    Modifier,
    /// `pf-u-`: utility classes
    Utility,
    /// `pf-is-`: state classes
    IsState,
    /// `pf-has-`: state classes
    HasState,
}

impl PrefixTag {
    pub const ALL: [PrefixTag; 6] = [
        PrefixTag::Component,
        PrefixTag::Layout,
        PrefixTag::Modifier,
        PrefixTag::Utility,
        PrefixTag::IsState,
        PrefixTag::HasState,
    ];

    /// Short code as it appears between `pf-` and the class name.
    pub fn code(self) -> &'static str {
        match self {
            PrefixTag::Component => "c",
            PrefixTag::Layout => "l",
            PrefixTag::Modifier => "m",
            PrefixTag::Utility => "u",
            PrefixTag::IsState => "is",
            PrefixTag::HasState => "has",
        }
    }
}

/// Derives semantic keys from raw class tokens.
///
/// Pre-compiles the prefix-strip pattern from [`PrefixTag::ALL`] at
/// construction time. Key derivation is a pure function of the token
/// string: deterministic and idempotent for identical input.
pub struct KeyDeriver {
    prefix_pattern: Regex,
}

impl KeyDeriver {
    /// Create a new KeyDeriver with the compiled strip pattern.
    pub fn new() -> Self {
        let codes = PrefixTag::ALL.map(PrefixTag::code).join("|");
        let pattern = format!("pf-(({codes})-)?");
        Self {
            prefix_pattern: Regex::new(&pattern).expect("Invalid prefix strip regex"),
        }
    }

    /// Derive the semantic key for a raw class token.
    ///
    /// Strips the leading `.`, removes every recognized prefix occurrence,
    /// and camel-cases the hyphen-delimited remainder.
    pub fn derive_key(&self, token: &str) -> String {
        let stripped = token.trim().trim_start_matches('.');
        let stripped = self.prefix_pattern.replace_all(stripped, "");
        stripped.to_lower_camel_case()
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new()
    }
}

/// True exactly when the raw token starts with the modifier prefix.
/// False for everything else, including the empty string.
pub fn is_modifier(token: &str) -> bool {
    token.starts_with(MODIFIER_PREFIX)
}
