//! Lexical extraction of class selector tokens from stylesheet text.
//!
//! This is a lexical scan, not a CSS parse: it finds `.`-prefixed tokens in
//! selector position without building a rule tree. Selector-like text inside
//! comments and escaped characters are not treated specially; that behavior
//! is inherited from the original class-map tooling and kept for
//! compatibility.

use regex::Regex;

/// Extractor for class selector tokens.
///
/// Pre-compiles the token pattern at construction time. A candidate token is
/// a `.` followed by a run of characters excluding whitespace, `,`, `.`,
/// `{`, `[`, `>`, `+`, `~`, `#`, `:`, `)`. Two additional lexical rules are
/// applied after the pattern match:
///
/// - a token whose first character is a digit is rejected (`.5em` in a
///   declaration value is not a class selector)
/// - a token followed by a `}` before the next `{` is rejected (it sits
///   inside a declaration body, e.g. `url(logo.png)`)
pub struct SelectorExtractor {
    class_pattern: Regex,
}

impl SelectorExtractor {
    /// Create a new SelectorExtractor with the compiled token pattern.
    pub fn new() -> Self {
        Self {
            class_pattern: Regex::new(r"\.[^\s.,{\[>+~#:)]*").expect("Invalid class token regex"),
        }
    }

    /// Scan stylesheet text for class selector tokens.
    ///
    /// Returns every match including duplicates, in order of appearance,
    /// each with its leading `.` intact. Returns an empty vector when the
    /// text contains no class selectors.
    pub fn extract<'a>(&self, css_text: &'a str) -> Vec<&'a str> {
        let bytes = css_text.as_bytes();
        let mut tokens = Vec::new();

        for m in self.class_pattern.find_iter(css_text) {
            // Leading `.` is a single byte, so start + 1 is a char boundary.
            let body = &css_text[m.start() + 1..m.end()];
            if body.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
                continue;
            }
            if closes_before_open(&bytes[m.end()..]) {
                continue;
            }
            tokens.push(m.as_str());
        }

        tokens
    }
}

impl Default for SelectorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// True when a `}` occurs before the next `{` (or end of input), i.e. the
/// preceding token is inside a declaration body rather than a selector list.
fn closes_before_open(rest: &[u8]) -> bool {
    for &b in rest {
        match b {
            b'{' => return false,
            b'}' => return true,
            _ => {}
        }
    }
    false
}
