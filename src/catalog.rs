//! Flag catalog
//!
//! The fixed universe of quiz content: every flag/country pair the game
//! knows about, in a stable order.

use serde::{Deserialize, Serialize};

/// A single flag/country pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagEntry {
    /// Stable two-letter identifier (ISO 3166-1 alpha-2 style)
    pub code: String,
    /// Country name, also the expected answer text
    pub country: String,
}

impl FlagEntry {
    pub fn new(code: &str, country: &str) -> Self {
        Self {
            code: code.to_string(),
            country: country.to_string(),
        }
    }
}

/// Ordered, immutable list of all available flags
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<FlagEntry>,
}

// (code, country) pairs for the built-in catalog. Codes must stay unique;
// the selection screen and persisted practice sets key off them.
const BUILTIN_FLAGS: &[(&str, &str)] = &[
    ("fr", "France"),
    ("de", "Germany"),
    ("bt", "Bhutan"),
    ("sz", "Eswatini"),
    ("it", "Italy"),
    ("es", "Spain"),
    ("pt", "Portugal"),
    ("nl", "Netherlands"),
    ("be", "Belgium"),
    ("ch", "Switzerland"),
    ("at", "Austria"),
    ("pl", "Poland"),
    ("se", "Sweden"),
    ("no", "Norway"),
    ("fi", "Finland"),
    ("dk", "Denmark"),
    ("ie", "Ireland"),
    ("gr", "Greece"),
    ("jp", "Japan"),
    ("kr", "South Korea"),
    ("cn", "China"),
    ("in", "India"),
    ("th", "Thailand"),
    ("vn", "Vietnam"),
    ("np", "Nepal"),
    ("mn", "Mongolia"),
    ("br", "Brazil"),
    ("ar", "Argentina"),
    ("cl", "Chile"),
    ("pe", "Peru"),
    ("mx", "Mexico"),
    ("ca", "Canada"),
    ("us", "United States"),
    ("au", "Australia"),
    ("nz", "New Zealand"),
    ("za", "South Africa"),
    ("eg", "Egypt"),
    ("ma", "Morocco"),
    ("ke", "Kenya"),
    ("ng", "Nigeria"),
];

impl Catalog {
    /// Build the built-in catalog
    pub fn builtin() -> Self {
        let entries = BUILTIN_FLAGS
            .iter()
            .map(|(code, country)| FlagEntry::new(code, country))
            .collect();
        Self { entries }
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[FlagEntry] {
        &self.entries
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its code
    pub fn get(&self, code: &str) -> Option<&FlagEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Whether a code belongs to the catalog
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// All codes in catalog order
    pub fn codes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.code.clone()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_not_empty() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.entries().len());
    }

    #[test]
    fn test_codes_are_unique() {
        let catalog = Catalog::builtin();
        let codes: HashSet<_> = catalog.entries().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes.len(), catalog.len());
    }

    #[test]
    fn test_lookup_by_code() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("fr").unwrap().country, "France");
        assert_eq!(catalog.get("bt").unwrap().country, "Bhutan");
        assert!(catalog.get("zz").is_none());
        assert!(catalog.contains("sz"));
        assert!(!catalog.contains("zz"));
    }

    #[test]
    fn test_codes_preserve_catalog_order() {
        let catalog = Catalog::builtin();
        let codes = catalog.codes();
        assert_eq!(codes[0], "fr");
        assert_eq!(codes[1], "de");
        assert_eq!(codes.len(), catalog.len());
    }
}
