//! Ordered prefix → color tables.
//!
//! Lookup is first match in declaration order, so `"co"` placed before
//! `"cox"` shadows it. Schemes are plain lists for that reason.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_COLOR: &str = "#ffffff";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScheme {
    entries: Vec<(String, String)>,
}

impl ColorScheme {
    pub fn new<K, C>(entries: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: Into<String>,
        C: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, c)| (k.into().to_lowercase(), c.into()))
                .collect(),
        }
    }

    pub fn default_scheme() -> Self {
        Self::new([
            ("co", "#f2ed8d"),
            ("na", "#b6e07b"),
            ("atp", "#b3e6e8"),
            ("rrn", "#c7ace3"),
            ("trn", "#e69d97"),
            ("intergenic", "#000000"),
            ("+", "#a8d2e7"),
            ("-", "#ac759a"),
        ])
    }

    pub fn monochromatic() -> Self {
        Self::new([
            ("co", "#ffffff"),
            ("na", "#ffffff"),
            ("atp", "#ffffff"),
            ("rrn", "#ffffff"),
            ("trn", "#ffffff"),
            ("intergenic", "#000000"),
            ("+", "#000000"),
            ("-", "#000000"),
        ])
    }

    /// Reads a JSON array of `[prefix, color]` pairs.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let scheme: ColorScheme = serde_json::from_str(&text)?;
        Ok(Self::new(scheme.entries))
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Color of the first entry whose key prefixes `key`, ignoring case.
    pub fn resolve(&self, key: &str) -> &str {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix.as_str()))
            .map(|(_, color)| color.as_str())
            .unwrap_or(DEFAULT_COLOR)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_gets_default_color() {
        let scheme = ColorScheme::default_scheme();
        assert_eq!(scheme.resolve("orf42"), DEFAULT_COLOR);
    }

    #[test]
    fn first_declared_prefix_wins() {
        let scheme = ColorScheme::new([("co", "yellow"), ("cox", "green")]);
        assert_eq!(scheme.resolve("cox1"), "yellow");
        let scheme = ColorScheme::new([("cox", "green"), ("co", "yellow")]);
        assert_eq!(scheme.resolve("cox1"), "green");
        assert_eq!(scheme.resolve("cob"), "yellow");
    }

    #[test]
    fn match_ignores_case() {
        let scheme = ColorScheme::default_scheme();
        assert_eq!(scheme.resolve("COX1"), "#f2ed8d");
        assert_eq!(scheme.resolve("trnL1"), "#e69d97");
        assert_eq!(scheme.resolve("-"), "#ac759a");
        assert_eq!(scheme.resolve("intergenic"), "#000000");
    }

    #[test]
    fn json_scheme_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        fs::write(
            &path,
            r##"[["CO", "#111111"], ["cox", "#222222"], ["+", "#333333"]]"##,
        )
        .unwrap();
        let scheme = ColorScheme::from_json_file(&path).unwrap();
        assert_eq!(scheme.entries()[0].0, "co");
        assert_eq!(scheme.resolve("cox2"), "#111111");
        assert_eq!(scheme.resolve("+"), "#333333");
    }
}
