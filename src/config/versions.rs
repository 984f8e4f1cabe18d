//! Versions offered when installing a library.
//!
//! There is no remote lookup: the catalog is a fixed list per coordinate,
//! built in for the libraries the installer knows and extendable through the
//! global configuration. Lists are returned oldest first, so the last entry is
//! the natural default.

use semver::Version;
use std::collections::BTreeMap;

use crate::models::Coordinate;

#[derive(Debug, Clone, Default)]
pub struct VersionCatalog {
    entries: BTreeMap<Coordinate, Vec<String>>,
}

impl VersionCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog covering the OSGi core, compendium and Felix DependencyManager.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(
            Coordinate::new("org.osgi", "org.osgi.core"),
            ["4.2.0", "4.3.1", "5.0.0", "6.0.0"].map(String::from).to_vec(),
        );
        catalog.insert(
            Coordinate::new("org.osgi", "org.osgi.compendium"),
            ["4.2.0", "4.3.1", "5.0.0"].map(String::from).to_vec(),
        );
        catalog.insert(
            Coordinate::new("org.apache.felix", "org.apache.felix.dependencymanager"),
            ["3.0.0", "3.1.0", "3.2.0", "4.6.0"].map(String::from).to_vec(),
        );
        catalog
    }

    /// Replace the list for `coordinate`.
    pub fn insert(&mut self, coordinate: Coordinate, versions: Vec<String>) {
        self.entries.insert(coordinate, versions);
    }

    /// Known versions, oldest first.
    ///
    /// Versions that are not semver (after padding `4.2` to `4.2.0`) keep
    /// their listed order and come after every parseable one. Duplicates are
    /// dropped.
    pub fn available(&self, coordinate: &Coordinate) -> Vec<String> {
        let Some(listed) = self.entries.get(coordinate) else {
            return Vec::new();
        };

        let mut parsed: Vec<(Version, &String)> = Vec::new();
        let mut unparsed: Vec<&String> = Vec::new();
        for version in listed {
            match lenient_parse(version) {
                Some(v) => parsed.push((v, version)),
                None => unparsed.push(version),
            }
        }
        parsed.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out: Vec<String> = Vec::with_capacity(listed.len());
        for version in parsed.into_iter().map(|(_, s)| s).chain(unparsed) {
            if !out.contains(version) {
                out.push(version.clone());
            }
        }
        out
    }
}

fn lenient_parse(version: &str) -> Option<Version> {
    let trimmed = version.trim().trim_start_matches('v');
    if let Ok(v) = Version::parse(trimmed) {
        return Some(v);
    }
    let parts = trimmed.split('.').count();
    let padded = match parts {
        1 => format!("{trimmed}.0.0"),
        2 => format!("{trimmed}.0"),
        _ => return None,
    };
    Version::parse(&padded).ok()
}
