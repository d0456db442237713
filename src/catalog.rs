//! Package catalog loading.
//!
//! The catalog is a JSON object mapping a category name to an ordered list
//! of packages. Category order in the file is preserved and drives the order
//! of the interactive prompts.
//!
//! ```json
//! {
//!   "editors": [
//!     { "name": "vim", "desc": "Vi IMproved", "install": { "apt": "sudo apt install -y vim" } }
//!   ]
//! }
//! ```
//!
//! The catalog is loaded once and then passed by reference to every stage.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{Result, ToolboxError};
use crate::types::Manager;

/// Catalog shipped inside the binary, used when no `--file` is given.
const BUNDLED_CATALOG: &str = include_str!("../data/packages-info.json");

/// Origin label used in errors and logs for the bundled catalog
pub const BUNDLED_ORIGIN: &str = "bundled packages-info.json";

/// A single installable package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Identifier, expected to be unique across the whole catalog
    pub name: String,
    /// Human readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Manager identifier -> literal shell command. `null` marks a manager
    /// the package is not available for.
    #[serde(default)]
    pub install: BTreeMap<String, Option<String>>,
}

impl Package {
    /// Install command for `manager`, if the package defines a non-empty one.
    pub fn command_for(&self, manager: Manager) -> Option<&str> {
        self.install
            .get(manager.as_str())
            .and_then(|cmd| cmd.as_deref())
            .filter(|cmd| !cmd.trim().is_empty())
    }

    /// Known managers this package can be installed with
    pub fn managers(&self) -> Vec<Manager> {
        Manager::ALL
            .into_iter()
            .filter(|m| self.command_for(*m).is_some())
            .collect()
    }
}

/// A named group of packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub packages: Vec<Package>,
}

/// The whole categorized catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// Per-manager availability counts over the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityStats {
    /// Number of package entries (duplicates counted once per entry)
    pub total: usize,
    /// Entries with an install command, per known manager
    pub per_manager: Vec<(Manager, usize)>,
}

impl AvailabilityStats {
    /// Count for one manager (`0` for `Unknown`)
    pub fn count_for(&self, manager: Manager) -> usize {
        self.per_manager
            .iter()
            .find(|(m, _)| *m == manager)
            .map_or(0, |(_, count)| *count)
    }
}

impl Catalog {
    /// Parse catalog JSON text. `origin` names the source in error messages.
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(text).map_err(|e| ToolboxError::catalog_parse(origin, e))?;

        let mut categories = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let packages: Vec<Package> = serde_json::from_value(value).map_err(|e| {
                ToolboxError::catalog_parse(format!("{} (category {:?})", origin, name), e)
            })?;
            categories.push(Category { name, packages });
        }

        Ok(Self { categories })
    }

    /// The catalog embedded in the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG, BUNDLED_ORIGIN)
    }

    /// Categories in file order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All package entries, flattened in category order
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.categories.iter().flat_map(|c| c.packages.iter())
    }

    /// Number of package entries across all categories
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.packages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names defined more than once, each reported once, in order of first repeat.
    ///
    /// Lookups keep the last definition; this only exists for diagnostics.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for package in self.packages() {
            let name = package.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    /// How many entries each known manager can install
    pub fn availability(&self) -> AvailabilityStats {
        let per_manager = Manager::ALL
            .into_iter()
            .map(|m| (m, self.packages().filter_map(|p| p.command_for(m)).count()))
            .collect();
        AvailabilityStats {
            total: self.len(),
            per_manager,
        }
    }
}

/// Load the catalog from `path`, or the bundled catalog when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            info!("Loading package catalog from {:?}", path);
            let text = fs::read_to_string(path).map_err(|e| ToolboxError::catalog_read(path, e))?;
            Catalog::from_json_str(&text, &path.display().to_string())?
        }
        None => {
            debug!("Loading {}", BUNDLED_ORIGIN);
            Catalog::bundled()?
        }
    };

    let duplicates = catalog.duplicate_names();
    if !duplicates.is_empty() {
        warn!(
            "Catalog defines {} package name(s) more than once, the last definition wins: {}",
            duplicates.len(),
            duplicates.join(", ")
        );
    }

    info!(
        "Catalog loaded: {} categories, {} packages",
        catalog.categories().len(),
        catalog.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "editors": [
            {"name": "vim", "desc": "Vi IMproved", "install": {"apt": "sudo apt install -y vim", "brew": "brew install vim"}},
            {"name": "nano", "install": {"apt": "sudo apt install -y nano", "winget": null}}
        ],
        "browsers": [
            {"name": "firefox", "install": {"winget": "winget install -e --id Mozilla.Firefox", "dnf": ""}}
        ]
    }"#;

    #[test]
    fn test_parse_preserves_category_order() {
        let catalog = Catalog::from_json_str(SAMPLE, "sample").unwrap();
        let names: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["editors", "browsers"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_optional_fields() {
        let catalog = Catalog::from_json_str(SAMPLE, "sample").unwrap();
        let nano = catalog.packages().find(|p| p.name == "nano").unwrap();
        assert_eq!(nano.desc, None);
        assert_eq!(nano.command_for(Manager::Winget), None);

        let json = r#"{"misc": [{"name": "bare"}]}"#;
        let catalog = Catalog::from_json_str(json, "bare").unwrap();
        let bare = catalog.packages().next().unwrap();
        assert!(bare.install.is_empty());
    }

    #[test]
    fn test_empty_command_is_absent() {
        let catalog = Catalog::from_json_str(SAMPLE, "sample").unwrap();
        let firefox = catalog.packages().find(|p| p.name == "firefox").unwrap();
        assert_eq!(firefox.command_for(Manager::Dnf), None);
        assert_eq!(firefox.managers(), vec![Manager::Winget]);
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let err = Catalog::from_json_str("[1, 2]", "array").unwrap_err();
        assert!(matches!(err, ToolboxError::CatalogParse { .. }));

        let err = Catalog::from_json_str(r#"{"x": [{"desc": "no name"}]}"#, "noname").unwrap_err();
        assert!(err.to_string().contains("category \"x\""));

        let err = Catalog::from_json_str("not json", "garbage").unwrap_err();
        assert!(matches!(err, ToolboxError::CatalogParse { .. }));
    }

    #[test]
    fn test_duplicate_names() {
        let json = r#"{
            "a": [{"name": "git"}, {"name": "curl"}],
            "b": [{"name": "git"}, {"name": "git"}, {"name": "wget"}]
        }"#;
        let catalog = Catalog::from_json_str(json, "dupes").unwrap();
        assert_eq!(catalog.duplicate_names(), vec!["git"]);
    }

    #[test]
    fn test_availability() {
        let catalog = Catalog::from_json_str(SAMPLE, "sample").unwrap();
        let stats = catalog.availability();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count_for(Manager::Apt), 2);
        assert_eq!(stats.count_for(Manager::Brew), 1);
        assert_eq!(stats.count_for(Manager::Winget), 1);
        assert_eq!(stats.count_for(Manager::Dnf), 0);
        assert_eq!(stats.count_for(Manager::Unknown), 0);
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.duplicate_names().is_empty());
        assert!(catalog.packages().all(|p| !p.managers().is_empty()));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, ToolboxError::CatalogRead { .. }));
    }

    #[test]
    fn test_load_bundled() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog, Catalog::bundled().unwrap());
    }
}
