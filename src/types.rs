//! Type-safe platform types for toolbox
//!
//! Operating systems and package managers are proper enums instead of
//! loose strings. Both render as the lowercase identifiers used as keys in
//! the catalog's `install` tables.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Operating system family the tool is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Os {
    Windows,
    Macos,
    Linux,
    #[default]
    Unknown,
}

/// Native package manager identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Manager {
    Winget,
    Brew,
    Apt,
    Dnf,
    Pacman,
    #[default]
    Unknown,
}

impl Manager {
    /// Linux managers looked up on the search path, in order of preference
    pub const LINUX_PREFERENCE: [Manager; 3] = [Manager::Apt, Manager::Dnf, Manager::Pacman];

    /// Every concrete manager (excludes `Unknown`)
    pub const ALL: [Manager; 5] = [
        Manager::Winget,
        Manager::Brew,
        Manager::Apt,
        Manager::Dnf,
        Manager::Pacman,
    ];

    /// Catalog key / executable name for this manager
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns true for any manager other than `Unknown`
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
