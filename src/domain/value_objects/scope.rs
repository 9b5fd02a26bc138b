//! Scope value object - which kind of target handle a tree binds to
//!
//! - `Site` scope: deployed against a site-collection handle
//! - `Web` scope: deployed against a web handle

use serde::{Deserialize, Serialize};

/// Scope of a model tree (granularity of the target handle it needs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Site-collection level
    Site,
    /// Web level
    #[default]
    Web,
}

impl Scope {
    /// Returns true if this is a site-collection scope
    pub fn is_site(&self) -> bool {
        matches!(self, Scope::Site)
    }

    /// Returns true if this is a web scope
    pub fn is_web(&self) -> bool {
        matches!(self, Scope::Web)
    }

    /// Whether collection nodes may sit directly under the root
    ///
    /// A site root hosts nested containers but no collections at its own
    /// level; a web root hosts both.
    pub fn allows_root_collections(&self) -> bool {
        matches!(self, Scope::Web)
    }

    /// Definition type name of an empty root at this scope
    pub fn root_type_name(&self) -> &'static str {
        match self {
            Scope::Site => "SiteDefinition",
            Scope::Web => "WebDefinition",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Site => write!(f, "site"),
            Scope::Web => write!(f, "web"),
        }
    }
}
