use serde::{Deserialize, Serialize};
use srcfind_common::errors::*;
use srcfind_common::Distro;
use std::fmt;

pub mod cache;
pub mod discovered;
pub mod listing;
pub mod nevra;
pub mod photon;
pub mod registry;
pub mod repodata;
pub mod yum;

pub use crate::cache::RepoCache;
pub use crate::discovered::DiscoveredSource;
pub use crate::registry::factory;

/// A package as requested by the caller.
///
/// The version may carry an `epoch:` prefix. Some tooling fuses the epoch onto
/// the name instead (`1:openssl`), see [`PackageIdentity::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageIdentity {
    pub name: String,
    pub version: String,
}

impl PackageIdentity {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> PackageIdentity {
        PackageIdentity {
            name: name.into(),
            version: version.into(),
        }
    }

    /// `version-release` without the epoch.
    pub fn version_release(&self) -> &str {
        nevra::strip_epoch(&self.version)
    }

    /// Move an epoch fused onto the name over to the version.
    pub fn normalized(&self) -> PackageIdentity {
        if let Some((epoch, name)) = self.name.split_once(':') {
            if !epoch.is_empty() && epoch.bytes().all(|b| b.is_ascii_digit()) {
                let version = if self.version.contains(':') {
                    self.version.clone()
                } else {
                    format!("{}:{}", epoch, self.version)
                };
                return PackageIdentity::new(name, version);
            }
        }
        self.clone()
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Distribution tuning supplied when a finder is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderOptions {
    /// Repository subdirectories to search (`BaseOS`, `updates`, ...)
    pub repos: Vec<String>,
    /// Search the extended set of repository subdirectories
    pub optimal: bool,
    pub source_repos: Vec<String>,
    pub binary_repos: Vec<String>,
    pub arch: Option<String>,
}

pub trait SourceFinder {
    fn distro(&self) -> Distro;

    /// The package this finder was constructed for.
    fn package(&self) -> &PackageIdentity;

    fn find_package(&self, query: &PackageIdentity) -> Result<DiscoveredSource>;

    fn find(&self) -> Result<DiscoveredSource> {
        let query = self.package().clone();
        info!("Searching {} sources for {}", self.distro(), query);
        self.find_package(&query)
    }

    /// Search with the name or version of the constructed package replaced.
    fn find_with(&self, name: Option<&str>, version: Option<&str>) -> Result<DiscoveredSource> {
        let package = self.package();
        let query = PackageIdentity::new(
            name.unwrap_or(&package.name),
            version.unwrap_or(&package.version),
        );
        info!("Searching {} sources for {}", self.distro(), query);
        self.find_package(&query)
    }
}
