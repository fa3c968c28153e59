//! RPM filename parsing.
//!
//! The grammar is `name-version-release.arch.rpm` with an optional `epoch:`
//! that tooling fuses either onto the version or onto the name. Names may
//! contain hyphens, so fields are peeled off right to left.

use crate::PackageIdentity;
use srcfind_common::errors::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpochPlacement {
    /// `name-epoch:version-release.arch.rpm`
    #[default]
    Version,
    /// `epoch:name-version-release.arch.rpm`
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nevra {
    pub name: String,
    pub epoch: Option<u64>,
    pub version: String,
    pub release: String,
    pub arch: String,
    pub placement: EpochPlacement,
}

impl Nevra {
    pub fn decompose(filename: &str) -> Result<Nevra> {
        let stem = filename
            .strip_suffix(".rpm")
            .ok_or_else(|| anyhow!("Not an rpm filename: {:?}", filename))?;
        let (rest, arch) = stem
            .rsplit_once('.')
            .ok_or_else(|| anyhow!("Missing architecture in {:?}", filename))?;
        let (rest, release) = rest
            .rsplit_once('-')
            .ok_or_else(|| anyhow!("Missing release in {:?}", filename))?;
        let (name, version) = rest
            .rsplit_once('-')
            .ok_or_else(|| anyhow!("Missing version in {:?}", filename))?;

        let (name, epoch, version, placement) = if let Some((epoch, version)) = version.split_once(':') {
            (name, Some(epoch), version, EpochPlacement::Version)
        } else if let Some((epoch, name)) = name.split_once(':') {
            (name, Some(epoch), version, EpochPlacement::Name)
        } else {
            (name, None, version, EpochPlacement::Version)
        };

        let epoch = epoch
            .map(|e| {
                e.parse::<u64>()
                    .with_context(|| anyhow!("Invalid epoch {:?} in {:?}", e, filename))
            })
            .transpose()?;

        for (field, value) in [
            ("name", name),
            ("version", version),
            ("release", release),
            ("architecture", arch),
        ] {
            if value.is_empty() {
                bail!("Empty {} in {:?}", field, filename);
            }
        }

        Ok(Nevra {
            name: name.to_string(),
            epoch,
            version: version.to_string(),
            release: release.to_string(),
            arch: arch.to_string(),
            placement,
        })
    }

    pub fn compose(&self) -> String {
        self.to_string()
    }

    /// `version-release`, the epoch is dropped.
    pub fn vr(&self) -> String {
        format!("{}-{}", self.version, self.release)
    }

    pub fn evr(&self) -> String {
        match self.epoch {
            Some(epoch) => format!("{}:{}-{}", epoch, self.version, self.release),
            None => self.vr(),
        }
    }
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.epoch, self.placement) {
            (Some(epoch), EpochPlacement::Name) => write!(
                f,
                "{}:{}-{}-{}.{}.rpm",
                epoch, self.name, self.version, self.release, self.arch
            ),
            (Some(epoch), EpochPlacement::Version) => write!(
                f,
                "{}-{}:{}-{}.{}.rpm",
                self.name, epoch, self.version, self.release, self.arch
            ),
            (None, _) => write!(
                f,
                "{}-{}-{}.{}.rpm",
                self.name, self.version, self.release, self.arch
            ),
        }
    }
}

impl FromStr for Nevra {
    type Err = Error;

    fn from_str(s: &str) -> Result<Nevra> {
        Nevra::decompose(s)
    }
}

/// `version-release` with any `epoch:` prefix removed.
pub fn strip_epoch(version: &str) -> &str {
    version.split_once(':').map(|(_, vr)| vr).unwrap_or(version)
}

/// Recover the source package a binary was built from.
///
/// An empty reference is `Ok(None)`, a malformed one is an error.
pub fn source_identity(sourcerpm: &str) -> Result<Option<PackageIdentity>> {
    let sourcerpm = sourcerpm.trim();
    if sourcerpm.is_empty() {
        return Ok(None);
    }
    let nevra = Nevra::decompose(sourcerpm)?;
    let version = nevra.vr();
    Ok(Some(PackageIdentity::new(nevra.name, version)))
}
