//! Yum repository metadata (`repodata/`).

use crate::nevra;
use crate::PackageIdentity;
use srcfind_common::errors::*;
use srcfind_common::http::{self, Transport};
use std::collections::HashMap;

pub mod compression;
pub mod xml;

use self::compression::Compression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPackage {
    pub name: String,
    pub arch: String,
    pub epoch: String,
    pub ver: String,
    pub rel: String,
    pub location: String,
    pub sourcerpm: Option<String>,
}

impl RepoPackage {
    pub fn vr(&self) -> String {
        format!("{}-{}", self.ver, self.rel)
    }

    /// `epoch:version-release`, with the epoch omitted when it is zero.
    pub fn evr(&self) -> String {
        match self.epoch.as_str() {
            "" | "0" => self.vr(),
            epoch => format!("{}:{}", epoch, self.vr()),
        }
    }

    /// A zero epoch in `version` is the same as no epoch.
    pub fn matches_version(&self, version: &str) -> bool {
        let version = version.strip_prefix("0:").unwrap_or(version);
        self.evr() == version || self.vr() == version
    }

    /// The source package this binary was built from, if the index records one.
    pub fn source_identity(&self) -> Result<Option<PackageIdentity>> {
        match &self.sourcerpm {
            Some(sourcerpm) => nevra::source_identity(sourcerpm),
            None => Ok(None),
        }
    }
}

impl From<xml::PackagesXmlItem> for RepoPackage {
    fn from(item: xml::PackagesXmlItem) -> RepoPackage {
        RepoPackage {
            name: item.name,
            arch: item.arch,
            epoch: item.version.epoch,
            ver: item.version.ver,
            rel: item.version.rel,
            location: item.location.href,
            sourcerpm: item.format.sourcerpm.filter(|s| !s.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIndex {
    baseurl: String,
    packages: HashMap<String, Vec<RepoPackage>>,
}

impl RepoIndex {
    pub fn new<I: IntoIterator<Item = RepoPackage>>(baseurl: &str, packages: I) -> RepoIndex {
        let mut by_name: HashMap<String, Vec<RepoPackage>> = HashMap::new();
        for pkg in packages {
            by_name.entry(pkg.name.clone()).or_default().push(pkg);
        }
        RepoIndex {
            baseurl: normalize_baseurl(baseurl),
            packages: by_name,
        }
    }

    pub fn baseurl(&self) -> &str {
        &self.baseurl
    }

    /// All records with this name, in index order.
    pub fn findall(&self, name: &str) -> &[RepoPackage] {
        self.packages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn url_for(&self, pkg: &RepoPackage) -> String {
        format!("{}{}", self.baseurl, pkg.location)
    }

    pub fn len(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

pub fn normalize_baseurl(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Fetch and parse the primary package list of the repository at `url`.
pub fn load(transport: &dyn Transport, url: &str) -> Result<RepoIndex> {
    let baseurl = normalize_baseurl(url);

    let bytes = http::fetch(transport, &format!("{baseurl}repodata/repomd.xml"))?;
    let location = xml::primary_location(&bytes)?;

    let bytes = http::fetch(transport, &format!("{baseurl}{location}"))?;
    info!("Parsing index of {:?} ({} bytes)...", baseurl, bytes.len());

    let comp = Compression::detect(&location, &bytes);
    let data = comp.reader(&bytes)?;
    let packages = xml::parse_primary(data)
        .with_context(|| anyhow!("Failed to parse primary index of {:?}", baseurl))?;

    let index = RepoIndex::new(&baseurl, packages.into_iter().map(RepoPackage::from));
    debug!("Loaded {} packages from {:?}", index.len(), baseurl);
    Ok(index)
}
