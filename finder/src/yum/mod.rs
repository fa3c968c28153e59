//! Source lookup in yum repositories.
//!
//! Source repos are searched by name first. If the package is a subpackage
//! (`device-mapper-libs` is built from `lvm2`), the binary repos are searched
//! to recover the real source identity from `sourcerpm`, then the source
//! repos are walked again with it.

use crate::cache::RepoCache;
use crate::discovered::DiscoveredSource;
use crate::nevra;
use crate::repodata::{RepoIndex, RepoPackage};
use crate::{PackageIdentity, SourceFinder};
use srcfind_common::errors::*;
use srcfind_common::Distro;
use std::rc::Rc;

pub mod almalinux;
pub mod centos;
pub mod rhel;

/// A lazily evaluated sequence of repository base urls.
pub type Repos<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Produces the repositories a search walks through.
///
/// Every call returns a fresh sequence, walks never share iterator state.
pub trait RepoEnumerator {
    fn source_repos<'a>(
        &'a self,
        cache: &'a RepoCache,
        query: &'a PackageIdentity,
    ) -> Result<Repos<'a>>;

    fn binary_repos<'a>(
        &'a self,
        cache: &'a RepoCache,
        query: &'a PackageIdentity,
    ) -> Result<Repos<'a>>;
}

/// A static list of repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedRepos {
    pub source: Vec<String>,
    pub binary: Vec<String>,
}

impl RepoEnumerator for FixedRepos {
    fn source_repos<'a>(&'a self, _: &'a RepoCache, _: &'a PackageIdentity) -> Result<Repos<'a>> {
        Ok(Box::new(self.source.iter().cloned()))
    }

    fn binary_repos<'a>(&'a self, _: &'a RepoCache, _: &'a PackageIdentity) -> Result<Repos<'a>> {
        Ok(Box::new(self.binary.iter().cloned()))
    }
}

/// Every (release dir, subdir) combination, release dirs outermost.
pub(crate) fn layout<'a>(
    dirs: Vec<String>,
    subdirs: &'a [String],
) -> impl Iterator<Item = (String, &'a str)> + 'a {
    dirs.into_iter()
        .flat_map(move |dir| subdirs.iter().map(move |sub| (dir.clone(), sub.as_str())))
}

/// A repository base is live if its `repodata/` answers.
pub(crate) fn is_live_repo(cache: &RepoCache, url: &str) -> bool {
    cache.test_url(&format!("{url}repodata/"))
}

pub struct YumFinder {
    distro: Distro,
    package: PackageIdentity,
    source_repos: Option<Vec<String>>,
    binary_repos: Option<Vec<String>>,
    enumerator: Box<dyn RepoEnumerator>,
    cache: Rc<RepoCache>,
}

fn pinned(repos: Vec<String>) -> Option<Vec<String>> {
    if repos.is_empty() {
        None
    } else {
        Some(repos)
    }
}

impl YumFinder {
    pub fn new(
        distro: Distro,
        package: PackageIdentity,
        enumerator: Box<dyn RepoEnumerator>,
        cache: Rc<RepoCache>,
    ) -> YumFinder {
        YumFinder {
            distro,
            package,
            source_repos: None,
            binary_repos: None,
            enumerator,
            cache,
        }
    }

    /// Search exactly these source repos instead of discovering them.
    pub fn with_source_repos(mut self, repos: Vec<String>) -> YumFinder {
        self.source_repos = pinned(repos);
        self
    }

    /// Search exactly these binary repos instead of discovering them.
    pub fn with_binary_repos(mut self, repos: Vec<String>) -> YumFinder {
        self.binary_repos = pinned(repos);
        self
    }

    pub fn cache(&self) -> &RepoCache {
        &self.cache
    }

    fn source_repos<'a>(&'a self, query: &'a PackageIdentity) -> Result<Repos<'a>> {
        match &self.source_repos {
            Some(repos) => Ok(Box::new(repos.iter().cloned())),
            None => self.enumerator.source_repos(&self.cache, query),
        }
    }

    fn binary_repos<'a>(&'a self, query: &'a PackageIdentity) -> Result<Repos<'a>> {
        match &self.binary_repos {
            Some(repos) => Ok(Box::new(repos.iter().cloned())),
            None => self.enumerator.binary_repos(&self.cache, query),
        }
    }

    /// The requested version at the location of a listed one, if it is live.
    fn probe_other_version(&self, repo: &RepoIndex, pkg: &RepoPackage, version: &str) -> Option<String> {
        let wanted = nevra::strip_epoch(version);
        let listed = pkg.vr();
        if !pkg.location.contains(&listed) {
            return None;
        }
        let location = pkg.location.replacen(&listed, wanted, 1);
        if location == pkg.location {
            return None;
        }
        let url = format!("{}{}", repo.baseurl(), location);
        if self.cache.test_url(&url) {
            debug!("Found unindexed {:?} next to {:?}", url, pkg.location);
            Some(url)
        } else {
            None
        }
    }

    /// Walk the source repos and return the url of the first match.
    pub fn walk_source_repos(
        &self,
        query: &PackageIdentity,
        name: &str,
        version: &str,
    ) -> Result<Option<String>> {
        debug!("Searching source repos for {:?} {:?}", name, version);
        for repo_url in self.source_repos(query)? {
            let Some(repo) = self.cache.get_repo(&repo_url) else {
                continue;
            };
            let packages = repo.findall(name);

            if let Some(pkg) = packages.iter().find(|pkg| pkg.matches_version(version)) {
                let url = repo.url_for(pkg);
                info!("Found source package in {:?}: {:?}", repo.baseurl(), pkg.location);
                return Ok(Some(url));
            }

            for pkg in packages {
                if let Some(url) = self.probe_other_version(&repo, pkg, version) {
                    return Ok(Some(url));
                }
            }
        }
        Ok(None)
    }

    /// Walk the binary repos to find which source package built `name`.
    pub fn walk_binary_repos(
        &self,
        query: &PackageIdentity,
        name: &str,
    ) -> Result<Option<PackageIdentity>> {
        debug!("Searching binary repos for {:?}", name);
        for repo_url in self.binary_repos(query)? {
            let Some(repo) = self.cache.get_repo(&repo_url) else {
                continue;
            };
            let packages = repo.findall(name);

            let pkg = match packages {
                [] => continue,
                [pkg] => pkg,
                _ => {
                    match packages.iter().find(|pkg| pkg.matches_version(&query.version)) {
                        Some(pkg) => pkg,
                        None => {
                            debug!(
                                "Skipping {:?}: {} ambiguous records for {:?}",
                                repo.baseurl(),
                                packages.len(),
                                name
                            );
                            continue;
                        }
                    }
                }
            };

            match pkg.source_identity() {
                Ok(Some(source)) => {
                    info!(
                        "Binary package {:?} was built from {} {}",
                        name, source.name, source.version
                    );
                    return Ok(Some(source));
                }
                Ok(None) => debug!("No source reference for {:?} in {:?}", name, repo.baseurl()),
                Err(err) => warn!(
                    "Invalid source reference for {:?} in {:?}: {:#}",
                    name,
                    repo.baseurl(),
                    err
                ),
            }
        }
        Ok(None)
    }

    pub fn get_source_url(&self, query: &PackageIdentity) -> Result<String> {
        let query = query.normalized();

        let mut url = self.walk_source_repos(&query, &query.name, &query.version)?;
        if url.is_none() {
            if let Some(source) = self.walk_binary_repos(&query, &query.name)? {
                url = self.walk_source_repos(&query, &source.name, &source.version)?;
            }
        }

        match url {
            Some(url) if self.cache.test_url(&url) => Ok(url),
            Some(url) => {
                warn!("Discovered source is not reachable: {:?}", url);
                Err(SourceNotFound::new(query.name, query.version).into())
            }
            None => Err(SourceNotFound::new(query.name, query.version).into()),
        }
    }
}

impl SourceFinder for YumFinder {
    fn distro(&self) -> Distro {
        self.distro
    }

    fn package(&self) -> &PackageIdentity {
        &self.package
    }

    fn find_package(&self, query: &PackageIdentity) -> Result<DiscoveredSource> {
        let url = self.get_source_url(query)?;
        Ok(DiscoveredSource::srpm(url))
    }
}
