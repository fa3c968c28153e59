//! Source lookup on the Photon OS package host.
//!
//! Photon publishes its SRPMs in flat `N_srpms_{arch}/` directories below a
//! release directory. Most packages are found by filename in the directory
//! index, subpackages are resolved through the repodata of the
//! subdirectories next to them.

use crate::cache::RepoCache;
use crate::discovered::DiscoveredSource;
use crate::listing::{self, Link};
use crate::repodata::RepoPackage;
use crate::{PackageIdentity, SourceFinder};
use regex::Regex;
use srcfind_common::config::PhotonConfig;
use srcfind_common::errors::*;
use srcfind_common::Distro;
use std::rc::Rc;

pub struct PhotonFinder {
    package: PackageIdentity,
    packages: String,
    arch: String,
    cache: Rc<RepoCache>,
}

/// A source directory and the entries of its index.
pub type SourceDir = (String, Vec<Link>);

impl PhotonFinder {
    pub fn new(
        config: &PhotonConfig,
        package: PackageIdentity,
        arch: Option<&str>,
        cache: Rc<RepoCache>,
    ) -> PhotonFinder {
        let packages = config.packages();
        let packages = if packages.ends_with('/') {
            packages.to_string()
        } else {
            format!("{packages}/")
        };
        PhotonFinder {
            package,
            packages,
            arch: arch.unwrap_or_else(|| config.arch()).to_string(),
            cache,
        }
    }

    /// The one release directory that can contain the package.
    pub fn release_dir(&self, query: &PackageIdentity) -> Result<String> {
        let major = Distro::Photon
            .release_marker()
            .and_then(|marker| listing::release_major(&query.version, marker));
        let dirs = listing::fetch_version_dirs(&self.cache, &self.packages, major)?;

        match dirs.as_slice() {
            [dir] => Ok(dir.clone()),
            [] => {
                debug!("No photon release directory matches {:?}", query.version);
                Err(SourceNotFound::new(&query.name, &query.version).into())
            }
            _ => {
                debug!("Ambiguous photon release directories for {:?}: {:?}", query.version, dirs);
                Err(SourceNotFound::new(&query.name, &query.version).into())
            }
        }
    }

    /// The `N_srpms_{arch}/` directories of a release, unreachable ones are skipped.
    pub fn source_dirs<'a>(&'a self, release: &str) -> Result<impl Iterator<Item = SourceDir> + 'a> {
        let release_url = format!("{}{}/", self.packages, release);
        let body = self.cache.get_content(&release_url)?;
        let html = String::from_utf8_lossy(&body);

        let re = Regex::new(&format!(r"^\d+_srpms_{}$", regex::escape(&self.arch)))?;
        let urls = listing::parse_links(&html)
            .iter()
            .map(Link::name)
            .filter(|name| re.is_match(name))
            .map(|name| format!("{release_url}{name}/"))
            .collect::<Vec<_>>();
        debug!("Found photon source directories: {:?}", urls);

        let dirs = urls.into_iter().filter_map(move |url| {
            match self.cache.get_content(&url) {
                Ok(body) => {
                    let links = listing::parse_links(&String::from_utf8_lossy(&body));
                    Some((url, links))
                }
                Err(err) => {
                    warn!("Skipping photon source directory {:?}: {:#}", url, err);
                    None
                }
            }
        });
        Ok(dirs)
    }

    /// Look for the source package by filename.
    pub fn direct_path(links: &[Link], query: &PackageIdentity) -> Option<String> {
        let filename = format!("{}-{}.src.rpm", query.name, query.version_release());
        links
            .iter()
            .find(|link| link.name() == filename)
            .map(|link| link.href.clone())
    }

    fn source_filename(pkg: &RepoPackage) -> Option<String> {
        match &pkg.sourcerpm {
            Some(sourcerpm) => Some(sourcerpm.clone()),
            None if pkg.arch == "src" => pkg
                .location
                .rsplit('/')
                .next()
                .map(String::from),
            None => None,
        }
    }

    /// Resolve the package through the repodata of the subdirectories of a source dir.
    pub fn repo_lookup(&self, url: &str, links: &[Link], query: &PackageIdentity) -> Option<String> {
        let subdirs = links.iter().filter(|link| {
            let name = link.name();
            !name.is_empty()
                && name != ".."
                && !name.ends_with(".rpm")
                && !link.href.starts_with('?')
                && !link.href.starts_with('/')
        });

        for subdir in subdirs {
            let Some(repo) = self.cache.get_repo(&format!("{}{}/", url, subdir.name())) else {
                continue;
            };

            let found = repo
                .findall(&query.name)
                .iter()
                .filter(|pkg| pkg.matches_version(&query.version))
                .find_map(PhotonFinder::source_filename);

            if let Some(filename) = found {
                if let Some(link) = links.iter().find(|link| link.name() == filename) {
                    info!("Resolved {} through repodata of {:?}", query, repo.baseurl());
                    return Some(link.href.clone());
                }
                debug!("Source {:?} is not in {:?}", filename, url);
            }
        }
        None
    }
}

impl SourceFinder for PhotonFinder {
    fn distro(&self) -> Distro {
        Distro::Photon
    }

    fn package(&self) -> &PackageIdentity {
        &self.package
    }

    fn find_package(&self, query: &PackageIdentity) -> Result<DiscoveredSource> {
        let query = query.normalized();
        let release = self.release_dir(&query)?;

        for (url, links) in self.source_dirs(&release)? {
            if let Some(path) = PhotonFinder::direct_path(&links, &query) {
                return Ok(DiscoveredSource::srpm(format!("{url}{path}")));
            }
            if let Some(path) = self.repo_lookup(&url, &links, &query) {
                return Ok(DiscoveredSource::srpm(format!("{url}{path}")));
            }
        }

        Err(SourceNotFound::new(query.name, query.version).into())
    }
}
