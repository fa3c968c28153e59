use super::{is_live_repo, layout, RepoEnumerator, Repos};
use crate::cache::RepoCache;
use crate::listing;
use crate::PackageIdentity;
use srcfind_common::config::CentosConfig;
use srcfind_common::errors::*;
use srcfind_common::Distro;

pub const DEFAULT_SEARCH: &[&str] = &["BaseOS", "os", "updates", "extras"];
pub const OPTIMAL_SEARCH: &[&str] = &["AppStream", "PowerTools", "fasttrack"];

/// Repositories of the CentOS vault.
///
/// The current release keeps its binaries on the mirror only, so binary
/// repos fall back to the mirror host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentosRepos {
    vault: String,
    mirror: String,
    arch: String,
    subdirs: Vec<String>,
}

impl CentosRepos {
    pub fn new(config: &CentosConfig, repos: &[String], optimal: bool, arch: Option<&str>) -> CentosRepos {
        let mut subdirs = if repos.is_empty() || optimal {
            DEFAULT_SEARCH.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        } else {
            repos.to_vec()
        };
        if optimal {
            subdirs.extend(OPTIMAL_SEARCH.iter().map(|s| s.to_string()));
        }

        CentosRepos {
            vault: config.vault().trim_end_matches('/').to_string(),
            mirror: config.mirror().trim_end_matches('/').to_string(),
            arch: arch.unwrap_or_else(|| config.arch()).to_string(),
            subdirs,
        }
    }

    pub fn subdirs(&self) -> &[String] {
        &self.subdirs
    }

    fn dirs(&self, cache: &RepoCache, query: &PackageIdentity) -> Result<Vec<String>> {
        let major = Distro::Centos
            .release_marker()
            .and_then(|marker| listing::release_major(&query.version, marker));
        listing::fetch_version_dirs(cache, &format!("{}/", self.vault), major)
    }
}

impl RepoEnumerator for CentosRepos {
    fn source_repos<'a>(
        &'a self,
        cache: &'a RepoCache,
        query: &'a PackageIdentity,
    ) -> Result<Repos<'a>> {
        let dirs = self.dirs(cache, query)?;
        let repos = layout(dirs, &self.subdirs)
            .map(move |(dir, sub)| format!("{}/{}/{}/Source/", self.vault, dir, sub))
            .filter(move |url| is_live_repo(cache, url));
        Ok(Box::new(repos))
    }

    fn binary_repos<'a>(
        &'a self,
        cache: &'a RepoCache,
        query: &'a PackageIdentity,
    ) -> Result<Repos<'a>> {
        let dirs = self.dirs(cache, query)?;
        let repos = layout(dirs, &self.subdirs).filter_map(move |(dir, sub)| {
            let vault = format!("{}/{}/{}/{}/", self.vault, dir, sub, self.arch);
            let mirror = format!("{}/{}/{}/{}/", self.mirror, dir, sub, self.arch);
            [format!("{vault}os/"), vault, format!("{mirror}os/"), mirror]
                .into_iter()
                .find(|url| is_live_repo(cache, url))
        });
        Ok(Box::new(repos))
    }
}
