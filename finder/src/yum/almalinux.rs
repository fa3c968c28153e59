use super::{is_live_repo, layout, RepoEnumerator, Repos};
use crate::cache::RepoCache;
use crate::listing;
use crate::PackageIdentity;
use srcfind_common::config::AlmaLinuxConfig;
use srcfind_common::errors::*;
use srcfind_common::Distro;

pub const DEFAULT_SEARCH: &[&str] = &["BaseOS", "AppStream", "extras", "cloud", "devel"];

/// Repositories of the AlmaLinux vault, binaries fall back to the current tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmaLinuxRepos {
    vault: String,
    current: String,
    arch: String,
    subdirs: Vec<String>,
}

impl AlmaLinuxRepos {
    pub fn new(config: &AlmaLinuxConfig, arch: Option<&str>) -> AlmaLinuxRepos {
        AlmaLinuxRepos {
            vault: config.vault().trim_end_matches('/').to_string(),
            current: config.current().trim_end_matches('/').to_string(),
            arch: arch.unwrap_or_else(|| config.arch()).to_string(),
            subdirs: DEFAULT_SEARCH.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn dirs(&self, cache: &RepoCache, query: &PackageIdentity) -> Result<Vec<String>> {
        let major = Distro::Almalinux
            .release_marker()
            .and_then(|marker| listing::release_major(&query.version, marker));
        listing::fetch_version_dirs(cache, &format!("{}/", self.vault), major)
    }
}

impl RepoEnumerator for AlmaLinuxRepos {
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
            [&self.vault, &self.current]
                .into_iter()
                .map(|host| format!("{}/{}/{}/{}/os/", host, dir, sub, self.arch))
                .find(|url| is_live_repo(cache, url))
        });
        Ok(Box::new(repos))
    }
}
