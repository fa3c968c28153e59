use super::FixedRepos;
use srcfind_common::config::RhelConfig;

/// UBI keeps packages in a handful of idiosyncratic subtrees, these are
/// listed in the config instead of being crawled.
pub fn repos(config: &RhelConfig) -> FixedRepos {
    let repo = config.repo().trim_end_matches('/');
    let dirs = config.search_dirs();
    FixedRepos {
        source: dirs
            .iter()
            .map(|dir| format!("{}/{}/source/SRPMS", repo, dir))
            .collect(),
        binary: dirs
            .iter()
            .map(|dir| format!("{}/{}/os", repo, dir))
            .collect(),
    }
}
