use crate::cache::RepoCache;
use crate::photon::PhotonFinder;
use crate::yum::almalinux::AlmaLinuxRepos;
use crate::yum::centos::CentosRepos;
use crate::yum::{rhel, FixedRepos, YumFinder};
use crate::{FinderOptions, PackageIdentity, SourceFinder};
use srcfind_common::config::ConfigFile;
use srcfind_common::errors::*;
use srcfind_common::Distro;
use std::rc::Rc;

/// Construct the finder for a distribution.
pub fn factory(
    distro: Distro,
    package: PackageIdentity,
    config: &ConfigFile,
    options: &FinderOptions,
    cache: Rc<RepoCache>,
) -> Result<Box<dyn SourceFinder>> {
    let arch = options.arch.as_deref();

    let finder: Box<dyn SourceFinder> = match distro {
        Distro::Centos => {
            let repos = CentosRepos::new(&config.centos, &options.repos, options.optimal, arch);
            Box::new(
                YumFinder::new(distro, package, Box::new(repos), cache)
                    .with_source_repos(options.source_repos.clone())
                    .with_binary_repos(options.binary_repos.clone()),
            )
        }
        Distro::Almalinux => {
            let repos = AlmaLinuxRepos::new(&config.almalinux, arch);
            Box::new(
                YumFinder::new(distro, package, Box::new(repos), cache)
                    .with_source_repos(options.source_repos.clone())
                    .with_binary_repos(options.binary_repos.clone()),
            )
        }
        Distro::Rhel => {
            let repos = rhel::repos(&config.rhel);
            Box::new(
                YumFinder::new(distro, package, Box::new(repos), cache)
                    .with_source_repos(options.source_repos.clone())
                    .with_binary_repos(options.binary_repos.clone()),
            )
        }
        Distro::Photon => Box::new(PhotonFinder::new(&config.photon, package, arch, cache)),
        Distro::Yum => {
            if options.source_repos.is_empty() {
                bail!("Plain yum lookups need at least one source repo");
            }
            let repos = FixedRepos {
                source: options.source_repos.clone(),
                binary: options.binary_repos.clone(),
            };
            Box::new(YumFinder::new(distro, package, Box::new(repos), cache))
        }
    };

    debug!("Constructed {} finder for {}", distro, finder.package());
    Ok(finder)
}
