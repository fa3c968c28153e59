use crate::errors::*;
use crate::http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CENTOS_VAULT: &str = "https://vault.centos.org/centos";
// the current release is only published unencrypted on the main mirror
pub const CENTOS_MIRROR: &str = "http://mirror.centos.org/centos";
pub const ALMALINUX_VAULT: &str = "https://repo.almalinux.org/vault";
pub const ALMALINUX_CURRENT: &str = "https://repo.almalinux.org/almalinux";
pub const RHEL_UBI: &str = "https://cdn-ubi.redhat.com/content/public/ubi/dist";
pub const PHOTON_PACKAGES: &str = "https://packages.vmware.com/photon/";
pub const DEFAULT_ARCH: &str = "x86_64";

pub const RHEL_SEARCH_DIRS: &[&str] = &[
    "ubi8/8/x86_64/baseos",
    "ubi8/8/x86_64/appstream",
    "ubi8/8/x86_64/codeready-builder",
    "ubi/server/7/7Server/x86_64",
    "ubi/server/7/7Server/x86_64/extras",
    "ubi/server/7/7Server/x86_64/devtools/1",
    "ubi/server/7/7Server/x86_64/optional",
    "ubi/server/7/7Server/x86_64/rhscl/1",
    "ubi/atomic/7/7Server/x86_64",
];

pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<ConfigFile> {
    let mut config = ConfigFile::default();

    if let Some(c) = load_from("/etc/srcfind.conf")? {
        config.update(c);
    }

    if let Ok(path) = config_path() {
        if let Some(c) = load_from(path)? {
            config.update(c);
        }
    }

    if let Some(path) = path {
        let c = load_from(path)?.ok_or_else(|| anyhow!("Failed to read config file"))?;
        config.update(c);
    }

    Ok(config)
}

fn config_path() -> Result<PathBuf> {
    let config_dir = dirs_next::config_dir().ok_or_else(|| anyhow!("Failed to find config dir"))?;
    Ok(config_dir.join("srcfind.conf"))
}

fn load_from<P: AsRef<Path>>(path: P) -> Result<Option<ConfigFile>> {
    if let Ok(buf) = fs::read_to_string(path.as_ref()) {
        debug!("loading config file {:?}", path.as_ref());
        let config = toml::from_str(&buf).context("Failed to load config")?;
        Ok(Some(config))
    } else {
        Ok(None)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub centos: CentosConfig,
    #[serde(default)]
    pub almalinux: AlmaLinuxConfig,
    #[serde(default)]
    pub rhel: RhelConfig,
    #[serde(default)]
    pub photon: PhotonConfig,
}

impl ConfigFile {
    pub fn update(&mut self, c: ConfigFile) {
        self.http.update(c.http);
        self.centos.update(c.centos);
        self.almalinux.update(c.almalinux);
        self.rhel.update(c.rhel);
        self.photon.update(c.photon);
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct HttpConfig {
    pub timeout: Option<u64>,
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn update(&mut self, c: HttpConfig) {
        if c.timeout.is_some() {
            self.timeout = c.timeout;
        }
        if c.user_agent.is_some() {
            self.user_agent = c.user_agent;
        }
    }

    pub fn timeout(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CentosConfig {
    pub vault: Option<String>,
    pub mirror: Option<String>,
    pub arch: Option<String>,
}

impl CentosConfig {
    pub fn update(&mut self, c: CentosConfig) {
        if c.vault.is_some() {
            self.vault = c.vault;
        }
        if c.mirror.is_some() {
            self.mirror = c.mirror;
        }
        if c.arch.is_some() {
            self.arch = c.arch;
        }
    }

    pub fn vault(&self) -> &str {
        self.vault.as_deref().unwrap_or(CENTOS_VAULT)
    }

    pub fn mirror(&self) -> &str {
        self.mirror.as_deref().unwrap_or(CENTOS_MIRROR)
    }

    pub fn arch(&self) -> &str {
        self.arch.as_deref().unwrap_or(DEFAULT_ARCH)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AlmaLinuxConfig {
    pub vault: Option<String>,
    pub current: Option<String>,
    pub arch: Option<String>,
}

impl AlmaLinuxConfig {
    pub fn update(&mut self, c: AlmaLinuxConfig) {
        if c.vault.is_some() {
            self.vault = c.vault;
        }
        if c.current.is_some() {
            self.current = c.current;
        }
        if c.arch.is_some() {
            self.arch = c.arch;
        }
    }

    pub fn vault(&self) -> &str {
        self.vault.as_deref().unwrap_or(ALMALINUX_VAULT)
    }

    pub fn current(&self) -> &str {
        self.current.as_deref().unwrap_or(ALMALINUX_CURRENT)
    }

    pub fn arch(&self) -> &str {
        self.arch.as_deref().unwrap_or(DEFAULT_ARCH)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RhelConfig {
    pub repo: Option<String>,
    #[serde(default)]
    pub search_dirs: Vec<String>,
}

impl RhelConfig {
    pub fn update(&mut self, c: RhelConfig) {
        if c.repo.is_some() {
            self.repo = c.repo;
        }
        if !c.search_dirs.is_empty() {
            self.search_dirs = c.search_dirs;
        }
    }

    pub fn repo(&self) -> &str {
        self.repo.as_deref().unwrap_or(RHEL_UBI)
    }

    pub fn search_dirs(&self) -> Vec<String> {
        if self.search_dirs.is_empty() {
            RHEL_SEARCH_DIRS.iter().map(|d| d.to_string()).collect()
        } else {
            self.search_dirs.clone()
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PhotonConfig {
    pub packages: Option<String>,
    pub arch: Option<String>,
}

impl PhotonConfig {
    pub fn update(&mut self, c: PhotonConfig) {
        if c.packages.is_some() {
            self.packages = c.packages;
        }
        if c.arch.is_some() {
            self.arch = c.arch;
        }
    }

    pub fn packages(&self) -> &str {
        self.packages.as_deref().unwrap_or(PHOTON_PACKAGES)
    }

    pub fn arch(&self) -> &str {
        self.arch.as_deref().unwrap_or(DEFAULT_ARCH)
    }
}
