use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub mod config;
pub mod errors;
pub mod http;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Distro {
    Centos,
    Almalinux,
    Rhel,
    Photon,
    /// Plain yum repositories, only usable with explicit repo lists
    Yum,
}

impl Distro {
    /// The `.elN`/`.phN` marker a package release carries for this distro.
    pub fn release_marker(&self) -> Option<&'static str> {
        match self {
            Distro::Centos | Distro::Almalinux | Distro::Rhel => Some("el"),
            Distro::Photon => Some("ph"),
            Distro::Yum => None,
        }
    }
}
