mod pages;
mod packages;

pub use pages::*;
pub use packages::*;

pub const DUMMY_VAULT: &str = "https://vault.example.com/centos";
pub const DUMMY_MIRROR: &str = "http://mirror.example.com/centos";
pub const DUMMY_ALMA_VAULT: &str = "https://alma.example.com/vault";
pub const DUMMY_ALMA_CURRENT: &str = "https://alma.example.com/almalinux";
pub const DUMMY_UBI: &str = "https://ubi.example.com/dist";
pub const DUMMY_PHOTON: &str = "https://photon.example.com/photon/";

pub const DUMMY_SOURCE_REPO: &str = "https://repo.example.com/8/BaseOS/Source/";
pub const DUMMY_OTHER_SOURCE_REPO: &str = "https://repo.example.com/8/AppStream/Source/";
pub const DUMMY_BINARY_REPO: &str = "https://repo.example.com/8/BaseOS/x86_64/os/";

pub const DUMMY_SOURCE_NAME: &str = "lvm2";
pub const DUMMY_SOURCE_VERSION: &str = "2.03.11-5.el8";
pub const DUMMY_BINARY_NAME: &str = "device-mapper-libs";
pub const DUMMY_BINARY_VERSION: &str = "8:1.02.175-5.el8";

pub fn dummy_config() -> String {
    format!(
        r#"
[http]
timeout = 5

[centos]
vault = "{DUMMY_VAULT}"
mirror = "{DUMMY_MIRROR}"

[almalinux]
vault = "{DUMMY_ALMA_VAULT}"
current = "{DUMMY_ALMA_CURRENT}"

[rhel]
repo = "{DUMMY_UBI}"
search_dirs = ["ubi8/8/x86_64/baseos", "ubi8/8/x86_64/appstream"]

[photon]
packages = "{DUMMY_PHOTON}"
"#
    )
}

/// The lvm2 source package and the device-mapper-libs subpackage built from it.
pub fn lvm2_source() -> Package {
    Package::source(DUMMY_SOURCE_NAME, "2.03.11", "5.el8").with_epoch("8")
}

pub fn device_mapper_libs() -> Package {
    Package::binary(DUMMY_BINARY_NAME, "1.02.175", "5.el8", "lvm2-2.03.11-5.el8.src.rpm")
        .with_epoch("8")
}
