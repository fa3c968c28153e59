use flate2::write::GzEncoder;
use std::fmt::Write as _;
use std::io::Write;

pub const PRIMARY_HREF: &str = "repodata/0d8d-primary.xml.gz";

#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub epoch: String,
    pub ver: String,
    pub rel: String,
    pub arch: String,
    pub sourcerpm: Option<String>,
}

impl Package {
    pub fn source(name: &str, ver: &str, rel: &str) -> Package {
        Package {
            name: name.to_string(),
            epoch: "0".to_string(),
            ver: ver.to_string(),
            rel: rel.to_string(),
            arch: "src".to_string(),
            sourcerpm: None,
        }
    }

    pub fn binary(name: &str, ver: &str, rel: &str, sourcerpm: &str) -> Package {
        Package {
            name: name.to_string(),
            epoch: "0".to_string(),
            ver: ver.to_string(),
            rel: rel.to_string(),
            arch: "x86_64".to_string(),
            sourcerpm: Some(sourcerpm.to_string()),
        }
    }

    pub fn with_epoch(mut self, epoch: &str) -> Package {
        self.epoch = epoch.to_string();
        self
    }

    pub fn filename(&self) -> String {
        format!("{}-{}-{}.{}.rpm", self.name, self.ver, self.rel, self.arch)
    }

    pub fn location(&self) -> String {
        if self.arch == "src" {
            format!("SPackages/{}", self.filename())
        } else {
            format!("Packages/{}", self.filename())
        }
    }
}

pub fn repomd_xml(primary_href: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<repomd xmlns="http://linux.duke.edu/metadata/repo" xmlns:rpm="http://linux.duke.edu/metadata/rpm">
  <revision>1636482000</revision>
  <data type="primary">
    <checksum type="sha256">0d8d5f0e1c2b3a4958677685a4b3c2d1e0f9a8b7c6d5e4f3a2b1c0d9e8f7a6b5</checksum>
    <location href="{primary_href}"/>
    <timestamp>1636482000</timestamp>
    <size>1024</size>
  </data>
  <data type="filelists">
    <location href="repodata/77ab-filelists.xml.gz"/>
  </data>
</repomd>
"#
    )
}

pub fn primary_xml(packages: &[Package]) -> String {
    let mut out = String::new();
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        out,
        r#"<metadata xmlns="http://linux.duke.edu/metadata/common" xmlns:rpm="http://linux.duke.edu/metadata/rpm" packages="{}">"#,
        packages.len()
    )
    .unwrap();
    for pkg in packages {
        let sourcerpm = match &pkg.sourcerpm {
            Some(sourcerpm) => format!("<rpm:sourcerpm>{sourcerpm}</rpm:sourcerpm>"),
            None => "<rpm:sourcerpm/>".to_string(),
        };
        write!(
            out,
            r#"<package type="rpm">
  <name>{name}</name>
  <arch>{arch}</arch>
  <version epoch="{epoch}" ver="{ver}" rel="{rel}"/>
  <checksum type="sha256" pkgid="YES">5b1b1a6f0e8a0c0d4ab3c1c2c3d9f3f2fcb4a4b5f6d7c8b9a0e1f2d3c4b5a697</checksum>
  <summary>{name}</summary>
  <location href="{location}"/>
  <format>
    <rpm:license>GPLv2</rpm:license>
    {sourcerpm}
  </format>
</package>
"#,
            name = pkg.name,
            arch = pkg.arch,
            epoch = pkg.epoch,
            ver = pkg.ver,
            rel = pkg.rel,
            location = pkg.location(),
        )
        .unwrap();
    }
    writeln!(out, "</metadata>").unwrap();
    out
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), flate2::Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}
