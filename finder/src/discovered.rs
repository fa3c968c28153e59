use serde::Serialize;
use srcfind_common::errors::*;
use srcfind_common::http::Transport;
use std::fmt;
use std::io::Write;

pub const SRPM_EXTENSION: &str = ".src.rpm";

/// The source artifacts located for a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredSource {
    urls: Vec<String>,
    archive_extension: String,
}

impl DiscoveredSource {
    /// A source whose first url already is the complete archive, eg. an SRPM.
    pub fn remote_archive<I, S>(urls: I, archive_extension: &str) -> DiscoveredSource
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DiscoveredSource {
            urls: urls.into_iter().map(Into::into).collect(),
            archive_extension: archive_extension.to_string(),
        }
    }

    pub fn srpm<S: Into<String>>(url: S) -> DiscoveredSource {
        DiscoveredSource::remote_archive([url], SRPM_EXTENSION)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn archive_extension(&self) -> &str {
        &self.archive_extension
    }

    /// Collect the discovered files before archiving.
    ///
    /// Nothing to do for remote archives, the archive is the artifact.
    pub fn populate_archive(&self) -> Result<()> {
        Ok(())
    }

    /// Stream the archive into `out`, returning the number of bytes written.
    pub fn make_archive(&self, transport: &dyn Transport, out: &mut dyn Write) -> Result<u64> {
        self.populate_archive()?;
        let url = self
            .urls
            .first()
            .context("Discovered source has no urls")?;
        transport.download(url, out)
    }
}

impl fmt::Display for DiscoveredSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.urls.join("\n"))
    }
}
