pub use anyhow::{anyhow, bail, Context, Error, Result};
pub use log::{debug, error, info, trace, warn};
use std::error::Error as StdError;
use std::fmt;
use std::fmt::Formatter;

/// Every search strategy was exhausted without locating the source.
///
/// This is an expected outcome, callers should treat it as a negative result
/// rather than a failure of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNotFound {
    pub name: String,
    pub version: String,
}

impl SourceNotFound {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> SourceNotFound {
        SourceNotFound {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for SourceNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "source not found for {} {}", self.name, self.version)
    }
}

impl StdError for SourceNotFound {}

/// A resource that was expected to exist could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadError {
    pub url: String,
    pub status: Option<u16>,
}

impl DownloadError {
    pub fn new<U: Into<String>>(url: U, status: Option<u16>) -> DownloadError {
        DownloadError {
            url: url.into(),
            status,
        }
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "failed to download {:?} (http status {status})", self.url),
            None => write!(f, "failed to download {:?}", self.url),
        }
    }
}

impl StdError for DownloadError {}
