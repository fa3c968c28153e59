use crate::config::HttpConfig;
use crate::errors::*;
use reqwest::blocking::Client as HttpClient;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("srcfind/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking access to remote resources.
///
/// Every call is bounded by a timeout, a hung endpoint surfaces as an error
/// instead of stalling the caller.
pub trait Transport {
    /// GET a resource. Non-2xx statuses are returned, not raised.
    fn get(&self, url: &str) -> Result<Response>;

    /// HEAD a resource and return the status code.
    fn head(&self, url: &str) -> Result<u16>;

    /// Stream a resource into `out`, failing on non-2xx statuses.
    fn download(&self, url: &str, out: &mut dyn Write) -> Result<u64>;
}

impl<T: Transport + ?Sized> Transport for Rc<T> {
    fn get(&self, url: &str) -> Result<Response> {
        (**self).get(url)
    }

    fn head(&self, url: &str) -> Result<u16> {
        (**self).head(url)
    }

    fn download(&self, url: &str, out: &mut dyn Write) -> Result<u64> {
        (**self).download(url, out)
    }
}

/// GET a resource that is required to exist.
pub fn fetch(transport: &dyn Transport, url: &str) -> Result<Vec<u8>> {
    let resp = transport.get(url)?;
    if !resp.is_success() {
        return Err(DownloadError::new(url, Some(resp.status)).into());
    }
    Ok(resp.body)
}

pub struct Client {
    http: HttpClient,
}

pub fn client(config: &HttpConfig) -> Result<Client> {
    let timeout = config.timeout();
    debug!("Setting up http client with {}s timeout", timeout);
    let http = HttpClient::builder()
        .timeout(Duration::from_secs(timeout))
        .user_agent(config.user_agent())
        .build()
        .context("Failed to setup http client")?;
    Ok(Client { http })
}

fn download_error(url: &str, err: reqwest::Error) -> Error {
    let status = err.status().map(|s| s.as_u16());
    Error::new(err).context(DownloadError::new(url, status))
}

impl Transport for Client {
    fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {:?}", url);
        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|err| download_error(url, err))?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(|err| download_error(url, err))?;
        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }

    fn head(&self, url: &str) -> Result<u16> {
        trace!("HEAD {:?}", url);
        let resp = self
            .http
            .head(url)
            .send()
            .map_err(|err| download_error(url, err))?;
        Ok(resp.status().as_u16())
    }

    fn download(&self, url: &str, out: &mut dyn Write) -> Result<u64> {
        info!("Downloading {:?}", url);
        let mut resp = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|err| download_error(url, err))?;
        let bytes = resp
            .copy_to(out)
            .map_err(|err| download_error(url, err))?;
        info!("Downloaded {} bytes", bytes);
        Ok(bytes)
    }
}
