use srcfind_common::errors::*;
use srcfind_common::http::{Response, Transport};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum Route {
    Body(Vec<u8>),
    Status(u16),
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Download,
}

#[derive(Debug, Default)]
struct Inner {
    routes: HashMap<String, Route>,
    requests: Vec<(Method, String)>,
}

/// In-memory stand-in for the remote hosts, unknown urls answer 404.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    inner: Rc<RefCell<Inner>>,
}

impl FakeTransport {
    pub fn serve<B: Into<Vec<u8>>>(&self, url: &str, body: B) {
        self.route(url, Route::Body(body.into()));
    }

    pub fn status(&self, url: &str, status: u16) {
        self.route(url, Route::Status(status));
    }

    pub fn timeout(&self, url: &str) {
        self.route(url, Route::Timeout);
    }

    fn route(&self, url: &str, route: Route) {
        self.inner
            .borrow_mut()
            .routes
            .insert(url.to_string(), route);
    }

    fn lookup(&self, method: Method, url: &str) -> Option<Route> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push((method, url.to_string()));
        inner.routes.get(url).cloned()
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.inner.borrow().requests.clone()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|(m, u)| *m == method && u == url)
            .count()
    }

    pub fn requested_with_prefix(&self, prefix: &str) -> bool {
        self.inner
            .borrow()
            .requests
            .iter()
            .any(|(_, url)| url.starts_with(prefix))
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<Response> {
        match self.lookup(Method::Get, url) {
            Some(Route::Body(body)) => Ok(Response { status: 200, body }),
            Some(Route::Status(status)) => Ok(Response {
                status,
                body: Vec::new(),
            }),
            Some(Route::Timeout) => {
                Err(Error::msg("operation timed out").context(DownloadError::new(url, None)))
            }
            None => Ok(Response {
                status: 404,
                body: Vec::new(),
            }),
        }
    }

    fn head(&self, url: &str) -> Result<u16> {
        match self.lookup(Method::Head, url) {
            Some(Route::Body(_)) => Ok(200),
            Some(Route::Status(status)) => Ok(status),
            Some(Route::Timeout) => bail!("operation timed out"),
            None => Ok(404),
        }
    }

    fn download(&self, url: &str, out: &mut dyn Write) -> Result<u64> {
        match self.lookup(Method::Download, url) {
            Some(Route::Body(body)) => {
                out.write_all(&body)?;
                Ok(body.len() as u64)
            }
            Some(Route::Status(status)) => Err(DownloadError::new(url, Some(status)).into()),
            Some(Route::Timeout) => Err(DownloadError::new(url, None).into()),
            None => Err(DownloadError::new(url, Some(404)).into()),
        }
    }
}
