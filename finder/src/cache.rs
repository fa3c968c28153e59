use crate::repodata::{self, RepoIndex};
use srcfind_common::errors::*;
use srcfind_common::http::{self, Transport};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Memoized remote lookups for a single run.
///
/// Entries are never evicted implicitly, a failed fetch stays failed until
/// `clear()` is called.
pub struct RepoCache {
    transport: Box<dyn Transport>,
    content: RefCell<HashMap<String, Rc<Vec<u8>>>>,
    repos: RefCell<HashMap<String, Option<Rc<RepoIndex>>>>,
    liveness: RefCell<HashMap<String, bool>>,
}

impl RepoCache {
    pub fn new(transport: Box<dyn Transport>) -> RepoCache {
        RepoCache {
            transport,
            content: RefCell::default(),
            repos: RefCell::default(),
            liveness: RefCell::default(),
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Fetch a resource that must exist, non-2xx responses are a `DownloadError`.
    ///
    /// Only successful responses are remembered.
    pub fn get_content(&self, url: &str) -> Result<Rc<Vec<u8>>> {
        if let Some(body) = self.content.borrow().get(url) {
            trace!("Content cache hit for {:?}", url);
            return Ok(body.clone());
        }
        let body = Rc::new(http::fetch(self.transport(), url)?);
        self.content
            .borrow_mut()
            .insert(url.to_string(), body.clone());
        Ok(body)
    }

    /// Load the repository index at `url`, or `None` if it can't be loaded.
    pub fn get_repo(&self, url: &str) -> Option<Rc<RepoIndex>> {
        let key = repodata::normalize_baseurl(url);
        if let Some(repo) = self.repos.borrow().get(&key) {
            trace!("Repository cache hit for {:?}", key);
            return repo.clone();
        }

        let repo = match repodata::load(self.transport(), &key) {
            Ok(index) => Some(Rc::new(index)),
            Err(err) => {
                warn!("Failed to load repository {:?}: {:#}", key, err);
                None
            }
        };
        self.repos.borrow_mut().insert(key, repo.clone());
        repo
    }

    /// Probe a url with HEAD, any error or non-2xx status means "not live".
    pub fn test_url(&self, url: &str) -> bool {
        if let Some(live) = self.liveness.borrow().get(url) {
            return *live;
        }

        let live = match self.transport.head(url) {
            Ok(status) => (200..300).contains(&status),
            Err(err) => {
                debug!("Liveness probe for {:?} failed: {:#}", url, err);
                false
            }
        };
        debug!("Probed {:?}: live={}", url, live);
        self.liveness.borrow_mut().insert(url.to_string(), live);
        live
    }

    pub fn clear(&self) {
        debug!("Clearing repository cache");
        self.content.borrow_mut().clear();
        self.repos.borrow_mut().clear();
        self.liveness.borrow_mut().clear();
    }
}
