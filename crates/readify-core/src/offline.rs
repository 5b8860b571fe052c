//! Offline asset cache
//!
//! Models the site's install / activate / fetch cache lifecycle:
//!
//! - **install**: fetch every asset in the manifest into a new named cache.
//!   Any failure aborts the install and leaves no partial cache behind.
//! - **activate**: make one cache current and purge every other one.
//! - **respond**: serve a request from cache if present, else fall through
//!   to the network.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::{debug, info};

/// Name of the current cache version
pub const CACHE_NAME: &str = "readify-v1";

/// Assets cached on install, in order
pub const ASSETS: &[&str] = &[
    "./",
    "./Home_Page.html",
    "./Explorer_Page.html",
    "./Tracker_Page.html",
    "./Recommender_page.html",
    "./Flow_Page.html",
    "./Feedback_Page.html",
    "./Main.css",
    "./Main.js",
    "./readify-logo.svg",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Failed to fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },

    #[error("No installed cache named '{0}'")]
    UnknownCache(String),
}

/// Network access used to fill the cache
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, CacheError>;
}

/// A named, ordered list of assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheManifest {
    pub name: String,
    pub assets: Vec<String>,
}

impl CacheManifest {
    pub fn new(name: impl Into<String>, assets: &[&str]) -> Self {
        Self {
            name: name.into(),
            assets: assets.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self::new(CACHE_NAME, ASSETS)
    }
}

type Entries = HashMap<String, Vec<u8>>;

/// Named caches of fetched assets
#[derive(Debug, Default)]
pub struct AssetCache {
    caches: BTreeMap<String, Entries>,
    active: Option<String>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every asset of `manifest` into a cache named after it
    ///
    /// Nothing is stored unless every fetch succeeds.
    pub fn install<F: Fetcher + ?Sized>(
        &mut self,
        manifest: &CacheManifest,
        fetcher: &F,
    ) -> Result<(), CacheError> {
        let mut entries = Entries::with_capacity(manifest.assets.len());
        for url in &manifest.assets {
            let body = fetcher.fetch(url)?;
            entries.insert(url.clone(), body);
        }

        info!(
            "Installed cache {} with {} asset(s)",
            manifest.name,
            entries.len()
        );
        self.caches.insert(manifest.name.clone(), entries);
        Ok(())
    }

    /// Make `name` the active cache and delete every other cache
    ///
    /// Returns the names of the purged caches.
    pub fn activate(&mut self, name: &str) -> Result<Vec<String>, CacheError> {
        if !self.caches.contains_key(name) {
            return Err(CacheError::UnknownCache(name.to_string()));
        }

        let purged: Vec<String> = self
            .caches
            .keys()
            .filter(|k| k.as_str() != name)
            .cloned()
            .collect();
        self.caches.retain(|k, _| k == name);
        self.active = Some(name.to_string());

        if !purged.is_empty() {
            info!("Purged old caches: {}", purged.join(", "));
        }
        Ok(purged)
    }

    /// Serve `url` from any cache, falling through to `fetcher` on a miss
    pub fn respond<F: Fetcher + ?Sized>(
        &self,
        url: &str,
        fetcher: &F,
    ) -> Result<Vec<u8>, CacheError> {
        if let Some(body) = self.lookup(url) {
            debug!("Cache hit for {}", url);
            return Ok(body.to_vec());
        }
        debug!("Cache miss for {}", url);
        fetcher.fetch(url)
    }

    fn lookup(&self, url: &str) -> Option<&[u8]> {
        self.caches
            .values()
            .find_map(|entries| entries.get(url))
            .map(Vec::as_slice)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn cache_names(&self) -> Vec<&str> {
        self.caches.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.lookup(url).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Serves `body of <url>` for every url except the listed failures
    #[derive(Default)]
    struct FakeNetwork {
        failing: HashSet<String>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeNetwork {
        fn failing(urls: &[&str]) -> Self {
            Self {
                failing: urls.iter().map(|u| u.to_string()).collect(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Fetcher for FakeNetwork {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, CacheError> {
            self.requests.borrow_mut().push(url.to_string());
            if self.failing.contains(url) {
                return Err(CacheError::Fetch {
                    url: url.to_string(),
                    reason: "offline".to_string(),
                });
            }
            Ok(format!("body of {}", url).into_bytes())
        }
    }

    #[test]
    fn test_default_manifest() {
        let manifest = CacheManifest::default();
        assert_eq!(manifest.name, "readify-v1");
        assert_eq!(manifest.assets.len(), 10);
        assert_eq!(manifest.assets[0], "./");
        assert_eq!(manifest.assets[9], "./readify-logo.svg");
    }

    #[test]
    fn test_install_fetches_every_asset() {
        let network = FakeNetwork::default();
        let mut cache = AssetCache::new();
        cache.install(&CacheManifest::default(), &network).unwrap();

        assert_eq!(network.requests.borrow().len(), ASSETS.len());
        for asset in ASSETS {
            assert!(cache.contains(asset));
        }
    }

    #[test]
    fn test_failed_install_leaves_nothing() {
        let network = FakeNetwork::failing(&["./Main.css"]);
        let mut cache = AssetCache::new();

        let err = cache
            .install(&CacheManifest::default(), &network)
            .unwrap_err();
        assert!(matches!(err, CacheError::Fetch { .. }));
        assert!(cache.cache_names().is_empty());
        assert!(!cache.contains("./"));
        assert!(matches!(
            cache.activate(CACHE_NAME),
            Err(CacheError::UnknownCache(_))
        ));
    }

    #[test]
    fn test_activate_purges_other_caches() {
        let network = FakeNetwork::default();
        let mut cache = AssetCache::new();
        cache
            .install(&CacheManifest::new("readify-v0", &["./old.js"]), &network)
            .unwrap();
        cache.install(&CacheManifest::default(), &network).unwrap();

        let purged = cache.activate(CACHE_NAME).unwrap();
        assert_eq!(purged, vec!["readify-v0"]);
        assert_eq!(cache.cache_names(), vec![CACHE_NAME]);
        assert_eq!(cache.active(), Some(CACHE_NAME));
        assert!(!cache.contains("./old.js"));
    }

    #[test]
    fn test_respond_prefers_cache() {
        let network = FakeNetwork::default();
        let mut cache = AssetCache::new();
        cache.install(&CacheManifest::default(), &network).unwrap();
        network.requests.borrow_mut().clear();

        let body = cache.respond("./Main.js", &network).unwrap();
        assert_eq!(body, b"body of ./Main.js");
        assert!(network.requests.borrow().is_empty());

        let body = cache.respond("./cover.png", &network).unwrap();
        assert_eq!(body, b"body of ./cover.png");
        assert_eq!(*network.requests.borrow(), vec!["./cover.png"]);
    }

    #[test]
    fn test_respond_miss_propagates_network_failure() {
        let cache = AssetCache::new();
        let network = FakeNetwork::failing(&["./Main.js"]);
        assert!(cache.respond("./Main.js", &network).is_err());
    }
}
