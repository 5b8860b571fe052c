//! Offline cache command handler
//!
//! Installs the asset manifest from a local site directory, activates it and
//! answers sample requests, so the cache lifecycle can be checked without a
//! network. Each run starts from an empty cache.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use readify_core::offline::{AssetCache, CacheError, CacheManifest, Fetcher};

use crate::output::{Output, OutputFormat};

/// Serves asset urls from files under a root directory
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, url: &str) -> PathBuf {
        let relative = url.trim_start_matches("./");
        if relative.is_empty() {
            self.root.join("index.html")
        } else {
            self.root.join(relative)
        }
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, CacheError> {
        let path = self.resolve(url);
        debug!("Fetching {} from {:?}", url, path);
        std::fs::read(&path).map_err(|e| CacheError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// One request answered after activation
#[derive(Debug, Serialize)]
pub struct Served {
    pub url: String,
    /// Answered from the cache rather than the site directory
    pub cached: bool,
    pub bytes: usize,
}

/// Outcome of one install / activate / respond cycle
#[derive(Debug, Serialize)]
pub struct CacheRun {
    pub cache: String,
    pub assets: Vec<String>,
    pub purged: Vec<String>,
    pub served: Vec<Served>,
}

/// Install the manifest from `site_dir`, activate it and answer `requests`
///
/// The cache lives for this call only, so nothing older is ever purged.
pub fn run(site_dir: &Path, requests: &[String]) -> Result<CacheRun> {
    let manifest = CacheManifest::default();
    let fetcher = DirFetcher::new(site_dir);

    let mut cache = AssetCache::new();
    cache
        .install(&manifest, &fetcher)
        .with_context(|| format!("Failed to install cache from {:?}", site_dir))?;
    let purged = cache
        .activate(&manifest.name)
        .context("Failed to activate cache")?;

    let mut served = Vec::with_capacity(requests.len());
    for url in requests {
        let cached = cache.contains(url);
        let body = cache
            .respond(url, &fetcher)
            .with_context(|| format!("Failed to serve {}", url))?;
        served.push(Served {
            url: url.clone(),
            cached,
            bytes: body.len(),
        });
    }

    Ok(CacheRun {
        cache: manifest.name,
        assets: manifest.assets,
        purged,
        served,
    })
}

/// Check that `site_dir` can be cached for offline use
pub fn install(site_dir: &Path, requests: &[String], output: &Output) -> Result<()> {
    let report = run(site_dir, requests)?;

    match output.format {
        OutputFormat::Json => output.json(&report),
        OutputFormat::Quiet => println!("{}", report.cache),
        OutputFormat::Human => {
            output.success(&format!(
                "Cache {} ready with {} asset(s)",
                report.cache,
                report.assets.len()
            ));
            for served in &report.served {
                println!(
                    "  {} ({} bytes, {})",
                    served.url,
                    served.bytes,
                    if served.cached { "cache" } else { "network" }
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use readify_core::offline::ASSETS;
    use tempfile::TempDir;

    fn site_with(assets: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for asset in assets {
            let path = DirFetcher::new(dir.path()).resolve(asset);
            std::fs::write(path, asset.as_bytes()).unwrap();
        }
        dir
    }

    #[test]
    fn test_root_url_maps_to_index() {
        let fetcher = DirFetcher::new("/srv/site");
        assert_eq!(fetcher.resolve("./"), PathBuf::from("/srv/site/index.html"));
        assert_eq!(fetcher.resolve("./Main.js"), PathBuf::from("/srv/site/Main.js"));
    }

    #[test]
    fn test_install_complete_site() {
        let site = site_with(ASSETS);
        let output = Output::new(OutputFormat::Quiet);
        assert!(install(site.path(), &[], &output).is_ok());
    }

    #[test]
    fn test_install_missing_asset_fails() {
        let site = site_with(&ASSETS[..ASSETS.len() - 1]);
        let output = Output::new(OutputFormat::Quiet);
        assert!(install(site.path(), &[], &output).is_err());
    }

    #[test]
    fn test_requests_hit_cache_or_fall_through() {
        let site = site_with(ASSETS);
        std::fs::write(site.path().join("cover.png"), b"png").unwrap();

        let requests = vec!["./Main.js".to_string(), "./cover.png".to_string()];
        let report = run(site.path(), &requests).unwrap();

        assert_eq!(report.cache, "readify-v1");
        assert!(report.purged.is_empty());
        assert!(report.served[0].cached);
        assert_eq!(report.served[0].bytes, "./Main.js".len());
        assert!(!report.served[1].cached);
        assert_eq!(report.served[1].bytes, 3);
    }

    #[test]
    fn test_unknown_request_fails() {
        let site = site_with(ASSETS);
        let requests = vec!["./missing.css".to_string()];
        assert!(run(site.path(), &requests).is_err());
    }
}
