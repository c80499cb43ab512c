use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::SiteRegistry;

/// In-memory registry for tests; preserves insertion order like the real
/// store's rowid ordering.
#[derive(Default)]
pub struct MemoryRegistry {
    sites: Mutex<Vec<String>>,
}

impl MemoryRegistry {
    pub fn with_sites(sites: &[&str]) -> Self {
        Self { sites: Mutex::new(sites.iter().map(|site| site.to_string()).collect()) }
    }
}

#[async_trait]
impl SiteRegistry for MemoryRegistry {
    async fn list(&self) -> Result<Vec<String>> {
        Ok(self.sites.lock().unwrap().clone())
    }

    async fn add(&self, url: &str) -> Result<()> {
        let mut sites = self.sites.lock().unwrap();
        if !sites.iter().any(|site| site == url) {
            sites.push(url.to_string());
        }
        Ok(())
    }

    async fn remove(&self, url: &str) -> Result<()> {
        self.sites.lock().unwrap().retain(|site| site != url);
        Ok(())
    }
}
