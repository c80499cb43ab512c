use anyhow::Result;
use async_trait::async_trait;
use libsql::params;

use crate::pool::{LibsqlManager, LibsqlPool};

/// Sentinel stored against every registered URL; presence is the only state.
const SENTINEL: &str = "1";

/// Narrow interface over the external key-value store holding monitored
/// URLs. All operations are idempotent and carry no transactional
/// guarantees across calls.
#[async_trait]
pub trait SiteRegistry: Send + Sync {
    /// All registered URLs in store listing order
    async fn list(&self) -> Result<Vec<String>>;

    /// Register a URL; no-op if already present
    async fn add(&self, url: &str) -> Result<()>;

    /// Delete a URL; no error if absent
    async fn remove(&self, url: &str) -> Result<()>;
}

/// LibSQL-backed registry implementation
pub struct LibsqlRegistry {
    pool: LibsqlPool,
}

impl LibsqlRegistry {
    /// Create a new registry instance from a pool
    pub fn new_from_pool(pool: LibsqlPool) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> Result<deadpool::managed::Object<LibsqlManager>> {
        Ok(self.pool.get().await?)
    }
}

#[async_trait]
impl SiteRegistry for LibsqlRegistry {
    async fn list(&self) -> Result<Vec<String>> {
        let conn = self.get_conn().await?;
        let mut rows = conn.query("SELECT url FROM sites ORDER BY rowid", ()).await?;

        let mut sites = Vec::new();
        while let Some(row) = rows.next().await? {
            sites.push(row.get::<String>(0)?);
        }

        Ok(sites)
    }

    async fn add(&self, url: &str) -> Result<()> {
        let conn = self.get_conn().await?;
        conn.execute(
            "INSERT OR IGNORE INTO sites (url, value) VALUES (?, ?)",
            params![url, SENTINEL],
        )
        .await?;
        Ok(())
    }

    async fn remove(&self, url: &str) -> Result<()> {
        let conn = self.get_conn().await?;
        conn.execute("DELETE FROM sites WHERE url = ?", params![url]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::migrations;

    async fn open_registry(dir: &tempfile::TempDir) -> LibsqlRegistry {
        let database =
            libsql::Builder::new_local(dir.path().join("registry.db")).build().await.unwrap();
        let conn = database.connect().unwrap();
        migrations::run_migrations(&conn).await.unwrap();

        let pool = LibsqlPool::builder(LibsqlManager::new(database)).build().unwrap();
        LibsqlRegistry::new_from_pool(pool)
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let registry = open_registry(&dir).await;

        registry.add("https://example.com").await.unwrap();
        registry.add("https://example.com").await.unwrap();

        assert_eq!(registry.list().await.unwrap(), vec!["https://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let registry = open_registry(&dir).await;

        registry.add("https://one.example").await.unwrap();
        registry.add("https://two.example").await.unwrap();
        registry.remove("https://one.example").await.unwrap();

        assert_eq!(registry.list().await.unwrap(), vec!["https://two.example".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_absent_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let registry = open_registry(&dir).await;

        registry.remove("https://never-added.example").await.unwrap();
        assert!(registry.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let registry = open_registry(&dir).await;

        registry.add("https://b.example").await.unwrap();
        registry.add("https://a.example").await.unwrap();

        assert_eq!(
            registry.list().await.unwrap(),
            vec!["https://b.example".to_string(), "https://a.example".to_string()]
        );
    }
}
