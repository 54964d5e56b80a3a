//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// Process-local registry store guarded by a read/write lock.
///
/// Writers take the lock exclusively for the whole check-then-insert
/// sequence; readers share it. The lock is never held across an await
/// point, so holding a synchronous lock inside async handlers is safe.
/// Entries live until the process exits.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    /// Creates an empty registry store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps a poisoned registry lock to the internal error kind.
fn map_poison_error<T>(_: PoisonError<T>) -> AppError {
    AppError::internal("Registry lock poisoned", json!({}))
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut links = self.links.write().map_err(map_poison_error)?;

        match links.entry(new_link.code) {
            Entry::Occupied(entry) => Ok(InsertOutcome::Occupied(entry.get().clone())),
            Entry::Vacant(entry) => {
                let link = Link::new(entry.key().clone(), new_link.long_url, Utc::now());
                entry.insert(link.clone());
                Ok(InsertOutcome::Inserted(link))
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().map_err(map_poison_error)?;

        Ok(links.get(code).cloned())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().map_err(map_poison_error)?;

        Ok(links.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        let links = self.links.read().map_err(map_poison_error)?;

        Ok(links.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = MemoryLinkRepository::new();

        let outcome = repo
            .insert_if_absent(new_link("abc", "http://example.com/a"))
            .await
            .unwrap();
        assert!(matches!(outcome, InsertOutcome::Inserted(_)));

        let found = repo.find_by_code("abc").await.unwrap().unwrap();
        assert_eq!(found.long_url, "http://example.com/a");
    }

    #[tokio::test]
    async fn test_insert_occupied_keeps_original() {
        let repo = MemoryLinkRepository::new();

        repo.insert_if_absent(new_link("abc", "http://example.com/a"))
            .await
            .unwrap();

        let outcome = repo
            .insert_if_absent(new_link("abc", "http://example.com/b"))
            .await
            .unwrap();

        match outcome {
            InsertOutcome::Occupied(existing) => {
                assert_eq!(existing.long_url, "http://example.com/a");
            }
            InsertOutcome::Inserted(_) => panic!("expected occupied outcome"),
        }

        // The original mapping is untouched
        let found = repo.find_by_code("abc").await.unwrap().unwrap();
        assert_eq!(found.long_url, "http://example.com/a");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_missing_code() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_code("doesnotexist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let repo = MemoryLinkRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());

        repo.insert_if_absent(new_link("a1", "http://example.com/1"))
            .await
            .unwrap();
        repo.insert_if_absent(new_link("a2", "http://example.com/2"))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);

        let urls: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|link| link.long_url)
            .collect();
        assert!(urls.contains(&"http://example.com/1".to_string()));
        assert!(urls.contains(&"http://example.com/2".to_string()));
    }
}
