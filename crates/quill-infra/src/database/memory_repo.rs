//! In-memory post repository - used as fallback when no database is
//! configured, and as the substitute store in API-layer tests.
//! Note: data is lost on process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

#[derive(Default)]
struct Store {
    rows: Vec<Post>,
    next_id: i32,
}

/// In-memory repository over an async RwLock. Ids are serial, matching the
/// monotonically increasing primary key the database would assign.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let row = Post {
            id: store.next_id,
            title: post.title,
            content: post.content,
            author: post.author,
            time_created: Utc::now(),
        };
        store.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.clone())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut rows = store.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.len() as u64)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let row = store
            .rows
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        row.title = post.title;
        row.content = post.content;
        row.author = post.author;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.rows.len();
        store.rows.retain(|p| p.id != id);
        if store.rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
