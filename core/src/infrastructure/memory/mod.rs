use std::path::Path;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::domain::{
    author::entities::Author, book::entities::Book, comment::entities::Comment,
    common::entities::app_errors::CoreError, member::entities::Member, post::entities::Post,
};

pub mod fixtures;

/// Everything the service knows, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

/// Shared in-memory store handed to every repository.
///
/// Readers clone a consistent snapshot under the read lock, writers hold the
/// write lock for the whole check-and-insert.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    pub fn new(state: StoreState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Seed from the JSON fixture at `path`, or from the built-in one.
    pub async fn from_fixture(path: Option<&Path>) -> Result<Self, CoreError> {
        let state = fixtures::load_fixture(path).await?;

        info!(
            authors = state.authors.len(),
            books = state.books.len(),
            members = state.members.len(),
            posts = state.posts.len(),
            comments = state.comments.len(),
            "memory store seeded"
        );

        Ok(Self::new(state))
    }

    pub fn builtin() -> Result<Self, CoreError> {
        fixtures::builtin_fixture().map(Self::new)
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}
