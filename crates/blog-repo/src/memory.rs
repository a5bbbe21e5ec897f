use async_trait::async_trait;
use blog_types::domain::post::{NewPost, Post};
use blog_types::domain::user::{NewUser, User};
use blog_types::ports::{PostRepository, RepoError, UserRepository};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Id-keyed rows plus the counter that hands out ids, starting at 1.
struct Table<T> {
    rows: DashMap<i64, T>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn list(&self) -> Vec<T> {
        let mut rows: Vec<(i64, T)> = self
            .rows
            .iter()
            .map(|kv| (*kv.key(), kv.value().clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, row)| row).collect()
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).map(|r| r.clone())
    }

    fn insert(&self, build: impl FnOnce(i64) -> T) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(id, build(id));
        id
    }

    fn update(&self, id: i64, build: impl FnOnce(i64) -> T) -> u64 {
        match self.rows.get_mut(&id) {
            Some(mut row) => {
                *row = build(id);
                1
            }
            None => 0,
        }
    }

    fn remove(&self, id: i64) -> u64 {
        u64::from(self.rows.remove(&id).is_some())
    }
}

#[derive(Clone)]
pub struct InMemoryUserRepo {
    table: Arc<Table<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Table::new()),
        }
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.table.list())
    }

    async fn get(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn insert(&self, user: NewUser) -> Result<i64, RepoError> {
        Ok(self.table.insert(|id| user.into_user(id)))
    }

    async fn update(&self, id: i64, user: NewUser) -> Result<u64, RepoError> {
        Ok(self.table.update(id, |id| user.into_user(id)))
    }

    async fn remove(&self, id: i64) -> Result<u64, RepoError> {
        Ok(self.table.remove(id))
    }
}

#[derive(Clone)]
pub struct InMemoryPostRepo {
    table: Arc<Table<Post>>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Table::new()),
        }
    }
}

impl Default for InMemoryPostRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.list())
    }

    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn insert(&self, post: NewPost) -> Result<i64, RepoError> {
        Ok(self.table.insert(|id| post.into_post(id)))
    }

    async fn update(&self, id: i64, post: NewPost) -> Result<u64, RepoError> {
        Ok(self.table.update(id, |id| post.into_post(id)))
    }

    async fn remove(&self, id: i64) -> Result<u64, RepoError> {
        Ok(self.table.remove(id))
    }
}
