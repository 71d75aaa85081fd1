//! In-memory store shared by the service tests. Mirrors the relational
//! behavior the services rely on: inner join on authors, left-joined counts,
//! cascade on post delete and foreign-key failures as `NotFound`.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::data::comment_repository::{CommentRecord, CommentRepository, NewComment};
use crate::data::like_repository::LikeRepository;
use crate::data::post_repository::{NewPost, PostRepository, PostSummaryRecord};
use crate::data::user_repository::UserRepository;
use crate::domain::error::{DomainError, Entity};
use crate::domain::feed::{FeedQuery, SortDirection, SortType};

struct StoredPost {
    user_id: String,
    title: String,
    content: String,
    views: i64,
    created_at: DateTime<Utc>,
}

struct StoredComment {
    post_id: i64,
    user_id: String,
    content: String,
    created_at: DateTime<Utc>,
}

struct State {
    users: HashMap<String, String>,
    posts: BTreeMap<i64, StoredPost>,
    comments: BTreeMap<i64, StoredComment>,
    likes: BTreeSet<(String, i64)>,
    next_id: i64,
    base: DateTime<Utc>,
    unavailable: bool,
    concurrent_delete: bool,
    corrupt_timestamps: BTreeSet<i64>,
}

impl State {
    /// Strictly increasing creation times, one millisecond apart.
    fn next_stamp(&mut self) -> (i64, DateTime<Utc>) {
        self.next_id += 1;
        (self.next_id, self.base + Duration::milliseconds(self.next_id))
    }

    fn summary(&self, id: i64) -> Option<PostSummaryRecord> {
        let post = self.posts.get(&id)?;
        let author = self.users.get(&post.user_id)?;
        Some(PostSummaryRecord {
            id,
            title: post.title.clone(),
            content: post.content.clone(),
            views: post.views,
            author: author.clone(),
            like_count: self.likes.iter().filter(|(_, p)| *p == id).count() as i64,
            comment_count: self.comments.values().filter(|c| c.post_id == id).count() as i64,
            created_at: if self.corrupt_timestamps.contains(&id) {
                "yesterday-ish".to_string()
            } else {
                post.created_at.to_rfc3339()
            },
        })
    }
}

#[derive(Clone)]
pub(crate) struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                users: HashMap::new(),
                posts: BTreeMap::new(),
                comments: BTreeMap::new(),
                likes: BTreeSet::new(),
                next_id: 0,
                base: Utc::now() - Duration::minutes(5),
                unavailable: false,
                concurrent_delete: false,
                corrupt_timestamps: BTreeSet::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store mutex poisoned")
    }

    fn available(&self) -> Result<MutexGuard<'_, State>, DomainError> {
        let state = self.lock();
        if state.unavailable {
            return Err(DomainError::Infrastructure("connection refused".to_string()));
        }
        Ok(state)
    }

    pub(crate) fn add_user(&self, id: &str, username: &str) {
        self.lock().users.insert(id.to_string(), username.to_string());
    }

    pub(crate) fn insert_post(&self, user_id: &str, title: &str, content: &str) -> i64 {
        let mut state = self.lock();
        let (id, created_at) = state.next_stamp();
        state.posts.insert(
            id,
            StoredPost {
                user_id: user_id.to_string(),
                title: title.to_string(),
                content: content.to_string(),
                views: 0,
                created_at,
            },
        );
        id
    }

    /// A post whose author is not (or no longer) a known user.
    pub(crate) fn insert_orphan_post(&self, user_id: &str, title: &str) -> i64 {
        self.insert_post(user_id, title, "body")
    }

    pub(crate) fn insert_like(&self, user_id: &str, post_id: i64) {
        self.lock().likes.insert((user_id.to_string(), post_id));
    }

    pub(crate) fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// Makes the next comment deletes find nothing, as if another request
    /// removed the row first.
    pub(crate) fn simulate_concurrent_delete(&self, enabled: bool) {
        self.lock().concurrent_delete = enabled;
    }

    /// Makes the stored `created_at` of `post_id` unparsable.
    pub(crate) fn corrupt_post_timestamp(&self, post_id: i64) {
        self.lock().corrupt_timestamps.insert(post_id);
    }

    pub(crate) fn post_count(&self) -> usize {
        self.lock().posts.len()
    }

    pub(crate) fn comment_total(&self) -> usize {
        self.lock().comments.len()
    }

    pub(crate) fn views_of(&self, post_id: i64) -> Option<i64> {
        self.lock().posts.get(&post_id).map(|post| post.views)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create_post(&self, input: NewPost) -> Result<PostSummaryRecord, DomainError> {
        let mut state = self.available()?;
        if !state.users.contains_key(&input.author_id) {
            return Err(DomainError::NotFound(Entity::User));
        }
        let (id, created_at) = state.next_stamp();
        state.posts.insert(
            id,
            StoredPost {
                user_id: input.author_id,
                title: input.title,
                content: input.content,
                views: 0,
                created_at,
            },
        );
        state
            .summary(id)
            .ok_or_else(|| DomainError::Unexpected("inserted post vanished".to_string()))
    }

    async fn list_feed(&self, query: FeedQuery) -> Result<Vec<PostSummaryRecord>, DomainError> {
        let state = self.available()?;
        let mut rows: Vec<(PostSummaryRecord, DateTime<Utc>)> = state
            .posts
            .iter()
            .filter_map(|(id, post)| state.summary(*id).map(|row| (row, post.created_at)))
            .collect();

        rows.sort_by(|(a, a_created), (b, b_created)| {
            let primary = match query.sort_type {
                SortType::Trend => a.like_count.cmp(&b.like_count),
                SortType::Latest => a_created.cmp(b_created),
            };
            let ordering = primary.then(a.id.cmp(&b.id));
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        Ok(rows
            .into_iter()
            .map(|(row, _)| row)
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn get_post_summary(&self, id: i64) -> Result<Option<PostSummaryRecord>, DomainError> {
        Ok(self.available()?.summary(id))
    }

    async fn post_exists(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.available()?.posts.contains_key(&id))
    }

    async fn increment_views(&self, id: i64) -> Result<(), DomainError> {
        if let Some(post) = self.available()?.posts.get_mut(&id) {
            post.views += 1;
        }
        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.available()?;
        if state.posts.remove(&id).is_none() {
            return Ok(false);
        }
        state.comments.retain(|_, comment| comment.post_id != id);
        state.likes.retain(|(_, post_id)| *post_id != id);
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn create_comment(&self, input: NewComment) -> Result<CommentRecord, DomainError> {
        let mut state = self.available()?;
        if !state.posts.contains_key(&input.post_id) {
            return Err(DomainError::NotFound(Entity::Post));
        }
        let author = state
            .users
            .get(&input.author_id)
            .cloned()
            .ok_or(DomainError::NotFound(Entity::User))?;
        let (id, created_at) = state.next_stamp();
        let record = CommentRecord {
            id,
            author,
            content: input.content.clone(),
            created_at: created_at.to_rfc3339(),
        };
        state.comments.insert(
            id,
            StoredComment {
                post_id: input.post_id,
                user_id: input.author_id,
                content: input.content,
                created_at,
            },
        );
        Ok(record)
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentRecord>, DomainError> {
        let state = self.available()?;
        let mut rows: Vec<(i64, &StoredComment)> = state
            .comments
            .iter()
            .filter(|(_, comment)| comment.post_id == post_id)
            .map(|(id, comment)| (*id, comment))
            .collect();
        rows.sort_by(|(a_id, a), (b_id, b)| {
            b.created_at.cmp(&a.created_at).then(b_id.cmp(a_id))
        });

        Ok(rows
            .into_iter()
            .filter_map(|(id, comment)| {
                let author = state.users.get(&comment.user_id)?;
                Some(CommentRecord {
                    id,
                    author: author.clone(),
                    content: comment.content.clone(),
                    created_at: comment.created_at.to_rfc3339(),
                })
            })
            .collect())
    }

    async fn count_for_post(&self, post_id: i64) -> Result<i64, DomainError> {
        let state = self.available()?;
        Ok(state
            .comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .count() as i64)
    }

    async fn find_author(&self, comment_id: i64) -> Result<Option<String>, DomainError> {
        let state = self.available()?;
        Ok(state
            .comments
            .get(&comment_id)
            .map(|comment| comment.user_id.clone()))
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<bool, DomainError> {
        let mut state = self.available()?;
        if state.concurrent_delete {
            return Ok(false);
        }
        Ok(state.comments.remove(&comment_id).is_some())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn add_like(&self, user_id: &str, post_id: i64) -> Result<(), DomainError> {
        let mut state = self.available()?;
        if !state.posts.contains_key(&post_id) {
            return Err(DomainError::NotFound(Entity::Post));
        }
        if !state.users.contains_key(user_id) {
            return Err(DomainError::NotFound(Entity::User));
        }
        state.likes.insert((user_id.to_string(), post_id));
        Ok(())
    }

    async fn remove_like(&self, user_id: &str, post_id: i64) -> Result<(), DomainError> {
        self.available()?
            .likes
            .remove(&(user_id.to_string(), post_id));
        Ok(())
    }

    async fn count_for_post(&self, post_id: i64) -> Result<i64, DomainError> {
        let state = self.available()?;
        Ok(state.likes.iter().filter(|(_, p)| *p == post_id).count() as i64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn user_exists(&self, user_id: &str) -> Result<bool, DomainError> {
        Ok(self.available()?.users.contains_key(user_id))
    }
}
