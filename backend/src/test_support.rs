//! Test utilities shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled only for tests or with the `test-support` feature.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug)]
struct State {
    rows: Vec<User>,
    next_id: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory [`UserRepository`] mimicking a `SERIAL` keyed table.
///
/// Rows keep insertion order and identifiers are never reused.
///
/// # Examples
/// ```ignore
/// use users_api::domain::UserDraft;
/// use users_api::domain::ports::UserRepository;
/// use users_api::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let user = repo.insert(&UserDraft::new("Ada", "ada@x.com")).await.unwrap();
/// assert_eq!(user.id().as_i32(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    fn state(&self) -> Result<MutexGuard<'_, State>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory state poisoned"))
    }

    /// Snapshot of stored rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> Vec<User> {
        self.state
            .lock()
            .map(|state| state.rows.clone())
            .unwrap_or_default()
    }

    /// Whether no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.state()?.rows.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.state()?.rows.iter().find(|user| user.id() == id).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.state()?;
        let id = UserId::new(state.next_id);
        state.next_id += 1;
        let user = User::new(id, draft.clone());
        state.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserPersistenceError> {
        let mut state = self.state()?;
        let mut affected = 0;
        for row in state.rows.iter_mut().filter(|user| user.id() == id) {
            *row = User::new(id, draft.clone());
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError> {
        let mut state = self.state()?;
        let before = state.rows.len();
        state.rows.retain(|user| user.id() != id);
        Ok(before - state.rows.len())
    }
}
