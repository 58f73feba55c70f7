use chrono::{DateTime, Duration, Utc};
use quiz_core::model::{QuizSession, SessionId};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::repository::StorageError;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

/// Fresh session id: base-36 nanosecond timestamp, a dash, and a random
/// number below 2^30.
#[must_use]
pub fn generate_session_id() -> SessionId {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default().unsigned_abs();
    let salt: u32 = rand::rng().random_range(0..1 << 30);
    SessionId::new(format!("{}-{salt}", to_base36(nanos)))
}

/// Every live quiz session, behind one lock.
///
/// Each method holds the lock for its whole duration and never does I/O
/// while holding it.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, QuizSession>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, QuizSession>>, StorageError> {
        self.sessions
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))
    }

    /// Snapshot of a session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn get(&self, id: &SessionId) -> Result<Option<QuizSession>, StorageError> {
        Ok(self.lock()?.get(id).cloned())
    }

    /// Insert a session under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn create(&self, session: QuizSession) -> Result<SessionId, StorageError> {
        let mut guard = self.lock()?;
        let mut id = generate_session_id();
        while guard.contains_key(&id) {
            id = generate_session_id();
        }
        guard.insert(id.clone(), session);
        Ok(id)
    }

    /// Run `f` against the stored session while holding the lock.
    ///
    /// Returns `Ok(None)` when no session has that id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn with_session<R>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut QuizSession) -> R,
    ) -> Result<Option<R>, StorageError> {
        let mut guard = self.lock()?;
        Ok(guard.get_mut(id).map(f))
    }

    /// Drop a session. Removing an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn remove(&self, id: &SessionId) -> Result<Option<QuizSession>, StorageError> {
        Ok(self.lock()?.remove(id))
    }

    /// Remove the session only if `expired` holds for it, checked under the
    /// same lock.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn remove_if(
        &self,
        id: &SessionId,
        expired: impl FnOnce(&QuizSession) -> bool,
    ) -> Result<Option<QuizSession>, StorageError> {
        let mut guard = self.lock()?;
        if guard.get(id).is_some_and(expired) {
            return Ok(guard.remove(id));
        }
        Ok(None)
    }

    /// Remove sessions idle for longer than `max_idle`; returns how many went.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn sweep_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> Result<usize, StorageError> {
        let mut guard = self.lock()?;
        let before = guard.len();
        guard.retain(|_, session| !session.is_idle(now, max_idle));
        Ok(before - guard.len())
    }

    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.len())
    }

    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if a previous holder panicked.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.lock()?.is_empty())
    }
}
