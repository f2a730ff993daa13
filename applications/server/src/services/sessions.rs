/// Session store - tracks authenticated sessions by their `session_state`
use crate::{
    config::SessionSettings,
    error::{GatewayError, Result},
};
use chrono::{DateTime, Duration, Utc};
use portal_core::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::{fs, sync::RwLock, task::JoinHandle};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// Process-wide session store.
///
/// Built once by [`SessionStore::init`] before the server accepts requests
/// and written out by [`SessionStore::flush`] on shutdown. Without
/// persistence it lives in memory only.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Memory-only store
    pub fn in_memory(ttl_secs: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::seconds(ttl_secs as i64),
            path: None,
        }
    }

    /// Create the store, loading saved sessions when persistence is on
    pub async fn init(settings: &SessionSettings) -> Result<Self> {
        let mut store = Self::in_memory(settings.ttl_secs);
        if !settings.persistent {
            return Ok(store);
        }

        store.path = Some(settings.path.clone());
        if fs::try_exists(&settings.path).await? {
            let data = fs::read(&settings.path).await?;
            let saved: HashMap<String, Session> = serde_json::from_slice(&data)
                .map_err(|e| GatewayError::Session(format!("{:?}: {}", settings.path, e)))?;
            *store.sessions.get_mut() = saved;
            let dropped = store.purge_expired().await;
            tracing::info!(
                path = ?settings.path,
                sessions = store.len().await,
                expired = dropped,
                "Loaded saved sessions"
            );
        }
        Ok(store)
    }

    /// Record activity on a session, creating it on first sight
    pub async fn touch(&self, session_id: &str, user: Option<&UserId>) {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(session_id) {
            // New sessions pay for dropping the expired ones
            sessions.retain(|_, s| !self.is_expired(s, now));
        }
        let session = sessions.entry(session_id.to_string()).or_insert_with(|| Session {
            user_id: None,
            created_at: now,
            last_seen: now,
        });
        session.last_seen = now;
        if let Some(user) = user {
            session.user_id = Some(user.to_string());
        }
    }

    /// A live session; expired ones read as absent
    pub async fn get(&self, session_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .filter(|s| !self.is_expired(s, Utc::now()))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop expired sessions; returns how many went
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        before - sessions.len()
    }

    /// Persist live sessions (when configured); returns how many were kept
    pub async fn flush(&self) -> Result<usize> {
        self.purge_expired().await;
        let sessions = self.sessions.read().await;

        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            let data = serde_json::to_vec(&*sessions)
                .map_err(|e| GatewayError::Session(e.to_string()))?;
            fs::write(path, data).await?;
            tracing::info!(path = ?path, sessions = sessions.len(), "Sessions saved");
        }

        Ok(sessions.len())
    }

    /// Purge expired sessions every `every` until the task is aborted
    pub fn start_sweeper(self: Arc<Self>, every: std::time::Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;

            loop {
                interval.tick().await;
                let dropped = self.purge_expired().await;
                if dropped > 0 {
                    tracing::debug!(expired = dropped, "Swept expired sessions");
                }
            }
        })
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.last_seen > self.ttl
    }
}
