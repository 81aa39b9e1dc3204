//! Session persistence backends

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Raw key-value contents of one session
pub type SessionMap = HashMap<String, Value>;

/// Backend that persists whole sessions between requests
///
/// The session is loaded once per request into a
/// [`SessionData`](crate::SessionData), mutated in memory, and written back
/// in one piece. Concurrent requests for the same session therefore race
/// with last-write-wins semantics.
#[async_trait]
pub trait SessionBackend: Send + Sync {
	/// Load session contents by id
	async fn load(&self, session_id: &str) -> Result<Option<SessionMap>>;

	/// Replace session contents
	async fn save(&self, session_id: &str, data: &SessionMap) -> Result<()>;

	/// Delete a session
	async fn delete(&self, session_id: &str) -> Result<()>;

	/// Create a new session id
	fn create_session_id(&self) -> String {
		Uuid::new_v4().to_string()
	}
}

/// In-memory session backend for testing and development
///
/// # Examples
///
/// ```
/// use better_tables_sessions::{InMemorySessionBackend, SessionBackend};
///
/// #[tokio::main]
/// async fn main() {
///     let backend = InMemorySessionBackend::new();
///     let session_id = backend.create_session_id();
///
///     let session = backend.load(&session_id).await.unwrap();
///     assert!(session.is_none());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionBackend {
	sessions: Arc<Mutex<HashMap<String, SessionMap>>>,
}

impl InMemorySessionBackend {
	/// Create an empty backend
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored sessions
	pub async fn len(&self) -> usize {
		self.sessions.lock().await.len()
	}

	/// Whether no session is stored
	pub async fn is_empty(&self) -> bool {
		self.sessions.lock().await.is_empty()
	}
}

#[async_trait]
impl SessionBackend for InMemorySessionBackend {
	async fn load(&self, session_id: &str) -> Result<Option<SessionMap>> {
		let sessions = self.sessions.lock().await;
		Ok(sessions.get(session_id).cloned())
	}

	async fn save(&self, session_id: &str, data: &SessionMap) -> Result<()> {
		let mut sessions = self.sessions.lock().await;
		sessions.insert(session_id.to_string(), data.clone());
		Ok(())
	}

	async fn delete(&self, session_id: &str) -> Result<()> {
		let mut sessions = self.sessions.lock().await;
		sessions.remove(session_id);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_in_memory_backend_round_trip() {
		let backend = InMemorySessionBackend::new();
		let session_id = backend.create_session_id();
		let mut data = SessionMap::new();
		data.insert("table_per_page".to_string(), json!(50));

		backend.save(&session_id, &data).await.unwrap();
		let loaded = backend.load(&session_id).await.unwrap().unwrap();
		assert_eq!(loaded.get("table_per_page"), Some(&json!(50)));

		backend.delete(&session_id).await.unwrap();
		assert!(backend.load(&session_id).await.unwrap().is_none());
		assert!(backend.is_empty().await);
	}

	#[tokio::test]
	async fn test_create_session_id_is_unique() {
		let backend = InMemorySessionBackend::new();
		let id1 = backend.create_session_id();
		let id2 = backend.create_session_id();

		assert_ne!(id1, id2);
		assert!(!id1.is_empty());
	}
}
