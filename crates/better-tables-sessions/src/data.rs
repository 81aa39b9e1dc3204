//! Per-request session data

use crate::backend::SessionBackend;
use crate::error::{Result, SessionError};
use crate::store::SessionStore;
use serde_json::Value;
use std::collections::HashMap;

/// Size limit matching what browsers accept for a single cookie
pub const COOKIE_SIZE_LIMIT: usize = 4096;

/// Session data loaded for the duration of one request
///
/// Holds the client's key-value pairs in memory and tracks whether they
/// changed, so the transport only writes back modified sessions. An
/// optional size limit models cookie-backed transports, where an oversized
/// session cannot be persisted; writes that would exceed it fail and leave
/// the data untouched.
///
/// # Examples
///
/// ```
/// use better_tables_sessions::{SessionData, SessionStore};
/// use serde_json::json;
///
/// let mut session = SessionData::new();
/// session.set("bdt_nav_token_abc", json!({"created_at": 1})).unwrap();
/// session.set("other", json!(1)).unwrap();
///
/// assert_eq!(session.keys_with_prefix("bdt_nav_"), vec!["bdt_nav_token_abc"]);
/// assert!(session.is_modified());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionData {
	data: HashMap<String, Value>,
	modified: bool,
	size_limit: Option<usize>,
}

impl SessionData {
	/// Create an empty session
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap data loaded from a backend; starts unmodified
	pub fn from_map(data: HashMap<String, Value>) -> Self {
		Self {
			data,
			modified: false,
			size_limit: None,
		}
	}

	/// Reject writes that would grow the serialized session past `limit` bytes
	pub fn with_size_limit(mut self, limit: usize) -> Self {
		self.size_limit = Some(limit);
		self
	}

	/// Whether any write or delete happened since load or the last commit
	pub fn is_modified(&self) -> bool {
		self.modified
	}

	/// Number of keys
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the session holds no keys
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Borrow the raw mapping
	pub fn as_map(&self) -> &HashMap<String, Value> {
		&self.data
	}

	/// Remove every key
	pub fn clear(&mut self) {
		if !self.data.is_empty() {
			self.data.clear();
			self.modified = true;
		}
	}

	/// Serialized size of the session in bytes
	pub fn serialized_size(&self) -> Result<usize> {
		Ok(serde_json::to_vec(&self.data)?.len())
	}

	/// Load the session `session_id` from `backend`, empty when unknown
	pub async fn load<B>(backend: &B, session_id: &str) -> Result<Self>
	where
		B: SessionBackend + ?Sized,
	{
		let data = backend.load(session_id).await?.unwrap_or_default();
		Ok(Self::from_map(data))
	}

	/// Persist through `backend` if modified; returns whether a write happened
	pub async fn commit<B>(&mut self, backend: &B, session_id: &str) -> Result<bool>
	where
		B: SessionBackend + ?Sized,
	{
		if !self.modified {
			return Ok(false);
		}
		backend.save(session_id, &self.data).await?;
		self.modified = false;
		Ok(true)
	}
}

impl SessionStore for SessionData {
	fn get(&self, key: &str) -> Option<Value> {
		self.data.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: Value) -> Result<()> {
		let previous = self.data.insert(key.to_string(), value);
		if let Some(limit) = self.size_limit {
			let size = self.serialized_size()?;
			if size > limit {
				match previous {
					Some(old) => self.data.insert(key.to_string(), old),
					None => self.data.remove(key),
				};
				return Err(SessionError::TooLarge { size, limit });
			}
		}
		self.modified = true;
		Ok(())
	}

	fn delete(&mut self, key: &str) -> Result<bool> {
		let removed = self.data.remove(key).is_some();
		if removed {
			self.modified = true;
		}
		Ok(removed)
	}

	fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
		let mut keys: Vec<String> = self
			.data
			.keys()
			.filter(|key| key.starts_with(prefix))
			.cloned()
			.collect();
		keys.sort();
		keys
	}

	fn contains_key(&self, key: &str) -> bool {
		self.data.contains_key(key)
	}
}
