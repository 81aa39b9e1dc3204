//! Key-value view of one client's session

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Mutable string-keyed mapping persisted across requests for one client
///
/// Components that keep per-client state (navigation contexts, page size
/// preferences) receive a store explicitly instead of reaching for a
/// request-global session. Reads never fail; a missing key is `None`.
/// Writes may fail when the backing transport rejects them.
pub trait SessionStore {
	/// Get the value stored under `key`
	fn get(&self, key: &str) -> Option<Value>;

	/// Store `value` under `key`, replacing any previous value
	fn set(&mut self, key: &str, value: Value) -> Result<()>;

	/// Remove `key`; returns whether it was present
	fn delete(&mut self, key: &str) -> Result<bool>;

	/// All keys starting with `prefix`, in ascending order
	fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;

	/// Number of keys starting with `prefix`
	fn count_with_prefix(&self, prefix: &str) -> usize {
		self.keys_with_prefix(prefix).len()
	}

	/// Whether `key` is present
	fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}
}

/// Typed helpers over any [`SessionStore`]
///
/// # Examples
///
/// ```
/// use better_tables_sessions::{SessionData, SessionStoreExt};
///
/// let mut session = SessionData::new();
/// session.set_as("table_per_page", &50usize).unwrap();
/// assert_eq!(session.get_as::<usize>("table_per_page"), Some(50));
/// assert_eq!(session.get_as::<String>("table_per_page"), None);
/// ```
pub trait SessionStoreExt: SessionStore {
	/// Get and decode a value; `None` when missing or of another shape
	fn get_as<T>(&self, key: &str) -> Option<T>
	where
		T: DeserializeOwned,
	{
		self.get(key).and_then(|v| serde_json::from_value(v).ok())
	}

	/// Encode and store a value
	fn set_as<T>(&mut self, key: &str, value: &T) -> Result<()>
	where
		T: Serialize + ?Sized,
	{
		let value = serde_json::to_value(value)?;
		self.set(key, value)
	}
}

impl<S: SessionStore + ?Sized> SessionStoreExt for S {}
