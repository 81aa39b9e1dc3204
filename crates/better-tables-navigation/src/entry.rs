//! Stored navigation contexts

use serde::{Deserialize, Serialize};

/// One navigation context: the windowed key list of a filtered list view
///
/// Serialized into the session as JSON. `primary_keys` is in traversal order
/// and is not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry<K> {
	/// Token this entry is stored under
	pub token: String,
	/// Keys after windowing
	pub primary_keys: Vec<K>,
	/// Key count before windowing
	pub total_count: usize,
	/// Whether windowing dropped keys
	pub truncated: bool,
	/// Creation time, seconds since the Unix epoch
	pub created_at: i64,
	/// Absolute URL of the list request that created the entry
	#[serde(default)]
	pub origin_url: Option<String>,
}

/// 1-based position of a key within an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
	/// 1-based index
	pub index: usize,
	/// Number of keys in the entry
	pub total: usize,
}

impl<K> NavigationEntry<K> {
	/// Whether the entry is still live at `now` for the given timeout
	///
	/// An entry exactly `timeout` seconds old is still live.
	pub fn is_live(&self, now: i64, timeout: u64) -> bool {
		is_live(self.created_at, now, timeout)
	}

	/// Number of stored keys
	pub fn len(&self) -> usize {
		self.primary_keys.len()
	}

	/// Whether no keys are stored
	pub fn is_empty(&self) -> bool {
		self.primary_keys.is_empty()
	}
}

impl<K: PartialEq> NavigationEntry<K> {
	/// Index of `key`, first occurrence
	pub fn index_of(&self, key: &K) -> Option<usize> {
		self.primary_keys.iter().position(|k| k == key)
	}

	/// Position of `key`, or `None` when it is not stored
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_navigation::{NavigationEntry, Position};
	///
	/// let entry = NavigationEntry {
	///     token: "t".to_string(),
	///     primary_keys: vec![10, 20, 30],
	///     total_count: 3,
	///     truncated: false,
	///     created_at: 0,
	///     origin_url: None,
	/// };
	/// assert_eq!(entry.position(&20), Some(Position { index: 2, total: 3 }));
	/// assert_eq!(entry.position(&999), None);
	/// ```
	pub fn position(&self, key: &K) -> Option<Position> {
		self.index_of(key).map(|i| Position {
			index: i + 1,
			total: self.primary_keys.len(),
		})
	}

	/// Key following `key`, `None` at the end or when `key` is not stored
	pub fn next_key(&self, key: &K) -> Option<&K> {
		self.index_of(key).and_then(|i| self.primary_keys.get(i + 1))
	}

	/// Key preceding `key`, `None` at the start or when `key` is not stored
	pub fn previous_key(&self, key: &K) -> Option<&K> {
		self.index_of(key)
			.and_then(|i| i.checked_sub(1))
			.and_then(|i| self.primary_keys.get(i))
	}
}

/// The part of an entry needed for expiry and eviction
///
/// Decodes any stored entry regardless of its key type.
#[derive(Debug, Deserialize)]
pub(crate) struct EntryHeader {
	pub(crate) created_at: i64,
}

pub(crate) fn is_live(created_at: i64, now: i64, timeout: u64) -> bool {
	let age = now.saturating_sub(created_at);
	age <= i64::try_from(timeout).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn entry() -> NavigationEntry<u32> {
		NavigationEntry {
			token: "abc".to_string(),
			primary_keys: vec![10, 20, 30],
			total_count: 3,
			truncated: false,
			created_at: 1_000,
			origin_url: Some("https://example.com/orders/".to_string()),
		}
	}

	#[rstest]
	fn test_middle_key(entry: NavigationEntry<u32>) {
		assert_eq!(entry.previous_key(&20), Some(&10));
		assert_eq!(entry.next_key(&20), Some(&30));
		assert_eq!(entry.position(&20), Some(Position { index: 2, total: 3 }));
	}

	#[rstest]
	fn test_first_key_has_no_previous(entry: NavigationEntry<u32>) {
		assert_eq!(entry.previous_key(&10), None);
		assert_eq!(entry.next_key(&10), Some(&20));
	}

	#[rstest]
	fn test_last_key_has_no_next(entry: NavigationEntry<u32>) {
		assert_eq!(entry.next_key(&30), None);
		assert_eq!(entry.position(&30), Some(Position { index: 3, total: 3 }));
	}

	#[rstest]
	fn test_absent_key(entry: NavigationEntry<u32>) {
		assert_eq!(entry.position(&999), None);
		assert_eq!(entry.next_key(&999), None);
		assert_eq!(entry.previous_key(&999), None);
	}

	#[rstest]
	#[case::fresh(1_000, true)]
	#[case::at_timeout(4_600, true)]
	#[case::past_timeout(4_601, false)]
	fn test_liveness(entry: NavigationEntry<u32>, #[case] now: i64, #[case] live: bool) {
		assert_eq!(entry.is_live(now, 3600), live);
	}

	#[rstest]
	fn test_json_shape(entry: NavigationEntry<u32>) {
		let value = serde_json::to_value(&entry).unwrap();

		assert_eq!(value["primary_keys"], serde_json::json!([10, 20, 30]));
		assert_eq!(value["created_at"], 1_000);
		let header: EntryHeader = serde_json::from_value(value).unwrap();
		assert_eq!(header.created_at, 1_000);
	}
}
