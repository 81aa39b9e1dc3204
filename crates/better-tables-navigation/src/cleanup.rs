//! Expiry and eviction of navigation contexts
//!
//! There is no background sweeper: the session only exists inside a
//! request. Instead, cleanup runs right before a new context is written and
//! does nothing until the session holds `max_contexts` contexts, so the
//! common write pays for a key count only.

use crate::entry::{EntryHeader, is_live};
use better_tables_conf::NavigationSettings;
use better_tables_sessions::{Result, SessionStore};

/// Remove expired contexts and, when over capacity, the oldest live ones
///
/// Does nothing unless `force` is set or the number of keys under the
/// navigation prefix has reached `max_contexts` (never, when unlimited).
///
/// 1. Every context older than `session_timeout` is removed. Contexts that
///    cannot be decoded are removed as well.
/// 2. If the live count is still at least `max_contexts`, the oldest
///    contexts by creation time are removed until one slot is free for the
///    context the caller is about to write.
///
/// Reading a context never refreshes its creation time, so eviction order
/// is creation order, not access order.
///
/// Returns the number of removed contexts. Session write failures are
/// propagated.
pub fn cleanup<S>(
	session: &mut S,
	settings: &NavigationSettings,
	now: i64,
	force: bool,
) -> Result<usize>
where
	S: SessionStore + ?Sized,
{
	sweep(session, settings, now, force, None)
}

/// Lazy cleanup ahead of writing the context stored under `key`
///
/// When `key` already holds a context the write replaces it in place, so
/// that context neither counts toward `max_contexts` nor is evicted.
pub fn cleanup_before_write<S>(
	session: &mut S,
	settings: &NavigationSettings,
	now: i64,
	key: &str,
) -> Result<usize>
where
	S: SessionStore + ?Sized,
{
	sweep(session, settings, now, false, Some(key))
}

fn sweep<S>(
	session: &mut S,
	settings: &NavigationSettings,
	now: i64,
	force: bool,
	replacing: Option<&str>,
) -> Result<usize>
where
	S: SessionStore + ?Sized,
{
	let prefix = settings.session_key_prefix.as_str();
	let mut keys = session.keys_with_prefix(prefix);
	keys.retain(|key| Some(key.as_str()) != replacing);
	let at_capacity = !settings.contexts_unlimited() && keys.len() >= settings.max_contexts;
	if !force && !at_capacity {
		return Ok(0);
	}

	let mut removed = 0;
	let mut live: Vec<(i64, String)> = Vec::with_capacity(keys.len());
	for key in keys {
		let header = session
			.get(&key)
			.and_then(|value| serde_json::from_value::<EntryHeader>(value).ok());
		match header {
			Some(header) if is_live(header.created_at, now, settings.session_timeout) => {
				live.push((header.created_at, key));
			}
			Some(_) => {
				session.delete(&key)?;
				removed += 1;
			}
			None => {
				tracing::warn!(key = %key, "removing undecodable navigation context");
				session.delete(&key)?;
				removed += 1;
			}
		}
	}
	let expired = removed;

	if !settings.contexts_unlimited() && live.len() >= settings.max_contexts {
		live.sort();
		let excess = live.len() - settings.max_contexts + 1;
		for (_, key) in live.into_iter().take(excess) {
			session.delete(&key)?;
			removed += 1;
		}
	}

	tracing::debug!(
		expired,
		evicted = removed - expired,
		forced = force,
		"navigation context cleanup"
	);
	Ok(removed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use better_tables_sessions::SessionData;
	use rstest::*;
	use serde_json::json;

	const NOW: i64 = 1_700_000_000;

	fn put(session: &mut SessionData, token: &str, created_at: i64) {
		session
			.set(
				&format!("bdt_nav_token_{}", token),
				json!({
					"token": token,
					"primary_keys": [1, 2, 3],
					"total_count": 3,
					"truncated": false,
					"created_at": created_at,
					"origin_url": null,
				}),
			)
			.unwrap();
	}

	#[fixture]
	fn settings() -> NavigationSettings {
		NavigationSettings::default().with_max_contexts(3)
	}

	#[rstest]
	fn test_below_capacity_is_noop(settings: NavigationSettings) {
		// Arrange
		let mut session = SessionData::new();
		put(&mut session, "old", NOW - 10_000);

		// Act
		let removed = cleanup(&mut session, &settings, NOW, false).unwrap();

		// Assert
		assert_eq!(removed, 0);
		assert_eq!(session.count_with_prefix("bdt_nav_"), 1);
	}

	#[rstest]
	fn test_forced_cleanup_removes_expired(settings: NavigationSettings) {
		// Arrange
		let mut session = SessionData::new();
		put(&mut session, "expired", NOW - 3601);
		put(&mut session, "fresh", NOW - 3599);

		// Act
		let removed = cleanup(&mut session, &settings, NOW, true).unwrap();

		// Assert
		assert_eq!(removed, 1);
		assert_eq!(session.keys_with_prefix("bdt_nav_"), vec!["bdt_nav_token_fresh"]);
	}

	#[rstest]
	fn test_at_capacity_evicts_oldest_and_frees_a_slot(settings: NavigationSettings) {
		// Arrange
		let mut session = SessionData::new();
		put(&mut session, "c", NOW - 30);
		put(&mut session, "a", NOW - 10);
		put(&mut session, "b", NOW - 20);

		// Act
		let removed = cleanup(&mut session, &settings, NOW, false).unwrap();

		// Assert
		assert_eq!(removed, 1);
		assert!(!session.contains_key("bdt_nav_token_c"));
		assert_eq!(session.count_with_prefix("bdt_nav_"), 2);
	}

	#[rstest]
	fn test_expiry_can_make_eviction_unnecessary(settings: NavigationSettings) {
		// Arrange
		let mut session = SessionData::new();
		put(&mut session, "a", NOW - 5_000);
		put(&mut session, "b", NOW - 20);
		put(&mut session, "c", NOW - 10);

		// Act
		let removed = cleanup(&mut session, &settings, NOW, false).unwrap();

		// Assert
		assert_eq!(removed, 1);
		assert!(session.contains_key("bdt_nav_token_b"));
		assert!(session.contains_key("bdt_nav_token_c"));
	}

	#[rstest]
	fn test_unlimited_contexts_never_trigger() {
		// Arrange
		let settings = NavigationSettings::default().with_max_contexts(0);
		let mut session = SessionData::new();
		for i in 0..100 {
			put(&mut session, &i.to_string(), NOW - 10_000);
		}

		// Act
		let lazy = cleanup(&mut session, &settings, NOW, false).unwrap();
		let forced = cleanup(&mut session, &settings, NOW, true).unwrap();

		// Assert
		assert_eq!(lazy, 0);
		assert_eq!(forced, 100);
	}

	#[rstest]
	fn test_rewrite_at_capacity_keeps_other_contexts(settings: NavigationSettings) {
		// Arrange
		let mut session = SessionData::new();
		put(&mut session, "a", NOW - 30);
		put(&mut session, "b", NOW - 20);
		put(&mut session, "c", NOW - 10);

		// Act
		let removed =
			cleanup_before_write(&mut session, &settings, NOW, "bdt_nav_token_c").unwrap();

		// Assert
		assert_eq!(removed, 0);
		assert_eq!(session.count_with_prefix("bdt_nav_"), 3);
	}

	#[rstest]
	fn test_rewritten_context_is_never_evicted(settings: NavigationSettings) {
		// Arrange
		let mut session = SessionData::new();
		put(&mut session, "a", NOW - 30);
		put(&mut session, "b", NOW - 20);
		put(&mut session, "c", NOW - 10);
		put(&mut session, "d", NOW - 5);

		// Act
		let removed =
			cleanup_before_write(&mut session, &settings, NOW, "bdt_nav_token_a").unwrap();

		// Assert
		assert_eq!(removed, 1);
		assert!(session.contains_key("bdt_nav_token_a"));
		assert!(!session.contains_key("bdt_nav_token_b"));
	}

	#[rstest]
	fn test_undecodable_context_is_removed(settings: NavigationSettings) {
		// Arrange
		let mut session = SessionData::new();
		session.set("bdt_nav_token_bad", json!("garbage")).unwrap();
		session.set("unrelated", json!("kept")).unwrap();

		// Act
		let removed = cleanup(&mut session, &settings, NOW, true).unwrap();

		// Assert
		assert_eq!(removed, 1);
		assert!(session.contains_key("unrelated"));
	}
}
