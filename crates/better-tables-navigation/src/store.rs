//! Session-backed store of navigation contexts

use crate::cleanup;
use crate::clock::{Clock, SystemClock};
use crate::cursor::NavigationCursor;
use crate::entry::{EntryHeader, NavigationEntry, is_live};
use crate::error::Result;
use crate::token::{key_for, mint_token, store_key};
use crate::window::limit_with_settings;
use better_tables_conf::NavigationSettings;
use better_tables_sessions::{SessionStore, SessionStoreExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Reads and writes navigation contexts in a client's session
///
/// Holds the process-wide settings and a clock; the session itself is
/// passed to each call, since it belongs to the request being served.
///
/// # Examples
///
/// ```
/// use better_tables_conf::NavigationSettings;
/// use better_tables_navigation::NavigationStore;
/// use better_tables_sessions::SessionData;
///
/// let store = NavigationStore::new(NavigationSettings::default()).unwrap();
/// let mut session = SessionData::new();
///
/// // list view
/// let token = store.get_or_create_token(&session, None);
/// let keys: Vec<u64> = (1..=120).collect();
/// let origin = Some("https://example.com/orders/");
/// store
///     .store_navigation_pks(&mut session, &token, &keys, None, origin)
///     .unwrap();
///
/// // edit view
/// let cursor = store.cursor(&session, Some(token.as_str()), 60u64);
/// assert_eq!(cursor.next_key(), Some(&61));
/// ```
#[derive(Clone)]
pub struct NavigationStore {
	settings: NavigationSettings,
	clock: Arc<dyn Clock>,
}

impl NavigationStore {
	/// Create a store using the system clock
	///
	/// Fails when the settings are invalid.
	pub fn new(settings: NavigationSettings) -> Result<Self> {
		Self::with_clock(settings, Arc::new(SystemClock::new()))
	}

	/// Create a store with an explicit clock
	pub fn with_clock(settings: NavigationSettings, clock: Arc<dyn Clock>) -> Result<Self> {
		settings.validate()?;
		Ok(Self { settings, clock })
	}

	/// Settings in effect
	pub fn settings(&self) -> &NavigationSettings {
		&self.settings
	}

	/// Current time according to the store's clock
	pub fn now(&self) -> i64 {
		self.clock.now()
	}

	/// Session key for `token`, `None` when there is no token
	pub fn key_for(&self, token: Option<&str>) -> Option<String> {
		key_for(&self.settings.session_key_prefix, token)
	}

	/// Whether `token` names a live context
	pub fn is_live_token<S>(&self, session: &S, token: Option<&str>) -> bool
	where
		S: SessionStore + ?Sized,
	{
		self.key_for(token)
			.and_then(|key| session.get(&key))
			.and_then(|value| serde_json::from_value::<EntryHeader>(value).ok())
			.is_some_and(|header| {
				is_live(header.created_at, self.now(), self.settings.session_timeout)
			})
	}

	/// Reuse `request_token` if it names a live context, else mint a new one
	///
	/// Never writes to the session.
	pub fn get_or_create_token<S>(&self, session: &S, request_token: Option<&str>) -> String
	where
		S: SessionStore + ?Sized,
	{
		match request_token {
			Some(token) if self.is_live_token(session, Some(token)) => token.to_string(),
			_ => {
				let token = mint_token();
				tracing::debug!(token = %token, "minted navigation token");
				token
			}
		}
	}

	/// Load the live context for `token`
	///
	/// Missing, expired and undecodable contexts are all `None`.
	pub fn load<K, S>(&self, session: &S, token: Option<&str>) -> Option<NavigationEntry<K>>
	where
		K: DeserializeOwned,
		S: SessionStore + ?Sized,
	{
		let key = self.key_for(token)?;
		let value = session.get(&key)?;
		let entry: NavigationEntry<K> = match serde_json::from_value(value) {
			Ok(entry) => entry,
			Err(error) => {
				tracing::warn!(key = %key, %error, "ignoring undecodable navigation context");
				return None;
			}
		};
		if !entry.is_live(self.now(), self.settings.session_timeout) {
			tracing::debug!(key = %key, "navigation context expired");
			return None;
		}
		Some(entry)
	}

	/// Store the windowed key list of a list view under `token`
	///
	/// Runs a lazy cleanup first, then writes a fresh context created now.
	/// Rewriting a live token replaces its context without evicting another.
	/// An empty token is replaced by a newly minted one; the returned entry
	/// carries the token actually used.
	pub fn store_navigation_pks<K, S>(
		&self,
		session: &mut S,
		token: &str,
		all_keys: &[K],
		current: Option<&K>,
		origin_url: Option<&str>,
	) -> Result<NavigationEntry<K>>
	where
		K: Serialize + PartialEq + Clone,
		S: SessionStore + ?Sized,
	{
		let token = if token.is_empty() {
			mint_token()
		} else {
			token.to_string()
		};
		let key = store_key(&self.settings.session_key_prefix, &token);
		cleanup::cleanup_before_write(session, &self.settings, self.now(), &key)?;

		let window = limit_with_settings(all_keys, current, &self.settings);
		let entry = NavigationEntry {
			token: token.clone(),
			primary_keys: window.to_vec(),
			total_count: all_keys.len(),
			truncated: window.len() < all_keys.len(),
			created_at: self.now(),
			origin_url: origin_url.map(str::to_string),
		};
		session.set_as(&key, &entry)?;

		tracing::debug!(
			token = %token,
			stored = entry.primary_keys.len(),
			total = entry.total_count,
			truncated = entry.truncated,
			"stored navigation context"
		);
		Ok(entry)
	}

	/// Expire and evict contexts; see [`cleanup::cleanup`]
	pub fn cleanup<S>(&self, session: &mut S, force: bool) -> Result<usize>
	where
		S: SessionStore + ?Sized,
	{
		Ok(cleanup::cleanup(session, &self.settings, self.now(), force)?)
	}

	/// Position `current` within the context named by `token`
	pub fn cursor<K, S>(&self, session: &S, token: Option<&str>, current: K) -> NavigationCursor<K>
	where
		K: DeserializeOwned + PartialEq,
		S: SessionStore + ?Sized,
	{
		let token = token.filter(|t| !t.is_empty());
		let entry = self.load(session, token);
		NavigationCursor::new(token.map(str::to_string), entry, current)
	}
}

impl fmt::Debug for NavigationStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationStore")
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}
