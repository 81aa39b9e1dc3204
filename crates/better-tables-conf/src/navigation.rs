//! Navigation settings
//!
//! Limits for the record-navigation store kept in the session.

use crate::env::Env;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default cap on stored primary keys per navigation context
pub const DEFAULT_MAX_PK_COUNT: usize = 500;

/// Default number of keys kept on each side of the current key
pub const DEFAULT_CONTEXT_WINDOW: usize = 50;

/// Default navigation context lifetime, in seconds
pub const DEFAULT_SESSION_TIMEOUT: u64 = 3600;

/// Default cap on live navigation contexts per session
pub const DEFAULT_MAX_CONTEXTS: usize = 50;

/// Default session key namespace for navigation contexts
pub const DEFAULT_SESSION_KEY_PREFIX: &str = "bdt_nav_";

/// Settings for record navigation
///
/// `max_pk_count` and `max_contexts` treat `0` as unlimited.
///
/// # Examples
///
/// ```
/// use better_tables_conf::NavigationSettings;
///
/// let settings = NavigationSettings::default()
///     .with_max_pk_count(100)
///     .with_context_window(10);
/// assert_eq!(settings.max_pk_count, 100);
/// assert_eq!(settings.session_key_prefix, "bdt_nav_");
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
	/// Maximum number of primary keys stored per context
	pub max_pk_count: usize,
	/// Keys retained before and after the current key when truncating
	pub context_window: usize,
	/// Context time-to-live in seconds
	pub session_timeout: u64,
	/// Live contexts allowed per session before LRU eviction
	pub max_contexts: usize,
	/// Namespace for navigation keys in the session
	pub session_key_prefix: String,
}

impl Default for NavigationSettings {
	fn default() -> Self {
		Self {
			max_pk_count: DEFAULT_MAX_PK_COUNT,
			context_window: DEFAULT_CONTEXT_WINDOW,
			session_timeout: DEFAULT_SESSION_TIMEOUT,
			max_contexts: DEFAULT_MAX_CONTEXTS,
			session_key_prefix: DEFAULT_SESSION_KEY_PREFIX.to_string(),
		}
	}
}

impl NavigationSettings {
	/// Create settings with default values
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the primary key cap (`0` disables the cap)
	pub fn with_max_pk_count(mut self, max_pk_count: usize) -> Self {
		self.max_pk_count = max_pk_count;
		self
	}

	/// Set the context window
	pub fn with_context_window(mut self, context_window: usize) -> Self {
		self.context_window = context_window;
		self
	}

	/// Set the context lifetime in seconds
	pub fn with_session_timeout(mut self, seconds: u64) -> Self {
		self.session_timeout = seconds;
		self
	}

	/// Set the live context cap (`0` disables eviction)
	pub fn with_max_contexts(mut self, max_contexts: usize) -> Self {
		self.max_contexts = max_contexts;
		self
	}

	/// Set the session key prefix
	pub fn with_session_key_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.session_key_prefix = prefix.into();
		self
	}

	/// Whether primary key lists are stored without truncation
	pub fn pk_count_unlimited(&self) -> bool {
		self.max_pk_count == 0
	}

	/// Whether contexts are never evicted by count
	pub fn contexts_unlimited(&self) -> bool {
		self.max_contexts == 0
	}

	/// Context lifetime as a [`Duration`]
	pub fn session_timeout_duration(&self) -> Duration {
		Duration::from_secs(self.session_timeout)
	}

	/// Check the settings for values that would break the store
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_conf::NavigationSettings;
	///
	/// let settings = NavigationSettings::default().with_session_key_prefix("");
	/// assert!(settings.validate().is_err());
	/// ```
	pub fn validate(&self) -> Result<()> {
		if self.session_key_prefix.is_empty() {
			return Err(ConfigError::invalid(
				"navigation.session_key_prefix",
				"prefix must not be empty",
			));
		}
		if self.session_timeout == 0 {
			return Err(ConfigError::invalid(
				"navigation.session_timeout",
				"timeout must be greater than zero",
			));
		}
		Ok(())
	}

	/// Load settings from `BETTER_TABLES_NAVIGATION_*` environment variables
	///
	/// Unset variables keep their defaults.
	pub fn from_env() -> Result<Self> {
		Self::from_env_with(&Env::default())
	}

	/// Load settings through a custom [`Env`] reader
	pub fn from_env_with(env: &Env) -> Result<Self> {
		let defaults = Self::default();
		let settings = Self {
			max_pk_count: env.usize_with_default("NAVIGATION_MAX_PK_COUNT", defaults.max_pk_count)?,
			context_window: env
				.usize_with_default("NAVIGATION_CONTEXT_WINDOW", defaults.context_window)?,
			session_timeout: env
				.u64_with_default("NAVIGATION_SESSION_TIMEOUT", defaults.session_timeout)?,
			max_contexts: env.usize_with_default("NAVIGATION_MAX_CONTEXTS", defaults.max_contexts)?,
			session_key_prefix: env.str_with_default(
				"NAVIGATION_SESSION_KEY_PREFIX",
				&defaults.session_key_prefix,
			),
		};
		settings.validate()?;
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = NavigationSettings::default();

		assert_eq!(settings.max_pk_count, 500);
		assert_eq!(settings.context_window, 50);
		assert_eq!(settings.session_timeout, 3600);
		assert_eq!(settings.max_contexts, 50);
		assert_eq!(settings.session_key_prefix, "bdt_nav_");
		assert_eq!(settings.session_timeout_duration(), Duration::from_secs(3600));
		assert!(!settings.pk_count_unlimited());
		assert!(!settings.contexts_unlimited());
	}

	#[rstest]
	fn test_zero_means_unlimited() {
		let settings = NavigationSettings::default()
			.with_max_pk_count(0)
			.with_max_contexts(0);

		assert!(settings.pk_count_unlimited());
		assert!(settings.contexts_unlimited());
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_zero_timeout_rejected() {
		let settings = NavigationSettings::default().with_session_timeout(0);

		let err = settings.validate().unwrap_err();

		assert!(err.to_string().contains("navigation.session_timeout"));
	}

	#[rstest]
	fn test_partial_document_keeps_defaults() {
		let settings: NavigationSettings = toml::from_str("max_contexts = 5").unwrap();

		assert_eq!(settings.max_contexts, 5);
		assert_eq!(settings.max_pk_count, DEFAULT_MAX_PK_COUNT);
	}
}
