//! Environment variable handling
//!
//! Reads prefixed environment variables (`BETTER_TABLES_*` by default) so that
//! deployments can override settings without code changes.

use crate::error::{ConfigError, Result};
use std::env;

/// Prefix used by [`Env::default`].
pub const DEFAULT_ENV_PREFIX: &str = "BETTER_TABLES_";

/// Environment variable reader with prefix support
#[derive(Debug, Clone)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "BETTER_TABLES_")
	pub prefix: Option<String>,
}

impl Env {
	/// Create a reader without a prefix
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix for all environment variable lookups
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_conf::Env;
	///
	/// let env = Env::new().with_prefix("MYAPP_");
	/// assert_eq!(env.key_name("DEBUG"), "MYAPP_DEBUG");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	pub fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a raw value; `None` when unset or not valid unicode
	pub fn raw(&self, key: &str) -> Option<String> {
		env::var(self.key_name(key)).ok()
	}

	/// Read a string value with a default
	pub fn str_with_default(&self, key: &str, default: &str) -> String {
		self.raw(key).unwrap_or_else(|| default.to_string())
	}

	/// Read an unsigned integer with a default
	pub fn usize_with_default(&self, key: &str, default: usize) -> Result<usize> {
		self.parse_with_default(key, default)
	}

	/// Read a `u64` with a default
	pub fn u64_with_default(&self, key: &str, default: u64) -> Result<u64> {
		self.parse_with_default(key, default)
	}

	/// Read a comma-separated list of unsigned integers with a default
	pub fn usize_list_with_default(&self, key: &str, default: &[usize]) -> Result<Vec<usize>> {
		let full_key = self.key_name(key);
		match env::var(&full_key) {
			Ok(val) => parse_list(&val)
				.into_iter()
				.map(|item| {
					item.parse::<usize>().map_err(|e| ConfigError::ParseError {
						key: full_key.clone(),
						error: e.to_string(),
					})
				})
				.collect(),
			Err(_) => Ok(default.to_vec()),
		}
	}

	fn parse_with_default<T>(&self, key: &str, default: T) -> Result<T>
	where
		T: std::str::FromStr,
		T::Err: std::fmt::Display,
	{
		let full_key = self.key_name(key);
		match env::var(&full_key) {
			Ok(val) => val.trim().parse::<T>().map_err(|e| ConfigError::ParseError {
				key: full_key,
				error: e.to_string(),
			}),
			Err(_) => Ok(default),
		}
	}
}

impl Default for Env {
	fn default() -> Self {
		Self::new().with_prefix(DEFAULT_ENV_PREFIX)
	}
}

/// Split a comma-separated value, dropping blank items
///
/// # Examples
///
/// ```
/// use better_tables_conf::env::parse_list;
///
/// assert_eq!(parse_list("10, 25,,50"), vec!["10", "25", "50"]);
/// ```
pub fn parse_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(String::from)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	fn test_key_name_without_prefix() {
		let env = Env::new();
		assert_eq!(env.key_name("MAX"), "MAX");
	}

	#[rstest]
	fn test_default_prefix() {
		let env = Env::default();
		assert_eq!(env.key_name("MAX"), "BETTER_TABLES_MAX");
	}

	#[rstest]
	#[serial]
	fn test_usize_parse_error_names_key() {
		// SAFETY: This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("BT_ENV_TEST_COUNT", "many");
		}
		let env = Env::new().with_prefix("BT_ENV_TEST_");

		let result = env.usize_with_default("COUNT", 3);

		assert!(matches!(
			result,
			Err(ConfigError::ParseError { ref key, .. }) if key == "BT_ENV_TEST_COUNT"
		));
		// SAFETY: This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("BT_ENV_TEST_COUNT");
		}
	}

	#[rstest]
	#[serial]
	fn test_usize_list() {
		// SAFETY: This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("BT_ENV_TEST_OPTIONS", "10, 20 ,40");
		}
		let env = Env::new().with_prefix("BT_ENV_TEST_");

		let options = env.usize_list_with_default("OPTIONS", &[1]).unwrap();

		assert_eq!(options, vec![10, 20, 40]);
		// SAFETY: This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("BT_ENV_TEST_OPTIONS");
		}
	}

	#[rstest]
	fn test_missing_value_uses_default() {
		let env = Env::new().with_prefix("BT_ENV_TEST_UNSET_");
		assert_eq!(env.u64_with_default("TIMEOUT", 60).unwrap(), 60);
		assert_eq!(env.str_with_default("PREFIX", "x_"), "x_");
	}
}
