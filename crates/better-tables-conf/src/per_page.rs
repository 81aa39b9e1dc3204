//! Per-page selector settings

use crate::env::Env;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Page sizes offered when a table does not declare its own
pub const DEFAULT_PER_PAGE_OPTIONS: [usize; 6] = [10, 25, 50, 100, 500, 1000];

/// Page size used when nothing else applies
pub const DEFAULT_PER_PAGE: usize = 25;

/// Session key holding the remembered page size
pub const DEFAULT_PER_PAGE_SESSION_KEY: &str = "table_per_page";

/// Settings for the per-page selector
///
/// # Examples
///
/// ```
/// use better_tables_conf::PerPageSettings;
///
/// let settings = PerPageSettings::default()
///     .with_options(vec![10, 20, 50])
///     .with_default_per_page(Some(20));
/// assert!(settings.validate().is_ok());
/// assert!(settings.allows(50));
/// assert!(!settings.allows(25));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerPageSettings {
	/// Allowed page sizes, in display order
	pub options: Vec<usize>,
	/// Page size used before the user picks one
	pub default_per_page: Option<usize>,
	/// Session key the choice is stored under
	pub session_key: String,
}

impl Default for PerPageSettings {
	fn default() -> Self {
		Self {
			options: DEFAULT_PER_PAGE_OPTIONS.to_vec(),
			default_per_page: Some(DEFAULT_PER_PAGE),
			session_key: DEFAULT_PER_PAGE_SESSION_KEY.to_string(),
		}
	}
}

impl PerPageSettings {
	/// Replace the allowed page sizes
	pub fn with_options(mut self, options: Vec<usize>) -> Self {
		self.options = options;
		self
	}

	/// Set or clear the default page size
	pub fn with_default_per_page(mut self, default_per_page: Option<usize>) -> Self {
		self.default_per_page = default_per_page;
		self
	}

	/// Store the choice under a table-specific session key
	pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
		self.session_key = session_key.into();
		self
	}

	/// Whether `per_page` is one of the allowed options
	pub fn allows(&self, per_page: usize) -> bool {
		self.options.contains(&per_page)
	}

	/// Check options and default for consistency
	pub fn validate(&self) -> Result<()> {
		if self.options.is_empty() {
			return Err(ConfigError::MissingRequired("per_page.options".to_string()));
		}
		if self.options.contains(&0) {
			return Err(ConfigError::invalid(
				"per_page.options",
				"page sizes must be greater than zero",
			));
		}
		if let Some(default) = self.default_per_page {
			if !self.allows(default) {
				return Err(ConfigError::invalid(
					"per_page.default_per_page",
					format!("{} is not one of {:?}", default, self.options),
				));
			}
		}
		if self.session_key.is_empty() {
			return Err(ConfigError::invalid(
				"per_page.session_key",
				"session key must not be empty",
			));
		}
		Ok(())
	}

	/// Load from `BETTER_TABLES_PER_PAGE_*` environment variables
	pub fn from_env() -> Result<Self> {
		Self::from_env_with(&Env::default())
	}

	/// Load through a custom [`Env`] reader
	pub fn from_env_with(env: &Env) -> Result<Self> {
		let defaults = Self::default();
		let default_per_page = match env.raw("PER_PAGE_DEFAULT") {
			Some(_) => Some(env.usize_with_default("PER_PAGE_DEFAULT", DEFAULT_PER_PAGE)?),
			None => defaults.default_per_page,
		};
		let settings = Self {
			options: env.usize_list_with_default("PER_PAGE_OPTIONS", &defaults.options)?,
			default_per_page,
			session_key: env.str_with_default("PER_PAGE_SESSION_KEY", &defaults.session_key),
		};
		settings.validate()?;
		Ok(settings)
	}
}
