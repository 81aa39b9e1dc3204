//! Umbrella settings for all table capabilities

use crate::env::Env;
use crate::error::{ConfigError, Result};
use crate::navigation::NavigationSettings;
use crate::per_page::PerPageSettings;
use serde::{Deserialize, Serialize};

/// All better-tables settings
///
/// Loaded once at startup and treated as immutable afterwards. Individual
/// tables may override any field through the component builders.
///
/// # Examples
///
/// ```
/// use better_tables_conf::TablesSettings;
///
/// let settings = TablesSettings::from_toml_str(r#"
/// [navigation]
/// max_pk_count = 200
///
/// [per_page]
/// options = [20, 40]
/// default_per_page = 20
/// "#).unwrap();
/// assert_eq!(settings.navigation.max_pk_count, 200);
/// assert_eq!(settings.navigation.context_window, 50);
/// assert_eq!(settings.per_page.options, vec![20, 40]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesSettings {
	/// Record navigation limits
	pub navigation: NavigationSettings,
	/// Per-page selector defaults
	pub per_page: PerPageSettings,
}

impl TablesSettings {
	/// Validate every section
	pub fn validate(&self) -> Result<()> {
		self.navigation.validate()?;
		self.per_page.validate()
	}

	/// Parse a TOML document; missing keys keep their defaults
	pub fn from_toml_str(document: &str) -> Result<Self> {
		let settings: Self =
			toml::from_str(document).map_err(|e| ConfigError::Load(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load every section from `BETTER_TABLES_*` environment variables
	pub fn from_env() -> Result<Self> {
		let env = Env::default();
		let settings = Self {
			navigation: NavigationSettings::from_env_with(&env)?,
			per_page: PerPageSettings::from_env_with(&env)?,
		};
		tracing::debug!(
			max_pk_count = settings.navigation.max_pk_count,
			max_contexts = settings.navigation.max_contexts,
			"loaded table settings from environment"
		);
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_is_default() {
		let settings = TablesSettings::from_toml_str("").unwrap();
		assert_eq!(settings, TablesSettings::default());
	}

	#[rstest]
	fn test_invalid_section_is_reported() {
		let result = TablesSettings::from_toml_str(
			r#"
[navigation]
session_key_prefix = ""
"#,
		);

		assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
	}

	#[rstest]
	fn test_malformed_document() {
		let result = TablesSettings::from_toml_str("[navigation\nmax_pk_count = ");
		assert!(matches!(result, Err(ConfigError::Load(_))));
	}
}
