use thiserror::Error;

/// Configuration errors
///
/// Raised while building or loading settings and while constructing
/// components from them. These are fatal at setup time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	/// A required setting or collaborator attribute is missing
	#[error("Missing required setting: {0}")]
	MissingRequired(String),

	/// A setting has a value outside its allowed range
	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: String, message: String },

	/// An environment variable could not be parsed
	#[error("Failed to parse environment variable '{key}': {error}")]
	ParseError { key: String, error: String },

	/// A settings document could not be deserialized
	#[error("Failed to load settings: {0}")]
	Load(String),
}

impl ConfigError {
	/// Shorthand for [`ConfigError::InvalidValue`]
	pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			key: key.into(),
			message: message.into(),
		}
	}
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
