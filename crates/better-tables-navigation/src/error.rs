use better_tables_conf::ConfigError;
use better_tables_sessions::SessionError;
use thiserror::Error;

/// Errors surfaced by the navigation store
///
/// Missing or expired navigation data is never an error; only configuration
/// problems and failed session writes are.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NavigationError {
	/// Settings rejected at construction
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The session transport refused a write
	#[error("Failed to write navigation data: {0}")]
	Session(#[from] SessionError),
}

/// Failure to turn a primary key into a URL
#[derive(Debug, Error)]
pub enum LookupError {
	/// The record no longer exists
	#[error("Record not found: {0}")]
	NotFound(String),

	/// The URL could not be built
	#[error("URL resolution failed: {0}")]
	Resolution(String),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;
