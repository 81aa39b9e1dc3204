use better_tables_conf::ConfigError;
use better_tables_navigation::NavigationError;
use better_tables_sessions::SessionError;
use thiserror::Error;

/// Errors raised while building or serving table views
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ViewError {
	/// A view or table was configured inconsistently
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// A preference could not be written to the session
	#[error("Session write failed: {0}")]
	Session(#[from] SessionError),

	/// Navigation data could not be written
	#[error(transparent)]
	Navigation(#[from] NavigationError),

	/// The report repository failed
	#[error("Report storage failed: {0}")]
	ReportStorage(String),

	/// The request URL could not be parsed
	#[error("Invalid request URL '{url}': {message}")]
	InvalidUrl { url: String, message: String },
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, ViewError>;
