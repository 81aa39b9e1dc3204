use thiserror::Error;

/// Errors raised while writing to or persisting a session
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
	/// A value could not be converted to or from JSON
	#[error("Session serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// The serialized session would exceed the configured size limit
	#[error("Session data too large: {size} bytes exceeds limit of {limit} bytes")]
	TooLarge { size: usize, limit: usize },

	/// The backing store failed
	#[error("Session backend error: {0}")]
	Backend(String),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
