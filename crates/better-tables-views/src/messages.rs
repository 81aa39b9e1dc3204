//! One-shot user feedback produced by POST handlers

use serde::{Deserialize, Serialize};

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
}

impl Level {
	/// Lowercase name, as used for CSS classes
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_views::messages::Level;
	///
	/// assert_eq!(Level::Success.as_str(), "success");
	/// assert_eq!(Level::Error.as_str(), "error");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Info => "info",
			Level::Success => "success",
			Level::Warning => "warning",
			Level::Error => "error",
		}
	}
}

/// A message shown once on the page after a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
	pub level: Level,
	pub text: String,
}

impl Message {
	pub fn new(level: Level, text: impl Into<String>) -> Self {
		Self {
			level,
			text: text.into(),
		}
	}

	pub fn success(text: impl Into<String>) -> Self {
		Self::new(Level::Success, text)
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self::new(Level::Error, text)
	}
}

/// Result of a handled POST: where to redirect and what to tell the user
///
/// Redirecting after every POST keeps a browser refresh from re-submitting
/// the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostOutcome {
	pub redirect_url: String,
	pub messages: Vec<Message>,
}

impl PostOutcome {
	/// Redirect to `redirect_url` with a single message
	pub fn redirect(redirect_url: impl Into<String>, message: Message) -> Self {
		Self {
			redirect_url: redirect_url.into(),
			messages: vec![message],
		}
	}

	/// Level of the first message, if any
	pub fn level(&self) -> Option<Level> {
		self.messages.first().map(|m| m.level)
	}
}
