//! Toolbar links

use better_tables_conf::ConfigError;
use serde::Serialize;

/// Label of the create button when none is given
pub const DEFAULT_CREATE_LABEL: &str = "New Record";

/// How a link is followed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "UPPERCASE")]
pub enum LinkMethod {
	/// Plain navigation
	Get,
	/// Form submission, optionally confirmed first
	Post { confirm_message: Option<String> },
}

/// A link rendered above a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSpec {
	label: String,
	url: String,
	#[serde(flatten)]
	method: LinkMethod,
	icon: Option<String>,
}

impl LinkSpec {
	/// GET link; fails when `url` is blank
	pub fn get(label: impl Into<String>, url: impl Into<String>) -> Result<Self, ConfigError> {
		Self::build(label.into(), url.into(), LinkMethod::Get)
	}

	/// POST link with an optional confirmation prompt
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_views::{LinkMethod, LinkSpec};
	///
	/// let link =
	///     LinkSpec::post("Archive all", "/order/archive/", Some("Archive every order?")).unwrap();
	/// assert_eq!(
	///     link.method(),
	///     &LinkMethod::Post { confirm_message: Some("Archive every order?".into()) }
	/// );
	/// assert!(LinkSpec::post("Archive all", " ", None).is_err());
	/// ```
	pub fn post(
		label: impl Into<String>,
		url: impl Into<String>,
		confirm_message: Option<&str>,
	) -> Result<Self, ConfigError> {
		let method = LinkMethod::Post {
			confirm_message: confirm_message.map(str::to_string),
		};
		Self::build(label.into(), url.into(), method)
	}

	/// The "new record" button; `create_url` is required
	pub fn create(create_url: Option<&str>) -> Result<Self, ConfigError> {
		let url = create_url
			.filter(|url| !url.trim().is_empty())
			.ok_or_else(|| ConfigError::MissingRequired("create_url".to_string()))?;
		Ok(Self::build(DEFAULT_CREATE_LABEL.to_string(), url.to_string(), LinkMethod::Get)?
			.with_icon("bi bi-plus-lg"))
	}

	fn build(label: String, url: String, method: LinkMethod) -> Result<Self, ConfigError> {
		if url.trim().is_empty() {
			return Err(ConfigError::invalid(
				format!("link '{}'", label),
				"url must not be empty",
			));
		}
		Ok(Self {
			label,
			url,
			method,
			icon: None,
		})
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub fn method(&self) -> &LinkMethod {
		&self.method
	}

	pub fn icon(&self) -> Option<&str> {
		self.icon.as_deref()
	}

	/// Whether following the link needs a confirmation first
	pub fn confirm_message(&self) -> Option<&str> {
		match &self.method {
			LinkMethod::Post { confirm_message } => confirm_message.as_deref(),
			LinkMethod::Get => None,
		}
	}
}
