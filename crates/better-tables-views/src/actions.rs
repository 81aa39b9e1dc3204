//! Row actions
//!
//! Per-row buttons are described by [`ActionSpec`] values naming a route;
//! the host resolves the route for each record and renders the button.

use better_tables_conf::ConfigError;
use serde::Serialize;

/// Confirmation shown before a delete action
pub const DEFAULT_DELETE_CONFIRM: &str = "Are you sure you want to delete this record?";

/// What a row action does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActionKind {
	View,
	Edit,
	Delete,
	Custom {
		name: String,
		label: String,
		icon: Option<String>,
	},
}

impl ActionKind {
	pub fn name(&self) -> &str {
		match self {
			Self::View => "view",
			Self::Edit => "edit",
			Self::Delete => "delete",
			Self::Custom { name, .. } => name,
		}
	}

	pub fn label(&self) -> &str {
		match self {
			Self::View => "View",
			Self::Edit => "Edit",
			Self::Delete => "Delete",
			Self::Custom { label, .. } => label,
		}
	}

	pub fn icon(&self) -> Option<&str> {
		match self {
			Self::View => Some("bi bi-eye"),
			Self::Edit => Some("bi bi-pencil-square"),
			Self::Delete => Some("bi bi-trash"),
			Self::Custom { icon, .. } => icon.as_deref(),
		}
	}
}

/// A row action bound to a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
	#[serde(flatten)]
	kind: ActionKind,
	url_name: String,
	enabled: bool,
	confirm_message: Option<String>,
}

impl ActionSpec {
	/// Enabled action for the route `url_name`
	///
	/// Fails when the route name is blank, or when a custom action has no
	/// name. Delete actions ask for confirmation by default.
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_views::{ActionKind, ActionSpec};
	///
	/// let delete = ActionSpec::new(ActionKind::Delete, "orders:delete").unwrap();
	/// assert!(delete.confirm_message().is_some());
	/// assert!(ActionSpec::new(ActionKind::View, "").is_err());
	/// ```
	pub fn new(kind: ActionKind, url_name: impl Into<String>) -> Result<Self, ConfigError> {
		let url_name = url_name.into();
		if url_name.trim().is_empty() {
			return Err(ConfigError::MissingRequired(format!(
				"{}_action_url_name",
				kind.name()
			)));
		}
		if let ActionKind::Custom { name, .. } = &kind {
			if name.trim().is_empty() {
				return Err(ConfigError::invalid(
					"actions",
					"custom actions need a name",
				));
			}
		}
		let confirm_message = match kind {
			ActionKind::Delete => Some(DEFAULT_DELETE_CONFIRM.to_string()),
			_ => None,
		};
		Ok(Self {
			kind,
			url_name,
			enabled: true,
			confirm_message,
		})
	}

	/// Keep the action declared but do not render it
	pub fn disabled(mut self) -> Self {
		self.enabled = false;
		self
	}

	pub fn with_confirm_message(mut self, message: impl Into<String>) -> Self {
		self.confirm_message = Some(message.into());
		self
	}

	pub fn kind(&self) -> &ActionKind {
		&self.kind
	}

	pub fn url_name(&self) -> &str {
		&self.url_name
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub fn confirm_message(&self) -> Option<&str> {
		self.confirm_message.as_deref()
	}
}

/// The actions column: at least one enabled action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionsColumn {
	actions: Vec<ActionSpec>,
}

impl ActionsColumn {
	pub fn new(actions: Vec<ActionSpec>) -> Result<Self, ConfigError> {
		if !actions.iter().any(ActionSpec::is_enabled) {
			return Err(ConfigError::invalid(
				"actions",
				"the actions column is enabled but has no enabled actions",
			));
		}
		Ok(Self { actions })
	}

	/// View, edit and delete on conventional `<app>:<model>_<action>` routes
	pub fn standard(route_prefix: &str) -> Result<Self, ConfigError> {
		Self::new(vec![
			ActionSpec::new(ActionKind::View, format!("{}_detail", route_prefix))?,
			ActionSpec::new(ActionKind::Edit, format!("{}_update", route_prefix))?,
			ActionSpec::new(ActionKind::Delete, format!("{}_delete", route_prefix))?,
		])
	}

	/// Actions to render, in declaration order
	pub fn enabled(&self) -> impl Iterator<Item = &ActionSpec> {
		self.actions.iter().filter(|action| action.enabled)
	}

	pub fn all(&self) -> &[ActionSpec] {
		&self.actions
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[rstest]
	fn test_custom_action() {
		let kind = ActionKind::Custom {
			name: "invoice".to_string(),
			label: "Invoice".to_string(),
			icon: None,
		};

		let action = ActionSpec::new(kind, "orders:invoice").unwrap();

		assert_eq!(action.kind().name(), "invoice");
		assert_eq!(action.kind().icon(), None);
		assert_eq!(action.confirm_message(), None);
	}

	#[rstest]
	fn test_unnamed_custom_action_rejected() {
		let kind = ActionKind::Custom {
			name: " ".to_string(),
			label: "?".to_string(),
			icon: None,
		};

		assert!(matches!(
			ActionSpec::new(kind, "orders:x"),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[rstest]
	fn test_missing_route_names_the_setting() {
		let result = ActionSpec::new(ActionKind::Edit, "");
		assert!(matches!(
			result,
			Err(ConfigError::MissingRequired(name)) if name == "edit_action_url_name"
		));
	}

	#[rstest]
	fn test_all_disabled_is_an_error() {
		let view = ActionSpec::new(ActionKind::View, "orders:order_detail")
			.unwrap()
			.disabled();

		assert!(ActionsColumn::new(vec![view]).is_err());
		assert!(ActionsColumn::new(Vec::new()).is_err());
	}

	#[rstest]
	fn test_enabled_filters_disabled() {
		// Arrange
		let column = ActionsColumn::new(vec![
			ActionSpec::new(ActionKind::View, "orders:order_detail").unwrap(),
			ActionSpec::new(ActionKind::Delete, "orders:order_delete")
				.unwrap()
				.disabled(),
		])
		.unwrap();

		// Act
		let names: Vec<&str> = column.enabled().map(|a| a.kind().name()).collect();

		// Assert
		assert_eq!(names, ["view"]);
		assert_eq!(column.all().len(), 2);
	}

	#[rstest]
	fn test_standard_routes() {
		let column = ActionsColumn::standard("orders:order").unwrap();

		let routes: Vec<&str> = column.enabled().map(ActionSpec::url_name).collect();

		assert_eq!(routes, ["orders:order_detail", "orders:order_update", "orders:order_delete"]);
	}
}
