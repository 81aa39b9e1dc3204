//! Table configuration checked at construction

use crate::actions::ActionsColumn;
use crate::columns::{ColumnSequence, InjectedColumn};
use crate::links::LinkSpec;
use better_tables_conf::ConfigError;

/// Name used when a table declares none
pub const DEFAULT_TABLE_NAME: &str = "Table";

/// Validated description of a table's injected features
///
/// # Examples
///
/// ```
/// use better_tables_views::{ActionsColumn, TableSpec};
///
/// let table = TableSpec::builder(["number", "customer", "total"])
///     .name("Orders")
///     .bulk_select("orders:bulk_action")
///     .actions(ActionsColumn::standard("orders:order").unwrap())
///     .create_url("/order/new/")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.name(), "Orders");
/// assert_eq!(table.columns().names(), ["select", "number", "customer", "total", "actions"]);
/// assert_eq!(table.toolbar()[0].label(), "New Record");
/// ```
#[derive(Debug, Clone)]
pub struct TableSpec {
	name: String,
	columns: ColumnSequence,
	bulk_action_url: Option<String>,
	edit_url_name: Option<String>,
	delete_url_name: Option<String>,
	actions: Option<ActionsColumn>,
	toolbar: Vec<LinkSpec>,
}

impl TableSpec {
	pub fn builder<I, S>(declared_columns: I) -> TableSpecBuilder
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		TableSpecBuilder {
			name: None,
			columns: ColumnSequence::new(declared_columns),
			bulk_action_url: None,
			edit_url_name: None,
			delete_url_name: None,
			actions: None,
			create_url: None,
			links: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn columns(&self) -> &ColumnSequence {
		&self.columns
	}

	/// Endpoint receiving `selected_items` when bulk selection is on
	pub fn bulk_action_url(&self) -> Option<&str> {
		self.bulk_action_url.as_deref()
	}

	pub fn edit_url_name(&self) -> Option<&str> {
		self.edit_url_name.as_deref()
	}

	pub fn delete_url_name(&self) -> Option<&str> {
		self.delete_url_name.as_deref()
	}

	pub fn actions(&self) -> Option<&ActionsColumn> {
		self.actions.as_ref()
	}

	/// Whether rows carry a delete button, which needs the confirm modal
	pub fn is_deletable(&self) -> bool {
		self.columns.has(InjectedColumn::Delete)
	}

	/// Links above the table, create button first
	pub fn toolbar(&self) -> &[LinkSpec] {
		&self.toolbar
	}
}

/// Builder for [`TableSpec`]
#[derive(Debug, Clone)]
pub struct TableSpecBuilder {
	name: Option<String>,
	columns: ColumnSequence,
	bulk_action_url: Option<String>,
	edit_url_name: Option<String>,
	delete_url_name: Option<String>,
	actions: Option<ActionsColumn>,
	create_url: Option<String>,
	links: Vec<LinkSpec>,
}

impl TableSpecBuilder {
	/// Display name; blank names fall back to [`DEFAULT_TABLE_NAME`]
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Add the select column posting to `bulk_action_url`
	pub fn bulk_select(mut self, bulk_action_url: impl Into<String>) -> Self {
		self.bulk_action_url = Some(bulk_action_url.into());
		self.columns = self.columns.with(InjectedColumn::Select);
		self
	}

	/// Add the edit column linking to the `edit_url_name` route
	pub fn editable(mut self, edit_url_name: impl Into<String>) -> Self {
		self.edit_url_name = Some(edit_url_name.into());
		self.columns = self.columns.with(InjectedColumn::Edit);
		self
	}

	/// Add the delete column posting to the `delete_url_name` route
	pub fn deletable(mut self, delete_url_name: impl Into<String>) -> Self {
		self.delete_url_name = Some(delete_url_name.into());
		self.columns = self.columns.with(InjectedColumn::Delete);
		self
	}

	pub fn actions(mut self, actions: ActionsColumn) -> Self {
		self.actions = Some(actions);
		self.columns = self.columns.with(InjectedColumn::Actions);
		self
	}

	/// Add the create button
	pub fn create_url(mut self, create_url: impl Into<String>) -> Self {
		self.create_url = Some(create_url.into());
		self
	}

	pub fn link(mut self, link: LinkSpec) -> Self {
		self.links.push(link);
		self
	}

	/// Check that every enabled feature has its route
	pub fn build(self) -> Result<TableSpec, ConfigError> {
		require(&self.bulk_action_url, "bulk_action_url")?;
		require(&self.edit_url_name, "edit_url_name")?;
		require(&self.delete_url_name, "delete_url_name")?;

		let mut toolbar = Vec::with_capacity(self.links.len() + 1);
		if let Some(create_url) = &self.create_url {
			toolbar.push(LinkSpec::create(Some(create_url.as_str()))?);
		}
		toolbar.extend(self.links);

		let name = self
			.name
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

		Ok(TableSpec {
			name,
			columns: self.columns,
			bulk_action_url: self.bulk_action_url,
			edit_url_name: self.edit_url_name,
			delete_url_name: self.delete_url_name,
			actions: self.actions,
			toolbar,
		})
	}
}

/// An enabled feature must not have a blank route
fn require(value: &Option<String>, setting: &str) -> Result<(), ConfigError> {
	match value {
		Some(value) if value.trim().is_empty() => {
			Err(ConfigError::MissingRequired(setting.to_string()))
		}
		_ => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::missing(None)]
	#[case::blank(Some("  "))]
	fn test_name_fallback(#[case] name: Option<&str>) {
		let mut builder = TableSpec::builder(["number"]);
		if let Some(name) = name {
			builder = builder.name(name);
		}

		let table = builder.build().unwrap();

		assert_eq!(table.name(), "Table");
	}

	#[rstest]
	fn test_edit_and_delete_columns() {
		let table = TableSpec::builder(["number"])
			.deletable("orders:order_delete")
			.editable("orders:order_update")
			.build()
			.unwrap();

		assert_eq!(table.columns().names(), ["edit", "number", "delete"]);
		assert_eq!(table.edit_url_name(), Some("orders:order_update"));
	}

	#[rstest]
	#[case::bulk(TableSpec::builder(["n"]).bulk_select(""), "bulk_action_url")]
	#[case::edit(TableSpec::builder(["n"]).editable(" "), "edit_url_name")]
	#[case::delete(TableSpec::builder(["n"]).deletable(""), "delete_url_name")]
	#[case::create(TableSpec::builder(["n"]).create_url(""), "create_url")]
	fn test_blank_routes_rejected(#[case] builder: TableSpecBuilder, #[case] setting: &str) {
		let result = builder.build();

		assert!(matches!(result, Err(ConfigError::MissingRequired(name)) if name == setting));
	}

	#[rstest]
	fn test_extra_links_follow_create() {
		let table = TableSpec::builder(["n"])
			.link(LinkSpec::get("Import", "/order/import/").unwrap())
			.create_url("/order/new/")
			.build()
			.unwrap();

		let labels: Vec<&str> = table.toolbar().iter().map(LinkSpec::label).collect();
		assert_eq!(labels, ["New Record", "Import"]);
	}
}
