//! Several tables on one page
//!
//! Each table gets its own parameter prefix (`table_0-`, `table_1-`, ...)
//! so paging or sorting one table leaves the others alone.

use crate::table::TableSpec;
use better_tables_conf::ConfigError;
use better_tables_navigation::QueryParams;

/// Prefix given to tables without one; `{}` is the table's counter
pub const TABLE_PREFIX_PATTERN: &str = "table_{}-";

/// Prefix of the `n`th table that has no explicit prefix
pub fn default_prefix(n: usize) -> String {
	TABLE_PREFIX_PATTERN.replace("{}", &n.to_string())
}

/// One table of a multi-table page
#[derive(Debug, Clone)]
pub struct TableEntry {
	context_name: String,
	table: TableSpec,
	prefix: Option<String>,
}

impl TableEntry {
	/// Table rendered under `context_name`
	pub fn new(context_name: impl Into<String>, table: TableSpec) -> Self {
		Self {
			context_name: context_name.into(),
			table,
			prefix: None,
		}
	}

	/// Use `prefix` instead of a numbered one
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	pub fn context_name(&self) -> &str {
		&self.context_name
	}

	pub fn table(&self) -> &TableSpec {
		&self.table
	}
}

/// Ordered tables of one page, checked at construction
///
/// # Examples
///
/// ```
/// use better_tables_views::{MultiTableSpec, TableEntry, TableSpec};
///
/// let orders = TableSpec::builder(["number"]).name("orders").build().unwrap();
/// let invoices = TableSpec::builder(["number"]).name("invoices").build().unwrap();
/// let page = MultiTableSpec::new(vec![
///     TableEntry::new("orders", orders),
///     TableEntry::new("invoices", invoices),
/// ])
/// .unwrap();
///
/// let bound = page.bind(Some(vec![vec![1, 2], vec![7]])).unwrap();
/// assert_eq!(bound.tables[1].prefix, "table_1-");
/// assert_eq!(bound.tables[1].data, Some(vec![7]));
/// assert!(page.bind(Some(vec![vec![1]])).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MultiTableSpec {
	tables: Vec<TableEntry>,
	include_delete_modal: Option<bool>,
}

impl MultiTableSpec {
	/// Fails when no table is given
	pub fn new(tables: Vec<TableEntry>) -> Result<Self, ConfigError> {
		if tables.is_empty() {
			return Err(ConfigError::MissingRequired("tables".to_string()));
		}
		Ok(Self {
			tables,
			include_delete_modal: None,
		})
	}

	/// Force the delete confirmation modal on or off
	///
	/// By default it is included when any table is deletable.
	pub fn with_delete_modal(mut self, include: bool) -> Self {
		self.include_delete_modal = Some(include);
		self
	}

	pub fn tables(&self) -> &[TableEntry] {
		&self.tables
	}

	/// Pair every table with its data and assign prefixes
	///
	/// `None` renders the tables without data. Otherwise there must be
	/// exactly one data set per table.
	pub fn bind<D>(&self, data: Option<Vec<D>>) -> Result<MultiTableContext<'_, D>, ConfigError> {
		let mut data = match data {
			Some(data) if data.len() != self.tables.len() => {
				return Err(ConfigError::invalid(
					"tables_data",
					format!("{} data sets for {} tables", data.len(), self.tables.len()),
				));
			}
			Some(data) => data.into_iter().map(Some).collect(),
			None => Vec::new(),
		};
		data.resize_with(self.tables.len(), || None);

		let mut counter = 0;
		let tables = self
			.tables
			.iter()
			.zip(data)
			.map(|(entry, data)| {
				let prefix = entry.prefix.clone().unwrap_or_else(|| {
					let prefix = default_prefix(counter);
					counter += 1;
					prefix
				});
				BoundTable {
					title: &entry.context_name,
					prefix,
					table: &entry.table,
					data,
				}
			})
			.collect();
		let include_delete_modal = self
			.include_delete_modal
			.unwrap_or_else(|| self.tables.iter().any(|entry| entry.table.is_deletable()));

		Ok(MultiTableContext {
			tables,
			include_delete_modal,
		})
	}
}

/// A table with its data and request prefix
#[derive(Debug, Clone)]
pub struct BoundTable<'a, D> {
	/// Context name of the table
	pub title: &'a str,
	pub prefix: String,
	pub table: &'a TableSpec,
	pub data: Option<D>,
}

impl<D> BoundTable<'_, D> {
	/// Request parameter `name` scoped to this table
	pub fn param_name(&self, name: &str) -> String {
		format!("{}{}", self.prefix, name)
	}

	/// This table's parameters of `query`, with the prefix removed
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_navigation::QueryParams;
	/// use better_tables_views::{MultiTableSpec, TableEntry, TableSpec};
	///
	/// let table = TableSpec::builder(["number"]).build().unwrap();
	/// let page = MultiTableSpec::new(vec![TableEntry::new("orders", table)]).unwrap();
	/// let bound = page.bind::<()>(None).unwrap();
	///
	/// let query = QueryParams::parse("table_0-page=3&table_1-page=9&q=x");
	/// assert_eq!(bound.tables[0].params(&query).to_query_string(), "page=3");
	/// ```
	pub fn params(&self, query: &QueryParams) -> QueryParams {
		query
			.iter()
			.filter_map(|(name, value)| {
				name.strip_prefix(self.prefix.as_str())
					.map(|name| (name, value))
			})
			.collect()
	}
}

/// Tables of a page, ready for rendering
#[derive(Debug, Clone)]
pub struct MultiTableContext<'a, D> {
	pub tables: Vec<BoundTable<'a, D>>,
	pub include_delete_modal: bool,
}

impl<'a, D> MultiTableContext<'a, D> {
	/// Table rendered under `context_name`
	pub fn get(&self, context_name: &str) -> Option<&BoundTable<'a, D>> {
		self.tables.iter().find(|t| t.title == context_name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	fn table(name: &str) -> TableSpec {
		TableSpec::builder(["number"]).name(name).build().unwrap()
	}

	#[fixture]
	fn page() -> MultiTableSpec {
		MultiTableSpec::new(vec![
			TableEntry::new("orders", table("orders")),
			TableEntry::new("refunds", table("refunds")).with_prefix("refunds-"),
			TableEntry::new("invoices", table("invoices")),
		])
		.unwrap()
	}

	#[rstest]
	fn test_no_tables_is_a_config_error() {
		let result = MultiTableSpec::new(Vec::new());

		assert!(matches!(result, Err(ConfigError::MissingRequired(name)) if name == "tables"));
	}

	#[rstest]
	#[case::too_few(2)]
	#[case::too_many(4)]
	fn test_data_count_must_match(page: MultiTableSpec, #[case] count: usize) {
		let data: Vec<Vec<u64>> = vec![Vec::new(); count];

		let result = page.bind(Some(data));

		assert!(matches!(
			result,
			Err(ConfigError::InvalidValue { key, .. }) if key == "tables_data"
		));
	}

	#[rstest]
	fn test_explicit_prefix_skips_counter(page: MultiTableSpec) {
		// Act
		let bound = page.bind(Some(vec![vec![1u64], vec![2], vec![3]])).unwrap();

		// Assert
		let prefixes: Vec<&str> = bound.tables.iter().map(|t| t.prefix.as_str()).collect();
		assert_eq!(prefixes, ["table_0-", "refunds-", "table_1-"]);
		assert_eq!(bound.get("invoices").unwrap().data, Some(vec![3]));
	}

	#[rstest]
	fn test_unbound_tables_have_no_data(page: MultiTableSpec) {
		let bound = page.bind::<Vec<u64>>(None).unwrap();

		assert_eq!(bound.tables.len(), 3);
		assert!(bound.tables.iter().all(|t| t.data.is_none()));
	}

	#[rstest]
	fn test_params_are_scoped(page: MultiTableSpec) {
		// Arrange
		let bound = page.bind::<()>(None).unwrap();
		let query = QueryParams::parse("table_0-page=2&refunds-page=5&refunds-per_page=50&page=9");

		// Act
		let refunds = bound.get("refunds").unwrap();

		// Assert
		assert_eq!(refunds.param_name("page"), "refunds-page");
		assert_eq!(refunds.params(&query).to_query_string(), "page=5&per_page=50");
		assert_eq!(bound.tables[0].params(&query).to_query_string(), "page=2");
	}

	#[rstest]
	fn test_delete_modal_follows_deletable_tables(page: MultiTableSpec) {
		// Arrange
		let deletable = TableSpec::builder(["number"])
			.deletable("orders:order_delete")
			.build()
			.unwrap();
		let with_delete = MultiTableSpec::new(vec![
			TableEntry::new("orders", table("orders")),
			TableEntry::new("archive", deletable),
		])
		.unwrap();

		// Act & Assert
		assert!(!page.bind::<()>(None).unwrap().include_delete_modal);
		assert!(with_delete.bind::<()>(None).unwrap().include_delete_modal);
		assert!(
			!with_delete
				.with_delete_modal(false)
				.bind::<()>(None)
				.unwrap()
				.include_delete_modal
		);
	}
}
