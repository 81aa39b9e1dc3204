//! Injected table columns and their placement

/// Columns a table can have added on top of its declared ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjectedColumn {
	/// Row checkbox for bulk actions
	Select,
	/// Edit button
	Edit,
	/// Delete button with confirmation
	Delete,
	/// View/edit/delete button group
	Actions,
}

impl InjectedColumn {
	/// Column name, reserved among declared columns
	pub fn name(self) -> &'static str {
		match self {
			Self::Select => "select",
			Self::Edit => "edit",
			Self::Delete => "delete",
			Self::Actions => "actions",
		}
	}

	/// Whether the column goes before the declared columns
	pub fn is_leading(self) -> bool {
		matches!(self, Self::Select | Self::Edit)
	}

	fn rank(self) -> u8 {
		match self {
			Self::Select => 0,
			Self::Edit => 1,
			Self::Delete => 2,
			Self::Actions => 3,
		}
	}
}

/// Final column order of a table
///
/// Select and edit come first, then the declared columns, then delete and
/// actions. A declared column named like an injected one is placed as the
/// injected column; each name appears once.
///
/// # Examples
///
/// ```
/// use better_tables_views::{ColumnSequence, InjectedColumn};
///
/// let sequence = ColumnSequence::new(["edit", "number", "customer"])
///     .with(InjectedColumn::Delete)
///     .with(InjectedColumn::Select)
///     .with(InjectedColumn::Edit);
/// assert_eq!(sequence.names(), ["select", "edit", "number", "customer", "delete"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSequence {
	declared: Vec<String>,
	injected: Vec<InjectedColumn>,
}

impl ColumnSequence {
	pub fn new<I, S>(declared: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			declared: declared.into_iter().map(Into::into).collect(),
			injected: Vec::new(),
		}
	}

	/// Add an injected column; adding one twice has no effect
	pub fn with(mut self, column: InjectedColumn) -> Self {
		if !self.injected.contains(&column) {
			self.injected.push(column);
			self.injected.sort_by_key(|c| c.rank());
		}
		self
	}

	pub fn injected(&self) -> &[InjectedColumn] {
		&self.injected
	}

	pub fn has(&self, column: InjectedColumn) -> bool {
		self.injected.contains(&column)
	}

	/// Column names in display order
	pub fn names(&self) -> Vec<&str> {
		let leading = self.injected.iter().filter(|c| c.is_leading());
		let trailing = self.injected.iter().filter(|c| !c.is_leading());

		let mut names: Vec<&str> = leading.map(|c| c.name()).collect();
		for name in &self.declared {
			let reserved = self.injected.iter().any(|c| c.name() == name.as_str());
			if !reserved && !names.contains(&name.as_str()) {
				names.push(name.as_str());
			}
		}
		names.extend(trailing.map(|c| c.name()));
		names
	}
}
