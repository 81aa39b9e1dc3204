//! Bulk selection from row checkboxes

use better_tables_navigation::QueryParams;
use std::fmt::Display;
use std::str::FromStr;

/// Form field carrying the checked row keys
pub const SELECTED_ITEMS_PARAM: &str = "selected_items";

/// Rows selected for a bulk action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkSelection<K> {
	/// Nothing usable was selected
	Empty,
	/// Selected keys, in submission order
	Selected(Vec<K>),
}

impl<K> BulkSelection<K>
where
	K: FromStr,
	K::Err: Display,
{
	/// Parse `selected_items` values from a submitted form
	///
	/// Values that do not parse as `K` are skipped.
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_navigation::QueryParams;
	/// use better_tables_views::BulkSelection;
	///
	/// let form = QueryParams::parse("selected_items=3&selected_items=x&selected_items=7");
	/// assert_eq!(BulkSelection::<u32>::from_form(&form), BulkSelection::Selected(vec![3, 7]));
	/// ```
	pub fn from_form(form: &QueryParams) -> Self {
		let keys: Vec<K> = form
			.get_all(SELECTED_ITEMS_PARAM)
			.into_iter()
			.map(str::trim)
			.filter(|value| !value.is_empty())
			.filter_map(|value| match value.parse::<K>() {
				Ok(key) => Some(key),
				Err(error) => {
					tracing::warn!(value, %error, "skipping unparsable selected item");
					None
				}
			})
			.collect();
		if keys.is_empty() {
			Self::Empty
		} else {
			Self::Selected(keys)
		}
	}
}

impl<K> BulkSelection<K> {
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	pub fn keys(&self) -> &[K] {
		match self {
			Self::Empty => &[],
			Self::Selected(keys) => keys,
		}
	}
}
