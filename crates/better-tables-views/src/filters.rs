//! Active filter badges
//!
//! Summarises the filters applied to a list as removable badges, each with a
//! URL that drops just that filter from the current query.

use crate::request::TableRequest;
use better_tables_navigation::QueryParams;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Free-text search parameter, always reported last
pub const SEARCH_PARAM: &str = "search";

/// Suffix of the lower bound parameter of a range filter
pub const RANGE_MIN_SUFFIX: &str = "_min";

/// Suffix of the upper bound parameter of a range filter
pub const RANGE_MAX_SUFFIX: &str = "_max";

/// Shape of a declared filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
	/// One parameter, possibly repeated
	Value,
	/// `<name>_min` and `<name>_max` date bounds
	DateRange,
}

/// A filter declared by a list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
	name: String,
	label: Option<String>,
	kind: FilterKind,
}

impl FilterField {
	pub fn value(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			kind: FilterKind::Value,
		}
	}

	pub fn date_range(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			kind: FilterKind::DateRange,
		}
	}

	/// Badge label; defaults to the title-cased field name
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> FilterKind {
		self.kind
	}

	pub fn label(&self) -> String {
		self.label
			.clone()
			.unwrap_or_else(|| title_case(&self.name))
	}
}

/// One applied filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
	pub name: String,
	pub label: String,
	pub display_value: String,
	/// Parameters removed by the clear link
	pub clear_params: Vec<String>,
	/// Current URL without `clear_params`
	pub clear_url: String,
}

/// Builds [`ActiveFilter`] badges from the request query
#[derive(Debug, Clone, Default)]
pub struct ActiveFilterProvider {
	fields: Vec<FilterField>,
	search: bool,
}

impl ActiveFilterProvider {
	/// Provider reporting `fields` and the search parameter
	pub fn new(fields: Vec<FilterField>) -> Self {
		Self {
			fields,
			search: true,
		}
	}

	/// Do not report the search parameter
	pub fn without_search(mut self) -> Self {
		self.search = false;
		self
	}

	pub fn fields(&self) -> &[FilterField] {
		&self.fields
	}

	/// Badges for the filters applied in `request`, in declaration order
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_views::{ActiveFilterProvider, FilterField, TableRequest};
	///
	/// let provider = ActiveFilterProvider::new(vec![
	///     FilterField::value("status"),
	///     FilterField::date_range("created"),
	/// ]);
	/// let request = TableRequest::get("/order/?status=open&created_min=2024-01-01&search=acme");
	///
	/// let badges = provider.active_filters(&request);
	/// assert_eq!(badges[0].display_value, "open");
	/// assert_eq!(badges[1].display_value, "From 2024-01-01");
	/// assert_eq!(badges[2].display_value, "\"acme\"");
	/// assert_eq!(badges[0].clear_url, "/order/?created_min=2024-01-01&search=acme");
	/// ```
	pub fn active_filters(&self, request: &TableRequest) -> Vec<ActiveFilter> {
		let query = request.query();
		let mut badges: Vec<ActiveFilter> = self
			.fields
			.iter()
			.filter(|field| field.name != SEARCH_PARAM)
			.filter_map(|field| match field.kind {
				FilterKind::Value => value_badge(field, request),
				FilterKind::DateRange => range_badge(field, request),
			})
			.collect();

		if self.search {
			if let Some(search) = query.get_non_empty(SEARCH_PARAM) {
				badges.push(badge(
					request,
					SEARCH_PARAM,
					"Search".to_string(),
					format!("\"{}\"", search),
					vec![SEARCH_PARAM.to_string()],
				));
			}
		}
		badges
	}
}

fn value_badge(field: &FilterField, request: &TableRequest) -> Option<ActiveFilter> {
	let values: Vec<&str> = request
		.query()
		.get_all(&field.name)
		.into_iter()
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.collect();
	if values.is_empty() {
		return None;
	}
	Some(badge(
		request,
		&field.name,
		field.label(),
		values.join(", "),
		vec![field.name.clone()],
	))
}

fn range_badge(field: &FilterField, request: &TableRequest) -> Option<ActiveFilter> {
	let min_param = format!("{}{}", field.name, RANGE_MIN_SUFFIX);
	let max_param = format!("{}{}", field.name, RANGE_MAX_SUFFIX);
	let start = request.query().get_non_empty(&min_param).map(format_date);
	let end = request.query().get_non_empty(&max_param).map(format_date);

	let (display_value, clear_params) = match (start, end) {
		(Some(start), Some(end)) => (format!("{} – {}", start, end), vec![min_param, max_param]),
		(Some(start), None) => (format!("From {}", start), vec![min_param]),
		(None, Some(end)) => (format!("Until {}", end), vec![max_param]),
		(None, None) => return None,
	};
	Some(badge(request, &field.name, field.label(), display_value, clear_params))
}

fn badge(
	request: &TableRequest,
	name: &str,
	label: String,
	display_value: String,
	clear_params: Vec<String>,
) -> ActiveFilter {
	let names: Vec<&str> = clear_params.iter().map(String::as_str).collect();
	let remaining: QueryParams = request.query().without(&names);
	ActiveFilter {
		name: name.to_string(),
		label,
		display_value,
		clear_url: request.path_with(&remaining),
		clear_params,
	}
}

/// `created_at` -> `Created At`
pub fn title_case(name: &str) -> String {
	name.split(['_', ' '])
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first
					.to_uppercase()
					.chain(chars.flat_map(char::to_lowercase))
					.collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

/// Show datetimes as their ISO date; anything else as given
fn format_date(value: &str) -> String {
	if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
		return datetime.date_naive().to_string();
	}
	for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
		if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
			return datetime.date().to_string();
		}
	}
	match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
		Ok(date) => date.to_string(),
		Err(_) => value.to_string(),
	}
}
