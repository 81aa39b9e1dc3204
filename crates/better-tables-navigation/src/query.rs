//! Ordered query string parameters

use serde::Serialize;
use std::fmt;
use url::form_urlencoded;

/// Pagination parameters dropped from carried navigation links
pub const PAGINATION_PARAMS: [&str; 2] = ["page", "per_page"];

/// Ordered, possibly repeated query or form parameters
///
/// # Examples
///
/// ```
/// use better_tables_navigation::QueryParams;
///
/// let params = QueryParams::parse("?status=open&page=3&nav_token=abc");
/// assert_eq!(params.get("status"), Some("open"));
///
/// let carried = params.without(&["page"]);
/// assert_eq!(carried.to_query_string(), "status=open&nav_token=abc");
/// assert_eq!(carried.append_to("/orders/7/"), "/orders/7/?status=open&nav_token=abc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	/// Create an empty parameter list
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a URL-encoded query string, with or without the leading `?`
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		form_urlencoded::parse(query.as_bytes()).into_owned().collect()
	}

	/// First value for `name`
	pub fn get(&self, name: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// First non-blank value for `name`
	pub fn get_non_empty(&self, name: &str) -> Option<&str> {
		self.get(name).map(str::trim).filter(|value| !value.is_empty())
	}

	/// Every value for `name`, in order
	pub fn get_all(&self, name: &str) -> Vec<&str> {
		self.pairs
			.iter()
			.filter(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
			.collect()
	}

	/// Whether `name` appears at all
	pub fn contains(&self, name: &str) -> bool {
		self.pairs.iter().any(|(key, _)| key == name)
	}

	/// Append a pair
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((name.into(), value.into()));
	}

	/// Replace every value of `name` with a single `value`
	///
	/// Keeps the position of the first occurrence; appends when absent.
	pub fn set(&mut self, name: &str, value: impl Into<String>) {
		let value = value.into();
		match self.pairs.iter().position(|(key, _)| key == name) {
			Some(index) => {
				self.pairs[index].1 = value;
				let mut seen = false;
				self.pairs.retain(|(key, _)| {
					if key != name {
						return true;
					}
					let keep = !seen;
					seen = true;
					keep
				});
			}
			None => self.pairs.push((name.to_string(), value)),
		}
	}

	/// Remove every value of `name`
	pub fn remove(&mut self, name: &str) {
		self.pairs.retain(|(key, _)| key != name);
	}

	/// Copy without the listed names
	pub fn without(&self, names: &[&str]) -> Self {
		self.pairs
			.iter()
			.filter(|(key, _)| !names.contains(&key.as_str()))
			.cloned()
			.collect()
	}

	/// Whether there are no pairs
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Number of pairs
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Iterate over pairs
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// URL-encode without a leading `?`
	pub fn to_query_string(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.pairs.iter())
			.finish()
	}

	/// Append the encoded parameters to `url`
	///
	/// Uses `&` when `url` already carries a query string.
	pub fn append_to(&self, url: &str) -> String {
		if self.pairs.is_empty() {
			return url.to_string();
		}
		let separator = if url.contains('?') { '&' } else { '?' };
		format!("{}{}{}", url, separator, self.to_query_string())
	}
}

impl FromIterator<(String, String)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			pairs: iter.into_iter().collect(),
		}
	}
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
		iter.into_iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}
}

impl fmt::Display for QueryParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_query_string())
	}
}
