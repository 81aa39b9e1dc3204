//! The slice of an HTTP request the table views read

use crate::error::{Result, ViewError};
use better_tables_navigation::QueryParams;
use url::Url;

/// HTTP method of a table request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
	#[default]
	Get,
	Post,
}

/// Authenticated user making a request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestUser {
	pub id: String,
	/// Names of the groups the user belongs to
	pub groups: Vec<String>,
}

impl RequestUser {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			groups: Vec::new(),
		}
	}

	/// Add the user to `group`
	pub fn in_group(mut self, group: impl Into<String>) -> Self {
		self.groups.push(group.into());
		self
	}

	pub fn is_member_of(&self, group: &str) -> bool {
		self.groups.iter().any(|g| g == group)
	}
}

/// A request as seen by list and edit views
///
/// The host framework builds one per request from its own request type.
///
/// # Examples
///
/// ```
/// use better_tables_views::TableRequest;
///
/// let request = TableRequest::from_url("https://shop.test/order/?status=open&page=2").unwrap();
/// assert_eq!(request.path(), "/order/");
/// assert_eq!(request.query().get("status"), Some("open"));
/// assert_eq!(request.absolute_uri(), "https://shop.test/order/?status=open&page=2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableRequest {
	method: Method,
	origin: Option<String>,
	path: String,
	query: QueryParams,
	form: QueryParams,
	user: Option<RequestUser>,
}

impl TableRequest {
	/// GET request for a path with an optional query string
	pub fn get(path_and_query: &str) -> Self {
		let (path, query) = match path_and_query.split_once('?') {
			Some((path, query)) => (path, QueryParams::parse(query)),
			None => (path_and_query, QueryParams::new()),
		};
		Self {
			path: path.to_string(),
			query,
			..Self::default()
		}
	}

	/// POST request with a URL-encoded form body
	pub fn post(path_and_query: &str, form_body: &str) -> Self {
		Self {
			method: Method::Post,
			form: QueryParams::parse(form_body),
			..Self::get(path_and_query)
		}
	}

	/// GET request from an absolute URL
	pub fn from_url(url: &str) -> Result<Self> {
		let parsed = Url::parse(url).map_err(|e| ViewError::InvalidUrl {
			url: url.to_string(),
			message: e.to_string(),
		})?;
		let origin = parsed.origin().ascii_serialization();
		Ok(Self {
			origin: Some(origin),
			path: parsed.path().to_string(),
			query: parsed.query().map(QueryParams::parse).unwrap_or_default(),
			..Self::default()
		})
	}

	/// Set scheme and host, e.g. `https://shop.test`
	pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
		self.origin = Some(origin.into().trim_end_matches('/').to_string());
		self
	}

	/// Attach the authenticated user
	pub fn with_user(mut self, user: RequestUser) -> Self {
		self.user = Some(user);
		self
	}

	/// Authenticated user, `None` for anonymous requests
	pub fn user(&self) -> Option<&RequestUser> {
		self.user.as_ref()
	}

	pub fn method(&self) -> Method {
		self.method
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn query(&self) -> &QueryParams {
		&self.query
	}

	pub fn form(&self) -> &QueryParams {
		&self.form
	}

	/// Form on POST, query string otherwise
	pub fn params(&self) -> &QueryParams {
		match self.method {
			Method::Post => &self.form,
			Method::Get => &self.query,
		}
	}

	/// Path plus query string
	pub fn full_path(&self) -> String {
		self.query.append_to(&self.path)
	}

	/// Full URL; just the full path when the origin is unknown
	pub fn absolute_uri(&self) -> String {
		match &self.origin {
			Some(origin) => format!("{}{}", origin, self.full_path()),
			None => self.full_path(),
		}
	}

	/// Request path with `query` as its query string
	pub fn path_with(&self, query: &QueryParams) -> String {
		query.append_to(&self.path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_post_reads_form() {
		let request = TableRequest::post("/order/?per_page=10", "per_page=50");

		assert_eq!(request.method(), Method::Post);
		assert_eq!(request.params().get("per_page"), Some("50"));
		assert_eq!(request.query().get("per_page"), Some("10"));
	}

	#[rstest]
	fn test_absolute_uri_without_origin() {
		let request = TableRequest::get("/order/?a=1");
		assert_eq!(request.absolute_uri(), "/order/?a=1");
		assert_eq!(
			request.with_origin("http://localhost:8000/").absolute_uri(),
			"http://localhost:8000/order/?a=1"
		);
	}

	#[rstest]
	fn test_invalid_url() {
		let result = TableRequest::from_url("not a url");
		assert!(matches!(result, Err(ViewError::InvalidUrl { .. })));
	}
}
