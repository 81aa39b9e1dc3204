//! Turning primary keys into URLs

use crate::error::LookupError;
use std::fmt::Display;

/// Placeholder replaced by the primary key in URL patterns
pub const PK_PLACEHOLDER: &str = "{pk}";

/// Resolves records of one type to their URLs
///
/// Implemented by the host application on top of its ORM and router. A
/// record deleted since the list was rendered should yield
/// [`LookupError::NotFound`].
pub trait RecordResolver<K> {
	/// Detail or edit URL of the record with primary key `key`
	fn detail_url(&self, key: &K) -> Result<String, LookupError>;

	/// Conventional list URL for this record type, if one is routed
	fn list_url(&self) -> Option<String> {
		None
	}
}

/// Resolver built from URL patterns
///
/// Does not check that records exist.
///
/// # Examples
///
/// ```
/// use better_tables_navigation::{PatternResolver, RecordResolver};
///
/// let resolver = PatternResolver::conventional("Order");
/// assert_eq!(resolver.detail_url(&42).unwrap(), "/order/42/");
/// assert_eq!(RecordResolver::<i32>::list_url(&resolver).as_deref(), Some("/order/"));
///
/// let custom = PatternResolver::new("/shop/orders/{pk}/edit/");
/// assert_eq!(custom.detail_url(&7).unwrap(), "/shop/orders/7/edit/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternResolver {
	detail_pattern: String,
	list_url: Option<String>,
}

impl PatternResolver {
	/// Resolver for a detail pattern containing `{pk}`
	pub fn new(detail_pattern: impl Into<String>) -> Self {
		Self {
			detail_pattern: detail_pattern.into(),
			list_url: None,
		}
	}

	/// Resolver using `/<model>/` and `/<model>/<pk>/` for a model name
	pub fn conventional(model_name: &str) -> Self {
		let slug = model_name.to_lowercase();
		Self {
			detail_pattern: format!("/{}/{}/", slug, PK_PLACEHOLDER),
			list_url: Some(format!("/{}/", slug)),
		}
	}

	/// Set the list URL
	pub fn with_list_url(mut self, list_url: impl Into<String>) -> Self {
		self.list_url = Some(list_url.into());
		self
	}
}

impl<K: Display> RecordResolver<K> for PatternResolver {
	fn detail_url(&self, key: &K) -> Result<String, LookupError> {
		if !self.detail_pattern.contains(PK_PLACEHOLDER) {
			return Err(LookupError::Resolution(format!(
				"pattern '{}' has no {} placeholder",
				self.detail_pattern, PK_PLACEHOLDER
			)));
		}
		Ok(self.detail_pattern.replace(PK_PLACEHOLDER, &key.to_string()))
	}

	fn list_url(&self) -> Option<String> {
		self.list_url.clone()
	}
}
