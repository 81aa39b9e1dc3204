//! Remembered page size

use crate::error::Result;
use crate::request::TableRequest;
use better_tables_conf::PerPageSettings;
use better_tables_sessions::{SessionStore, SessionStoreExt};
use serde::Serialize;

/// Request parameter selecting the page size
pub const PER_PAGE_PARAM: &str = "per_page";

/// Page size selector state for templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerPageContext {
	#[serde(rename = "per_page_options")]
	pub options: Vec<usize>,
	#[serde(rename = "current_per_page")]
	pub current: usize,
}

/// Resolves and remembers the page size of a table
///
/// Resolution order:
///
/// 1. a `per_page` request value among the options, which is also saved to
///    the session;
/// 2. the saved session value, if still among the options;
/// 3. the configured default;
/// 4. the view's `paginate_by`;
/// 5. the first option.
///
/// Unusable values are ignored.
#[derive(Debug, Clone)]
pub struct PerPageProvider {
	settings: PerPageSettings,
	paginate_by: Option<usize>,
}

impl PerPageProvider {
	/// Provider for validated settings
	pub fn new(settings: PerPageSettings) -> Result<Self> {
		settings.validate()?;
		Ok(Self {
			settings,
			paginate_by: None,
		})
	}

	/// Page size of the view, used when no default is configured
	pub fn with_paginate_by(mut self, paginate_by: usize) -> Self {
		self.paginate_by = Some(paginate_by);
		self
	}

	pub fn settings(&self) -> &PerPageSettings {
		&self.settings
	}

	/// Page size for `request`, saving an explicit choice to the session
	pub fn resolve<S>(&self, request: &TableRequest, session: &mut S) -> Result<usize>
	where
		S: SessionStore + ?Sized,
	{
		if let Some(per_page) = self.requested(request) {
			session.set_as(&self.settings.session_key, &per_page)?;
			return Ok(per_page);
		}
		Ok(self.fallback(session))
	}

	/// Selector state for `request`; see [`resolve`](Self::resolve)
	pub fn context<S>(&self, request: &TableRequest, session: &mut S) -> Result<PerPageContext>
	where
		S: SessionStore + ?Sized,
	{
		Ok(PerPageContext {
			options: self.settings.options.clone(),
			current: self.resolve(request, session)?,
		})
	}

	fn requested(&self, request: &TableRequest) -> Option<usize> {
		let raw = request.params().get_non_empty(PER_PAGE_PARAM)?;
		match raw.parse::<usize>() {
			Ok(per_page) if self.settings.allows(per_page) => Some(per_page),
			Ok(per_page) => {
				tracing::warn!(per_page, "ignoring per_page value outside the allowed options");
				None
			}
			Err(_) => {
				tracing::debug!(value = raw, "ignoring non-numeric per_page value");
				None
			}
		}
	}

	fn fallback<S>(&self, session: &S) -> usize
	where
		S: SessionStore + ?Sized,
	{
		session
			.get_as::<usize>(&self.settings.session_key)
			.filter(|per_page| self.settings.allows(*per_page))
			.or(self.settings.default_per_page)
			.or(self.paginate_by)
			.or_else(|| self.settings.options.first().copied())
			.unwrap_or(better_tables_conf::per_page::DEFAULT_PER_PAGE)
	}
}
