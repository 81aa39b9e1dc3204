//! Traversal of a stored context from one record

use crate::entry::{NavigationEntry, Position};
use crate::query::{PAGINATION_PARAMS, QueryParams};
use crate::redirect::{SaveAction, close_url, next_param};
use crate::resolver::RecordResolver;
use crate::token::NAV_TOKEN_PARAM;
use serde::Serialize;

/// How a detail request relates to stored navigation data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationState {
	/// The request carried no token
	Disabled,
	/// The token names no live context
	Absent,
	/// A live context was loaded
	Found,
}

/// A record positioned within a navigation context
///
/// Built by [`NavigationStore::cursor`](crate::NavigationStore::cursor).
/// Every query degrades to `None` when there is no live context or when the
/// current record is not part of it.
#[derive(Debug, Clone)]
pub struct NavigationCursor<K> {
	token: Option<String>,
	entry: Option<NavigationEntry<K>>,
	current: K,
}

impl<K> NavigationCursor<K> {
	/// Cursor over `entry` at `current`
	pub fn new(token: Option<String>, entry: Option<NavigationEntry<K>>, current: K) -> Self {
		Self {
			token,
			entry,
			current,
		}
	}

	/// Whether a token was given and resolved to a live context
	pub fn state(&self) -> NavigationState {
		match (&self.token, &self.entry) {
			(None, _) => NavigationState::Disabled,
			(Some(_), None) => NavigationState::Absent,
			(Some(_), Some(_)) => NavigationState::Found,
		}
	}

	/// Token of the request, even when it resolved to nothing
	pub fn token(&self) -> Option<&str> {
		self.token.as_deref()
	}

	/// The live context, if any
	pub fn entry(&self) -> Option<&NavigationEntry<K>> {
		self.entry.as_ref()
	}

	/// Key of the record being viewed
	pub fn current(&self) -> &K {
		&self.current
	}

	/// URL of the list request that created the context
	pub fn origin_url(&self) -> Option<&str> {
		self.entry.as_ref().and_then(|entry| entry.origin_url.as_deref())
	}
}

impl<K: PartialEq> NavigationCursor<K> {
	/// 1-based position of the current record
	pub fn position(&self) -> Option<Position> {
		self.entry.as_ref()?.position(&self.current)
	}

	/// Key after the current one; `None` on the last record
	pub fn next_key(&self) -> Option<&K> {
		self.entry.as_ref()?.next_key(&self.current)
	}

	/// Key before the current one; `None` on the first record
	pub fn previous_key(&self) -> Option<&K> {
		self.entry.as_ref()?.previous_key(&self.current)
	}

	/// Detail URL of `key`, carrying the request query and the token
	///
	/// Pagination parameters are dropped. A record that no longer resolves
	/// yields `None` and a warning.
	pub fn navigation_url<R>(&self, key: &K, resolver: &R, query: &QueryParams) -> Option<String>
	where
		R: RecordResolver<K> + ?Sized,
	{
		let url = match resolver.detail_url(key) {
			Ok(url) => url,
			Err(error) => {
				tracing::warn!(%error, "navigation link unavailable");
				return None;
			}
		};
		let mut carried = query.without(&PAGINATION_PARAMS);
		if let Some(token) = &self.token {
			carried.set(NAV_TOKEN_PARAM, token.as_str());
		}
		Some(carried.append_to(&url))
	}

	/// Detail URL of the next record
	pub fn next_url<R>(&self, resolver: &R, query: &QueryParams) -> Option<String>
	where
		R: RecordResolver<K> + ?Sized,
	{
		self.next_key()
			.and_then(|key| self.navigation_url(key, resolver, query))
	}

	/// Detail URL of the previous record
	pub fn previous_url<R>(&self, resolver: &R, query: &QueryParams) -> Option<String>
	where
		R: RecordResolver<K> + ?Sized,
	{
		self.previous_key()
			.and_then(|key| self.navigation_url(key, resolver, query))
	}

	/// Where "close" leads; see [`close_url`]
	pub fn close_url<R>(&self, resolver: &R, query: &QueryParams, form: &QueryParams) -> String
	where
		R: RecordResolver<K> + ?Sized,
	{
		let list_url = resolver.list_url();
		close_url(
			self.origin_url(),
			next_param(query, form),
			list_url.as_deref(),
		)
	}

	/// Redirect target after the current record was saved
	///
	/// `None` means the host's own success URL applies. Next and previous
	/// fall back to the close URL at either end of the list or when the
	/// neighbour no longer resolves.
	pub fn redirect_after_save<R>(
		&self,
		action: SaveAction,
		resolver: &R,
		query: &QueryParams,
		form: &QueryParams,
	) -> Option<String>
	where
		R: RecordResolver<K> + ?Sized,
	{
		let target = match action {
			SaveAction::Default => return next_param(query, form).map(str::to_string),
			SaveAction::Close => None,
			SaveAction::Continue => self.navigation_url(&self.current, resolver, query),
			SaveAction::Next => self.next_url(resolver, query),
			SaveAction::Previous => self.previous_url(resolver, query),
		};
		Some(target.unwrap_or_else(|| self.close_url(resolver, query, form)))
	}
}
