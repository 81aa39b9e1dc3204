//! Record navigation on edit views

use crate::request::TableRequest;
use better_tables_navigation::{
	NAV_TOKEN_PARAM, NavigationCursor, NavigationState, NavigationStore, Position, RecordResolver,
	SaveAction,
};
use better_tables_sessions::SessionStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Navigation controls for one record's edit page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationView {
	pub state: NavigationState,
	pub token: Option<String>,
	pub position: Option<Position>,
	/// Keys in the list before windowing
	pub total_count: Option<usize>,
	pub truncated: bool,
	pub previous_url: Option<String>,
	pub next_url: Option<String>,
	pub close_url: String,
}

/// Edit-side half of record navigation
///
/// Reads the context stored by the list view through the `nav_token`
/// request parameter.
pub struct EditNavigation<K> {
	store: NavigationStore,
	resolver: Arc<dyn RecordResolver<K> + Send + Sync>,
}

impl<K> EditNavigation<K>
where
	K: DeserializeOwned + PartialEq,
{
	pub fn new<R>(store: NavigationStore, resolver: R) -> Self
	where
		R: RecordResolver<K> + Send + Sync + 'static,
	{
		Self {
			store,
			resolver: Arc::new(resolver),
		}
	}

	pub fn store(&self) -> &NavigationStore {
		&self.store
	}

	/// Position `current` within the request's navigation context
	pub fn cursor<S>(&self, request: &TableRequest, session: &S, current: K) -> NavigationCursor<K>
	where
		S: SessionStore + ?Sized,
	{
		self.store
			.cursor(session, request.query().get(NAV_TOKEN_PARAM), current)
	}

	/// Controls for rendering the edit page of `current`
	pub fn view<S>(&self, request: &TableRequest, session: &S, current: K) -> NavigationView
	where
		S: SessionStore + ?Sized,
	{
		let cursor = self.cursor(request, session, current);
		let query = request.query();
		let resolver = self.resolver.as_ref();
		NavigationView {
			state: cursor.state(),
			token: cursor.token().map(str::to_string),
			position: cursor.position(),
			total_count: cursor.entry().map(|entry| entry.total_count),
			truncated: cursor.entry().is_some_and(|entry| entry.truncated),
			previous_url: cursor.previous_url(resolver, query),
			next_url: cursor.next_url(resolver, query),
			close_url: cursor.close_url(resolver, query, request.form()),
		}
	}

	/// Redirect after `current` was saved from the submitted `request`
	///
	/// The pressed button is read from the form. `None` means the host's
	/// own success URL applies.
	pub fn redirect_after_save<S>(
		&self,
		request: &TableRequest,
		session: &S,
		current: K,
	) -> Option<String>
	where
		S: SessionStore + ?Sized,
	{
		let action = SaveAction::from_form(request.form());
		let target = self.cursor(request, session, current).redirect_after_save(
			action,
			self.resolver.as_ref(),
			request.query(),
			request.form(),
		);
		tracing::debug!(?action, target = target.as_deref(), "post-save redirect");
		target
	}
}

impl<K> fmt::Debug for EditNavigation<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EditNavigation")
			.field("store", &self.store)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use better_tables_conf::NavigationSettings;
	use better_tables_navigation::{MockClock, PatternResolver};
	use better_tables_sessions::SessionData;
	use rstest::*;

	struct Fixture {
		navigation: EditNavigation<u64>,
		session: SessionData,
		clock: MockClock,
	}

	#[fixture]
	fn fixture() -> Fixture {
		let clock = MockClock::new(1_700_000_000);
		let store = NavigationStore::with_clock(
			NavigationSettings::default(),
			Arc::new(clock.clone()),
		)
		.unwrap();
		let mut session = SessionData::new();
		store
			.store_navigation_pks(
				&mut session,
				"tok",
				&[10u64, 20, 30],
				None,
				Some("https://shop.test/order/?status=open"),
			)
			.unwrap();
		Fixture {
			navigation: EditNavigation::new(store, PatternResolver::conventional("Order")),
			session,
			clock,
		}
	}

	#[rstest]
	fn test_view_in_the_middle(fixture: Fixture) {
		let request = TableRequest::get("/order/20/?nav_token=tok");

		let view = fixture.navigation.view(&request, &fixture.session, 20);

		assert_eq!(view.state, NavigationState::Found);
		assert_eq!(view.position, Some(Position { index: 2, total: 3 }));
		assert_eq!(view.previous_url.as_deref(), Some("/order/10/?nav_token=tok"));
		assert_eq!(view.next_url.as_deref(), Some("/order/30/?nav_token=tok"));
		assert_eq!(view.close_url, "https://shop.test/order/?status=open");
		assert_eq!(view.total_count, Some(3));
	}

	#[rstest]
	fn test_view_without_token(fixture: Fixture) {
		let view = fixture
			.navigation
			.view(&TableRequest::get("/order/20/"), &fixture.session, 20);

		assert_eq!(view.state, NavigationState::Disabled);
		assert_eq!(view.next_url, None);
		assert_eq!(view.close_url, "/order/");
	}

	#[rstest]
	fn test_view_after_expiry(fixture: Fixture) {
		fixture.clock.advance(3601);

		let view = fixture
			.navigation
			.view(&TableRequest::get("/order/20/?nav_token=tok"), &fixture.session, 20);

		assert_eq!(view.state, NavigationState::Absent);
		assert_eq!(view.position, None);
	}

	#[rstest]
	#[case::next("save_and_next=1", Some("/order/30/?nav_token=tok"))]
	#[case::previous("save_and_previous=1", Some("/order/10/?nav_token=tok"))]
	#[case::close("save_and_close=1", Some("https://shop.test/order/?status=open"))]
	#[case::plain_with_next("next=/dashboard/", Some("/dashboard/"))]
	#[case::plain("name=x", None)]
	fn test_redirect_after_save(
		fixture: Fixture,
		#[case] form: &str,
		#[case] expected: Option<&str>,
	) {
		let request = TableRequest::post("/order/20/?nav_token=tok", form);

		let target = fixture
			.navigation
			.redirect_after_save(&request, &fixture.session, 20);

		assert_eq!(target.as_deref(), expected);
	}
}
