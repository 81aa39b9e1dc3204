//! List view orchestration
//!
//! A list view is served by one [`ListViewHandler`] running an explicit,
//! ordered list of capabilities. Each capability reads the request, may
//! touch the session, and fills its part of the [`ListContext`].

use crate::error::Result;
use crate::export::{ExportProvider, ExportRequest};
use crate::filters::{ActiveFilter, ActiveFilterProvider, FilterField};
use crate::messages::PostOutcome;
use crate::params::current_filter_params;
use crate::per_page::{PerPageContext, PerPageProvider};
use crate::reports::{AvailableReport, SaveReportForm};
use crate::request::TableRequest;
use crate::table::TableSpec;
use better_tables_conf::TablesSettings;
use better_tables_navigation::{NAV_TOKEN_PARAM, NavigationEntry, NavigationStore, QueryParams};
use better_tables_sessions::SessionStore;
use serde::Serialize;

/// Ordered primary keys of the filtered list being rendered
pub trait PrimaryKeySource<K> {
	fn primary_keys(&self) -> Vec<K>;

	/// Record the stored window should centre on
	///
	/// `None` stores the first `max_pk_count` keys.
	fn current_key(&self) -> Option<&K> {
		None
	}
}

impl<K: Clone> PrimaryKeySource<K> for [K] {
	fn primary_keys(&self) -> Vec<K> {
		self.to_vec()
	}
}

impl<K: Clone> PrimaryKeySource<K> for Vec<K> {
	fn primary_keys(&self) -> Vec<K> {
		self.clone()
	}
}

/// Primary keys plus the record the user was last on
///
/// Lets a truncated list keep the keys around that record, so returning
/// to the list from record 100 of 120 still allows stepping to 101.
///
/// # Examples
///
/// ```
/// use better_tables_views::{FocusedKeys, PrimaryKeySource};
///
/// let keys = FocusedKeys::new((1..=120).collect::<Vec<u64>>()).focused_on(100);
/// assert_eq!(keys.current_key(), Some(&100));
/// assert_eq!(keys.primary_keys().len(), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedKeys<K> {
	keys: Vec<K>,
	current: Option<K>,
}

impl<K> FocusedKeys<K> {
	pub fn new(keys: Vec<K>) -> Self {
		Self {
			keys,
			current: None,
		}
	}

	/// Centre the stored window on `current`
	pub fn focused_on(mut self, current: K) -> Self {
		self.current = Some(current);
		self
	}

	/// Centre on `current` when present
	pub fn with_current(mut self, current: Option<K>) -> Self {
		self.current = current;
		self
	}
}

impl<K: Clone> PrimaryKeySource<K> for FocusedKeys<K> {
	fn primary_keys(&self) -> Vec<K> {
		self.keys.clone()
	}

	fn current_key(&self) -> Option<&K> {
		self.current.as_ref()
	}
}

/// Navigation data handed to the list template
#[derive(Debug, Clone, Serialize)]
pub struct ListNavigation<K> {
	pub token: String,
	pub entry: NavigationEntry<K>,
}

impl<K> ListNavigation<K> {
	/// `detail_url` with the navigation token attached
	pub fn link(&self, detail_url: &str) -> String {
		let mut params = QueryParams::new();
		params.push(NAV_TOKEN_PARAM, self.token.as_str());
		params.append_to(detail_url)
	}
}

/// Everything the capabilities contribute to a list page
#[derive(Debug, Clone, Serialize)]
pub struct ListContext<K> {
	#[serde(flatten)]
	pub per_page: Option<PerPageContext>,
	pub active_filters: Vec<ActiveFilter>,
	pub current_filters: QueryParams,
	pub export: Option<ExportRequest>,
	pub navigation: Option<ListNavigation<K>>,
	pub available_reports: Vec<AvailableReport>,
	pub save_report: Option<SaveReportForm>,
}

impl<K> Default for ListContext<K> {
	fn default() -> Self {
		Self {
			per_page: None,
			active_filters: Vec::new(),
			current_filters: QueryParams::new(),
			export: None,
			navigation: None,
			available_reports: Vec::new(),
			save_report: None,
		}
	}
}

/// One feature of a list view
pub trait ListCapability<K>: Send + Sync {
	/// Short name used in logs
	fn name(&self) -> &'static str;

	fn apply(
		&self,
		request: &TableRequest,
		session: &mut dyn SessionStore,
		keys: &dyn PrimaryKeySource<K>,
		context: &mut ListContext<K>,
	) -> Result<()>;

	/// Handle a POST aimed at this capability
	///
	/// `None` leaves the request to the next capability.
	fn handle_post(
		&self,
		_request: &TableRequest,
		_session: &mut dyn SessionStore,
	) -> Result<Option<PostOutcome>> {
		Ok(None)
	}
}

impl<K> ListCapability<K> for PerPageProvider {
	fn name(&self) -> &'static str {
		"per_page"
	}

	fn apply(
		&self,
		request: &TableRequest,
		session: &mut dyn SessionStore,
		_keys: &dyn PrimaryKeySource<K>,
		context: &mut ListContext<K>,
	) -> Result<()> {
		context.per_page = Some(self.context(request, session)?);
		Ok(())
	}
}

impl<K> ListCapability<K> for ActiveFilterProvider {
	fn name(&self) -> &'static str {
		"filters"
	}

	fn apply(
		&self,
		request: &TableRequest,
		_session: &mut dyn SessionStore,
		_keys: &dyn PrimaryKeySource<K>,
		context: &mut ListContext<K>,
	) -> Result<()> {
		context.active_filters = self.active_filters(request);
		context.current_filters = current_filter_params(request.query());
		Ok(())
	}
}

impl<K> ListCapability<K> for ExportProvider {
	fn name(&self) -> &'static str {
		"export"
	}

	fn apply(
		&self,
		request: &TableRequest,
		_session: &mut dyn SessionStore,
		_keys: &dyn PrimaryKeySource<K>,
		context: &mut ListContext<K>,
	) -> Result<()> {
		context.export = self.requested(request);
		Ok(())
	}
}

/// Stores the list's keys for record navigation
///
/// Skipped for export downloads, which are not browsing contexts.
#[derive(Debug, Clone)]
pub struct NavigationProvider {
	store: NavigationStore,
}

impl NavigationProvider {
	/// Provider writing contexts through `store`
	pub fn new(store: NavigationStore) -> Self {
		Self { store }
	}

	/// Store the provider writes to
	pub fn store(&self) -> &NavigationStore {
		&self.store
	}
}

impl<K> ListCapability<K> for NavigationProvider
where
	K: Serialize + PartialEq + Clone,
{
	fn name(&self) -> &'static str {
		"navigation"
	}

	fn apply(
		&self,
		request: &TableRequest,
		session: &mut dyn SessionStore,
		keys: &dyn PrimaryKeySource<K>,
		context: &mut ListContext<K>,
	) -> Result<()> {
		if context.export.is_some() {
			return Ok(());
		}
		let token = self
			.store
			.get_or_create_token(session, request.query().get(NAV_TOKEN_PARAM));
		let origin_url = request.absolute_uri();
		let entry = self.store.store_navigation_pks(
			session,
			&token,
			&keys.primary_keys(),
			keys.current_key(),
			Some(&origin_url),
		)?;
		context.navigation = Some(ListNavigation {
			token: entry.token.clone(),
			entry,
		});
		Ok(())
	}
}

/// Runs list capabilities in order
///
/// # Examples
///
/// ```
/// use better_tables_conf::TablesSettings;
/// use better_tables_sessions::SessionData;
/// use better_tables_views::{FilterField, ListViewHandler, TableRequest, TableSpec};
///
/// let table = TableSpec::builder(["number", "status"]).name("orders").build().unwrap();
/// let filters = vec![FilterField::value("status")];
/// let handler: ListViewHandler<u64> =
///     ListViewHandler::standard(&TablesSettings::default(), &table, filters).unwrap();
///
/// let mut session = SessionData::new();
/// let request = TableRequest::get("/order/?status=open&per_page=50");
/// let keys: Vec<u64> = (1..=120).collect();
///
/// let context = handler.handle(&request, &mut session, &keys).unwrap();
/// assert_eq!(context.per_page.unwrap().current, 50);
/// assert_eq!(context.active_filters.len(), 1);
/// assert_eq!(context.navigation.unwrap().entry.total_count, 120);
/// ```
pub struct ListViewHandler<K> {
	capabilities: Vec<Box<dyn ListCapability<K>>>,
}

impl<K> ListViewHandler<K> {
	/// Handler with no capabilities
	pub fn new() -> Self {
		Self {
			capabilities: Vec::new(),
		}
	}

	/// Append a capability; capabilities run in insertion order
	pub fn with(mut self, capability: impl ListCapability<K> + 'static) -> Self {
		self.capabilities.push(Box::new(capability));
		self
	}

	/// Names of the capabilities, in run order
	pub fn capability_names(&self) -> Vec<&'static str> {
		self.capabilities.iter().map(|c| c.name()).collect()
	}

	/// Build the context for `request`
	///
	/// Stops at the first failing capability.
	pub fn handle<S>(
		&self,
		request: &TableRequest,
		session: &mut S,
		keys: &dyn PrimaryKeySource<K>,
	) -> Result<ListContext<K>>
	where
		S: SessionStore,
	{
		let mut context = ListContext::default();
		for capability in &self.capabilities {
			tracing::debug!(
				capability = capability.name(),
				path = request.path(),
				"applying list capability"
			);
			capability.apply(request, session, keys, &mut context)?;
		}
		Ok(context)
	}

	/// Give each capability a chance to handle a POST
	///
	/// The first capability that recognises the submission wins; `None`
	/// means the host handles the POST itself.
	pub fn handle_post<S>(
		&self,
		request: &TableRequest,
		session: &mut S,
	) -> Result<Option<PostOutcome>>
	where
		S: SessionStore,
	{
		for capability in &self.capabilities {
			if let Some(outcome) = capability.handle_post(request, session)? {
				tracing::debug!(
					capability = capability.name(),
					redirect = %outcome.redirect_url,
					"list capability handled POST"
				);
				return Ok(Some(outcome));
			}
		}
		Ok(None)
	}
}

impl<K> ListViewHandler<K>
where
	K: Serialize + PartialEq + Clone + 'static,
{
	/// Per-page, filters, export, navigation, configured from `settings`
	pub fn standard(
		settings: &TablesSettings,
		table: &TableSpec,
		filters: Vec<FilterField>,
	) -> Result<Self> {
		let per_page = PerPageProvider::new(settings.per_page.clone())?;
		let store = NavigationStore::new(settings.navigation.clone())?;
		Ok(Self::new()
			.with(per_page)
			.with(ActiveFilterProvider::new(filters))
			.with(ExportProvider::new(table.name()))
			.with(NavigationProvider::new(store)))
	}
}

impl<K> Default for ListViewHandler<K> {
	fn default() -> Self {
		Self::new()
	}
}
