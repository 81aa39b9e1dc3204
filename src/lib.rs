//! # better-tables
//!
//! Table view capabilities for server-rendered web applications, with a
//! session-backed record navigation scheme at the centre.
//!
//! A user filtering a list and then editing records one by one can step
//! through the filtered result with previous/next links and "save and next"
//! buttons. The list view stores a bounded window of the result's primary
//! keys in the session under a short token; the edit view reads it back.
//!
//! ## Crates
//!
//! | Crate | Contents |
//! |---|---|
//! | [`conf`] | settings, environment overrides, `ConfigError` |
//! | [`sessions`] | session store abstraction and backends |
//! | [`navigation`] | tokens, window limiter, expiry/eviction, traversal |
//! | [`views`] | per-page, filter badges, export detection, list/edit handlers |
//!
//! ## Feature Flags
//!
//! - `navigation` - record navigation only
//! - `views` - view capabilities (implies `navigation`)
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust
//! use better_tables::prelude::*;
//!
//! let settings = TablesSettings::default();
//! let table = TableSpec::builder(["number", "customer"]).name("orders").build().unwrap();
//! let list: ListViewHandler<u64> =
//!     ListViewHandler::standard(&settings, &table, Vec::new()).unwrap();
//!
//! let mut session = SessionData::new();
//! let keys: Vec<u64> = (1..=120).collect();
//! let context = list.handle(&TableRequest::get("/order/"), &mut session, &keys).unwrap();
//!
//! let navigation = context.navigation.unwrap();
//! assert_eq!(navigation.entry.total_count, 120);
//! assert!(!navigation.entry.truncated);
//! ```

pub use better_tables_conf as conf;
pub use better_tables_sessions as sessions;

#[cfg(feature = "navigation")]
pub use better_tables_navigation as navigation;

#[cfg(feature = "views")]
pub use better_tables_views as views;

/// Commonly used types
pub mod prelude {
	pub use better_tables_conf::{ConfigError, NavigationSettings, PerPageSettings, TablesSettings};
	pub use better_tables_sessions::{
		InMemorySessionBackend, SessionBackend, SessionData, SessionStore, SessionStoreExt,
	};

	#[cfg(feature = "navigation")]
	pub use better_tables_navigation::{
		NavigationCursor, NavigationEntry, NavigationError, NavigationStore, PatternResolver,
		QueryParams, RecordResolver, SaveAction,
	};

	#[cfg(feature = "views")]
	pub use better_tables_views::{
		ActionKind, ActionSpec, ActionsColumn, ActiveFilterProvider, BulkSelection, EditNavigation,
		ExportProvider, FilterField, FocusedKeys, InMemoryReportRepository, LinkSpec,
		ListViewHandler, MultiTableSpec, PerPageProvider, PostOutcome, ReportProvider,
		ReportRepository, RequestUser, TableEntry, TableRequest, TableSpec, ViewError,
	};
}
