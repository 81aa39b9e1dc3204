//! View capabilities for better-tables
//!
//! List views compose capabilities through a [`ListViewHandler`]:
//!
//! - [`PerPageProvider`]: remembered page size
//! - [`ActiveFilterProvider`]: removable filter badges
//! - [`ExportProvider`]: `export=csv|json` detection
//! - [`NavigationProvider`]: stores the listed keys for record navigation
//! - [`ReportProvider`]: saved filter sets, with favorites
//!
//! POST submissions a capability recognises (saving a report, toggling a
//! favorite) go through [`ListViewHandler::handle_post`]. Pages showing
//! several tables describe them with a [`MultiTableSpec`].
//!
//! Edit views use [`EditNavigation`] for previous/next links and the
//! post-save redirect. Table features (injected columns, row actions,
//! toolbar links) are described by a validated [`TableSpec`].
//!
//! ```rust
//! use better_tables_conf::TablesSettings;
//! use better_tables_navigation::{NavigationStore, PatternResolver};
//! use better_tables_sessions::SessionData;
//! use better_tables_views::{EditNavigation, ListViewHandler, TableRequest, TableSpec};
//!
//! let settings = TablesSettings::default();
//! let table = TableSpec::builder(["number", "customer"]).name("orders").build().unwrap();
//! let list: ListViewHandler<u64> =
//!     ListViewHandler::standard(&settings, &table, Vec::new()).unwrap();
//!
//! let mut session = SessionData::new();
//! let keys: Vec<u64> = (1..=120).collect();
//! let context = list
//!     .handle(&TableRequest::get("/order/"), &mut session, &keys)
//!     .unwrap();
//! let token = context.navigation.unwrap().token;
//!
//! let store = NavigationStore::new(settings.navigation.clone()).unwrap();
//! let edit = EditNavigation::new(store, PatternResolver::conventional("Order"));
//! let request = TableRequest::post(&format!("/order/60/?nav_token={}", token), "save_and_next=1");
//! assert_eq!(
//!     edit.redirect_after_save(&request, &session, 60),
//!     Some(format!("/order/61/?nav_token={}", token))
//! );
//! ```

pub mod actions;
pub mod bulk;
pub mod columns;
pub mod edit;
pub mod error;
pub mod export;
pub mod filters;
pub mod handler;
pub mod links;
pub mod messages;
pub mod multi;
pub mod params;
pub mod per_page;
pub mod reports;
pub mod request;
pub mod table;

pub use actions::{ActionKind, ActionSpec, ActionsColumn};
pub use bulk::{BulkSelection, SELECTED_ITEMS_PARAM};
pub use columns::{ColumnSequence, InjectedColumn};
pub use edit::{EditNavigation, NavigationView};
pub use error::{Result, ViewError};
pub use export::{ExportFormat, ExportProvider, ExportRequest};
pub use filters::{ActiveFilter, ActiveFilterProvider, FilterField, FilterKind};
pub use handler::{
	FocusedKeys, ListCapability, ListContext, ListNavigation, ListViewHandler,
	NavigationProvider, PrimaryKeySource,
};
pub use links::{LinkMethod, LinkSpec};
pub use messages::{Message, PostOutcome};
pub use multi::{BoundTable, MultiTableContext, MultiTableSpec, TableEntry};
pub use params::current_filter_params;
pub use per_page::{PerPageContext, PerPageProvider};
pub use reports::{
	AvailableReport, InMemoryReportRepository, NewReport, Report, ReportProvider, ReportRepository,
	Visibility,
};
pub use request::{Method, RequestUser, TableRequest};
pub use table::{TableSpec, TableSpecBuilder};
