//! Record navigation for filtered table views
//!
//! A list view stores the (windowed) primary keys of its filtered result in
//! the session under a short token and hands the token to every row link as
//! the `nav_token` query parameter. The edit view reads the context back to
//! render previous/next links and a position indicator, and to pick where a
//! "save and next" button leads.
//!
//! ## Lifecycle
//!
//! 1. [`NavigationStore::get_or_create_token`] reuses a live token or mints one.
//! 2. [`NavigationStore::store_navigation_pks`] runs [`cleanup`] and writes a
//!    [`NavigationEntry`] holding at most `max_pk_count` keys.
//! 3. [`NavigationStore::cursor`] loads the entry for a detail request; the
//!    returned [`NavigationCursor`] answers position, neighbours, URLs and the
//!    post-save redirect.
//!
//! Missing, expired and foreign tokens are not errors: they simply disable
//! navigation for the request.
//!
//! ```rust
//! use better_tables_conf::NavigationSettings;
//! use better_tables_navigation::{NavigationStore, PatternResolver, QueryParams, SaveAction};
//! use better_tables_sessions::SessionData;
//!
//! let store = NavigationStore::new(NavigationSettings::default()).unwrap();
//! let mut session = SessionData::new();
//! let keys: Vec<u64> = (1..=120).collect();
//!
//! let token = store.get_or_create_token(&session, None);
//! store
//!     .store_navigation_pks(&mut session, &token, &keys, None, Some("/order/"))
//!     .unwrap();
//!
//! let query = QueryParams::parse(&format!("nav_token={}", token));
//! let cursor = store.cursor(&session, query.get("nav_token"), 60u64);
//! let target = cursor.redirect_after_save(
//!     SaveAction::Next,
//!     &PatternResolver::conventional("Order"),
//!     &query,
//!     &QueryParams::parse("save_and_next=1"),
//! );
//! assert_eq!(target, Some(format!("/order/61/?nav_token={}", token)));
//! ```

pub mod cleanup;
pub mod clock;
pub mod cursor;
pub mod entry;
pub mod error;
pub mod query;
pub mod redirect;
pub mod resolver;
pub mod store;
pub mod token;
pub mod window;

pub use cleanup::cleanup;
pub use clock::{Clock, MockClock, SystemClock};
pub use cursor::{NavigationCursor, NavigationState};
pub use entry::{NavigationEntry, Position};
pub use error::{LookupError, NavigationError, Result};
pub use query::{PAGINATION_PARAMS, QueryParams};
pub use redirect::{
	NEXT_PARAM, SAVE_AND_CLOSE, SAVE_AND_CONTINUE, SAVE_AND_NEXT, SAVE_AND_PREVIOUS, SaveAction,
};
pub use resolver::{PK_PLACEHOLDER, PatternResolver, RecordResolver};
pub use store::NavigationStore;
pub use token::{NAV_TOKEN_PARAM, mint_token};
pub use window::{limit_window, limit_with_settings};
