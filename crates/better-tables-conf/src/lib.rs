//! Settings for better-tables
//!
//! Process-wide configuration for record navigation and the per-page
//! selector. Every value has a default, can be overridden through
//! `BETTER_TABLES_*` environment variables or a TOML document, and can be
//! overridden again per table through the builder methods.
//!
//! | Setting | Default | Environment variable |
//! |---|---|---|
//! | navigation max pk count | 500 (0 = unlimited) | `BETTER_TABLES_NAVIGATION_MAX_PK_COUNT` |
//! | navigation session timeout | 3600 s | `BETTER_TABLES_NAVIGATION_SESSION_TIMEOUT` |
//! | navigation session key prefix | `bdt_nav_` | `BETTER_TABLES_NAVIGATION_SESSION_KEY_PREFIX` |
//! | navigation context window | 50 | `BETTER_TABLES_NAVIGATION_CONTEXT_WINDOW` |
//! | navigation max contexts | 50 (0 = unlimited) | `BETTER_TABLES_NAVIGATION_MAX_CONTEXTS` |
//! | per-page options | 10,25,50,100,500,1000 | `BETTER_TABLES_PER_PAGE_OPTIONS` |
//! | per-page default | 25 | `BETTER_TABLES_PER_PAGE_DEFAULT` |
//! | per-page session key | `table_per_page` | `BETTER_TABLES_PER_PAGE_SESSION_KEY` |

#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod navigation;
pub mod per_page;
pub mod settings;

pub use env::Env;
pub use error::{ConfigError, Result};
pub use navigation::NavigationSettings;
pub use per_page::PerPageSettings;
pub use settings::TablesSettings;
