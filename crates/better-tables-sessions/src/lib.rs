//! Session storage for better-tables
//!
//! Table capabilities keep small amounts of per-client state (page size
//! preferences, record navigation contexts) in the HTTP session. This crate
//! models the session as an explicit collaborator:
//!
//! - [`SessionStore`]: the synchronous key-value view used during a request
//! - [`SessionData`]: the in-memory store loaded for one request
//! - [`SessionBackend`]: asynchronous persistence between requests
//!
//! ```rust
//! use better_tables_sessions::{InMemorySessionBackend, SessionData, SessionStoreExt};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = InMemorySessionBackend::new();
//!
//! let mut session = SessionData::load(&backend, "client-1").await?;
//! session.set_as("table_per_page", &100usize)?;
//! session.commit(&backend, "client-1").await?;
//!
//! let session = SessionData::load(&backend, "client-1").await?;
//! assert_eq!(session.get_as::<usize>("table_per_page"), Some(100));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod data;
pub mod error;
pub mod store;

pub use backend::{InMemorySessionBackend, SessionBackend, SessionMap};
pub use data::{COOKIE_SIZE_LIMIT, SessionData};
pub use error::{Result, SessionError};
pub use store::{SessionStore, SessionStoreExt};
