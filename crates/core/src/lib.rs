//! Folio core: route table, admin session and navigation guard
//!
//! Everything here is platform independent. Browser storage and the wall
//! clock are reached through the [`KeyValueStore`] and [`Clock`] traits so
//! the guard can be exercised natively.

pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod routes;
pub mod session;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{RouteConfig, SessionConfig, SiteConfig, StorageKeys};
pub use error::{Error, Result};
pub use guard::{Decision, NavigationGuard};
pub use routes::{Page, ROUTES, RouteEntry, resolve};
pub use session::{Expiry, SessionStatus, StoredSession};
pub use store::{KeyValueStore, MemoryStore};
