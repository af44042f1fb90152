//! Navigation guard for the admin area
//!
//! Runs before every route transition. Protected routes need a stored token
//! whose expiry has not passed; anything else clears the stored pair and
//! redirects to the login route. A visitor who already holds a live token is
//! sent from the login route straight to the dashboard.
//!
//! This is a convenience for the UI only. The values come from storage the
//! visitor controls, so the server must still authorize every admin request.

use crate::clock::Clock;
use crate::config::{SiteConfig, StorageKeys};
use crate::routes::{RouteEntry, normalize_path};
use crate::session::{self, SessionStatus};
use crate::store::KeyValueStore;
use tracing::{debug, warn};

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Continue to the requested route
    Proceed,
    /// Abort and navigate to this path instead
    Redirect(String),
}

pub struct NavigationGuard<S, C> {
    store: S,
    clock: C,
    keys: StorageKeys,
    login_path: String,
    dashboard_path: String,
}

impl<S: KeyValueStore, C: Clock> NavigationGuard<S, C> {
    pub fn new(store: S, clock: C, config: &SiteConfig) -> Self {
        Self {
            store,
            clock,
            keys: config.storage.clone(),
            login_path: config.login_path().to_string(),
            dashboard_path: config.dashboard_path().to_string(),
        }
    }

    /// Decide what happens to a navigation towards `to`
    pub fn evaluate(&self, to: &RouteEntry) -> Decision {
        let stored = session::read(&self.store, &self.keys);
        let now = self.clock.now_millis();

        if to.requires_auth {
            return match stored.status(now) {
                SessionStatus::Active { remaining_ms } => {
                    debug!(path = to.path, remaining_ms, "Admin session accepted");
                    Decision::Proceed
                }
                status => {
                    debug!(path = to.path, ?status, "Admin session rejected, redirecting to login");
                    if let Err(err) = session::clear(&self.store, &self.keys) {
                        warn!(error = %err, "Failed to clear admin session");
                    }
                    Decision::Redirect(self.login_path.clone())
                }
            };
        }

        if normalize_path(to.path) == self.login_path && stored.is_live(now) {
            debug!("Live admin session on login route, redirecting to dashboard");
            return Decision::Redirect(self.dashboard_path.clone());
        }

        Decision::Proceed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn clock(&self) -> &C {
        &self.clock
    }
}
