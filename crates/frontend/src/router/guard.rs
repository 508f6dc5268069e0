//! Navigation guard run before a route renders.
//!
//! This is a UX guard: it keeps signed-out users off protected views and
//! signed-in users off the login form. The API still validates every token.

use super::Route;
use crate::auth::store::{valid_token, TokenStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Decide whether navigation to `to` may proceed.
///
/// `token` must already have passed the expiry check.
pub fn before_each(to: &Route, token: Option<&str>) -> GuardDecision {
    if let Some(target) = to.redirect() {
        return GuardDecision::Redirect(target);
    }

    let authenticated = token.is_some();
    if to.requires_auth() && !authenticated {
        GuardDecision::Redirect(Route::Login)
    } else if *to == Route::Login && authenticated {
        GuardDecision::Redirect(Route::Dashboard)
    } else {
        GuardDecision::Allow
    }
}

/// Run the expiry check against `store`, then the guard.
pub fn guard_with_store(to: &Route, store: &dyn TokenStore, now: i64) -> GuardDecision {
    let token = valid_token(store, now);
    let decision = before_each(to, token.as_deref());
    if let GuardDecision::Redirect(target) = decision {
        tracing::debug!(from = ?to, to = ?target, "Navigation redirected");
    }
    decision
}
