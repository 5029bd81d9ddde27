//! Per-page-load access check.
//!
//! Runs once per page load, before any other controller observes session
//! state. The decision is a pure function of session presence and the page's
//! access class, which the router computes and passes in as a value. This is
//! a UX guard only; real access control lives in the API behind the token.

/// Access class of the current page, computed per load from the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccessClass {
    /// Anyone may view (home, not-found).
    Public,
    /// Only signed-out visitors belong here (login, signup).
    AuthOnly,
    /// A session is required (dashboard).
    SessionRequired,
}

/// What the guard decided for this page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    /// Proceed; the page's own controller takes over.
    Allow,
    /// Signed-in visitor on an auth page: send them to the dashboard.
    RedirectToDashboard,
    /// Signed-out visitor on a session-required page: send them to login.
    RedirectToLogin,
}

/// The guard's decision table.
#[must_use]
pub fn route_guard(has_session: bool, class: PageAccessClass) -> GuardAction {
    match (has_session, class) {
        (true, PageAccessClass::AuthOnly) => GuardAction::RedirectToDashboard,
        (false, PageAccessClass::SessionRequired) => GuardAction::RedirectToLogin,
        _ => GuardAction::Allow,
    }
}
