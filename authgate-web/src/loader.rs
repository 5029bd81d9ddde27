//! Dashboard loading.
//!
//! The fetch result and the cached session are reconciled by a pure
//! function, and the outcome's store side effects are applied here over the
//! store seam, so the whole flow is testable without a DOM. The page
//! component only renders the settled result. An unauthorized signal is the
//! single condition that destroys a session outside explicit logout; every
//! other failure degrades to the cached profile when one exists, instead of
//! stranding the user on a loading indicator.

use shared::models::User;

use crate::api::{ApiError, ProfileApi};
use crate::session::{Session, SessionStore};

/// What the dashboard page should do after a fetch settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Render the authoritative profile and refresh the cached user.
    Fresh(User),
    /// Credential rejected: clear the store and redirect to login.
    SessionExpired,
    /// Transient failure with a cache available: render the cached profile,
    /// visibly marked stale, and leave the store unchanged.
    Degraded { user: User, message: String },
    /// Failure with nothing cached: show the error only.
    Failed { message: String },
}

/// Reconcile a settled dashboard fetch with the cached user, if any.
#[must_use]
pub fn reconcile(result: Result<User, ApiError>, cached_user: Option<User>) -> LoadOutcome {
    match result {
        Ok(user) => LoadOutcome::Fresh(user),
        Err(ApiError::Unauthorized) => LoadOutcome::SessionExpired,
        Err(err) => {
            let message = err.to_string();
            match cached_user {
                Some(user) => LoadOutcome::Degraded { user, message },
                None => LoadOutcome::Failed { message },
            }
        }
    }
}

/// What the page renders once a load has settled and its store side
/// effects have been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    /// Render this profile; `notice` carries a non-fatal message to show.
    Show {
        user: User,
        stale: bool,
        notice: Option<String>,
    },
    /// No usable session remains: leave for the login page.
    RedirectToLogin,
    /// Nothing to render: show the failure message only.
    Unavailable { message: String },
}

/// Apply an outcome's store side effects and map it to what the page
/// renders. `SessionExpired` is the only arm that empties the store.
pub fn apply<S: SessionStore>(outcome: LoadOutcome, token: String, store: &S) -> Settled {
    match outcome {
        LoadOutcome::Fresh(user) => {
            let refreshed = Session {
                token,
                user: user.clone(),
            };
            // A write failure here only affects the cache.
            let notice = store.save(&refreshed).err().map(|err| err.to_string());
            Settled::Show {
                user,
                stale: false,
                notice,
            }
        }
        LoadOutcome::SessionExpired => {
            store.clear();
            Settled::RedirectToLogin
        }
        LoadOutcome::Degraded { user, message } => Settled::Show {
            user,
            stale: true,
            notice: Some(message),
        },
        LoadOutcome::Failed { message } => Settled::Unavailable { message },
    }
}

/// Load the dashboard end to end: session check, profile fetch, reconcile,
/// apply. Without a loadable session nothing is fetched.
pub async fn load_dashboard<A, S>(api: &A, store: &S) -> Settled
where
    A: ProfileApi,
    S: SessionStore,
{
    // The route guard already turned away a signed-out visitor; this covers
    // direct entry with a half-present pair.
    let Some(session) = store.load() else {
        return Settled::RedirectToLogin;
    };

    let result = api
        .dashboard(&session.token)
        .await
        .map(|response| response.user);
    apply(reconcile(result, Some(session.user)), session.token, store)
}
