//! Form submission controller for signup and login.
//!
//! The machine is an explicit enum rather than a bundle of UI flags, so the
//! whole flow is unit-testable without a DOM: validation strictly precedes
//! the network call, which strictly precedes session persistence, which
//! strictly precedes navigation.

use shared::models::{LoginRequest, SignupRequest};
use shared::password::{self, PasswordRule};

use crate::api::{ApiError, AuthApi};
use crate::session::{Session, SessionStore, SessionStoreError};

/// Which form is submitting. Labels and delays differ per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Signup,
    Login,
}

impl FormKind {
    /// The submit control's resting label.
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Signup => "Sign up",
            Self::Login => "Log in",
        }
    }

    /// The submit control's label while a submission is in flight.
    #[must_use]
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Signup => "Creating account...",
            Self::Login => "Logging in...",
        }
    }

    /// Success message shown before navigating away.
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Signup => "Account created successfully! Redirecting...",
            Self::Login => "Login successful! Redirecting...",
        }
    }

    /// Generic failure message when the server supplied no reason.
    #[must_use]
    pub fn fallback_error(self) -> &'static str {
        match self {
            Self::Signup => "Signup failed. Please try again.",
            Self::Login => "Login failed. Please check your credentials.",
        }
    }

    /// UX grace period between success and navigation to the dashboard.
    /// Not a retry or confirmation wait.
    #[must_use]
    pub fn grace_delay_ms(self) -> u32 {
        match self {
            Self::Signup => 2_000,
            Self::Login => 1_000,
        }
    }
}

/// State of one submission attempt. Terminal states hand back to `Idle`:
/// `Succeeded` navigates away, `Failed` re-enables the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitState {
    /// Whether a submission is currently in flight. Drives the busy label.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    /// Whether a new submission may not start. In-flight states block it,
    /// and so does `Succeeded`: the form stays locked through the grace
    /// delay so a second attempt cannot race the pending redirect. The
    /// disabled control is advisory UI state, not a lock: a second rapid
    /// submit that lands before the control disables is an accepted edge
    /// case.
    #[must_use]
    pub fn locks_form(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting | Self::Succeeded)
    }
}

/// Collected form fields for one submission attempt. Transient: exists only
/// for the duration of the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Display name; collected by the signup form only.
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Why a submission failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Client-side password policy not met. Never reaches the network.
    Validation(Vec<PasswordRule>),
    /// The API call failed or returned a malformed success.
    Api(ApiError),
    /// The session could not be persisted.
    Store(SessionStoreError),
}

impl SubmitError {
    /// The plain-text message shown in the form's feedback region.
    #[must_use]
    pub fn user_message(&self, kind: FormKind) -> String {
        match self {
            Self::Validation(unmet) => {
                let requirements = unmet
                    .iter()
                    .map(|rule| rule.description())
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("Password does not meet all requirements: {requirements}")
            }
            // Prefer the server-supplied reason; everything else gets the
            // generic per-form fallback.
            Self::Api(ApiError::RequestFailed { message, .. }) => message.clone(),
            Self::Api(ApiError::Timeout) => "The request timed out. Please try again.".to_string(),
            Self::Api(_) => kind.fallback_error().to_string(),
            Self::Store(err) => err.to_string(),
        }
    }
}

/// Drive one submission attempt through the state machine.
///
/// `on_state` observes every transition, in order:
/// `Validating`, then either `Failed` (signup policy violation, no network
/// call) or `Submitting` followed by `Succeeded`/`Failed`. On success the
/// session has been persisted before this returns; navigation is the
/// caller's last step, after the grace delay.
///
/// No automatic retry on any failure.
pub async fn run_submission<A, S, F>(
    kind: FormKind,
    credentials: Credentials,
    api: &A,
    store: &S,
    mut on_state: F,
) -> Result<Session, SubmitError>
where
    A: AuthApi,
    S: SessionStore,
    F: FnMut(SubmitState),
{
    on_state(SubmitState::Validating);

    if kind == FormKind::Signup {
        let assessment = password::assess(&credentials.password);
        if !assessment.all_met() {
            on_state(SubmitState::Failed);
            return Err(SubmitError::Validation(assessment.unmet()));
        }
    }

    on_state(SubmitState::Submitting);

    let result = match kind {
        FormKind::Signup => {
            let payload = SignupRequest {
                name: credentials.name.unwrap_or_default(),
                email: credentials.email,
                password: credentials.password,
            };
            api.signup(&payload).await
        }
        FormKind::Login => {
            let payload = LoginRequest {
                email: credentials.email,
                password: credentials.password,
            };
            api.login(&payload).await
        }
    };

    let response = match result {
        Ok(response) => response,
        Err(err) => {
            on_state(SubmitState::Failed);
            return Err(SubmitError::Api(err));
        }
    };

    let session = Session {
        token: response.token,
        user: response.user,
    };
    if let Err(err) = store.save(&session) {
        on_state(SubmitState::Failed);
        return Err(SubmitError::Store(err));
    }

    on_state(SubmitState::Succeeded);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use shared::models::{AuthResponse, User};
    use std::cell::{Cell, RefCell};

    struct MockApi {
        response: RefCell<Option<Result<AuthResponse, ApiError>>>,
        calls: Cell<usize>,
    }

    impl MockApi {
        fn returning(response: Result<AuthResponse, ApiError>) -> Self {
            Self {
                response: RefCell::new(Some(response)),
                calls: Cell::new(0),
            }
        }

        fn unreachable() -> Self {
            Self {
                response: RefCell::new(None),
                calls: Cell::new(0),
            }
        }

        fn take(&self) -> Result<AuthResponse, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.response
                .borrow_mut()
                .take()
                .expect("no response programmed")
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for MockApi {
        async fn signup(&self, _payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
            self.take()
        }

        async fn login(&self, _payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
            self.take()
        }
    }

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: None,
        }
    }

    fn ok_response() -> AuthResponse {
        AuthResponse {
            token: "tok-1".to_string(),
            user: sample_user(),
        }
    }

    fn signup_credentials(password: &str) -> Credentials {
        Credentials {
            name: Some("Ada".to_string()),
            email: "ada@example.com".to_string(),
            password: password.to_string(),
        }
    }

    fn login_credentials() -> Credentials {
        Credentials {
            name: None,
            email: "ada@example.com".to_string(),
            password: "Abc@1234".to_string(),
        }
    }

    /// Tests that a weak signup password fails validation with no network call
    #[test]
    fn test_signup_blocked_by_policy() {
        let api = MockApi::unreachable();
        let store = MemorySessionStore::default();
        let mut states = Vec::new();

        let result = block_on(run_submission(
            FormKind::Signup,
            signup_credentials("Abc12345"),
            &api,
            &store,
            |state| states.push(state),
        ));

        let err = result.unwrap_err();
        match &err {
            SubmitError::Validation(unmet) => assert_eq!(unmet, &[PasswordRule::Symbol]),
            other => panic!("expected a validation failure, got {other:?}"),
        }
        assert_eq!(states, vec![SubmitState::Validating, SubmitState::Failed]);
        assert_eq!(api.calls.get(), 0, "validation failure must not hit the network");
        assert_eq!(store.load(), None);
        assert!(err
            .user_message(FormKind::Signup)
            .contains("special symbol"));
    }

    /// Tests the full success path: ordered states and a persisted session
    #[test]
    fn test_signup_success_persists_session() {
        let api = MockApi::returning(Ok(ok_response()));
        let store = MemorySessionStore::default();
        let mut states = Vec::new();

        let session = block_on(run_submission(
            FormKind::Signup,
            signup_credentials("Abc@1234"),
            &api,
            &store,
            |state| states.push(state),
        ))
        .unwrap();

        assert_eq!(
            states,
            vec![
                SubmitState::Validating,
                SubmitState::Submitting,
                SubmitState::Succeeded
            ]
        );
        assert_eq!(session.token, "tok-1");
        assert_eq!(store.load(), Some(session));
    }

    /// Tests that a network failure ends in Failed with no session written
    #[test]
    fn test_network_failure_writes_no_session() {
        let api = MockApi::returning(Err(ApiError::Network("connection refused".to_string())));
        let store = MemorySessionStore::default();
        let mut states = Vec::new();

        let result = block_on(run_submission(
            FormKind::Signup,
            signup_credentials("Abc@1234"),
            &api,
            &store,
            |state| states.push(state),
        ));

        let err = result.unwrap_err();
        assert_eq!(
            states,
            vec![
                SubmitState::Validating,
                SubmitState::Submitting,
                SubmitState::Failed
            ]
        );
        assert_eq!(store.load(), None);
        assert_eq!(
            err.user_message(FormKind::Signup),
            "Signup failed. Please try again."
        );
    }

    /// Tests that the server-supplied reason is preferred in failure messages
    #[test]
    fn test_server_reason_preferred() {
        let api = MockApi::returning(Err(ApiError::RequestFailed {
            status: 409,
            message: "Email already registered".to_string(),
        }));
        let store = MemorySessionStore::default();

        let err = block_on(run_submission(
            FormKind::Signup,
            signup_credentials("Abc@1234"),
            &api,
            &store,
            |_| {},
        ))
        .unwrap_err();

        assert_eq!(
            err.user_message(FormKind::Signup),
            "Email already registered"
        );
    }

    /// Tests that login skips the password policy entirely
    #[test]
    fn test_login_does_not_validate_policy() {
        let api = MockApi::returning(Ok(ok_response()));
        let store = MemorySessionStore::default();

        let credentials = Credentials {
            password: "short".to_string(),
            ..login_credentials()
        };
        let result = block_on(run_submission(
            FormKind::Login,
            credentials,
            &api,
            &store,
            |_| {},
        ));

        assert!(result.is_ok());
        assert_eq!(api.calls.get(), 1);
    }

    /// Tests the login fallback message for a malformed success response
    #[test]
    fn test_malformed_response_uses_login_fallback() {
        let api = MockApi::returning(Err(ApiError::Malformed));
        let store = MemorySessionStore::default();

        let err = block_on(run_submission(
            FormKind::Login,
            login_credentials(),
            &api,
            &store,
            |_| {},
        ))
        .unwrap_err();

        assert_eq!(
            err.user_message(FormKind::Login),
            "Login failed. Please check your credentials."
        );
        assert_eq!(store.load(), None);
    }

    /// Tests that an unavailable store surfaces as a Failed submission
    #[test]
    fn test_store_failure_is_surfaced() {
        let api = MockApi::returning(Ok(ok_response()));
        let store = MemorySessionStore::default();
        store.set_unavailable(true);
        let mut states = Vec::new();

        let err = block_on(run_submission(
            FormKind::Login,
            login_credentials(),
            &api,
            &store,
            |state| states.push(state),
        ))
        .unwrap_err();

        assert!(matches!(err, SubmitError::Store(_)));
        assert_eq!(*states.last().unwrap(), SubmitState::Failed);
        assert_eq!(store.load(), None);
    }

    /// Tests the timeout failure message
    #[test]
    fn test_timeout_message() {
        let err = SubmitError::Api(ApiError::Timeout);
        assert_eq!(
            err.user_message(FormKind::Login),
            "The request timed out. Please try again."
        );
    }

    /// Tests per-form labels and delays
    #[test]
    fn test_form_kind_texts() {
        assert_eq!(FormKind::Signup.busy_label(), "Creating account...");
        assert_eq!(FormKind::Login.busy_label(), "Logging in...");
        assert_eq!(FormKind::Signup.grace_delay_ms(), 2_000);
        assert_eq!(FormKind::Login.grace_delay_ms(), 1_000);
        assert!(SubmitState::Submitting.is_busy());
        assert!(SubmitState::Validating.is_busy());
        assert!(!SubmitState::Idle.is_busy());
        assert!(!SubmitState::Failed.is_busy());
    }

    /// Tests that the form stays locked through the post-success grace delay
    #[test]
    fn test_succeeded_keeps_form_locked() {
        assert!(SubmitState::Validating.locks_form());
        assert!(SubmitState::Submitting.locks_form());
        assert!(SubmitState::Succeeded.locks_form());
        assert!(!SubmitState::Succeeded.is_busy());
        assert!(!SubmitState::Idle.locks_form());
        assert!(!SubmitState::Failed.locks_form());
    }
}
