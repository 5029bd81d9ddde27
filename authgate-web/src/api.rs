use async_trait::async_trait;
use futures::future::{self, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{AuthResponse, DashboardResponse, ErrorBody, LoginRequest, SignupRequest};
use thiserror::Error;

use crate::config::FrontendConfig;

/// Client-side deadline on every request; a hung request must resolve to a
/// failure instead of leaving a form submitting forever.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

thread_local! {
    static SHARED_CLIENT: OnceCell<AuthClient> = OnceCell::new();
}

/// Failure modes of a call to the authentication API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success response carrying a server-supplied reason.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Explicit invalid/expired-credential signal on a session-bearing call.
    #[error("session is no longer valid")]
    Unauthorized,

    /// The call itself could not complete.
    #[error("unable to reach the server: {0}")]
    Network(String),

    /// The client-side deadline expired before a response arrived.
    #[error("the request timed out")]
    Timeout,

    /// Success status but the body was missing expected fields.
    #[error("the server response was malformed")]
    Malformed,
}

/// Lightweight client for the remote authentication API.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    /// Create a new client against the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-page shared client, built from the frontend configuration.
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST {base}/signup` with the collected credentials.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let request = self.client.post(self.api_url("signup")).json(payload);
        let response = send_with_deadline(request).await?;
        decode_response(response).await
    }

    /// `POST {base}/login` with the collected credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let request = self.client.post(self.api_url("login")).json(payload);
        let response = send_with_deadline(request).await?;
        decode_response(response).await
    }

    /// `GET {base}/dashboard` asserting identity with the bearer token.
    pub async fn dashboard(&self, token: &str) -> Result<DashboardResponse, ApiError> {
        let request = self
            .client
            .get(self.api_url("dashboard"))
            .header("Authorization", format!("Bearer {token}"));
        let response = send_with_deadline(request).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        decode_response(response).await
    }
}

/// Send a request, racing it against the client-side deadline.
async fn send_with_deadline(request: RequestBuilder) -> Result<Response, ApiError> {
    let send = request.send();
    pin_mut!(send);
    let deadline = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(deadline);

    match future::select(send, deadline).await {
        Either::Left((result, _)) => {
            result.map_err(|err| ApiError::Network(err.to_string()))
        }
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Decode a success body, or extract the server-supplied reason.
async fn decode_response<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        // A success status with missing fields is malformed, not a success.
        response.json::<T>().await.map_err(|_| ApiError::Malformed)
    } else {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(ErrorBody::into_message)
            .unwrap_or_else(|_| format!("Request failed with status {}", status.as_u16()));
        Err(ApiError::RequestFailed {
            status: status.as_u16(),
            message,
        })
    }
}

/// Seam over the API used by the form submission controller, so the state
/// machine is unit-testable without a network.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError>;
    async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for AuthClient {
    async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
        Self::signup(self, payload).await
    }

    async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        Self::login(self, payload).await
    }
}

/// Seam over the profile fetch used by the dashboard loader.
#[async_trait(?Send)]
pub trait ProfileApi {
    async fn dashboard(&self, token: &str) -> Result<DashboardResponse, ApiError>;
}

#[async_trait(?Send)]
impl ProfileApi for AuthClient {
    async fn dashboard(&self, token: &str) -> Result<DashboardResponse, ApiError> {
        Self::dashboard(self, token).await
    }
}
