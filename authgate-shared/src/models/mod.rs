pub mod auth;
pub mod timestamp;
pub mod user;

pub use auth::{AuthResponse, DashboardResponse, ErrorBody, LoginRequest, SignupRequest};
pub use timestamp::Timestamp;
pub use user::User;
