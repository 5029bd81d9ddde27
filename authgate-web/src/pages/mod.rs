mod dashboard;
mod home;
pub mod login;
mod not_found;
pub mod signup;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
