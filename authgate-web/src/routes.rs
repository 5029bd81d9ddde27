use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::{route_guard, GuardAction, PageAccessClass};
use crate::pages::{DashboardPage, HomePage, LoginPage, NotFoundPage, SignupPage};
use crate::session::{LocalSessionStore, SessionStore};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Access class of the page behind this route, computed once per load
    /// and handed to the guard as a value.
    #[must_use]
    pub fn access_class(&self) -> PageAccessClass {
        match self {
            Self::Home | Self::NotFound => PageAccessClass::Public,
            Self::Login | Self::Signup => PageAccessClass::AuthOnly,
            Self::Dashboard => PageAccessClass::SessionRequired,
        }
    }
}

/// Switch function for the application routes. The guard runs first on
/// every page load; only an allowed route mounts its page component.
pub fn switch(route: Route) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());

    let has_session = LocalSessionStore.has_session();
    match route_guard(has_session, route.access_class()) {
        GuardAction::RedirectToDashboard => {
            return html! { <Redirect<Route> to={Route::Dashboard} /> };
        }
        GuardAction::RedirectToLogin => {
            return html! { <Redirect<Route> to={Route::Login} /> };
        }
        GuardAction::Allow => {}
    }

    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
