use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::{LocalSessionStore, SessionStore};

/// Public landing page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let has_session = LocalSessionStore.has_session();

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-base-200 space-y-6">
            <h1 class="text-3xl font-bold">{ "Authgate" }</h1>
            <p>{ "Sign in to view your dashboard." }</p>
            <div class="flex gap-4">
                if has_session {
                    <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                        { "Go to dashboard" }
                    </Link<Route>>
                } else {
                    <Link<Route> to={Route::Login} classes="btn btn-primary">
                        { "Log in" }
                    </Link<Route>>
                    <Link<Route> to={Route::Signup} classes="btn btn-secondary">
                        { "Sign up" }
                    </Link<Route>>
                }
            </div>
        </div>
    }
}
