use shared::models::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::AuthClient;
use crate::feedback::{use_feedback, Feedback, FeedbackKind};
use crate::loader::{load_dashboard, Settled};
use crate::routes::Route;
use crate::session::{LocalSessionStore, SessionStore};

/// What the dashboard currently shows.
#[derive(Debug, Clone, PartialEq)]
enum View {
    Loading,
    Ready { user: User, stale: bool },
    Failed,
}

/// Dashboard page component: drives the loader once on mount and renders
/// whatever it settles on.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let view = use_state(|| View::Loading);
    let feedback = use_feedback();
    let navigator = use_navigator();

    {
        let view = view.clone();
        let feedback = feedback.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = AuthClient::shared();
                match load_dashboard(&client, &LocalSessionStore).await {
                    Settled::Show {
                        user,
                        stale,
                        notice,
                    } => {
                        if let Some(message) = notice {
                            feedback.show(FeedbackKind::Error, message);
                        }
                        view.set(View::Ready { user, stale });
                    }
                    Settled::RedirectToLogin => {
                        if let Some(nav) = navigator {
                            nav.push(&Route::Login);
                        }
                    }
                    Settled::Unavailable { message } => {
                        feedback.show(FeedbackKind::Error, message);
                        view.set(View::Failed);
                    }
                }
            });
            || ()
        });
    }

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            LocalSessionStore.clear();
            if let Some(nav) = &navigator {
                nav.push(&Route::Home);
            }
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <Feedback message={feedback.current()} />
            {
                match &*view {
                    View::Loading => html! {
                        <div class="flex items-center justify-center h-full">
                            <span>{ "Loading your dashboard..." }</span>
                        </div>
                    },
                    View::Failed => html! {
                        <p>{ "Unable to load your profile." }</p>
                    },
                    View::Ready { user, stale } => html! {
                        <>
                            <div class="flex items-center justify-between">
                                <h1 class="text-2xl font-bold">
                                    { format!("Welcome, {}!", user.name) }
                                </h1>
                                <button class="btn btn-outline" onclick={on_logout}>
                                    { "Log out" }
                                </button>
                            </div>
                            if *stale {
                                <div class="badge badge-warning">
                                    { "Showing cached profile data" }
                                </div>
                            }
                            <div class="card bg-base-200 shadow-xl">
                                <div class="card-body">
                                    <h2 class="card-title">{ "Your profile" }</h2>
                                    <p>{ format!("ID: {}", user.id) }</p>
                                    <p>{ format!("Name: {}", user.name) }</p>
                                    <p>{ format!("Email: {}", user.email) }</p>
                                    <p>{
                                        format!(
                                            "Member since: {}",
                                            user.created_at
                                                .as_ref()
                                                .map(shared::models::Timestamp::long_form)
                                                .unwrap_or_default()
                                        )
                                    }</p>
                                </div>
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}
