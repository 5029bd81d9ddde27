use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::AuthClient;
use crate::feedback::{use_feedback, Feedback, FeedbackKind};
use crate::routes::Route;
use crate::session::LocalSessionStore;
use crate::submit::{run_submission, Credentials, FormKind, SubmitState};

const KIND: FormKind = FormKind::Login;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submit_state = use_state(SubmitState::default);
    let feedback = use_feedback();
    let redirect_timer = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let state_handle = submit_state.clone();
        let feedback = feedback.clone();
        let redirect_timer = redirect_timer.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            // The controller decides whether navigation happens.
            event.prevent_default();
            if state_handle.locks_form() {
                return;
            }
            let credentials = Credentials {
                name: None,
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
            };
            let state_handle = state_handle.clone();
            let feedback = feedback.clone();
            let redirect_timer = redirect_timer.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = AuthClient::shared();
                let store = LocalSessionStore;
                let observer = state_handle.clone();
                let result = run_submission(KIND, credentials, &client, &store, move |state| {
                    observer.set(state);
                })
                .await;
                match result {
                    Ok(_session) => {
                        feedback.show(FeedbackKind::Success, KIND.success_message());
                        let navigator = navigator.clone();
                        let redirect = Timeout::new(KIND.grace_delay_ms(), move || {
                            if let Some(nav) = navigator {
                                nav.push(&Route::Dashboard);
                            }
                        });
                        *redirect_timer.borrow_mut() = Some(redirect);
                    }
                    Err(err) => {
                        feedback.show(FeedbackKind::Error, err.user_message(KIND));
                        state_handle.set(SubmitState::Idle);
                    }
                }
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = submit_state.is_busy();
    let disable_submit = (*email).is_empty() || (*password).is_empty() || submit_state.locks_form();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{ "Log in" }</h2>
                    <Feedback message={feedback.current()} />
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{ "Email" }</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ "Password" }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { KIND.busy_label() } else { KIND.submit_label() } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
