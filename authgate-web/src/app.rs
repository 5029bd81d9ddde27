use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{switch, Route};

/// Application root: hosts the router and hands every page load to the
/// route switch, where the guard runs before anything else.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
