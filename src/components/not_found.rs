use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center gap-2 p-10 text-center">
            <h1 class="text-lg font-semibold">{ "Page not found" }</h1>
            <Link<Route> to={Route::Dashboard} classes="text-sm underline">{ "Back to dashboard" }</Link<Route>>
        </div>
    }
}
