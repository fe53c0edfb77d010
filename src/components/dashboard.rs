use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="p-4">{ "Dashboard" }</div>
    }
}
