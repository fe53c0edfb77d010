use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ui::icons::SearchIcon;
use crate::components::ui::{Input, Label};
use crate::styles::{FOCUS_VISIBLE, SUBTLE_ICON_STROKE};
use crate::utils::cn;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    pub search_query: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };

    html! {
        <div class={cn(["relative w-72", props.class.as_str()])}>
            <Label html_for="search" class="sr-only">{ "Search" }</Label>
            <Input
                id="search"
                value={props.search_query.clone()}
                placeholder="Search for a project..."
                class={cn(["bg-white w-full pl-8 text-sm shadow-none dark:bg-slate-950", FOCUS_VISIBLE])}
                {oninput}
            />
            <SearchIcon class={cn([
                "pointer-events-none absolute left-2 top-1/2 size-4 -translate-y-1/2 select-none",
                SUBTLE_ICON_STROKE,
            ])} />
        </div>
    }
}
