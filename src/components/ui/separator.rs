use yew::prelude::*;

use crate::utils::cn;

#[derive(Properties, PartialEq, Clone)]
pub struct SeparatorProps {
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(Separator)]
pub fn separator(props: &SeparatorProps) -> Html {
    html! {
        <div role="none" class={cn(["shrink-0 bg-slate-200 h-[1px] w-full", props.class.as_str()])} />
    }
}
