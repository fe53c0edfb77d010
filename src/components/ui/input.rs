use yew::prelude::*;

use crate::styles::FOCUS_VISIBLE;
use crate::utils::cn;

#[derive(Properties, PartialEq, Clone)]
pub struct InputProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub accept: Option<AttrValue>,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub onchange: Callback<Event>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let class = cn([
        "flex h-9 w-full rounded-md border border-slate-200 bg-transparent px-3 py-1 text-base shadow-sm transition-colors file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-slate-500 disabled:cursor-not-allowed disabled:opacity-50 md:text-sm",
        FOCUS_VISIBLE,
        if props.invalid { "border-red-500" } else { "" },
        props.class.as_str(),
    ]);

    html! {
        <input
            id={props.id.clone()}
            type={props.input_type.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            accept={props.accept.clone()}
            autocomplete="off"
            aria-invalid={props.invalid.then_some("true")}
            {class}
            disabled={props.disabled}
            oninput={props.oninput.clone()}
            onchange={props.onchange.clone()}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LabelProps {
    #[prop_or_default]
    pub html_for: Option<AttrValue>,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Label)]
pub fn label(props: &LabelProps) -> Html {
    let class = cn(["text-sm font-medium leading-none", props.class.as_str()]);
    html! {
        <label for={props.html_for.clone()} {class}>{ props.children.clone() }</label>
    }
}
