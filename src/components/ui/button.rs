use yew::prelude::*;

use crate::styles::FOCUS_VISIBLE;
use crate::utils::cn;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-slate-900 text-slate-50 hover:bg-slate-900/90",
            Self::Destructive => "bg-red-600 text-slate-50 hover:bg-red-600/90",
            Self::Outline => "border border-slate-200 bg-white hover:bg-slate-100",
            Self::Ghost => "hover:bg-slate-100 hover:text-slate-900",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2",
            Self::Icon => "h-9 w-9",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: AttrValue,
    /// Renders `type="submit"` instead of `type="button"`
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = cn([
        "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 [&_svg]:size-4 [&_svg]:shrink-0",
        FOCUS_VISIBLE,
        props.variant.classes(),
        props.size.classes(),
        props.class.as_str(),
    ]);

    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            {class}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </button>
    }
}
