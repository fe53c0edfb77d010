use yew::prelude::*;

use crate::components::ui::icons::AlertCircleIcon;
use crate::utils::cn;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AlertProps {
    #[prop_or_default]
    pub variant: AlertVariant,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let variant = match props.variant {
        AlertVariant::Default => "bg-white text-slate-950",
        AlertVariant::Destructive => "border-red-500/50 text-red-600 [&>svg]:stroke-red-600",
    };
    let class = cn([
        "relative w-full rounded-lg border px-4 py-3 text-sm [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg~*]:pl-7",
        variant,
        props.class.as_str(),
    ]);

    html! {
        <div role="alert" {class}>
            <AlertCircleIcon class="h-4 w-4" />
            <h5 class="mb-1 font-medium leading-none tracking-tight">{ props.title.clone() }</h5>
            if let Some(description) = &props.description {
                <div class="text-sm">{ description.clone() }</div>
            }
        </div>
    }
}
