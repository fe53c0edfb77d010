use yew::prelude::*;

use crate::components::ui::icons::CloseIcon;
use crate::utils::cn;

const OVERLAY: &str = "fixed inset-0 z-50 bg-black/80";
const CONTENT: &str = "fixed left-1/2 top-1/2 z-50 grid w-full max-w-lg -translate-x-1/2 -translate-y-1/2 gap-4 border bg-white p-6 shadow-lg sm:rounded-lg";

#[derive(Properties, PartialEq, Clone)]
pub struct DialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Ignore overlay clicks, Escape and the close button (e.g. mid-submit)
    #[prop_or_default]
    pub disable_close: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let request_close = {
        let on_close = props.on_close.clone();
        let disabled = props.disable_close;
        Callback::from(move |_: ()| {
            if !disabled {
                on_close.emit(());
            }
        })
    };
    let on_overlay = request_close.reform(|_: MouseEvent| ());
    let on_close_button = request_close.reform(|_: MouseEvent| ());
    let on_keydown = {
        let request_close = request_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                request_close.emit(());
            }
        })
    };

    html! {
        <div onkeydown={on_keydown}>
            <div class={OVERLAY} onclick={on_overlay} />
            <div role="dialog" aria-modal="true" tabindex="-1" class={cn([CONTENT, props.class.as_str()])}>
                <div class="flex flex-col space-y-1.5 text-center sm:text-left">
                    <h2 class="text-lg font-semibold leading-none tracking-tight">{ props.title.clone() }</h2>
                </div>
                { props.children.clone() }
                <button
                    type="button"
                    class="absolute right-4 top-4 rounded-sm opacity-70 transition-opacity hover:opacity-100 disabled:pointer-events-none"
                    disabled={props.disable_close}
                    onclick={on_close_button}
                >
                    <CloseIcon class="h-4 w-4" />
                    <span class="sr-only">{ "Close" }</span>
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AlertDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub description: Html,
    #[prop_or_default]
    pub class: AttrValue,
    /// Action buttons
    #[prop_or_default]
    pub children: Html,
}

/// Confirmation dialog. Only its own buttons close it.
#[function_component(AlertDialog)]
pub fn alert_dialog(props: &AlertDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div>
            <div class={OVERLAY} />
            <div role="alertdialog" aria-modal="true" class={cn([CONTENT, props.class.as_str()])}>
                <div class="flex flex-col space-y-2 text-center sm:text-left">
                    <h2 class="text-lg font-semibold">{ props.title.clone() }</h2>
                    <p class="text-sm text-slate-500">{ props.description.clone() }</p>
                </div>
                <div class="flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}
