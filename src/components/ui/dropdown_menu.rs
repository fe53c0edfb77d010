use yew::prelude::*;

use crate::utils::cn;

#[derive(Properties, PartialEq, Clone)]
pub struct DropdownMenuProps {
    /// Content of the toggle button
    pub trigger: Html,
    #[prop_or_default]
    pub class: AttrValue,
    /// Menu items; any click inside closes the menu
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DropdownMenu)]
pub fn dropdown_menu(props: &DropdownMenuProps) -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <div class="relative z-10">
            <button
                type="button"
                aria-haspopup="menu"
                aria-expanded={(*open).to_string()}
                class="inline-flex h-7 w-7 items-center justify-center rounded-md hover:bg-slate-100"
                onclick={toggle}
            >
                { props.trigger.clone() }
            </button>
            if *open {
                <>
                    <div class="fixed inset-0 z-40" onclick={close.clone()} />
                    <div
                        role="menu"
                        class={cn([
                            "absolute right-0 z-50 mt-1 min-w-[8rem] rounded-md border bg-white shadow-md",
                            props.class.as_str(),
                        ])}
                        onclick={close}
                    >
                        { props.children.clone() }
                    </div>
                </>
            }
        </div>
    }
}
