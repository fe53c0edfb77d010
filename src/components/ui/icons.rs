// Lucide icons used by the app, inlined as SVG

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IconProps {
    #[prop_or_default]
    pub class: AttrValue,
}

fn lucide(class: &AttrValue, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class={class.clone()}
        >
            { body }
        </svg>
    }
}

#[function_component(PlusIcon)]
pub fn plus_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! { <><path d="M5 12h14" /><path d="M12 5v14" /></> })
}

#[function_component(LoaderIcon)]
pub fn loader_icon(props: &IconProps) -> Html {
    let class = AttrValue::from(format!("animate-spin {}", props.class));
    lucide(&class, html! { <path d="M21 12a9 9 0 1 1-6.219-8.56" /> })
}

#[function_component(AlertCircleIcon)]
pub fn alert_circle_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! {
        <>
            <circle cx="12" cy="12" r="10" />
            <line x1="12" x2="12" y1="8" y2="12" />
            <line x1="12" x2="12.01" y1="16" y2="16" />
        </>
    })
}

#[function_component(SearchIcon)]
pub fn search_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! { <><circle cx="11" cy="11" r="8" /><path d="m21 21-4.3-4.3" /></> })
}

#[function_component(EllipsisIcon)]
pub fn ellipsis_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! {
        <>
            <circle cx="12" cy="12" r="1" />
            <circle cx="19" cy="12" r="1" />
            <circle cx="5" cy="12" r="1" />
        </>
    })
}

#[function_component(TrashIcon)]
pub fn trash_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! {
        <>
            <path d="M3 6h18" />
            <path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" />
            <path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" />
        </>
    })
}

#[function_component(HouseIcon)]
pub fn house_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! {
        <>
            <path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" />
            <path d="M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
        </>
    })
}

#[function_component(FolderClosedIcon)]
pub fn folder_closed_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! {
        <>
            <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" />
            <path d="M2 10h20" />
        </>
    })
}

#[function_component(AudioWaveformIcon)]
pub fn audio_waveform_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! {
        <path d="M2 13a2 2 0 0 0 2-2V7a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0V4a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0v-4a2 2 0 0 1 2-2" />
    })
}

#[function_component(PanelLeftIcon)]
pub fn panel_left_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! { <><rect width="18" height="18" x="3" y="3" rx="2" /><path d="M9 3v18" /></> })
}

#[function_component(LogOutIcon)]
pub fn log_out_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! {
        <>
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
            <polyline points="16 17 21 12 16 7" />
            <line x1="21" x2="9" y1="12" y2="12" />
        </>
    })
}

#[function_component(ChevronRightIcon)]
pub fn chevron_right_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! { <path d="m9 18 6-6-6-6" /> })
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    lucide(&props.class, html! { <><path d="M18 6 6 18" /><path d="m6 6 12 12" /></> })
}
