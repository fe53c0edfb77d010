use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ui::icons::{ChevronRightIcon, PanelLeftIcon};
use crate::components::ui::{use_sidebar, Button, ButtonSize, ButtonVariant, Separator};
use crate::hooks::use_page_label;
use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let sidebar = use_sidebar();
    let on_toggle = sidebar.toggle.reform(|_: MouseEvent| ());
    let on_toggle_mobile = {
        let open_mobile = sidebar.open_mobile;
        sidebar.set_open_mobile.reform(move |_: MouseEvent| !open_mobile)
    };

    html! {
        <header class="flex h-16 shrink-0 items-center gap-2 border-b border-slate-200 px-4">
            <Button variant={ButtonVariant::Ghost} size={ButtonSize::Icon} class="-ml-1 h-7 w-7 md:hidden" onclick={on_toggle_mobile}>
                <PanelLeftIcon />
                <span class="sr-only">{ "Open Sidebar" }</span>
            </Button>
            <Button variant={ButtonVariant::Ghost} size={ButtonSize::Icon} class="-ml-1 hidden h-7 w-7 md:inline-flex" onclick={on_toggle}>
                <PanelLeftIcon />
                <span class="sr-only">{ "Toggle Sidebar" }</span>
            </Button>
            <Separator class="mr-2 h-4 w-[1px]" />
            <AppBreadcrumb />
        </header>
    }
}

#[function_component(AppBreadcrumb)]
pub fn app_breadcrumb() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let page_label = use_page_label().and_then(|ctx| ctx.label);

    let mut crumbs = route.breadcrumbs(page_label.as_deref());
    let Some(last) = crumbs.pop() else {
        return html! {};
    };

    html! {
        <nav aria-label="breadcrumb">
            <ol class="flex flex-wrap items-center gap-1.5 break-words text-sm text-slate-500 sm:gap-2.5">
                { for crumbs.into_iter().map(|crumb| html! {
                    <>
                        <li class="hidden items-center gap-1.5 md:inline-flex">
                            <Link<Route> to={crumb.route} classes="transition-colors hover:text-slate-950">
                                { crumb.label.clone() }
                            </Link<Route>>
                        </li>
                        <li role="presentation" aria-hidden="true" class="hidden md:block [&>svg]:size-3.5">
                            <ChevronRightIcon />
                        </li>
                    </>
                }) }
                <li class="inline-flex items-center gap-1.5">
                    <span role="link" aria-disabled="true" aria-current="page" class="font-normal text-slate-950">
                        { last.label }
                    </span>
                </li>
            </ol>
        </nav>
    }
}
