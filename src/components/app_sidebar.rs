use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ui::icons::{AudioWaveformIcon, FolderClosedIcon, HouseIcon, LogOutIcon};
use crate::components::ui::{use_sidebar, Separator};
use crate::models::User;
use crate::router::Route;
use crate::utils::cn;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum NavIcon {
    House,
    Folder,
}

#[derive(Clone, PartialEq, Debug)]
struct NavItem {
    title: &'static str,
    route: Route,
    icon: NavIcon,
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            title: "Dashboard",
            route: Route::Dashboard,
            icon: NavIcon::House,
        },
        NavItem {
            title: "Projects",
            route: Route::Projects,
            icon: NavIcon::Folder,
        },
    ]
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppSidebarProps {
    pub on_sign_out: Callback<()>,
}

#[function_component(AppSidebar)]
pub fn app_sidebar(props: &AppSidebarProps) -> Html {
    let sidebar = use_sidebar();
    let route = use_route::<Route>();

    // Following a link inside the mobile sheet dismisses it
    {
        let open_mobile = sidebar.open_mobile;
        let set_open_mobile = sidebar.set_open_mobile.clone();
        use_effect_with(route, move |_| {
            if open_mobile {
                set_open_mobile.emit(false);
            }
        });
    }

    let width = if sidebar.open { "w-64" } else { "w-14" };
    let on_dismiss = sidebar.set_open_mobile.reform(|_: MouseEvent| false);

    html! {
        <>
            <aside class={cn(["hidden md:flex shrink-0 flex-col border-r border-slate-200 bg-slate-50 transition-[width]", width])}>
                <SidebarBody open={sidebar.open} on_sign_out={props.on_sign_out.clone()} />
            </aside>
            if sidebar.open_mobile {
                <div class="fixed inset-0 z-50 md:hidden" data-mobile="true">
                    <div class="fixed inset-0 bg-black/80" onclick={on_dismiss} />
                    <aside class="fixed inset-y-0 left-0 flex w-64 flex-col border-r border-slate-200 bg-slate-50">
                        <SidebarBody open={true} on_sign_out={props.on_sign_out.clone()} />
                    </aside>
                </div>
            }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct SidebarBodyProps {
    open: bool,
    on_sign_out: Callback<()>,
}

#[function_component(SidebarBody)]
fn sidebar_body(props: &SidebarBodyProps) -> Html {
    html! {
        <>
            <div class="flex flex-col gap-2 p-2">
                <div class="flex w-full items-center gap-2 overflow-hidden rounded-md p-2 text-left text-sm">
                    <div class="flex aspect-square size-8 shrink-0 items-center justify-center rounded-lg bg-slate-900 text-slate-50">
                        <AudioWaveformIcon class="size-4" />
                    </div>
                    if props.open {
                        <span class="truncate font-semibold">{ "Defect Detect" }</span>
                    }
                </div>
            </div>
            <Separator />
            <div class="flex min-h-0 flex-1 flex-col gap-2 overflow-auto">
                <NavMain open={props.open} />
            </div>
            <div class="flex flex-col gap-2 p-2">
                <NavUser open={props.open} on_sign_out={props.on_sign_out.clone()} />
            </div>
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavMainProps {
    pub open: bool,
}

#[function_component(NavMain)]
pub fn nav_main(props: &NavMainProps) -> Html {
    let section = use_route::<Route>().map(|route| route.section());

    html! {
        <div class="relative flex w-full min-w-0 flex-col p-2">
            if props.open {
                <div class="flex h-8 shrink-0 items-center px-2 text-xs font-medium text-slate-500">{ "Platform" }</div>
            }
            <ul class="flex w-full min-w-0 flex-col gap-1">
                { for nav_items().into_iter().map(|item| {
                    let active = section.as_ref() == Some(&item.route);
                    let class = cn([
                        "flex w-full items-center gap-2 overflow-hidden rounded-md p-2 text-left text-sm hover:bg-slate-200 [&>svg]:size-4 [&>svg]:shrink-0",
                        if active { "bg-slate-200 font-medium text-slate-900" } else { "text-slate-700" },
                    ]);
                    let icon = match item.icon {
                        NavIcon::House => html! { <HouseIcon /> },
                        NavIcon::Folder => html! { <FolderClosedIcon /> },
                    };
                    html! {
                        <li title={item.title}>
                            <Link<Route> to={item.route} classes={classes!(class)}>
                                { icon }
                                if props.open {
                                    <span>{ item.title }</span>
                                }
                            </Link<Route>>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavUserProps {
    pub open: bool,
    pub on_sign_out: Callback<()>,
}

#[function_component(NavUser)]
pub fn nav_user(props: &NavUserProps) -> Html {
    let Some(user) = use_context::<Rc<User>>() else {
        return html! {};
    };
    let on_sign_out = props.on_sign_out.reform(|_: MouseEvent| ());

    let avatar = match &user.image {
        Some(src) if !src.is_empty() => html! {
            <img class="h-8 w-8 shrink-0 rounded-lg object-cover" src={src.clone()} alt={user.full_name()} />
        },
        _ => html! {
            <span class="flex h-8 w-8 shrink-0 items-center justify-center rounded-lg bg-slate-200 text-xs font-medium">
                { user.initials() }
            </span>
        },
    };

    html! {
        <div class="flex items-center gap-2 rounded-md p-2 text-sm">
            { avatar }
            if props.open {
                <div class="grid flex-1 text-left text-sm leading-tight">
                    <span class="truncate font-semibold">{ user.full_name() }</span>
                    <span class="truncate text-xs text-slate-500">{ user.email.clone() }</span>
                </div>
            }
            <button
                type="button"
                title="Sign out"
                class="rounded-md p-1 text-slate-500 hover:bg-slate-200 hover:text-slate-900 [&>svg]:size-4"
                onclick={on_sign_out}
            >
                <LogOutIcon />
                <span class="sr-only">{ "Sign out" }</span>
            </button>
        </div>
    }
}
