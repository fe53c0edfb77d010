use yew::prelude::*;

use crate::services::constants::{cookie_keys, SIDEBAR_COOKIE_MAX_AGE_SECS};
use crate::services::CookieService;

#[derive(Clone, PartialEq)]
pub struct SidebarContext {
    /// Desktop rail expanded or collapsed
    pub open: bool,
    pub toggle: Callback<()>,
    /// Overlay sheet shown below the `md` breakpoint
    pub open_mobile: bool,
    pub set_open_mobile: Callback<bool>,
}

/// Expanded unless the cookie explicitly says otherwise
pub fn sidebar_open_from_cookie(value: Option<&str>) -> bool {
    value != Some("false")
}

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SidebarProvider)]
pub fn sidebar_provider(props: &SidebarProviderProps) -> Html {
    let open = use_state(|| {
        sidebar_open_from_cookie(CookieService::get(cookie_keys::SIDEBAR_STATE).as_deref())
    });

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: ()| {
            let next = !*open;
            if let Err(e) = CookieService::set(
                cookie_keys::SIDEBAR_STATE,
                &next.to_string(),
                Some(SIDEBAR_COOKIE_MAX_AGE_SECS),
            ) {
                log::error!("❌ {}", e);
            }
            open.set(next);
        })
    };

    let open_mobile = use_state(|| false);
    let set_open_mobile = {
        let open_mobile = open_mobile.clone();
        Callback::from(move |next: bool| {
            if *open_mobile != next {
                open_mobile.set(next);
            }
        })
    };

    let context = SidebarContext {
        open: *open,
        toggle,
        open_mobile: *open_mobile,
        set_open_mobile,
    };
    let state = if *open { "expanded" } else { "collapsed" };

    html! {
        <ContextProvider<SidebarContext> {context}>
            <div class="group/sidebar-wrapper flex min-h-svh w-full" data-state={state}>
                { props.children.clone() }
            </div>
        </ContextProvider<SidebarContext>>
    }
}

#[hook]
pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>().unwrap_or_else(|| SidebarContext {
        open: true,
        toggle: Callback::default(),
        open_mobile: false,
        set_open_mobile: Callback::default(),
    })
}
