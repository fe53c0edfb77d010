// ============================================================================
// LAYOUT - session shell (sidebar + header + routed page)
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::header::Header;
use crate::components::ui::SidebarProvider;
use crate::error::LoaderError;
use crate::hooks::{use_loader, LoaderState, PageLabel};
use crate::loaders::{load_layout, sign_out};
use crate::models::User;
use crate::router::{switch, Route};

#[function_component(Layout)]
pub fn layout() -> Html {
    let loader = use_loader((), |args, _| load_layout(args));
    let page_label = use_state(|| None::<String>);

    let on_sign_out = {
        let revalidate = loader.revalidate.clone();
        Callback::from(move |_: ()| {
            sign_out();
            revalidate.emit(());
        })
    };

    match &loader.state {
        LoaderState::Loading => html! {
            <div class="flex min-h-svh items-center justify-center text-sm text-slate-500">
                { "Loading session..." }
            </div>
        },
        LoaderState::Failed(error) => html! {
            <LayoutErrorBoundary error={error.clone()} on_retry={loader.revalidate.clone()} />
        },
        LoaderState::Ready(data) => {
            log::debug!("🧩 [COMP] Layout :: {}", data.user.username);
            let user = Rc::new(data.user.clone());
            let label_context = PageLabel {
                label: (*page_label).clone(),
                set: {
                    let page_label = page_label.clone();
                    Callback::from(move |label| page_label.set(label))
                },
            };

            html! {
                <ContextProvider<Rc<User>> context={user}>
                    <ContextProvider<PageLabel> context={label_context}>
                        <SidebarProvider>
                            <AppSidebar on_sign_out={on_sign_out} />
                            <main class="relative flex w-full flex-1 flex-col bg-white">
                                <Header />
                                <Switch<Route> render={switch} />
                            </main>
                        </SidebarProvider>
                    </ContextProvider<PageLabel>>
                </ContextProvider<Rc<User>>>
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LayoutErrorBoundaryProps {
    pub error: LoaderError,
    pub on_retry: Callback<()>,
}

#[function_component(LayoutErrorBoundary)]
pub fn layout_error_boundary(props: &LayoutErrorBoundaryProps) -> Html {
    log::error!("LayoutErrorBoundary :: {}", props.error);

    let reason = match &props.error {
        LoaderError::NoSession => "You are not signed in.".to_string(),
        other => other.to_string(),
    };
    let on_retry = props.on_retry.reform(|_: MouseEvent| ());

    html! {
        <div class="flex min-h-svh flex-col items-center justify-center gap-3 p-6 text-center">
            <h1 class="text-lg font-semibold text-slate-900">{ "Something went wrong" }</h1>
            <p class="max-w-md text-sm text-slate-500">{ reason }</p>
            <button
                type="button"
                class="rounded-md border border-slate-200 px-4 py-2 text-sm hover:bg-slate-100"
                onclick={on_retry}
            >
                { "Try again" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::test_support::render_html;

    #[tokio::test]
    async fn missing_session_asks_to_sign_in() {
        let html = render_html::<LayoutErrorBoundary, _>(|| LayoutErrorBoundaryProps {
            error: LoaderError::NoSession,
            on_retry: Callback::noop(),
        })
        .await;
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("You are not signed in."));
        assert!(html.contains("Try again"));
    }

    #[tokio::test]
    async fn api_failure_shows_request_error() {
        let html = render_html::<LayoutErrorBoundary, _>(|| LayoutErrorBoundaryProps {
            error: LoaderError::Api(ApiError::Http {
                method: "GET",
                url: "https://dummyjson.com/users/1".to_string(),
                status: 404,
                status_text: "Not Found".to_string(),
            }),
            on_retry: Callback::noop(),
        })
        .await;
        assert!(html.contains("[ERR] GET action for https://dummyjson.com/users/1; 404:Not Found"));
    }
}
