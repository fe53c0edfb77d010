//! Server-side rendering helpers for component tests.

use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

/// Renders `C` to an HTML string without hydration markers.
pub(crate) async fn render_html<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

#[derive(Properties, PartialEq)]
pub(crate) struct WithRouterProps {
    pub path: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Router over in-memory history positioned at `path`.
#[function_component(WithRouter)]
pub(crate) fn with_router(props: &WithRouterProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.path.to_string());

    html! {
        <Router {history}>
            { props.children.clone() }
        </Router>
    }
}
