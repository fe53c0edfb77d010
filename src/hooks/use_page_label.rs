use yew::prelude::*;

/// Label of the current page's last breadcrumb, published by pages whose
/// title is only known after their loader finishes.
#[derive(Clone, PartialEq)]
pub struct PageLabel {
    pub label: Option<String>,
    pub set: Callback<Option<String>>,
}

#[hook]
pub fn use_page_label() -> Option<PageLabel> {
    use_context::<PageLabel>()
}
