use yew::prelude::*;

use crate::error::LoaderError;
use crate::hooks::{use_loader, use_page_label, LoaderState};
use crate::loaders::load_project;
use crate::models::Project;
use crate::styles::SUBTLE_TEXT;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectPageProps {
    pub project_id: AttrValue,
}

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    let loader = use_loader(props.project_id.to_string(), load_project);
    let page_label = use_page_label();

    // Publish the loaded title to the breadcrumb; cleared on leave
    {
        let title = loader.state.data().and_then(|p| p.as_ref()).map(|p| p.title.clone());
        use_effect_with(title, move |title| {
            if let Some(ctx) = &page_label {
                ctx.set.emit(title.clone());
            }
            let page_label = page_label.clone();
            move || {
                if let Some(ctx) = page_label {
                    ctx.set.emit(None);
                }
            }
        });
    }

    project_view(&loader.state)
}

pub fn project_view(state: &LoaderState<Option<Project>>) -> Html {
    match state {
        LoaderState::Loading => html! {
            <div class={classes!("p-4", SUBTLE_TEXT)}>{ "Loading project..." }</div>
        },
        LoaderState::Failed(error) => html! { <ProjectErrorBoundary error={error.clone()} /> },
        LoaderState::Ready(project) => match &**project {
            None => html! { <div class="p-4">{ "Project failed to fetch!" }</div> },
            Some(project) => {
                log::debug!("🧩 [COMP] Project :: {}", project.id);
                html! {
                    <div class="mx-auto w-full max-w-[1392px] p-4">
                        <h1 class="text-2xl font-semibold text-slate-900">{ project.title.clone() }</h1>
                        if !project.description.is_empty() {
                            <p class={classes!("mt-2", SUBTLE_TEXT)}>{ project.description.clone() }</p>
                        }
                    </div>
                }
            }
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectErrorBoundaryProps {
    pub error: LoaderError,
}

#[function_component(ProjectErrorBoundary)]
pub fn project_error_boundary(props: &ProjectErrorBoundaryProps) -> Html {
    log::error!("[COMP] ProjectErrorBoundary :: {}", props.error);

    html! {
        <div class="p-4">
            <h2 class="text-base font-semibold text-slate-900">{ "This project could not be loaded" }</h2>
            <p class={SUBTLE_TEXT}>{ props.error.to_string() }</p>
        </div>
    }
}
