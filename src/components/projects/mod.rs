// ============================================================================
// PROJECTS - listing, search, create and delete
// ============================================================================

pub mod create_project;

use yew::prelude::*;

use crate::components::shared::{ProjectCard, SearchBar};
use crate::components::ui::icons::LoaderIcon;
use crate::components::ui::{Alert, AlertDialog, AlertVariant, Button, ButtonVariant};
use crate::hooks::{use_loader, LoaderState};
use crate::loaders::{delete_project, filter_projects, load_projects};
use crate::models::{ActionError, Project};
use crate::styles::SUBTLE_TEXT;

use self::create_project::CreateProject;

#[function_component(Projects)]
pub fn projects() -> Html {
    let loader = use_loader((), |args, _| load_projects(args));
    let search_query = use_state(String::new);
    let marked_for_deletion = use_state(|| None::<Project>);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| None::<ActionError>);

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |query: String| search_query.set(query))
    };
    let on_mark = {
        let marked_for_deletion = marked_for_deletion.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |project: Project| {
            delete_error.set(None);
            marked_for_deletion.set(Some(project));
        })
    };
    let on_cancel = {
        let marked_for_deletion = marked_for_deletion.clone();
        let deleting = deleting.clone();
        Callback::from(move |_: MouseEvent| {
            if !*deleting {
                marked_for_deletion.set(None);
            }
        })
    };
    let on_confirm = {
        let marked_for_deletion = marked_for_deletion.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        let revalidate = loader.revalidate.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(project) = (*marked_for_deletion).clone() else {
                return;
            };
            if *deleting {
                return;
            }
            deleting.set(true);

            let marked_for_deletion = marked_for_deletion.clone();
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            let revalidate = revalidate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = delete_project(project.id).await;
                deleting.set(false);
                marked_for_deletion.set(None);
                match result {
                    Ok(()) => revalidate.emit(()),
                    Err(err) => {
                        log::error!("❌ {}", err.message);
                        delete_error.set(Some(err));
                    }
                }
            });
        })
    };

    let listing = projects_listing(&loader.state, &search_query, &on_mark);

    let is_deleting = *deleting;
    let marked_title = (*marked_for_deletion)
        .as_ref()
        .map(|project| project.title.clone())
        .unwrap_or_default();

    html! {
        <>
            <div class="min-h-screen mx-auto max-w-[1392px] w-full p-4">
                <div class="flex items-center justify-end gap-4">
                    <SearchBar search_query={(*search_query).clone()} {on_search} />
                    <CreateProject on_created={loader.revalidate.clone()} />
                </div>
                if let Some(err) = &*delete_error {
                    <Alert
                        variant={AlertVariant::Destructive}
                        class="mt-4"
                        title={err.status.clone()}
                        description={err.message.clone()}
                    />
                }
                { listing }
            </div>

            <AlertDialog
                open={marked_for_deletion.is_some()}
                title="Delete Project"
                class="max-w-[80%] sm:max-w-lg"
                description={html! {
                    { format!(
                        "Are you sure you want to delete \"{marked_title}\"? This action cannot be undone. \
                         This will permanently delete your project and remove your data from our servers."
                    ) }
                }}
            >
                <Button variant={ButtonVariant::Outline} class="mt-2 sm:mt-0" disabled={is_deleting} onclick={on_cancel}>
                    { "Cancel" }
                </Button>
                <Button variant={ButtonVariant::Destructive} disabled={is_deleting} onclick={on_confirm}>
                    if is_deleting {
                        <LoaderIcon />
                    }
                    { "Delete" }
                </Button>
            </AlertDialog>
        </>
    }
}

pub fn projects_listing(
    state: &LoaderState<Vec<Project>>,
    search_query: &str,
    on_delete: &Callback<Project>,
) -> Html {
    match state {
        LoaderState::Loading => html! {
            <p class={classes!("pt-4", SUBTLE_TEXT)}>{ "Loading projects..." }</p>
        },
        LoaderState::Failed(error) => html! {
            <div class="pt-4">
                <Alert variant={AlertVariant::Destructive} title="Projects could not be loaded" description={error.to_string()} />
            </div>
        },
        LoaderState::Ready(projects) => {
            let filtered = filter_projects(projects, search_query);
            log::debug!("🧩 [COMP] Projects :: {} of {}", filtered.len(), projects.len());
            html! {
                <div class="w-full pt-4 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    { for filtered.into_iter().map(|project| html! {
                        <ProjectCard key={project.id} project={project.clone()} on_delete={on_delete.clone()} />
                    }) }
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::{ApiError, LoaderError};
    use crate::test_support::{render_html, WithRouter};

    #[derive(Properties, PartialEq)]
    struct ListingProps {
        state: LoaderState<Vec<Project>>,
        query: AttrValue,
    }

    #[function_component(Listing)]
    fn listing(props: &ListingProps) -> Html {
        html! {
            <WithRouter path="/projects">
                { projects_listing(&props.state, &props.query, &Callback::noop()) }
            </WithRouter>
        }
    }

    fn project(id: u64, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            meta: Default::default(),
        }
    }

    async fn render(query: &'static str, state: fn() -> LoaderState<Vec<Project>>) -> String {
        render_html::<Listing, _>(move || ListingProps {
            state: state(),
            query: query.into(),
        })
        .await
    }

    fn catalog() -> LoaderState<Vec<Project>> {
        LoaderState::Ready(Rc::new(vec![
            project(1, "Billing API"),
            project(2, "billing-worker"),
            project(3, "Search Indexer"),
        ]))
    }

    #[tokio::test]
    async fn renders_a_card_per_project() {
        let html = render("", catalog).await;
        assert!(html.contains("Billing API"));
        assert!(html.contains("billing-worker"));
        assert!(html.contains("Search Indexer"));
        assert!(html.contains("href=\"/projects/3\""));
        // action menus start closed
        assert_eq!(html.matches("Delete Project").count(), 0);
        assert_eq!(html.matches("Never updated").count(), 3);
    }

    #[tokio::test]
    async fn search_query_filters_cards_case_insensitively() {
        let html = render("BILLING", catalog).await;
        assert!(html.contains("Billing API"));
        assert!(html.contains("billing-worker"));
        assert!(!html.contains("Search Indexer"));
    }

    #[tokio::test]
    async fn failed_load_shows_destructive_alert() {
        let html = render("", || {
            LoaderState::Failed(LoaderError::Api(ApiError::Http {
                method: "GET",
                url: "https://dummyjson.com/products".to_string(),
                status: 500,
                status_text: "Internal Server Error".to_string(),
            }))
        })
        .await;
        assert!(html.contains("Projects could not be loaded"));
        assert!(html.contains("[ERR] GET action for https://dummyjson.com/products; 500:Internal Server Error"));
    }
}
