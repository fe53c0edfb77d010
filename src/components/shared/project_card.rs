use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ui::icons::{EllipsisIcon, TrashIcon};
use crate::components::ui::{Button, ButtonVariant, DropdownMenu, Separator};
use crate::models::Project;
use crate::router::Route;
use crate::styles::{BORDER, FOCUS_VISIBLE, SUBTLE_ICON_STROKE, SUBTLE_TEXT};
use crate::utils::{cn, format_distance_to_now};

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
    pub on_delete: Callback<Project>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(project.clone()))
    };

    let updated = project
        .updated_at()
        .map(|at| format!("Updated {}", format_distance_to_now(at)))
        .unwrap_or_else(|| "Never updated".to_string());

    html! {
        <div class={cn([
            "relative min-w-48 flex flex-col transition-all shadow-base hover:shadow-md",
            BORDER,
            FOCUS_VISIBLE,
        ])}>
            <Link<Route>
                to={Route::Project { project_id: project.id.to_string() }}
                classes="absolute inset-0 z-10 cursor-pointer overflow-hidden rounded-md"
            >
                <span class="sr-only">{ "View Project" }</span>
            </Link<Route>>

            <h3 class="px-3 py-6 text-sm font-medium text-slate-900">{ project.title.clone() }</h3>
            <Separator class="mx-3 w-auto" />
            <div class="flex justify-between h-11 items-center px-3">
                <span class={SUBTLE_TEXT}>{ updated }</span>

                <DropdownMenu
                    trigger={html! {
                        <>
                            <EllipsisIcon class={cn(["h-4 w-4", SUBTLE_ICON_STROKE])} />
                            <span class="sr-only">{ "Open project actions" }</span>
                        </>
                    }}
                    class="p-1.5 max-w-[300px]"
                >
                    <Button
                        variant={ButtonVariant::Ghost}
                        class="px-2 w-full justify-start h-8 text-red-700 hover:bg-red-50 hover:text-red-700"
                        onclick={on_delete}
                    >
                        <TrashIcon />
                        { "Delete Project" }
                        <span class="sr-only">{ "Delete project action" }</span>
                    </Button>
                </DropdownMenu>
            </div>
        </div>
    }
}
