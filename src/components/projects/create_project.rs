use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ui::icons::{LoaderIcon, PlusIcon};
use crate::components::ui::{Alert, AlertVariant, Button, Dialog, Input, Label};
use crate::forms::{validate, CreateProjectForm, FormErrors, SbomMode, SBOM_FILE_ERROR};
use crate::loaders::create_project;
use crate::models::ActionError;
use crate::styles::SUBTLE_TEXT;
use crate::utils::{cn, read_file_to_string};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CreateProjectState {
    pub form: CreateProjectForm,
    pub errors: FormErrors,
}

pub enum FormAction {
    SetName(String),
    SetMode(SbomMode),
    SetRepoUrl(String),
    SetSbomFile(Option<String>),
    FileUnreadable,
    ShowErrors(FormErrors),
    Reset,
}

impl Reducible for CreateProjectState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetName(name) => {
                next.form.project_name = name;
                next.errors.project_name = None;
            }
            FormAction::SetMode(mode) => {
                next.form.set_mode(mode);
                next.errors.retain_mode(mode);
            }
            FormAction::SetRepoUrl(url) => {
                next.form.repo_url = url;
                next.errors.repo_url = None;
            }
            // A read can finish after the user switched back to url mode
            FormAction::SetSbomFile(_) | FormAction::FileUnreadable
                if next.form.mode != SbomMode::File =>
            {
                return self;
            }
            FormAction::SetSbomFile(content) => {
                next.errors.sbom_json_file = None;
                next.form.sbom_json_file = content;
            }
            FormAction::FileUnreadable => {
                next.form.sbom_json_file = None;
                next.errors.sbom_json_file = Some(SBOM_FILE_ERROR.to_string());
            }
            FormAction::ShowErrors(errors) => next.errors = errors,
            FormAction::Reset => next = Self::default(),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CreateProjectProps {
    pub on_created: Callback<()>,
}

#[function_component(CreateProject)]
pub fn create_project_dialog(props: &CreateProjectProps) -> Html {
    let open = use_state(|| false);
    let submitting = use_state(|| false);
    let action_error = use_state(|| None::<ActionError>);
    let state = use_reducer(CreateProjectState::default);

    let on_open = {
        let open = open.clone();
        let action_error = action_error.clone();
        Callback::from(move |_: MouseEvent| {
            action_error.set(None);
            open.set(true);
        })
    };
    let on_close = {
        let open = open.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            open.set(false);
            state.dispatch(FormAction::Reset);
        })
    };

    let on_name = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(FormAction::SetName(input.value()));
            }
        })
    };
    let on_mode = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let mode = e
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| SbomMode::parse(&input.value()));
            if let Some(mode) = mode {
                state.dispatch(FormAction::SetMode(mode));
            }
        })
    };
    let on_repo_url = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(FormAction::SetRepoUrl(input.value()));
            }
        })
    };
    let on_file = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let file = e
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                state.dispatch(FormAction::SetSbomFile(None));
                return;
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_file_to_string(&file).await {
                    Ok(content) => state.dispatch(FormAction::SetSbomFile(Some(content))),
                    Err(e) => {
                        log::error!("❌ {}", e);
                        state.dispatch(FormAction::FileUnreadable);
                    }
                }
            });
        })
    };

    let on_submit = {
        let state = state.clone();
        let open = open.clone();
        let submitting = submitting.clone();
        let action_error = action_error.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let new_project = match validate(&state.form) {
                Ok(project) => project,
                Err(errors) => {
                    state.dispatch(FormAction::ShowErrors(errors));
                    return;
                }
            };

            submitting.set(true);
            action_error.set(None);
            let state = state.clone();
            let open = open.clone();
            let submitting = submitting.clone();
            let action_error = action_error.clone();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = create_project(&new_project).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        open.set(false);
                        state.dispatch(FormAction::Reset);
                        on_created.emit(());
                    }
                    Err(err) => {
                        log::error!("❌ {}", err.message);
                        action_error.set(Some(err));
                    }
                }
            });
        })
    };

    let is_submitting = *submitting;
    let form = &state.form;
    let errors = &state.errors;
    let label_class = cn(["block", SUBTLE_TEXT]);

    html! {
        <>
            <Button onclick={on_open}>
                <span class="hidden sm:block">{ "New Project" }</span>
                <PlusIcon class="block sm:hidden !size-5" />
            </Button>
            <Dialog
                open={*open}
                on_close={on_close}
                disable_close={is_submitting}
                title="Create a new project"
                class="max-w-[80%] sm:max-w-lg gap-0"
            >
                if let Some(err) = &*action_error {
                    <Alert
                        variant={AlertVariant::Destructive}
                        class="mb-4 mt-6"
                        title={err.status.clone()}
                        description={err.message.clone()}
                    />
                }
                <form onsubmit={on_submit} class="mt-6 flex flex-col gap-4">
                    <div class="space-y-2">
                        <Label html_for="project-name" class={label_class.clone()}>{ "Project Name" }</Label>
                        <Input
                            id="project-name"
                            value={form.project_name.clone()}
                            placeholder="Proj..."
                            disabled={is_submitting}
                            invalid={errors.project_name.is_some()}
                            oninput={on_name}
                        />
                        { field_error(&errors.project_name) }
                    </div>

                    <div class="space-y-2">
                        <Label class={label_class.clone()}>{ "Mode of SBOM" }</Label>
                        <div class="flex flex-row gap-6" role="radiogroup">
                            { mode_option(SbomMode::Url, "Repo URL", form.mode, is_submitting, on_mode.clone()) }
                            { mode_option(SbomMode::File, "JSON File", form.mode, is_submitting, on_mode) }
                        </div>
                    </div>

                    if form.mode == SbomMode::Url {
                        <div class="space-y-2">
                            <Label html_for="repo-url" class={label_class.clone()}>{ "Repository URL" }</Label>
                            <Input
                                id="repo-url"
                                value={form.repo_url.clone()}
                                placeholder="https://..."
                                disabled={is_submitting}
                                invalid={errors.repo_url.is_some()}
                                oninput={on_repo_url}
                            />
                            <p class={SUBTLE_TEXT}>{ "Extract SBOM content using repo." }</p>
                            { field_error(&errors.repo_url) }
                        </div>
                    }
                    if form.mode == SbomMode::File {
                        <div class="space-y-2">
                            <Label html_for="sbom-file" class={label_class.clone()}>{ "SBOM JSON file" }</Label>
                            <Input
                                id="sbom-file"
                                input_type="file"
                                accept="application/json"
                                disabled={is_submitting}
                                invalid={errors.sbom_json_file.is_some()}
                                onchange={on_file}
                            />
                            { field_error(&errors.sbom_json_file) }
                        </div>
                    }

                    <div class="flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2">
                        <Button submit={true} disabled={is_submitting}>
                            if is_submitting {
                                <LoaderIcon />
                            }
                            { "Create" }
                        </Button>
                    </div>
                </form>
            </Dialog>
        </>
    }
}

fn field_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="text-sm font-medium text-red-600">{ message.clone() }</p> },
        None => html! {},
    }
}

fn mode_option(
    mode: SbomMode,
    label: &'static str,
    current: SbomMode,
    disabled: bool,
    onchange: Callback<Event>,
) -> Html {
    let id = format!("mode-{}", mode.as_str());
    html! {
        <div class="flex items-center gap-2">
            <input
                type="radio"
                name="mode"
                id={id.clone()}
                value={mode.as_str()}
                checked={current == mode}
                {disabled}
                {onchange}
                class="h-4 w-4 cursor-pointer accent-slate-900"
            />
            <label for={id} class="text-sm font-normal cursor-pointer">{ label }</label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: CreateProjectState, action: FormAction) -> CreateProjectState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let state = CreateProjectState {
            errors: FormErrors {
                project_name: Some("x".to_string()),
                repo_url: Some("y".to_string()),
                ..FormErrors::default()
            },
            ..CreateProjectState::default()
        };
        let state = reduce(state, FormAction::SetName("api".to_string()));
        assert_eq!(state.form.project_name, "api");
        assert_eq!(state.errors.project_name, None);
        assert!(state.errors.repo_url.is_some());
    }

    #[test]
    fn mode_switch_drops_other_mode_value_and_error() {
        let mut state = reduce(CreateProjectState::default(), FormAction::SetRepoUrl("https://x.io".to_string()));
        state.errors.repo_url = Some("bad".to_string());

        let state = reduce(state, FormAction::SetMode(SbomMode::File));
        assert_eq!(state.form.mode, SbomMode::File);
        assert!(state.form.repo_url.is_empty());
        assert_eq!(state.errors.repo_url, None);
    }

    #[test]
    fn unreadable_file_flags_the_file_field() {
        let state = reduce(CreateProjectState::default(), FormAction::SetMode(SbomMode::File));
        let state = reduce(state, FormAction::SetSbomFile(Some("{}".to_string())));
        assert!(state.form.sbom_json_file.is_some());

        let state = reduce(state, FormAction::FileUnreadable);
        assert_eq!(state.form.sbom_json_file, None);
        assert_eq!(state.errors.sbom_json_file.as_deref(), Some(SBOM_FILE_ERROR));
    }

    #[test]
    fn file_read_landing_in_url_mode_is_dropped() {
        let state = reduce(CreateProjectState::default(), FormAction::SetMode(SbomMode::File));
        let state = reduce(state, FormAction::SetMode(SbomMode::Url));

        let state = reduce(state, FormAction::SetSbomFile(Some("{}".to_string())));
        assert_eq!(state.form.sbom_json_file, None);
        let state = reduce(state, FormAction::FileUnreadable);
        assert_eq!(state.errors.sbom_json_file, None);

        let state = reduce(state, FormAction::SetMode(SbomMode::File));
        assert_eq!(state.form.sbom_json_file, None);
    }

    #[test]
    fn reset_restores_defaults() {
        let state = reduce(CreateProjectState::default(), FormAction::SetName("abc".to_string()));
        assert_eq!(reduce(state, FormAction::Reset), CreateProjectState::default());
    }
}
