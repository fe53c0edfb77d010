// ============================================================================
// ROUTER - app routes and breadcrumbs
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::not_found::NotFound;
use crate::components::project::ProjectPage;
use crate::components::projects::Projects;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/projects")]
    Projects,
    #[at("/projects/:project_id")]
    Project { project_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Breadcrumb {
    pub route: Route,
    pub label: String,
}

impl Route {
    /// Trail for the header. `page_label` replaces the last crumb of a
    /// project page once its data has loaded.
    pub fn breadcrumbs(&self, page_label: Option<&str>) -> Vec<Breadcrumb> {
        let projects = Breadcrumb {
            route: Route::Projects,
            label: "Projects".to_string(),
        };

        match self {
            Route::Dashboard => Vec::new(),
            Route::Projects => vec![projects],
            Route::Project { project_id } => vec![
                projects,
                Breadcrumb {
                    route: self.clone(),
                    label: page_label.unwrap_or(project_id).to_string(),
                },
            ],
            Route::NotFound => vec![Breadcrumb {
                route: Route::NotFound,
                label: "Not Found".to_string(),
            }],
        }
    }

    /// Top-level section used to highlight sidebar entries
    pub fn section(&self) -> Route {
        match self {
            Route::Project { .. } => Route::Projects,
            other => other.clone(),
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Projects => html! { <Projects /> },
        Route::Project { project_id } => html! { <ProjectPage {project_id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_has_no_breadcrumbs() {
        assert!(Route::Dashboard.breadcrumbs(None).is_empty());
    }

    #[test]
    fn project_trail_falls_back_to_id_until_loaded() {
        let route = Route::Project { project_id: "7".to_string() };

        let labels: Vec<String> = route.breadcrumbs(None).into_iter().map(|b| b.label).collect();
        assert_eq!(labels, ["Projects", "7"]);

        let trail = route.breadcrumbs(Some("api-gateway"));
        assert_eq!(trail[0].route, Route::Projects);
        assert_eq!(trail[1].label, "api-gateway");
        assert_eq!(trail[1].route, route);
    }

    #[test]
    fn project_pages_belong_to_projects_section() {
        let route = Route::Project { project_id: "1".to_string() };
        assert_eq!(route.section(), Route::Projects);
        assert_eq!(Route::Dashboard.section(), Route::Dashboard);
    }

    #[test]
    fn paths_render_params() {
        assert_eq!(Route::Project { project_id: "12".to_string() }.to_path(), "/projects/12");
        assert_eq!(Route::Projects.to_path(), "/projects");
    }
}
