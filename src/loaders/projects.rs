use crate::error::LoaderError;
use crate::loaders::LoaderArgs;
use crate::models::{ActionError, NewProject, Project, ProductsResponse};
use crate::services::constants::{api_url, cache_keys};
use crate::services::{
    FetchArgs, FetchProxyArgs, HttpMethod, MutateArgs, RestService, RestServiceProxy,
};

pub async fn load_projects(args: LoaderArgs) -> Result<Vec<Project>, LoaderError> {
    log::info!("📂 [LOADER] Projects");

    let fetch = FetchArgs::new(api_url("products"))
        .signal(args.signal)
        .throw_error(true);
    let response = RestServiceProxy::fetch::<ProductsResponse>(FetchProxyArgs::new(
        cache_keys::PROJECTS,
        fetch,
    ))
    .await?;

    let projects = response.map(|r| r.products).unwrap_or_default();
    log::info!("✅ {} projects loaded", projects.len());
    Ok(projects)
}

pub async fn create_project(project: &NewProject) -> Result<Project, ActionError> {
    log::info!("➕ [ACTION] Create project :: {}", project.title);

    let url = api_url("products/add");
    let body = serde_json::to_string(project).map_err(|e| ActionError {
        status: "Error".to_string(),
        message: format!("failed to encode request body for {url}: {e}"),
    })?;

    let created = RestService::mutate::<Project>(
        &MutateArgs::new(HttpMethod::Post, url, body).throw_error(true),
    )
    .await?
    .ok_or_else(|| ActionError {
        status: "Error".to_string(),
        message: "The server returned no project".to_string(),
    })?;

    RestServiceProxy::invalidate_cache(cache_keys::PROJECTS);
    log::info!("✅ Project created: {}", created.id);
    Ok(created)
}

pub async fn delete_project(project_id: u64) -> Result<(), ActionError> {
    log::info!("🗑️ [ACTION] Delete project :: {}", project_id);

    let args = MutateArgs::new(
        HttpMethod::Delete,
        api_url(&format!("products/{project_id}")),
        "",
    )
    .throw_error(true);
    RestService::mutate::<serde_json::Value>(&args).await?;

    RestServiceProxy::invalidate_cache(cache_keys::PROJECTS);
    RestServiceProxy::invalidate_cache(&cache_keys::project(&project_id.to_string()));
    log::info!("✅ Project deleted: {}", project_id);
    Ok(())
}

/// Case-insensitive title search.
pub fn filter_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let query = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|project| project.title.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectMeta;

    fn project(id: u64, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            meta: ProjectMeta::default(),
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let projects = vec![project(1, "Alpha"), project(2, "Beta")];
        assert_eq!(filter_projects(&projects, "").len(), 2);
        assert_eq!(filter_projects(&projects, "   ").len(), 2);
    }

    #[test]
    fn filters_by_title_ignoring_case() {
        let projects = vec![project(1, "Payments API"), project(2, "web-frontend"), project(3, "api-gateway")];
        let ids: Vec<u64> = filter_projects(&projects, "API").iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);
        assert!(filter_projects(&projects, "mobile").is_empty());
    }
}
