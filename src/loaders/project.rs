use crate::error::LoaderError;
use crate::loaders::LoaderArgs;
use crate::models::Project;
use crate::services::constants::{api_url, cache_keys};
use crate::services::{FetchArgs, FetchProxyArgs, RestServiceProxy};

/// `Ok(None)` when the project could not be fetched; the page renders a
/// notice instead of the error boundary.
pub async fn load_project(args: LoaderArgs, project_id: String) -> Result<Option<Project>, LoaderError> {
    log::info!("📋 [LOADER] Project :: {}", project_id);

    let fetch = FetchArgs::new(api_url(&format!("products/{project_id}")))
        .signal(args.signal)
        .throw_error(false);
    let project = RestServiceProxy::fetch::<Project>(FetchProxyArgs::new(
        cache_keys::project(&project_id),
        fetch,
    ))
    .await?;

    Ok(project)
}
