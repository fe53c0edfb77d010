// ============================================================================
// LOADERS / ACTIONS - per-route data fetch and mutation
// ============================================================================
// Loaders run through `hooks::use_loader`, which hands them the abort
// signal of the current navigation. Actions run from event handlers and
// invalidate the cache keys they make stale.
// ============================================================================

pub mod layout;
pub mod project;
pub mod projects;

use web_sys::AbortSignal;

pub use layout::{load_layout, sign_out, LayoutData};
pub use project::load_project;
pub use projects::{create_project, delete_project, filter_projects, load_projects};

#[derive(Clone, Debug, Default)]
pub struct LoaderArgs {
    pub signal: Option<AbortSignal>,
}
