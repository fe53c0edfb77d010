// ============================================================================
// DEFECT DETECT - SBOM PROJECTS FRONTEND (YEW + RUST)
// ============================================================================
// Layers:
// - Router: routes and breadcrumbs (yew-router)
// - Loaders / Actions: per-route data fetch and mutation
// - Services: REST client, cache proxy, cookies (HTTP only, no UI)
// - Components: pages and UI primitives
// - Models: DTOs mirrored from the API
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod hooks;
pub mod loaders;
pub mod models;
pub mod router;
pub mod services;
pub mod styles;
pub mod utils;

#[cfg(test)]
mod test_support;

use crate::app::App;
use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 Defect Detect ({}) - API {}",
        CONFIG.environment,
        CONFIG.api_base_url
    );

    yew::Renderer::<App>::new().render();
}
