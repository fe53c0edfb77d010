use crate::config::CONFIG;

/// Keys of the in-memory response cache
pub mod cache_keys {
    pub const USER: &str = "USER";
    pub const PROJECTS: &str = "PROJECTS";
    pub const PROJECT_PREFIX: &str = "PROJECT::";

    pub fn project(project_id: &str) -> String {
        format!("{PROJECT_PREFIX}{project_id}")
    }
}

pub mod cookie_keys {
    pub const USER_ID: &str = "app.userId";
    pub const SIDEBAR_STATE: &str = "sidebar:state";
}

pub const SIDEBAR_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// Absolute API URL for `path`
pub fn api_url(path: &str) -> String {
    CONFIG.api_url(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_keys_share_prefix() {
        assert_eq!(cache_keys::project("42"), "PROJECT::42");
        assert!(cache_keys::project("42").starts_with(cache_keys::PROJECT_PREFIX));
        assert_ne!(cache_keys::project("1"), cache_keys::PROJECTS);
    }
}
