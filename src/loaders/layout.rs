use crate::config::CONFIG;
use crate::error::LoaderError;
use crate::loaders::LoaderArgs;
use crate::models::User;
use crate::services::constants::{api_url, cache_keys, cookie_keys};
use crate::services::{CookieService, FetchArgs, FetchProxyArgs, RestServiceProxy};

#[derive(Clone, PartialEq, Debug)]
pub struct LayoutData {
    pub user: User,
}

/// Session user id: the cookie value, else the configured fallback. The
/// flag tells whether the fallback must be written back to the cookie.
pub fn resolve_session_user(
    cookie: Option<String>,
    fallback: Option<&str>,
) -> Result<(String, bool), LoaderError> {
    match cookie.filter(|id| !id.trim().is_empty()) {
        Some(id) => Ok((id, false)),
        None => fallback
            .map(|id| (id.to_string(), true))
            .ok_or(LoaderError::NoSession),
    }
}

pub async fn load_layout(args: LoaderArgs) -> Result<LayoutData, LoaderError> {
    let cookie = CookieService::get(cookie_keys::USER_ID);
    let (user_id, persist) = resolve_session_user(cookie, CONFIG.default_user_id.as_deref())?;

    if persist {
        log::info!("🍪 No session cookie, signing in as default user {}", user_id);
        if let Err(e) = CookieService::set(
            cookie_keys::USER_ID,
            &user_id,
            Some(CONFIG.session_max_age_secs),
        ) {
            log::error!("❌ {}", e);
        }
    }

    log::info!("👤 [LOADER] Layout :: user {}", user_id);
    let fetch = FetchArgs::new(api_url(&format!("users/{user_id}")))
        .signal(args.signal)
        .throw_error(true);
    let user = RestServiceProxy::fetch::<User>(FetchProxyArgs::new(cache_keys::USER, fetch))
        .await?
        .ok_or(LoaderError::NoSession)?;

    Ok(LayoutData { user })
}

/// Ends the session and forgets everything fetched for it.
pub fn sign_out() {
    log::info!("👋 Sign out");
    if let Err(e) = CookieService::delete(cookie_keys::USER_ID) {
        log::error!("❌ {}", e);
    }
    RestServiceProxy::clear_cache();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_wins_over_fallback() {
        let resolved = resolve_session_user(Some("12".to_string()), Some("1")).unwrap();
        assert_eq!(resolved, ("12".to_string(), false));
    }

    #[test]
    fn fallback_is_persisted() {
        assert_eq!(resolve_session_user(None, Some("1")).unwrap(), ("1".to_string(), true));
        assert_eq!(
            resolve_session_user(Some(" ".to_string()), Some("1")).unwrap(),
            ("1".to_string(), true)
        );
    }

    #[test]
    fn no_cookie_and_no_fallback_is_no_session() {
        assert_eq!(resolve_session_user(None, None), Err(LoaderError::NoSession));
    }
}
