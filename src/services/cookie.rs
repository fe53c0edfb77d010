// ============================================================================
// COOKIE SERVICE - document.cookie access
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const DEFAULT_COOKIE_SETTINGS: &str = "secure=true; samesite=Strict; path=/";

pub struct CookieService;

impl CookieService {
    pub fn get(name: &str) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        find_cookie(&cookies, name)
    }

    /// `max_age_secs` of `None` (or zero) makes a session cookie.
    pub fn set(name: &str, value: &str, max_age_secs: Option<i64>) -> Result<(), String> {
        let document = html_document().ok_or("Could not access document")?;
        document
            .set_cookie(&cookie_string(name, value, max_age_secs))
            .map_err(|_| format!("Failed to write cookie {name}"))
    }

    pub fn delete(name: &str) -> Result<(), String> {
        Self::set(name, "", Some(-1))
    }
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Looks up `name` in a `document.cookie` string. Values are URI-decoded;
/// the first matching entry wins.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    let prefix = format!("{}=", encode_uri_component(name));

    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|value| value.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

pub fn cookie_string(name: &str, value: &str, max_age_secs: Option<i64>) -> String {
    let mut cookie = format!(
        "{}={}; {}",
        encode_uri_component(name),
        encode_uri_component(value),
        DEFAULT_COOKIE_SETTINGS
    );
    if let Some(max_age) = max_age_secs.filter(|secs| *secs != 0) {
        cookie.push_str(&format!("; max-age={max_age}"));
    }
    cookie
}

/// Percent-encodes like the browser's `encodeURIComponent`, which leaves
/// `!'()*` alone on top of the unreserved set.
fn encode_uri_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
