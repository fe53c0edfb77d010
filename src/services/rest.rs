// ============================================================================
// REST SERVICE - HTTP only (stateless)
// ============================================================================
// No business logic and no caching; see `rest_proxy` for memoized reads.
// ============================================================================

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

use crate::error::ApiError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HttpMethod {
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    fn to_method(self) -> Method {
        match self {
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FetchArgs {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub signal: Option<AbortSignal>,
    /// Propagate failures instead of logging them and yielding `None`
    pub throw_error: bool,
}

impl FetchArgs {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn throw_error(mut self, throw_error: bool) -> Self {
        self.throw_error = throw_error;
        self
    }
}

#[derive(Clone, Debug)]
pub struct MutateArgs {
    pub method: HttpMethod,
    pub url: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
    pub signal: Option<AbortSignal>,
    pub throw_error: bool,
}

impl MutateArgs {
    pub fn new(method: HttpMethod, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: body.into(),
            headers: Vec::new(),
            signal: None,
            throw_error: false,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn throw_error(mut self, throw_error: bool) -> Self {
        self.throw_error = throw_error;
        self
    }

    /// Caller headers override the JSON content type when they set one.
    pub fn merged_headers(&self) -> Vec<(String, String)> {
        let caller_sets_content_type = self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));

        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        if !caller_sets_content_type {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers.extend(self.headers.iter().cloned());
        headers
    }
}

pub struct RestService;

impl RestService {
    /// GET `args.url` and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(args: &FetchArgs) -> Result<Option<T>, ApiError> {
        let result = Self::send_get(args).await;
        settle(result, args.throw_error)
    }

    /// POST/PUT/DELETE `args.body` as JSON and decode the JSON reply.
    pub async fn mutate<T: DeserializeOwned>(args: &MutateArgs) -> Result<Option<T>, ApiError> {
        let result = Self::send_mutation(args).await;
        settle(result, args.throw_error)
    }

    async fn send_get<T: DeserializeOwned>(args: &FetchArgs) -> Result<T, ApiError> {
        log::debug!("🌐 GET {}", args.url);

        let mut builder = RequestBuilder::new(&args.url).method(Method::GET);
        for (name, value) in &args.headers {
            builder = builder.header(name, value);
        }
        let response = builder
            .abort_signal(args.signal.as_ref())
            .send()
            .await
            .map_err(|e| transport_error("GET", &args.url, e))?;

        decode("GET", &args.url, response).await
    }

    async fn send_mutation<T: DeserializeOwned>(args: &MutateArgs) -> Result<T, ApiError> {
        let method = args.method.as_str();
        log::debug!("🌐 {} {}", method, args.url);

        let mut builder = RequestBuilder::new(&args.url).method(args.method.to_method());
        for (name, value) in args.merged_headers() {
            builder = builder.header(&name, &value);
        }
        let request = builder
            .abort_signal(args.signal.as_ref())
            .body(args.body.as_str())
            .map_err(|e| ApiError::Serialize {
                url: args.url.clone(),
                message: e.to_string(),
            })?;
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(method, &args.url, e))?;

        decode(method, &args.url, response).await
    }
}

async fn decode<T: DeserializeOwned>(
    method: &'static str,
    url: &str,
    response: Response,
) -> Result<T, ApiError> {
    // reject 4xx/5xx
    if !response.ok() {
        return Err(ApiError::Http {
            method,
            url: url.to_string(),
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response.json::<T>().await.map_err(|e| ApiError::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn transport_error(method: &'static str, url: &str, err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted {
            method,
            url: url.to_string(),
        },
        other => ApiError::Network {
            method,
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

/// Applies the caller's `throw_error` choice to a finished request.
pub(crate) fn settle<T>(result: Result<T, ApiError>, throw_error: bool) -> Result<Option<T>, ApiError> {
    match result {
        Ok(data) => Ok(Some(data)),
        Err(err) if throw_error => Err(err),
        Err(err) if err.is_aborted() => {
            log::debug!("⏹️ {}", err);
            Ok(None)
        }
        Err(err) => {
            log::error!("❌ {}", err);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiError {
        ApiError::Http {
            method: "GET",
            url: "https://dummyjson.com/products/0".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        }
    }

    #[test]
    fn settle_passes_data_through() {
        assert_eq!(settle::<u8>(Ok(3), false), Ok(Some(3)));
        assert_eq!(settle::<u8>(Ok(3), true), Ok(Some(3)));
    }

    #[test]
    fn settle_swallows_errors_unless_asked_to_throw() {
        assert_eq!(settle::<u8>(Err(not_found()), false), Ok(None));
        assert_eq!(settle::<u8>(Err(not_found()), true), Err(not_found()));
    }

    #[test]
    fn mutate_defaults_to_json_content_type() {
        let args = MutateArgs::new(HttpMethod::Post, "https://dummyjson.com/products/add", "{}")
            .header("Authorization", "Bearer t");
        assert_eq!(
            args.merged_headers(),
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Bearer t".to_string()),
            ]
        );
    }

    #[test]
    fn caller_content_type_wins() {
        let args = MutateArgs::new(HttpMethod::Put, "u", "x").header("content-type", "text/plain");
        assert_eq!(
            args.merged_headers(),
            vec![("content-type".to_string(), "text/plain".to_string())]
        );
    }

    #[test]
    fn fetch_args_builder_defaults_to_swallowing_errors() {
        let args = FetchArgs::new("https://dummyjson.com/users/1");
        assert!(!args.throw_error);
        assert!(args.signal.is_none());
        assert!(FetchArgs::new("x").throw_error(true).throw_error);
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
