//! Error types shared by the REST services, route loaders and actions.

use thiserror::Error;

/// Failure of a single HTTP exchange with the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a 4xx/5xx status.
    #[error("[ERR] {method} action for {url}; {status}:{status_text}")]
    Http {
        method: &'static str,
        url: String,
        status: u16,
        status_text: String,
    },

    /// The request never produced a response.
    #[error("[ERR] {method} action for {url}; network error: {message}")]
    Network {
        method: &'static str,
        url: String,
        message: String,
    },

    /// The navigation that issued the request was cancelled.
    #[error("[ERR] {method} action for {url}; request aborted")]
    Aborted { method: &'static str, url: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {message}")]
    Parse { url: String, message: String },

    /// The request body could not be encoded.
    #[error("failed to encode request body for {url}: {message}")]
    Serialize { url: String, message: String },
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Failure surfaced to a route error boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    #[error("no active user session")]
    NoSession,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_names_method_url_and_status() {
        let err = ApiError::Http {
            method: "GET",
            url: "https://dummyjson.com/products".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "[ERR] GET action for https://dummyjson.com/products; 404:Not Found"
        );
        assert!(!err.is_aborted());
    }

    #[test]
    fn loader_error_is_transparent_over_api_errors() {
        let api = ApiError::Aborted {
            method: "DELETE",
            url: "https://dummyjson.com/products/3".to_string(),
        };
        let loader: LoaderError = api.clone().into();
        assert_eq!(loader.to_string(), api.to_string());
        assert_eq!(LoaderError::NoSession.to_string(), "no active user session");
    }
}
