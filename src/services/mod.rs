pub mod constants;
pub mod cookie;
pub mod rest;
pub mod rest_proxy;

pub use cookie::CookieService;
pub use rest::{FetchArgs, HttpMethod, MutateArgs, RestService};
pub use rest_proxy::{FetchProxyArgs, ResponseCache, RestServiceProxy};
