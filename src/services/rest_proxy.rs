// ============================================================================
// REST PROXY - cache-keyed memoization over RestService::fetch
// ============================================================================
// Lives for the page lifetime. There is no TTL, no eviction and no
// de-duplication of concurrent misses; callers invalidate keys explicitly.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::services::rest::{FetchArgs, RestService};

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, Value>,
}

impl ResponseCache {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Decodes the cached value for `key`. A value that no longer matches
    /// `T` counts as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("⚠️ Cached value for {} has an unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Stores `value` unless it is JSON `null`. Returns whether it was stored.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> bool {
        if value.is_null() {
            return false;
        }
        self.entries.insert(key.into(), value);
        true
    }

    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

thread_local! {
    static CACHE: Rc<RefCell<ResponseCache>> = Rc::new(RefCell::new(ResponseCache::default()));
}

fn shared_cache() -> Rc<RefCell<ResponseCache>> {
    CACHE.with(Rc::clone)
}

#[derive(Clone, Debug)]
pub struct FetchProxyArgs {
    pub cache_key: String,
    pub fetch: FetchArgs,
}

impl FetchProxyArgs {
    pub fn new(cache_key: impl Into<String>, fetch: FetchArgs) -> Self {
        Self {
            cache_key: cache_key.into(),
            fetch,
        }
    }
}

pub struct RestServiceProxy;

impl RestServiceProxy {
    pub async fn fetch<T: DeserializeOwned>(args: FetchProxyArgs) -> Result<Option<T>, ApiError> {
        let FetchProxyArgs { cache_key, fetch } = args;
        let cache = shared_cache();
        fetch_through(&cache, &cache_key, &fetch.url, || async {
            RestService::fetch::<Value>(&fetch).await
        })
        .await
    }

    pub fn invalidate_cache(cache_key: &str) -> bool {
        let removed = shared_cache().borrow_mut().invalidate(cache_key);
        if removed {
            log::debug!("🗑️ Cache invalidated: {}", cache_key);
        }
        removed
    }

    pub fn clear_cache() {
        shared_cache().borrow_mut().clear();
    }
}

/// Serves `key` from `cache`, falling back to `load` on a miss. Only
/// non-null results are stored. The cache is never borrowed across the
/// await point.
pub(crate) async fn fetch_through<T, F, Fut>(
    cache: &RefCell<ResponseCache>,
    key: &str,
    url: &str,
    load: F,
) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<Value>, ApiError>>,
{
    let hit = cache.borrow().get::<T>(key);
    if let Some(data) = hit {
        log::debug!("📦 Cache hit: {}", key);
        return Ok(Some(data));
    }

    log::debug!("🔍 Cache miss: {}", key);
    let value = match load().await? {
        Some(value) if !value.is_null() => value,
        _ => return Ok(None),
    };

    let data = serde_json::from_value::<T>(value.clone()).map_err(|e| ApiError::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    cache.borrow_mut().insert(key, value);
    Ok(Some(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn insert_skips_null_and_invalidate_reports_removal() {
        let mut cache = ResponseCache::default();
        assert!(!cache.insert("USER", Value::Null));
        assert!(cache.is_empty());

        assert!(cache.insert("USER", json!({"id": 1})));
        assert!(cache.contains("USER"));
        assert_eq!(cache.len(), 1);

        assert!(cache.invalidate("USER"));
        assert!(!cache.invalidate("USER"));
        assert!(cache.is_empty());
    }

    #[test]
    fn miss_loads_and_stores_then_hit_skips_loader() {
        let cache = RefCell::new(ResponseCache::default());
        let calls = Cell::new(0);

        let load = || {
            calls.set(calls.get() + 1);
            async { Ok(Some(json!({"products": [1, 2, 3]}))) }
        };

        let first: Option<Value> = block_on(fetch_through(&cache, "PROJECTS", "u", load)).unwrap();
        assert_eq!(first, Some(json!({"products": [1, 2, 3]})));
        assert_eq!(calls.get(), 1);

        let second: Option<Value> = block_on(fetch_through(&cache, "PROJECTS", "u", || {
            calls.set(calls.get() + 1);
            async { Ok(Some(json!({"products": []}))) }
        }))
        .unwrap();
        assert_eq!(second, first);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn invalidated_key_is_fetched_again() {
        let cache = RefCell::new(ResponseCache::default());
        cache.borrow_mut().insert("PROJECT::3", json!({"v": 1}));
        assert!(cache.borrow_mut().invalidate("PROJECT::3"));

        let fresh: Option<Value> = block_on(fetch_through(&cache, "PROJECT::3", "u", || async {
            Ok(Some(json!({"v": 2})))
        }))
        .unwrap();
        assert_eq!(fresh, Some(json!({"v": 2})));
        assert_eq!(cache.borrow().get::<Value>("PROJECT::3"), Some(json!({"v": 2})));
    }

    #[test]
    fn empty_results_are_not_cached() {
        let cache = RefCell::new(ResponseCache::default());

        let none: Option<Value> =
            block_on(fetch_through(&cache, "USER", "u", || async { Ok(None) })).unwrap();
        assert_eq!(none, None);

        let null: Option<Value> =
            block_on(fetch_through(&cache, "USER", "u", || async { Ok(Some(Value::Null)) })).unwrap();
        assert_eq!(null, None);
        assert!(cache.borrow().is_empty());
    }

    #[test]
    fn loader_errors_propagate_and_leave_cache_untouched() {
        let cache = RefCell::new(ResponseCache::default());
        let err = ApiError::Network {
            method: "GET",
            url: "u".to_string(),
            message: "offline".to_string(),
        };
        let expected = err.clone();

        let result: Result<Option<Value>, ApiError> =
            block_on(fetch_through(&cache, "USER", "u", move || async move { Err(err) }));
        assert_eq!(result, Err(expected));
        assert!(cache.borrow().is_empty());
    }

    #[test]
    fn shape_mismatch_is_a_parse_error_and_not_cached() {
        let cache = RefCell::new(ResponseCache::default());
        let result: Result<Option<u32>, ApiError> = block_on(fetch_through(
            &cache,
            "USER",
            "https://dummyjson.com/users/1",
            || async { Ok(Some(json!({"id": 1}))) },
        ));
        assert!(matches!(result, Err(ApiError::Parse { ref url, .. }) if url == "https://dummyjson.com/users/1"));
        assert!(cache.borrow().is_empty());
    }

    #[test]
    fn typed_hit_decodes_stored_json() {
        let cache = RefCell::new(ResponseCache::default());
        cache.borrow_mut().insert("COUNT", json!(7));
        let hit: Option<u32> = block_on(fetch_through(&cache, "COUNT", "u", || async {
            Ok(Some(json!(0)))
        }))
        .unwrap();
        assert_eq!(hit, Some(7));
    }
}
