//! Visitor counting with a local fallback
//!
//! The remote counting service is the authority on the visitor total. When
//! it cannot be reached, the count degrades to a per-browser counter held in
//! an injected key-value store, incremented at most once per browsing
//! session. The two counts are never reconciled afterwards.

use serde_json::Value;
use thiserror::Error;

/// Persistent key holding the locally derived visitor count.
pub const LOCAL_COUNT_KEY: &str = "english-online-local-count";

/// Session key marking that this browsing session was already counted.
pub const SESSION_FLAG_KEY: &str = "english-online-session";

/// Namespace registered with the remote counting service.
pub const COUNTER_NAMESPACE: &str = "my-english-online";

/// Counter name within the namespace.
pub const COUNTER_KEY: &str = "visitors";

/// Hit endpoint of the remote counting service.
pub const COUNTER_ENDPOINT: &str = "https://countapi.xyz/hit";

const SESSION_FLAG_VALUE: &str = "1";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage access failed for key: {0}")]
    Access(String),
}

/// Minimal key-value capability backing the fallback counter.
///
/// Implemented over browser storage in the site crate and over an in-memory
/// map in tests, so the fallback policy stays independent of the platform.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Build the hit URL for a namespace/key pair, percent-encoding both parts.
pub fn counter_url(endpoint: &str, namespace: &str, key: &str) -> String {
    format!(
        "{}/{}/{}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(namespace),
        urlencoding::encode(key)
    )
}

/// Extract the post-increment total from a counting service response body.
///
/// Returns `None` unless the body is an object with a numeric `value` field.
pub fn remote_count(body: &Value) -> Option<u64> {
    body.get("value")?.as_u64()
}

/// Derive the fallback count from persistent and session storage.
///
/// The persisted count is incremented only when this session has not been
/// counted yet; repeated mounts within one session observe a stable value.
pub fn local_fallback_count(
    local: &dyn KeyValueStore,
    session: &dyn KeyValueStore,
) -> Result<u64, StoreError> {
    let stored = local
        .get(LOCAL_COUNT_KEY)?
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);

    let already_counted = session.get(SESSION_FLAG_KEY)?.as_deref() == Some(SESSION_FLAG_VALUE);
    if already_counted {
        return Ok(stored);
    }

    let next = stored + 1;
    local.set(LOCAL_COUNT_KEY, &next.to_string())?;
    session.set(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Access(key.to_string()))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Access(key.to_string()))
        }
    }

    #[test]
    fn test_first_visit_counts_once_and_persists() {
        let local = MemoryStore::default();
        let session = MemoryStore::default();

        let count = local_fallback_count(&local, &session).unwrap();
        assert_eq!(count, 1);
        assert_eq!(local.get(LOCAL_COUNT_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(session.get(SESSION_FLAG_KEY).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_second_mount_in_same_session_does_not_double_count() {
        let local = MemoryStore::default();
        let session = MemoryStore::default();

        assert_eq!(local_fallback_count(&local, &session).unwrap(), 1);
        assert_eq!(local_fallback_count(&local, &session).unwrap(), 1);
        assert_eq!(local.get(LOCAL_COUNT_KEY).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_new_session_increments_persisted_count() {
        let local = MemoryStore::default();
        local.set(LOCAL_COUNT_KEY, "41").unwrap();

        let count = local_fallback_count(&local, &MemoryStore::default()).unwrap();
        assert_eq!(count, 42);
        assert_eq!(local.get(LOCAL_COUNT_KEY).unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn test_unparseable_stored_count_restarts_from_zero() {
        let local = MemoryStore::default();
        local.set(LOCAL_COUNT_KEY, "not a number").unwrap();

        assert_eq!(
            local_fallback_count(&local, &MemoryStore::default()).unwrap(),
            1
        );
    }

    #[test]
    fn test_broken_storage_surfaces_an_error() {
        let result = local_fallback_count(&BrokenStore, &BrokenStore);
        assert!(matches!(result, Err(StoreError::Access(_))));
    }

    #[test]
    fn test_remote_count_requires_numeric_value_field() {
        assert_eq!(remote_count(&json!({"value": 42})), Some(42));
        assert_eq!(remote_count(&json!({"value": "42"})), None);
        assert_eq!(remote_count(&json!({"count": 42})), None);
        assert_eq!(remote_count(&json!(42)), None);
        assert_eq!(remote_count(&json!(null)), None);
    }

    #[test]
    fn test_counter_url_percent_encodes_both_parts() {
        let url = counter_url("https://countapi.xyz/hit/", "my site", "visitors/total");
        assert_eq!(url, "https://countapi.xyz/hit/my%20site/visitors%2Ftotal");
    }
}
