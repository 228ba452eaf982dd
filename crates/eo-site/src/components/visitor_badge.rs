//! Visitor counter badge
//!
//! Asks the remote counting service to bump the site counter and shows the
//! returned total. When the service is unreachable the count degrades to a
//! per-browser counter in local storage, incremented once per session; only
//! a storage failure surfaces a visible (non-crashing) error glyph.

use eo_core::visitors::{self, KeyValueStore, StoreError};
use gloo_net::http::Request;
use leptos::*;
use web_sys::Storage;

#[component]
pub fn VisitorBadge(#[prop(optional)] class: &'static str) -> impl IntoView {
    let (count, set_count) = create_signal(None::<u64>);
    let (error, set_error) = create_signal(false);

    // Exactly one request per mount; never re-issued on re-render.
    create_effect(move |_| {
        spawn_local(async move {
            match hit_remote_counter().await {
                Some(value) => set_count.set(Some(value)),
                None => {
                    match visitors::local_fallback_count(&BrowserStore::Local, &BrowserStore::Session)
                    {
                        Ok(value) => set_count.set(Some(value)),
                        Err(_) => set_error.set(true),
                    }
                }
            }
        });
    });

    // Nothing is rendered until the count resolves, avoiding a layout flash.
    view! {
        {move || {
            if error.get() {
                return Some(
                    view! {
                        <span class=format!("text-xs text-gray-400 {}", class)>"\u{1F9EE} ?"</span>
                    }
                    .into_view(),
                );
            }
            count.get().map(|value| {
                view! {
                    <div
                        class=format!(
                            "flex items-center gap-1 px-2 py-0.5 bg-indigo-100 text-indigo-600 rounded-full text-xs font-medium {}",
                            class
                        )
                        data-testid="counter-footer-views"
                    >
                        <span>"\u{1F465}"</span>
                        <span>{value}</span>
                    </div>
                }
                .into_view()
            })
        }}
    }
}

/// Browser-storage implementation of the core key-value capability.
enum BrowserStore {
    Local,
    Session,
}

impl BrowserStore {
    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = match self {
            BrowserStore::Local => window.local_storage(),
            BrowserStore::Session => window.session_storage(),
        };
        storage.ok().flatten().ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StoreError::Access(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Access(key.to_string()))
    }
}

/// Ask the counting service for the post-increment total. Returns `None` on
/// any network, status, or body-shape failure.
async fn hit_remote_counter() -> Option<u64> {
    let url = visitors::counter_url(
        visitors::COUNTER_ENDPOINT,
        visitors::COUNTER_NAMESPACE,
        visitors::COUNTER_KEY,
    );
    let response = Request::get(&url).send().await.ok()?;
    if !response.ok() {
        return None;
    }
    let body: serde_json::Value = response.json().await.ok()?;
    visitors::remote_count(&body)
}
