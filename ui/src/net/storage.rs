//! `localStorage`-backed credential store.
//!
//! Storage access is best-effort: a browser with storage disabled behaves
//! like an empty store. Outside the `csr` build every call is a no-op.

use finansrisk::TokenStore;
use finansrisk::config::TOKEN_STORAGE_KEY;

#[derive(Debug, Clone, Copy)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(self.key, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.key, token);
        }
    }

    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.key;
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}
