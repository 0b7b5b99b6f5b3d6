//! Durable bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only writer. The browser implementation keeps the
//! raw token string in `localStorage` under a fixed key; absence of the entry
//! means logged out. SSR and native builds have no storage and no-op.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Persisted home of the bearer token across reloads.
pub trait TokenStore {
    /// Previously saved token, if any. Empty strings count as absent.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// `window.localStorage` backed token store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.get_item(TOKEN_KEY).ok().flatten().filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
