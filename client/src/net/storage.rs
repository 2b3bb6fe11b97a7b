//! `localStorage` session persistence.
//!
//! The token is stored under [`SESSION_STORAGE_KEY`] so a reload keeps the
//! user signed in. `web_sys::Storage` is not `Send`, so the handle is looked
//! up on every call instead of being kept in the backend.
//!
//! TRADE-OFFS
//! ==========
//! Private browsing modes may refuse storage; reads then behave as "no
//! session" and writes report a storage error the store logs and ignores.

use supply_dash::session::{SessionBackend, SessionError};
#[cfg(feature = "csr")]
use supply_dash::session::SESSION_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .ok_or_else(|| SessionError::Storage("no window".to_owned()))?
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))
}

impl SessionBackend for LocalStorageBackend {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(SESSION_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(SESSION_STORAGE_KEY, token)
                .map_err(|_| SessionError::Storage("localStorage write rejected".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Ok(())
        }
    }

    fn remove(&self) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(SESSION_STORAGE_KEY)
                .map_err(|_| SessionError::Storage("localStorage remove rejected".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
