use super::*;

// =============================================================
// Helpers
// =============================================================

struct BrokenBackend;

impl SessionBackend for BrokenBackend {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> Result<(), SessionError> {
        Err(SessionError::Storage("quota exceeded".to_owned()))
    }

    fn remove(&self) -> Result<(), SessionError> {
        Err(SessionError::Storage("storage disabled".to_owned()))
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_rejects_blank_token() {
    assert_eq!(Session::new("   "), Err(SessionError::EmptyToken));
}

#[test]
fn session_debug_hides_token() {
    let session = Session::new("secret-token").expect("session");
    assert!(!format!("{session:?}").contains("secret-token"));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_empty_with_empty_backend() {
    let store = SessionStore::in_memory();
    assert!(store.get().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn set_then_get_returns_token() {
    let store = SessionStore::in_memory();
    store.set("abc").expect("set");
    assert_eq!(store.get().map(|s| s.token().to_owned()), Some("abc".to_owned()));
    assert!(store.is_authenticated());
}

#[test]
fn set_rejects_empty_token_and_keeps_previous() {
    let store = SessionStore::in_memory();
    store.set("first").expect("set");
    assert_eq!(store.set(""), Err(SessionError::EmptyToken));
    assert_eq!(store.get().map(|s| s.token().to_owned()), Some("first".to_owned()));
}

#[test]
fn clear_twice_leaves_session_absent() {
    let store = SessionStore::in_memory();
    store.set("abc").expect("set");
    store.clear();
    assert!(store.get().is_none());
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn store_restores_persisted_token() {
    let store = SessionStore::new(MemoryBackend::with_token("persisted"));
    assert_eq!(store.get().map(|s| s.token().to_owned()), Some("persisted".to_owned()));
}

#[test]
fn store_ignores_blank_persisted_token() {
    let store = SessionStore::new(MemoryBackend::with_token("  "));
    assert!(store.get().is_none());
}

#[test]
fn set_surfaces_storage_failure() {
    let store = SessionStore::new(BrokenBackend);
    assert!(matches!(store.set("abc"), Err(SessionError::Storage(_))));
    assert!(store.get().is_none());
}

#[test]
fn clear_swallows_storage_failure() {
    let store = SessionStore::new(BrokenBackend);
    store.clear();
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn store_debug_does_not_leak_token() {
    let store = SessionStore::in_memory();
    store.set("very-secret").expect("set");
    let rendered = format!("{store:?}");
    assert!(rendered.contains("authenticated: true"));
    assert!(!rendered.contains("very-secret"));
}
