use super::*;

#[test]
fn memory_credentials_start_empty() {
    assert_eq!(MemoryCredentials::new().load(), None);
}

#[test]
fn memory_credentials_save_overwrites() {
    let store = MemoryCredentials::with_token("old");
    store.save("new");
    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn memory_credentials_clear_removes_token() {
    let store = MemoryCredentials::with_token("abc");
    store.clear();
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    let store = LocalStorageCredentials::new("token");
    store.save("abc");
    assert_eq!(store.load(), None);
    store.clear();
}
