use super::*;
use supply_dash::SessionStore;

fn backend(dir: &tempfile::TempDir) -> FileBackend {
    FileBackend::new(dir.path().join("nested").join("session"))
}

#[test]
fn missing_file_loads_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(backend(&dir).load(), None);
}

#[test]
fn save_creates_parent_and_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = backend(&dir);
    file.save("tok-1").expect("save");
    assert_eq!(file.load().as_deref(), Some("tok-1"));
}

#[test]
fn whitespace_only_file_is_no_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session");
    fs::write(&path, "  \n").expect("write");
    assert_eq!(FileBackend::new(path).load(), None);
}

#[test]
fn remove_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = backend(&dir);
    file.save("tok-1").expect("save");
    file.remove().expect("first remove");
    file.remove().expect("second remove");
    assert_eq!(file.load(), None);
}

#[test]
fn store_restores_session_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session");

    let first = SessionStore::new(FileBackend::new(path.clone()));
    first.set("persisted").expect("set");

    let second = SessionStore::new(FileBackend::new(path.clone()));
    assert_eq!(second.get().map(|s| s.token().to_owned()), Some("persisted".to_owned()));

    second.clear();
    assert!(!SessionStore::new(FileBackend::new(path)).is_authenticated());
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = backend(&dir);
    file.save("tok-1").expect("save");
    let mode = fs::metadata(&file.path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn existing_world_readable_file_is_tightened() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session");
    fs::write(&path, "old").expect("write");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

    let file = FileBackend::new(path.clone());
    file.save("tok-2").expect("save");
    assert_eq!(fs::metadata(&path).expect("metadata").permissions().mode() & 0o777, 0o600);
    assert_eq!(file.load().as_deref(), Some("tok-2"));
}
