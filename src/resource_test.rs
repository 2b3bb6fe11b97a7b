use super::*;

#[derive(Debug, PartialEq)]
struct Rows(Vec<u32>);

impl IsEmpty for Rows {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_resource_is_pending() {
    let resource = RemoteResource::<Rows>::new();
    assert!(resource.is_pending());
    assert_eq!(resource.presentation(), Presentation::Loading);
}

#[test]
fn commit_ok_loads_value() {
    let mut resource = RemoteResource::new();
    let ticket = resource.begin();
    assert!(resource.commit(ticket, Ok::<_, String>(Rows(vec![1, 2]))));
    assert_eq!(resource.value(), Some(&Rows(vec![1, 2])));
    assert_eq!(resource.presentation(), Presentation::Ready(&Rows(vec![1, 2])));
}

#[test]
fn commit_err_fails_with_message() {
    let mut resource = RemoteResource::<Rows>::new();
    let ticket = resource.begin();
    assert!(resource.commit(ticket, Err("boom")));
    assert_eq!(resource.error(), Some("boom"));
    assert_eq!(resource.presentation(), Presentation::Failed("boom"));
}

#[test]
fn loaded_empty_value_presents_as_empty() {
    let mut resource = RemoteResource::new();
    let ticket = resource.begin();
    resource.commit(ticket, Ok::<_, String>(Rows(Vec::new())));
    assert_eq!(resource.presentation(), Presentation::Empty);
}

#[test]
fn option_payload_none_presents_as_empty() {
    let mut resource = RemoteResource::<Option<u32>>::new();
    let ticket = resource.begin();
    resource.commit(ticket, Ok::<_, String>(None));
    assert_eq!(resource.presentation(), Presentation::Empty);
}

#[test]
fn begin_returns_loaded_resource_to_pending() {
    let mut resource = RemoteResource::new();
    let first = resource.begin();
    resource.commit(first, Ok::<_, String>(Rows(vec![1])));
    let _second = resource.begin();
    assert!(resource.is_pending());
    assert!(resource.value().is_none());
}

// =============================================================
// Stale-response guard
// =============================================================

#[test]
fn later_activation_wins_when_earlier_resolves_last() {
    let mut resource = RemoteResource::new();
    let a = resource.begin();
    let b = resource.begin();

    assert!(resource.commit(b, Ok::<_, String>(Rows(vec![2]))));
    assert!(!resource.commit(a, Ok::<_, String>(Rows(vec![1]))));

    assert_eq!(resource.value(), Some(&Rows(vec![2])));
}

#[test]
fn stale_failure_does_not_replace_pending_state() {
    let mut resource = RemoteResource::<Rows>::new();
    let a = resource.begin();
    let _b = resource.begin();
    assert!(!resource.commit(a, Err("timeout")));
    assert!(resource.is_pending());
}

#[test]
fn ticket_cannot_commit_twice_after_new_activation() {
    let mut resource = RemoteResource::new();
    let a = resource.begin();
    assert!(resource.commit(a, Ok::<_, String>(Rows(vec![1]))));
    let b = resource.begin();
    assert!(!resource.commit(a, Ok::<_, String>(Rows(vec![9]))));
    assert!(resource.commit(b, Ok::<_, String>(Rows(vec![3]))));
    assert_eq!(resource.value(), Some(&Rows(vec![3])));
}
