//! Tests for breadcrumb behaviour of the path stack

use photodeck::host::FolderRef;
use photodeck::model::{PathStack, PathStackError};

fn folder(name: &str) -> FolderRef<String> {
    FolderRef::new(name, format!("handle:{}", name))
}

fn stack(names: &[&str]) -> PathStack<String> {
    let mut stack = PathStack::rooted(names[0], folder(names[0]));
    for name in &names[1..] {
        stack.push(*name, folder(name)).unwrap();
    }
    stack
}

/// Test: Jumping to a breadcrumb keeps exactly the levels up to it
#[test]
fn test_truncate_keeps_prefix() {
    let mut path = stack(&["public", "2024", "summer", "beach"]);

    path.truncate_to(1).unwrap();

    assert_eq!(path.len(), 2);
    assert_eq!(path.names_from_root(), vec!["public", "2024"]);
    assert_eq!(path.current(), Some(&folder("2024")));
}

/// Test: Jumping to the current level changes nothing
#[test]
fn test_truncate_to_last_is_noop() {
    let mut path = stack(&["public", "2024"]);
    path.truncate_to(1).unwrap();
    assert_eq!(path.names_from_root(), vec!["public", "2024"]);
}

/// Test: An out-of-range jump is rejected and leaves the trail alone
#[test]
fn test_truncate_out_of_range() {
    let mut path = stack(&["public", "2024"]);
    assert_eq!(
        path.truncate_to(2),
        Err(PathStackError::OutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(path.len(), 2);
}

/// Test: A child cannot be pushed before a root exists
#[test]
fn test_push_on_empty_stack() {
    let mut path: PathStack<String> = PathStack::new();
    assert_eq!(path.push("x", folder("x")), Err(PathStackError::Empty));
    assert!(path.is_empty());
    assert!(path.current().is_none());
}

/// Test: Picking a new root replaces the whole trail
#[test]
fn test_reset_replaces_trail() {
    let mut path = stack(&["public", "2024", "summer"]);
    path.reset("archive", folder("archive"));
    assert_eq!(path.names_from_root(), vec!["archive"]);
    assert_eq!(path.current_name(), Some("archive"));
}

/// Test: Breadcrumb names are trimmed for display
#[test]
fn test_names_trimmed() {
    let path = stack(&[" public ", "  raw shots"]);
    assert_eq!(path.names_from_root(), vec!["public", "raw shots"]);
    assert_eq!(path.segments()[1].folder, folder("  raw shots"));
}
