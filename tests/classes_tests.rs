// Host-side tests for the class-list model and click toggling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod classes {
    include!("../src/core/classes.rs");
}

use classes::*;

#[test]
fn from_attr_drops_duplicates_and_extra_whitespace() {
    let set = ClassSet::from_attr("  card   animate card\thero ");
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_attr(), "card animate hero");
}

#[test]
fn add_is_idempotent() {
    let mut set = ClassSet::from_attr("hero");
    set.add("animate");
    set.add("animate");
    assert_eq!(set.to_attr(), "hero animate");
}

#[test]
fn remove_absent_class_is_noop() {
    let mut set = ClassSet::from_attr("hero");
    set.remove("animate");
    assert_eq!(set, ClassSet::from_attr("hero"));
}

#[test]
fn toggle_alternates_across_clicks() {
    let mut button = ClassSet::from_attr("animate-button");
    assert!(toggle_class(&mut button, "active")); // click 1
    assert!(button.contains("active"));
    assert!(!toggle_class(&mut button, "active")); // click 2
    assert!(!button.contains("active"));
    assert!(toggle_class(&mut button, "active")); // click 3
    assert!(button.contains("active"));
}

#[test]
fn toggle_leaves_trigger_class_alone() {
    let mut button = ClassSet::from_attr("animate-button");
    for _ in 0..5 {
        toggle_class(&mut button, "active");
        assert!(button.contains("animate-button"));
    }
}

#[test]
fn toggle_on_preset_active_removes_first() {
    let mut button = ClassSet::from_attr("animate-button active");
    assert!(!toggle_class(&mut button, "active"));
    assert_eq!(button.to_attr(), "animate-button");
}

#[test]
fn empty_set_reports_empty() {
    let set = ClassSet::new();
    assert!(set.is_empty());
    assert_eq!(set.to_attr(), "");
}

// Mirrors the DOM token list impl: only contains/add/remove are provided, so
// toggling runs through the trait's default.
#[derive(Default)]
struct RecordingList {
    inner: ClassSet,
    ops: Vec<String>,
}

impl ClassList for RecordingList {
    fn contains(&self, class: &str) -> bool {
        self.inner.contains(class)
    }

    fn add(&mut self, class: &str) {
        self.ops.push(format!("add {class}"));
        self.inner.add(class);
    }

    fn remove(&mut self, class: &str) {
        self.ops.push(format!("remove {class}"));
        self.inner.remove(class);
    }
}

#[test]
fn default_toggle_alternates_through_add_and_remove() {
    let mut button = RecordingList::default();
    assert!(toggle_class(&mut button, "active"));
    assert!(!toggle_class(&mut button, "active"));
    assert!(toggle_class(&mut button, "active"));
    assert_eq!(
        button.ops,
        vec!["add active", "remove active", "add active"]
    );
    assert!(button.contains("active"));
}
