use storefront::selection::Selection;

#[test]
fn toggle_on_adds_id_once() {
    let mut selection = Selection::new();
    selection.toggle("a", true);
    selection.toggle("a", true);

    assert_eq!(selection.len(), 1);
    assert!(selection.contains("a"));
}

#[test]
fn toggle_off_absent_id_is_noop() {
    let mut selection = Selection::new();
    selection.toggle("a", true);
    selection.toggle("b", false);

    assert_eq!(selection.len(), 1);
    assert!(selection.contains("a"));
}

#[test]
fn toggle_off_removes_id() {
    let mut selection = Selection::new();
    selection.toggle("a", true);
    selection.toggle("b", true);
    selection.toggle("a", false);

    assert_eq!(selection.len(), 1);
    assert!(!selection.contains("a"));
    assert!(selection.contains("b"));
}

#[test]
fn insertion_order_is_preserved() {
    let mut selection = Selection::new();
    selection.toggle("c", true);
    selection.toggle("a", true);
    selection.toggle("b", true);

    assert_eq!(selection.ids(), ["c", "a", "b"]);
}

#[test]
fn non_empty_drives_checkout_enablement() {
    let mut selection = Selection::new();
    assert!(!selection.is_non_empty());

    selection.toggle("a", true);
    assert!(selection.is_non_empty());

    selection.toggle("a", false);
    assert!(!selection.is_non_empty());
    assert!(selection.is_empty());
}
