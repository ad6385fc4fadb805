use super::*;

#[test]
fn note_background_is_body() {
    assert_eq!(classify("phantom-note"), Some(HitPart::Body));
}

#[test]
fn note_background_with_state_classes_is_body() {
    assert_eq!(classify("phantom-note positioning"), Some(HitPart::Body));
}

#[test]
fn resize_corner_is_handle() {
    assert_eq!(classify("resize-corner"), Some(HitPart::ResizeHandle));
}

#[test]
fn resize_corner_wins_over_body() {
    assert_eq!(classify("phantom-note resize-corner"), Some(HitPart::ResizeHandle));
    assert_eq!(classify("resize-corner phantom-note"), Some(HitPart::ResizeHandle));
}

#[test]
fn interactive_elements_are_controls() {
    for class in ["note-title", "note-content", "delete-btn", "format-btn", "formatting-toolbar", "note-timestamp"] {
        assert_eq!(classify(class), Some(HitPart::Control), "class {class}");
    }
}

#[test]
fn control_wins_over_everything() {
    assert_eq!(classify("phantom-note note-title"), Some(HitPart::Control));
    assert_eq!(classify("resize-corner delete-btn"), Some(HitPart::Control));
}

#[test]
fn unknown_child_is_none() {
    assert_eq!(classify("note-header"), None);
    assert_eq!(classify(""), None);
    assert_eq!(classify("   "), None);
}

#[test]
fn class_match_is_exact() {
    assert_eq!(classify("phantom-notes"), None);
    assert_eq!(classify("note-title-wrapper"), None);
}

#[test]
fn tolerates_extra_whitespace() {
    assert_eq!(classify("  floating-toolbar\tformatting-toolbar  "), Some(HitPart::Control));
}

#[test]
fn hit_test_carries_note_id() {
    let hit = hit_test(7, "phantom-note").unwrap();
    assert_eq!(hit.note_id, 7);
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn hit_test_unknown_is_none() {
    assert!(hit_test(7, "note-header").is_none());
}
