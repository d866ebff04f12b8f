#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn class_matches_dark_theme_selector() {
    assert_eq!(
        format!(".{DARK_MODE_CLASS}"),
        crate::styles::theme::DARK.selector
    );
}
