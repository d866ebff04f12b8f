use std::collections::HashMap;

use super::*;

#[test]
fn swap_plan_maps_every_present_data_attribute() {
    let attrs: HashMap<&str, &str> = [
        ("data-src", "a.jpg?q=90&w=600"),
        ("data-srcset", "a.jpg?q=90&w=600 600w"),
        ("data-sizes", "100vw"),
    ]
    .into_iter()
    .collect();
    let plan = swap_plan(|name| attrs.get(name).map(|v| (*v).to_owned()));
    assert_eq!(
        plan,
        vec![
            ("sizes", "100vw".to_owned()),
            ("srcset", "a.jpg?q=90&w=600 600w".to_owned()),
            ("src", "a.jpg?q=90&w=600".to_owned()),
        ]
    );
}

#[test]
fn swap_plan_skips_missing_attributes() {
    let plan = swap_plan(|name| (name == "data-srcset").then(|| "x 300w".to_owned()));
    assert_eq!(plan, vec![("srcset", "x 300w".to_owned())]);
}

#[test]
fn swap_plan_for_plain_element_is_empty() {
    assert!(swap_plan(|_| None).is_empty());
}
