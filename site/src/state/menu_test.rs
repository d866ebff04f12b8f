use super::*;

#[test]
fn main_menu_starts_with_root() {
    let menu = Menu::main();
    assert!(!menu.items().is_empty());
    assert!(menu.items()[0].is_root());
}

#[test]
fn root_slug_links_to_root() {
    let link = MenuItem { label: "Hem", slug: "/" }.link();
    assert_eq!(link.href, "/");
    assert_eq!(link.as_path, "/");
}

#[test]
fn other_slug_links_through_page_route() {
    let link = MenuItem { label: "X", slug: "x" }.link();
    assert_eq!(link.href, "/page?slug=x");
    assert_eq!(link.as_path, "/x");
    assert_eq!(link.label, "X");
}

#[test]
fn main_menu_slugs_are_unique() {
    let items = Menu::main().items();
    for (i, a) in items.iter().enumerate() {
        assert!(items[i + 1..].iter().all(|b| b.slug != a.slug), "duplicate slug {}", a.slug);
    }
}
