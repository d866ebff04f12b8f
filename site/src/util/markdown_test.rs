use super::*;

#[test]
fn renders_paragraphs_and_emphasis() {
    assert_eq!(render("Hej *där*"), "<p>Hej <em>där</em></p>\n");
}

#[test]
fn renders_links() {
    let html = render("[Kontakt](/kontakt)");
    assert!(html.contains(r#"<a href="/kontakt">Kontakt</a>"#));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render(""), "");
}
