use super::*;

fn case(slug: &str) -> Case {
    Case {
        title: slug.to_uppercase(),
        slug: slug.to_owned(),
        media: vec![],
        technologies: vec![],
        summary: None,
        body: None,
    }
}

#[test]
fn default_content_is_empty() {
    let content = SiteContent::default();
    assert!(content.cases().is_empty());
    assert!(content.pages().is_empty());
}

#[test]
fn cases_keep_configured_order() {
    let content = SiteContent::new(vec![case("b"), case("a")], vec![]);
    let slugs: Vec<_> = content.cases().iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["b", "a"]);
}

#[test]
fn lookup_by_slug() {
    let page = Page { title: "Om oss".to_owned(), slug: "om-oss".to_owned(), body: String::new() };
    let content = SiteContent::new(vec![case("acme")], vec![page]);
    assert_eq!(content.case("acme").map(|c| c.title.as_str()), Some("ACME"));
    assert!(content.case("missing").is_none());
    assert_eq!(content.page("om-oss").map(|p| p.title.as_str()), Some("Om oss"));
    assert!(content.page("acme").is_none());
}
