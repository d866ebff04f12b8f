use super::*;

#[test]
fn case_deserializes_with_optional_fields_missing() {
    let json = r#"{
        "title": "Acme",
        "slug": "acme",
        "media": [{ "file": { "url": "https://cdn/x.jpg" }, "title": "Acme" }],
        "technologies": ["React"]
    }"#;
    let case: Case = serde_json::from_str(json).expect("case should parse");
    assert_eq!(case.slug, "acme");
    assert_eq!(case.media[0].file.url, "https://cdn/x.jpg");
    assert_eq!(case.technologies, vec!["React".to_owned()]);
    assert_eq!(case.summary, None);
    assert_eq!(case.body, None);
}

#[test]
fn case_without_media_defaults_to_empty_list() {
    let case: Case = serde_json::from_str(r#"{ "title": "Bare", "slug": "bare" }"#).unwrap();
    assert!(case.media.is_empty());
    assert!(case.technologies.is_empty());
    assert!(case.preview_media().is_none());
}

#[test]
fn preview_media_is_first_item() {
    let media = |url: &str| Media { file: MediaFile { url: url.to_owned() }, title: url.to_owned() };
    let case = Case {
        title: "Two".to_owned(),
        slug: "two".to_owned(),
        media: vec![media("a.jpg"), media("b.jpg")],
        technologies: vec![],
        summary: None,
        body: None,
    };
    assert_eq!(case.preview_media().map(|m| m.file.url.as_str()), Some("a.jpg"));
}

#[test]
fn page_body_defaults_to_empty() {
    let page: Page = serde_json::from_str(r#"{ "title": "Kontakt", "slug": "kontakt" }"#).unwrap();
    assert_eq!(page.body, "");
}
