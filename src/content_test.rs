use super::*;

const CASES: &str = r#"
- title: Acme
  slug: acme
  media:
    - file:
        url: https://cdn/x.jpg
      title: Acme
  technologies: [React]
- title: Bare
  slug: bare
"#;

fn parse_cases(raw: &str) -> Vec<Case> {
    parse_file(Path::new(CASES_FILE), raw).expect("cases should parse")
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("portfolio-content-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn parses_cases_in_order_with_defaults() {
    let cases = parse_cases(CASES);
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].slug, "acme");
    assert_eq!(cases[0].media[0].file.url, "https://cdn/x.jpg");
    assert_eq!(cases[0].technologies, vec!["React".to_owned()]);
    assert!(cases[1].media.is_empty());
}

#[test]
fn empty_file_is_empty_list() {
    assert!(parse_cases("   \n").is_empty());
}

#[test]
fn malformed_yaml_is_parse_error() {
    let err = parse_file::<Case>(Path::new("cases.yaml"), "- title: [unterminated").unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }));
    assert!(err.to_string().starts_with("failed to parse cases.yaml"));
}

#[test]
fn duplicate_case_slug_is_rejected() {
    let mut cases = parse_cases(CASES);
    cases[1].slug = "acme".to_owned();
    let err = build(cases, vec![]).unwrap_err();
    assert_eq!(err.to_string(), "duplicate case slug: acme");
}

#[test]
fn build_keeps_cases_without_media() {
    let content = build(parse_cases(CASES), vec![]).unwrap();
    assert_eq!(content.cases().len(), 2);
    assert!(content.case("bare").is_some());
}

#[test]
fn load_dir_reads_cases_and_optional_pages() {
    let dir = temp_dir("ok");
    std::fs::write(dir.join(CASES_FILE), CASES).unwrap();
    let content = load_dir(&dir).unwrap();
    assert_eq!(content.cases().len(), 2);
    assert!(content.pages().is_empty());

    std::fs::write(dir.join(PAGES_FILE), "- title: Kontakt\n  slug: kontakt\n  body: Hej\n").unwrap();
    let content = load_dir(&dir).unwrap();
    assert_eq!(content.page("kontakt").map(|p| p.body.as_str()), Some("Hej"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_dir_without_cases_is_read_error() {
    let dir = temp_dir("missing");
    let err = load_dir(&dir).unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bundled_content_loads() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    let content = load_dir(&dir).expect("bundled content should be valid");
    assert!(!content.cases().is_empty());
    assert!(!content.pages().is_empty());
}
