use super::*;

use crate::net::types::{FlashMessage, PageData};

#[test]
fn parse_json_decodes_page_data() {
    let raw = r#"{"flashes":[{"category":"success","text":"Saved"}]}"#;
    let page: PageData = parse_json(raw).unwrap();
    assert_eq!(page.flashes, vec![FlashMessage { category: "success".into(), text: "Saved".into() }]);
    assert!(page.users.is_empty());
}

#[test]
fn parse_json_reports_malformed_payload() {
    let result = parse_json::<PageData>("{\"flashes\": 3}");
    assert!(matches!(result, Err(UiError::Payload(_))));
}

#[test]
fn script_safe_escapes_closing_tags() {
    let page = PageData {
        flashes: vec![FlashMessage { category: "info".into(), text: "</script><b>".into() }],
        ..PageData::default()
    };
    let raw = script_safe(&page).unwrap();
    assert!(!raw.contains("</"));
    let back: PageData = parse_json(&raw).unwrap();
    assert_eq!(back.flashes[0].text, "</script><b>");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_json_is_none_without_browser() {
    assert_eq!(read_json::<PageData>("page-data"), None);
}
