use std::sync::Once;

use pagecheck_core::{
    has_html5_doctype, DoctypeInfo, HttpMethod, MemoryPage, OriginKind, PageContext,
    ValidationRequest, ValidatorEndpoint, DOCTYPE_PREFIX, HTML_CONTENT_TYPE,
};
use pretty_assertions::assert_eq;
use url::{form_urlencoded, Url};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pagecheck_logging::initialize_for_tests);
}

fn page(address: &str) -> MemoryPage {
    MemoryPage::new(
        Url::parse(address).unwrap(),
        "<html><head></head><body><p>hi</p></body></html>",
    )
}

#[test]
fn html_doctype_is_valid_in_any_case() {
    init_logging();
    for name in ["html", "HTML", "Html"] {
        let doctype = DoctypeInfo::new(name, "", "");
        assert!(has_html5_doctype(Some(&doctype)), "{name}");
    }
    let legacy_compat = DoctypeInfo::new("html", "", "about:legacy-compat");
    assert!(has_html5_doctype(Some(&legacy_compat)));
}

#[test]
fn missing_or_other_doctype_is_invalid() {
    init_logging();
    assert!(!has_html5_doctype(None));
    assert!(!has_html5_doctype(Some(&DoctypeInfo::new("svg", "", ""))));
    let xhtml = DoctypeInfo::new(
        "html",
        "-//W3C//DTD XHTML 1.0 Strict//EN",
        "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd",
    );
    assert!(!has_html5_doctype(Some(&xhtml)));
}

#[test]
fn local_file_is_posted_with_doctype_prefix() {
    init_logging();
    let endpoint = ValidatorEndpoint::default();
    for page in [
        page("file:///tmp/index.html"),
        page("file:///tmp/index.html").with_doctype(DoctypeInfo::html5()),
    ] {
        let request = ValidationRequest::for_page(&endpoint, &page);
        assert_eq!(request.origin, OriginKind::LocalFile);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.content_type, Some(HTML_CONTENT_TYPE));
        assert_eq!(request.url.as_str(), "https://html5.validator.nu/?out=json");
        let body = request.body.unwrap();
        assert!(body.starts_with("<!DOCTYPE html>\n"));
        assert_eq!(
            &body[DOCTYPE_PREFIX.len()..],
            "<html><head></head><body><p>hi</p></body></html>"
        );
    }
}

#[test]
fn hosted_page_is_checked_by_address() {
    init_logging();
    let endpoint = ValidatorEndpoint::default();
    for address in [
        "https://example.com/docs/page.html?lang=en&x=1#top",
        "http://localhost:8080/",
    ] {
        let page = page(address);
        let request = ValidationRequest::for_page(&endpoint, &page);
        assert_eq!(request.origin, OriginKind::Hosted);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.content_type, None);
        assert_eq!(request.body, None);

        let expected_address = page.address().to_string();
        let encoded: String =
            form_urlencoded::byte_serialize(expected_address.as_bytes()).collect();
        let query = request.url.query().unwrap();
        assert!(query.starts_with("out=json&"));
        assert!(query.contains(&format!("doc={encoded}")));

        let doc = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "doc")
            .map(|(_, value)| value.into_owned());
        assert_eq!(doc.as_deref(), Some(expected_address.as_str()));
    }
}

#[test]
fn custom_endpoint_keeps_its_path() {
    init_logging();
    let endpoint = ValidatorEndpoint::parse("http://127.0.0.1:8888/nu/").unwrap();
    assert_eq!(endpoint.json_url().as_str(), "http://127.0.0.1:8888/nu/?out=json");
}

