use pagecheck_core::{add_warning_footer, has_html5_doctype, DoctypeInfo, PageContext};
use pagecheck_engine::HtmlPage;
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use url::Url;

fn page(markup: &str) -> HtmlPage {
    HtmlPage::new(Url::parse("file:///site/index.html").unwrap(), markup)
}

/// Inner markup of every `footer` element the HTML parser sees.
fn parsed_footers(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    let selector = Selector::parse("footer").unwrap();
    document.select(&selector).map(|footer| footer.inner_html()).collect()
}

#[test]
fn reads_html5_doctype() {
    let page = page("<!DOCTYPE html><html><head><title> Home </title></head><body></body></html>");
    assert_eq!(page.doctype(), Some(DoctypeInfo::html5()));
    assert!(has_html5_doctype(page.doctype().as_ref()));
    assert_eq!(page.title().as_deref(), Some("Home"));
}

#[test]
fn legacy_and_missing_doctypes_are_not_html5() {
    let xhtml = page(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"><html><body></body></html>"#,
    );
    let doctype = xhtml.doctype().expect("doctype present");
    assert_eq!(doctype.public_id, "-//W3C//DTD XHTML 1.0 Strict//EN");
    assert!(!has_html5_doctype(Some(&doctype)));

    let bare = page("<html><body><p>x</p></body></html>");
    assert_eq!(bare.doctype(), None);
}

#[test]
fn serialized_root_excludes_doctype() {
    let page = page("<!DOCTYPE html><html><head></head><body><p>x</p></body></html>");
    let root = page.serialized_root();
    assert!(root.starts_with("<html>"), "{root}");
    assert!(root.contains("<p>x</p>"));
    assert!(!root.contains("DOCTYPE"));
}

#[test]
fn missing_footer_is_created_once_then_reused() {
    let mut page = page("<html><body><p>x</p></body></html>");
    assert!(!page.has_footer());

    add_warning_footer(&mut page);
    assert!(page.has_footer());
    add_warning_footer(&mut page);

    let markup = page.markup();
    assert_eq!(markup.matches("<footer>").count(), 1);
    assert_eq!(markup.matches("id=\"doctype-warning\"").count(), 2);
    let footer_start = markup.find("<footer>").unwrap();
    let footer_end = markup.find("</footer>").unwrap();
    let first_warning = markup.find("doctype-warning").unwrap();
    assert!(footer_start < first_warning && first_warning < footer_end);
    assert!(markup.ends_with("</footer></body></html>"));
}

#[test]
fn existing_footer_receives_fragments() {
    let mut page = page("<html><body><main></main><FOOTER><p>(c)</p></FOOTER><script></script></body></html>");
    add_warning_footer(&mut page);

    let markup = page.markup();
    assert_eq!(markup.to_ascii_lowercase().matches("<footer>").count(), 1);
    assert!(markup.contains("<p>(c)</p><div id=\"doctype-warning\">"));
    assert!(markup.contains("</FOOTER><script></script>"));
}

#[test]
fn body_appends_land_before_closing_body() {
    let mut page = page("<html><body><p>x</p></body></html>\n");
    page.append_to_body("<div id=\"badge\"></div>");
    assert_eq!(
        page.markup(),
        "<html><body><p>x</p><div id=\"badge\"></div></body></html>\n"
    );
}

#[test]
fn commented_out_footer_is_not_a_footer() {
    let mut page = page("<html><body><!-- <footer>old</footer> --><p>x</p></body></html>");
    assert!(!page.has_footer());

    add_warning_footer(&mut page);
    let markup = page.markup();
    assert!(markup.contains("<!-- <footer>old</footer> -->"));
    let footers = parsed_footers(markup);
    assert_eq!(footers.len(), 1);
    assert!(footers[0].contains("doctype-warning"), "{markup}");
}

#[test]
fn footer_and_body_tags_inside_script_are_left_alone() {
    let script = "<script>document.write('<footer>'); if (a<b) { s = '</body>'; }</script>";
    let mut page = page(&format!(
        "<html><body>{script}<footer>(c)</footer></body></html>"
    ));
    assert!(page.has_footer());

    add_warning_footer(&mut page);
    let markup = page.markup();
    assert!(markup.contains(script), "{markup}");
    let footers = parsed_footers(markup);
    assert_eq!(footers.len(), 1);
    assert!(footers[0].starts_with("(c)<div id=\"doctype-warning\""), "{markup}");
}

#[test]
fn footer_mentioned_in_style_creates_a_real_footer() {
    let style = "<style>/* <footer> */ footer > p { color: red }</style>";
    let mut page = page(&format!(
        "<html><head>{style}</head><body><p>x</p></body></html>"
    ));
    assert!(!page.has_footer());

    add_warning_footer(&mut page);
    let markup = page.markup();
    assert!(markup.contains(style));
    let footers = parsed_footers(markup);
    assert_eq!(footers.len(), 1);
    assert!(footers[0].contains("doctype-warning"));
    assert!(markup.ends_with("</footer></body></html>"));
}

#[test]
fn footer_inside_attribute_value_is_ignored() {
    let mut page = page(r#"<html><body><div data-template="<footer></footer>">x</div></body></html>"#);
    assert!(!page.has_footer());

    page.append_to_body("<b>end</b>");
    assert_eq!(
        page.markup(),
        r#"<html><body><div data-template="<footer></footer>">x</div><b>end</b></body></html>"#
    );
}

#[test]
fn nested_footer_fragments_go_to_the_outer_footer() {
    let mut page = page(
        "<html><body><footer><article><footer>inner</footer></article><p>(c)</p></footer></body></html>",
    );
    assert!(page.has_footer());

    page.append_to_footer("<i>note</i>");
    assert_eq!(
        page.markup(),
        "<html><body><footer><article><footer>inner</footer></article><p>(c)</p><i>note</i></footer></body></html>"
    );
    let footers = parsed_footers(page.markup());
    assert_eq!(footers.len(), 2);
    assert!(footers[0].ends_with("<p>(c)</p><i>note</i>"));
    assert_eq!(footers[1], "inner");
}

#[test]
fn doctype_and_title_are_read_once_and_survive_edits() {
    let mut page = page("<!DOCTYPE html><html><head><title>Docs</title></head><body></body></html>");
    add_warning_footer(&mut page);
    page.append_to_body("<div id=\"badge\"></div>");

    assert_eq!(page.doctype(), Some(DoctypeInfo::html5()));
    assert_eq!(page.title().as_deref(), Some("Docs"));
    assert!(page.serialized_root().contains("<div id=\"badge\"></div></body>"));
}
