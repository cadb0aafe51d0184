use ego_tree::NodeRef;
use pagecheck_core::{DoctypeInfo, PageContext};
use scraper::node::Node;
use scraper::{Html, Selector};
use url::Url;

use crate::markup::{body_close, footer_close, scan_tags};

const FOOTER: &str = "<footer></footer>";

/// A page held as markup text.
///
/// Doctype and title are read once with html5ever when the page is built;
/// inserted fragments never carry either. Mutations splice fragments into
/// the text at offsets from a tag scan, so the original formatting survives
/// and tags inside comments, scripts or attribute values are never matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    address: Url,
    markup: String,
    doctype: Option<DoctypeInfo>,
    title: Option<String>,
}

impl HtmlPage {
    pub fn new(address: Url, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let document = Html::parse_document(&markup);
        Self {
            address,
            doctype: read_doctype(&document),
            title: read_title(&document),
            markup,
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn into_markup(self) -> String {
        self.markup
    }

    /// Trimmed `<title>` text, if any.
    pub fn title(&self) -> Option<String> {
        self.title.clone()
    }

    /// Just before `</body>`, else before `</html>`, else the end.
    fn body_end(&self) -> usize {
        body_close(&scan_tags(&self.markup)).unwrap_or(self.markup.len())
    }

    fn insert_at(&mut self, index: usize, markup: &str) {
        self.markup.insert_str(index, markup);
    }
}

fn read_doctype(document: &Html) -> Option<DoctypeInfo> {
    let root: NodeRef<'_, Node> = document.tree.root();
    root.children().find_map(|node| match node.value() {
        Node::Doctype(doctype) => Some(DoctypeInfo::new(
            doctype.name(),
            doctype.public_id(),
            doctype.system_id(),
        )),
        _ => None,
    })
}

fn read_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

impl PageContext for HtmlPage {
    fn doctype(&self) -> Option<DoctypeInfo> {
        self.doctype.clone()
    }

    fn address(&self) -> &Url {
        &self.address
    }

    fn serialized_root(&self) -> String {
        Html::parse_document(&self.markup).root_element().html()
    }

    fn has_footer(&self) -> bool {
        footer_close(&scan_tags(&self.markup)).is_some()
    }

    fn create_footer(&mut self) {
        let index = self.body_end();
        self.insert_at(index, FOOTER);
    }

    fn append_to_footer(&mut self, markup: &str) {
        let tags = scan_tags(&self.markup);
        // An unclosed footer runs to the end of the body.
        let index = match footer_close(&tags) {
            Some(Some(index)) => index,
            _ => body_close(&tags).unwrap_or(self.markup.len()),
        };
        self.insert_at(index, markup);
    }

    fn append_to_body(&mut self, markup: &str) {
        let index = self.body_end();
        self.insert_at(index, markup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(markup: &str) -> HtmlPage {
        HtmlPage::new(Url::parse("file:///x.html").unwrap(), markup)
    }

    #[test]
    fn body_end_falls_back_to_markup_end() {
        let page = page("<p>loose</p>");
        assert_eq!(page.body_end(), page.markup().len());
    }

    #[test]
    fn body_end_ignores_closing_body_in_script() {
        let page = page("<BODY><script>w('</body>')</script></BODY>");
        assert_eq!(
            page.body_end(),
            "<BODY><script>w('</body>')</script>".len()
        );
    }

    #[test]
    fn unclosed_footer_receives_fragments_at_body_end() {
        let mut page = page("<body><footer>(c)</body>");
        assert!(page.has_footer());
        page.append_to_footer("<i>x</i>");
        assert_eq!(page.markup(), "<body><footer>(c)<i>x</i></body>");
    }
}
