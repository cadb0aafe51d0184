use url::Url;

use crate::DoctypeInfo;

/// Capabilities the validator needs from a loaded page.
///
/// Implementations stand in for a live document: they expose what was
/// parsed and accept markup fragments to insert.
pub trait PageContext: Send {
    fn doctype(&self) -> Option<DoctypeInfo>;

    /// Absolute address the page was loaded from.
    fn address(&self) -> &Url;

    /// Outer markup of the root element, without any doctype.
    fn serialized_root(&self) -> String;

    fn has_footer(&self) -> bool;

    /// Appends an empty `<footer>` to the body.
    fn create_footer(&mut self);

    /// Appends markup at the end of the first footer.
    fn append_to_footer(&mut self, markup: &str);

    /// Appends markup at the end of the body.
    fn append_to_body(&mut self, markup: &str);
}

/// Creates a footer when the page has none; an existing one is reused.
pub fn ensure_footer(page: &mut dyn PageContext) {
    if !page.has_footer() {
        page.create_footer();
    }
}

/// In-memory page that records every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPage {
    address: Url,
    doctype: Option<DoctypeInfo>,
    root_markup: String,
    footer: Option<Vec<String>>,
    footers_created: usize,
    body_appends: Vec<String>,
}

impl MemoryPage {
    pub fn new(address: Url, root_markup: impl Into<String>) -> Self {
        Self {
            address,
            doctype: None,
            root_markup: root_markup.into(),
            footer: None,
            footers_created: 0,
            body_appends: Vec::new(),
        }
    }

    pub fn with_doctype(mut self, doctype: DoctypeInfo) -> Self {
        self.doctype = Some(doctype);
        self
    }

    /// Starts the page with an empty footer already in place.
    pub fn with_footer(mut self) -> Self {
        self.footer = Some(Vec::new());
        self
    }

    pub fn footer_fragments(&self) -> &[String] {
        self.footer.as_deref().unwrap_or_default()
    }

    /// Number of footers this page had to create.
    pub fn footers_created(&self) -> usize {
        self.footers_created
    }

    pub fn body_fragments(&self) -> &[String] {
        &self.body_appends
    }
}

impl PageContext for MemoryPage {
    fn doctype(&self) -> Option<DoctypeInfo> {
        self.doctype.clone()
    }

    fn address(&self) -> &Url {
        &self.address
    }

    fn serialized_root(&self) -> String {
        self.root_markup.clone()
    }

    fn has_footer(&self) -> bool {
        self.footer.is_some()
    }

    fn create_footer(&mut self) {
        self.footer = Some(Vec::new());
        self.footers_created += 1;
        self.body_appends.push("<footer></footer>".to_string());
    }

    fn append_to_footer(&mut self, markup: &str) {
        self.footer
            .get_or_insert_with(Vec::new)
            .push(markup.to_string());
    }

    fn append_to_body(&mut self, markup: &str) {
        self.body_appends.push(markup.to_string());
    }
}
