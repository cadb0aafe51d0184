use std::fmt;

use url::Url;

use crate::PageContext;

/// Nu HTML Checker instance used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://html5.validator.nu/";

/// Prepended to local markup so the checker always parses in standards mode.
pub const DOCTYPE_PREFIX: &str = "<!DOCTYPE html>\n";

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginKind {
    LocalFile,
    Hosted,
}

impl OriginKind {
    pub fn of(address: &Url) -> Self {
        if address.scheme() == "file" {
            OriginKind::LocalFile
        } else {
            OriginKind::Hosted
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Base address of a validation service that speaks `out=json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorEndpoint {
    base: Url,
}

impl ValidatorEndpoint {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        Url::parse(base).map(Self::new)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `<base>?out=json`, the target for posted markup.
    pub fn json_url(&self) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("out", "json");
        url
    }

    /// `<base>?out=json&doc=<address>`; the service fetches the page itself.
    pub fn json_url_for_document(&self, address: &Url) -> Url {
        let mut url = self.json_url();
        url.query_pairs_mut().append_pair("doc", address.as_str());
        url
    }
}

impl Default for ValidatorEndpoint {
    fn default() -> Self {
        Self::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url")
    }
}

/// The single outbound call of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub origin: OriginKind,
    pub method: HttpMethod,
    pub url: Url,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
}

impl ValidationRequest {
    /// Local files are posted as markup because the service cannot reach
    /// them. Hosted pages are checked by address.
    pub fn for_page(endpoint: &ValidatorEndpoint, page: &dyn PageContext) -> Self {
        let address = page.address();
        match OriginKind::of(address) {
            OriginKind::LocalFile => {
                let root = page.serialized_root();
                let mut body = String::with_capacity(DOCTYPE_PREFIX.len() + root.len());
                body.push_str(DOCTYPE_PREFIX);
                body.push_str(&root);
                Self {
                    origin: OriginKind::LocalFile,
                    method: HttpMethod::Post,
                    url: endpoint.json_url(),
                    content_type: Some(HTML_CONTENT_TYPE),
                    body: Some(body),
                }
            }
            OriginKind::Hosted => Self {
                origin: OriginKind::Hosted,
                method: HttpMethod::Get,
                url: endpoint.json_url_for_document(address),
                content_type: None,
                body: None,
            },
        }
    }
}
