use url::form_urlencoded;
use url::Url;

use crate::Verdict;

const HTML_VALIDATOR: &str = "https://validator.w3.org/check";
const CSS_VALIDATOR: &str = "https://jigsaw.w3.org/css-validator/validator";

const DOCTYPE_WARNING: &str = "Warning: The document is missing a <!DOCTYPE html> declaration. \
                               Validation results may not be accurate.";
const VALIDATION_ERROR: &str = "HTML/CSS validation could not be performed due to an error.";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// W3C markup validator report for `address`.
pub fn html_validator_link(address: &Url) -> String {
    format!("{HTML_VALIDATOR}?uri={}", encode_component(address.as_str()))
}

/// W3C CSS validator report for `address`, CSS3 profile.
pub fn css_validator_link(address: &Url) -> String {
    format!(
        "{CSS_VALIDATOR}?uri={}&profile=css3",
        encode_component(address.as_str())
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Background colours of the indicator box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub pass_color: String,
    pub fail_color: String,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            pass_color: "lightgreen".to_string(),
            fail_color: "red".to_string(),
        }
    }
}

/// Status content appended to the page footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    DoctypeWarning,
    ValidationSummary { verdict: Verdict },
    ValidationError,
}

impl Fragment {
    pub fn message(&self) -> String {
        match self {
            Fragment::DoctypeWarning => DOCTYPE_WARNING.to_string(),
            Fragment::ValidationSummary { verdict } => verdict.summary(),
            Fragment::ValidationError => VALIDATION_ERROR.to_string(),
        }
    }

    pub fn to_markup(&self) -> String {
        let message = escape_html(&self.message());
        match self {
            Fragment::DoctypeWarning => format!(
                "<div id=\"doctype-warning\"><p><strong>{message}</strong></p></div>"
            ),
            Fragment::ValidationSummary { verdict } => {
                let status = if verdict.is_pass() { "passed" } else { "failed" };
                format!(
                    "<div id=\"htmlcss\" data-verdict=\"{status}\"><p><strong>{message}</strong></p>\
                     <p><a id=\"vLink1\" href=\"\"></a> <a id=\"vLink2\" href=\"\"></a></p></div>"
                )
            }
            Fragment::ValidationError => {
                format!("<div id=\"htmlcss\"><p><strong>{message}</strong></p></div>")
            }
        }
    }
}

/// The floating badge with links to the W3C markup and CSS validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorBox {
    pub color: String,
    pub links: [Link; 2],
}

impl IndicatorBox {
    pub fn for_page(address: &Url, verdict: &Verdict, style: &BadgeStyle) -> Self {
        let color = if verdict.is_pass() {
            &style.pass_color
        } else {
            &style.fail_color
        };
        Self {
            color: color.clone(),
            links: [
                Link::new(html_validator_link(address), "H"),
                Link::new(css_validator_link(address), "C"),
            ],
        }
    }

    pub fn to_markup(&self) -> String {
        let [html, css] = &self.links;
        format!(
            "<div id=\"pagecheck-indicator\" style=\"background-color: {}; display: block; \
             position: absolute; left: 0%; margin: 15px;\">{}<pre style=\"display: inline;\">  </pre>{}</div>",
            escape_html(&self.color),
            link_markup(html),
            link_markup(css),
        )
    }
}

fn link_markup(link: &Link) -> String {
    format!(
        "<a href=\"{}\" style=\"color: black; display: inline;\">{}</a>",
        escape_html(&link.href),
        escape_html(&link.text)
    )
}
