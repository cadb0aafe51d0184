//! pagecheck core: doctype inspection, request shaping, verdicts and page annotation.
//!
//! Nothing in this crate performs IO. Pages are reached through the
//! [`PageContext`] seam and requests are described, not sent.
mod doctype;
mod fragment;
mod outcome;
mod page;
mod render;
mod request;
mod verdict;

pub use doctype::{has_html5_doctype, DoctypeInfo};
pub use fragment::{
    css_validator_link, escape_html, html_validator_link, BadgeStyle, Fragment, IndicatorBox,
    Link,
};
pub use outcome::{Report, ValidationOutcome};
pub use page::{ensure_footer, MemoryPage, PageContext};
pub use render::{
    add_warning_footer, append_fragment, render_error_footer, render_validation_results,
};
pub use request::{
    HttpMethod, OriginKind, ValidationRequest, ValidatorEndpoint, DEFAULT_ENDPOINT,
    DOCTYPE_PREFIX, HTML_CONTENT_TYPE,
};
pub use verdict::{classify, ValidationResult, ValidatorMessage, Verdict};
