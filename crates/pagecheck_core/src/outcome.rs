use url::Url;

use crate::{ValidatorMessage, Verdict};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The validator answered with a JSON body.
    Checked {
        verdict: Verdict,
        messages: Vec<ValidatorMessage>,
    },
    /// The request failed; the page only received the error block.
    RequestFailed { reason: String },
}

/// Result of one validation run over a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub address: Url,
    pub doctype_valid: bool,
    pub report: Report,
}

impl ValidationOutcome {
    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.report {
            Report::Checked { verdict, .. } => Some(verdict),
            Report::RequestFailed { .. } => None,
        }
    }

    /// Valid doctype and a validator pass.
    pub fn passed(&self) -> bool {
        self.doctype_valid && self.verdict().is_some_and(Verdict::is_pass)
    }
}
