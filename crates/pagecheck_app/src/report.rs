use std::fmt::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use pagecheck_core::{Report, ValidationOutcome, ValidatorMessage, Verdict};
use serde::Serialize;

pub const EXIT_PASSED: u8 = 0;
pub const EXIT_FAILED: u8 = 1;
pub const EXIT_UNAVAILABLE: u8 = 2;

/// What the binary prints once a run is over.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub target: &'a str,
    pub address: &'a str,
    pub doctype_valid: bool,
    pub verdict: Option<Verdict>,
    pub message_count: Option<usize>,
    pub messages: &'a [ValidatorMessage],
    pub error: Option<&'a str>,
    pub annotated: Option<String>,
    pub checked_at: String,
}

impl<'a> RunReport<'a> {
    pub fn new(
        target: &'a str,
        outcome: &'a ValidationOutcome,
        annotated: Option<&Path>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        let (messages, error) = match &outcome.report {
            Report::Checked { messages, .. } => (messages.as_slice(), None),
            Report::RequestFailed { reason } => (&[][..], Some(reason.as_str())),
        };
        let verdict = outcome.verdict().copied();
        Self {
            target,
            address: outcome.address.as_str(),
            doctype_valid: outcome.doctype_valid,
            verdict,
            message_count: verdict.and_then(|verdict| verdict.message_count()),
            messages,
            error,
            annotated: annotated.map(|path| path.display().to_string()),
            checked_at: checked_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let status = match (&self.verdict, self.error) {
            (_, Some(_)) => "ERROR",
            (Some(verdict), None) if verdict.is_pass() && self.doctype_valid => "PASS",
            _ => "FAIL",
        };
        let _ = writeln!(text, "{status} {}", self.address);
        if !self.doctype_valid {
            let _ = writeln!(text, "  missing <!DOCTYPE html> declaration");
        }
        if let Some(verdict) = &self.verdict {
            let _ = writeln!(text, "  {}", verdict.summary());
        }
        for message in self.messages {
            let line = message
                .last_line
                .map_or_else(|| "-".to_string(), |line| line.to_string());
            let _ = writeln!(text, "  [{}] line {line}: {}", message.kind, message.message);
        }
        if let Some(error) = self.error {
            let _ = writeln!(text, "  validation could not be performed: {error}");
        }
        if let Some(path) = &self.annotated {
            let _ = writeln!(text, "  annotated page: {path}");
        }
        text
    }
}

pub fn exit_code(outcome: &ValidationOutcome) -> u8 {
    match &outcome.report {
        Report::RequestFailed { .. } => EXIT_UNAVAILABLE,
        Report::Checked { .. } if outcome.passed() => EXIT_PASSED,
        Report::Checked { .. } => EXIT_FAILED,
    }
}
