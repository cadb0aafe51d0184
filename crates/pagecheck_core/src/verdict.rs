use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the checker's `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "subType", skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub message: String,
    #[serde(rename = "lastLine", skip_serializing_if = "Option::is_none")]
    pub last_line: Option<u32>,
    #[serde(rename = "firstColumn", skip_serializing_if = "Option::is_none")]
    pub first_column: Option<u32>,
    #[serde(rename = "lastColumn", skip_serializing_if = "Option::is_none")]
    pub last_column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

impl ValidatorMessage {
    pub fn is_error(&self) -> bool {
        matches!(self.kind.as_str(), "error" | "non-document-error")
    }

    pub fn is_warning(&self) -> bool {
        self.kind == "info" && self.sub_type.as_deref() == Some("warning")
    }
}

/// Parsed checker response. Only the length of `messages` decides the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub messages: Vec<ValidatorMessage>,
}

impl ValidationResult {
    /// Lenient view of a response body: every entry of `messages` is kept, so
    /// the list length matches the verdict's count. Entries that are not
    /// message objects keep their JSON text as the message. Returns `None`
    /// when there is no `messages` array.
    pub fn from_value(body: &Value) -> Option<Self> {
        let entries = body.get("messages")?.as_array()?;
        let messages = entries
            .iter()
            .map(|entry| {
                serde_json::from_value(entry.clone()).unwrap_or_else(|_| ValidatorMessage {
                    message: entry
                        .as_str()
                        .map_or_else(|| entry.to_string(), str::to_string),
                    ..ValidatorMessage::default()
                })
            })
            .collect();
        let url = body.get("url").and_then(Value::as_str).map(str::to_string);
        Some(Self { url, messages })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Verdict {
    Passed,
    Failed {
        errors: usize,
        warnings: usize,
        infos: usize,
    },
    /// JSON without a `messages` array. Rendered as a failure.
    Malformed,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Passed)
    }

    pub fn message_count(&self) -> Option<usize> {
        match self {
            Verdict::Passed => Some(0),
            Verdict::Failed {
                errors,
                warnings,
                infos,
            } => Some(errors + warnings + infos),
            Verdict::Malformed => None,
        }
    }

    /// Human-readable status line.
    pub fn summary(&self) -> String {
        match self {
            Verdict::Passed => "HTML validation passed.".to_string(),
            Verdict::Failed {
                errors,
                warnings,
                infos,
            } => format!(
                "HTML validation failed: {errors} error(s), {warnings} warning(s), {infos} info message(s)."
            ),
            Verdict::Malformed => {
                "HTML validation returned an unexpected response.".to_string()
            }
        }
    }
}

/// Classifies a parsed response body by its `messages` array.
pub fn classify(body: &Value) -> Verdict {
    let Some(messages) = body.get("messages").and_then(Value::as_array) else {
        return Verdict::Malformed;
    };
    if messages.is_empty() {
        return Verdict::Passed;
    }

    let (mut errors, mut warnings, mut infos) = (0, 0, 0);
    for entry in messages {
        let kind = entry.get("type").and_then(Value::as_str).unwrap_or_default();
        let sub_type = entry.get("subType").and_then(Value::as_str);
        match (kind, sub_type) {
            ("error" | "non-document-error", _) => errors += 1,
            ("info", Some("warning")) => warnings += 1,
            _ => infos += 1,
        }
    }
    Verdict::Failed {
        errors,
        warnings,
        infos,
    }
}
