use std::sync::Arc;

use pagecheck_core::{
    add_warning_footer, classify, has_html5_doctype, render_error_footer,
    render_validation_results, BadgeStyle, PageContext, Report, ValidationOutcome,
    ValidationRequest, ValidationResult, ValidatorEndpoint,
};
use pagecheck_logging::{pagecheck_debug, pagecheck_info, pagecheck_warn};

use crate::{FetchError, HttpSettings, ReqwestValidatorClient, ValidatorClient};

/// Runs the doctype check, the validator request and the page annotation.
pub struct PageValidator {
    client: Arc<dyn ValidatorClient>,
    endpoint: ValidatorEndpoint,
    style: BadgeStyle,
}

impl PageValidator {
    pub fn new(
        client: Arc<dyn ValidatorClient>,
        endpoint: ValidatorEndpoint,
        style: BadgeStyle,
    ) -> Self {
        Self {
            client,
            endpoint,
            style,
        }
    }

    /// Validator backed by reqwest.
    pub fn with_settings(
        settings: HttpSettings,
        endpoint: ValidatorEndpoint,
        style: BadgeStyle,
    ) -> Result<Self, FetchError> {
        let client = ReqwestValidatorClient::new(settings)?;
        Ok(Self::new(Arc::new(client), endpoint, style))
    }

    /// Validates and annotates `page`. Issues exactly one request.
    ///
    /// Never fails: a request error is logged and rendered as the footer
    /// error block.
    pub async fn run(&self, page: &mut dyn PageContext) -> ValidationOutcome {
        let address = page.address().clone();

        let doctype_valid = has_html5_doctype(page.doctype().as_ref());
        if !doctype_valid {
            pagecheck_warn!("{} does not declare <!DOCTYPE html>", address);
            add_warning_footer(page);
        }

        let request = ValidationRequest::for_page(&self.endpoint, &*page);
        pagecheck_info!(
            "validating {} with {} {}",
            address,
            request.method,
            request.url
        );

        let report = match self.client.submit(&request).await {
            Ok(body) => {
                let verdict = classify(&body);
                let messages = ValidationResult::from_value(&body)
                    .map(|result| result.messages)
                    .unwrap_or_default();
                for message in messages.iter().filter(|message| message.is_error()) {
                    pagecheck_debug!(
                        "line {}: {}",
                        message
                            .last_line
                            .map_or_else(|| "?".to_string(), |line| line.to_string()),
                        message.message
                    );
                }
                render_validation_results(page, &verdict, &self.style);
                Report::Checked { verdict, messages }
            }
            Err(err) => {
                pagecheck_warn!("validation of {} failed: {}", address, err);
                render_error_footer(page);
                Report::RequestFailed {
                    reason: err.to_string(),
                }
            }
        };

        ValidationOutcome {
            address,
            doctype_valid,
            report,
        }
    }
}
