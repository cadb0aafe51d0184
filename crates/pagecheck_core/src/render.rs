use pagecheck_logging::{pagecheck_debug, pagecheck_info};

use crate::{ensure_footer, BadgeStyle, Fragment, IndicatorBox, PageContext, Verdict};

/// Appends a fragment to the footer, creating the footer first if needed.
pub fn append_fragment(page: &mut dyn PageContext, fragment: &Fragment) {
    ensure_footer(page);
    page.append_to_footer(&fragment.to_markup());
}

/// Appends the missing-doctype warning. Every call adds another copy.
pub fn add_warning_footer(page: &mut dyn PageContext) {
    append_fragment(page, &Fragment::DoctypeWarning);
}

/// Paints the indicator box and appends the summary block.
pub fn render_validation_results(
    page: &mut dyn PageContext,
    verdict: &Verdict,
    style: &BadgeStyle,
) -> IndicatorBox {
    let indicator = IndicatorBox::for_page(page.address(), verdict, style);
    pagecheck_debug!(
        "indicator color={} address={}",
        indicator.color,
        page.address()
    );
    page.append_to_body(&indicator.to_markup());
    append_fragment(page, &Fragment::ValidationSummary { verdict: *verdict });
    pagecheck_info!("{}", verdict.summary());
    indicator
}

/// Appends the generic error block. No indicator box is created.
pub fn render_error_footer(page: &mut dyn PageContext) {
    append_fragment(page, &Fragment::ValidationError);
}
