//! The selector retry loop.

use super::prompt::{PromptError, RetryReason, SelectorPrompt};
use scraper::{Html, Selector};
use tracing::{debug, info};

/// Apply one selector to a parsed document.
///
/// Each match contributes the concatenation of its descendant text nodes,
/// trimmed at both ends. Matches whose text is empty still count.
pub fn select_text(document: &Html, selector: &str) -> Result<Vec<String>, RetryReason> {
    if selector.is_empty() {
        return Err(RetryReason::Blank);
    }
    let parsed = Selector::parse(selector).map_err(|e| RetryReason::Invalid(e.to_string()))?;

    Ok(document
        .select(&parsed)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect())
}

/// Prompt for selectors until one matches, returning the matched text.
///
/// The loop has no retry cap. It only ends with a non-empty list or with the
/// prompt's error, typically [`PromptError::Cancelled`].
pub fn extract_text<P>(html: &str, prompt: &mut P) -> Result<Vec<String>, PromptError>
where
    P: SelectorPrompt + ?Sized,
{
    let document = Html::parse_document(html);

    loop {
        let input = prompt.next_selector()?;
        let selector = input.trim();

        match select_text(&document, selector) {
            Ok(values) if !values.is_empty() => {
                info!(selector, count = values.len(), "selector matched");
                return Ok(values);
            }
            Ok(_) => {
                debug!(selector, "selector matched nothing");
                prompt.report_retry(selector, &RetryReason::NoMatch);
            }
            Err(reason) => {
                debug!(selector, %reason, "selector rejected");
                prompt.report_retry(selector, &reason);
            }
        }
    }
}
