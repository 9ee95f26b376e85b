//! The operator-input seam of the extraction loop.

use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Why no result was produced for a selector and the loop is asking again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryReason {
    /// The selector parsed but matched nothing.
    NoMatch,
    /// The selector could not be parsed.
    Invalid(String),
    /// The operator entered an empty line.
    Blank,
}

impl fmt::Display for RetryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryReason::NoMatch => write!(f, "There's no tag that matches the selector informed"),
            RetryReason::Invalid(detail) => write!(f, "The selector is not valid CSS: {detail}"),
            RetryReason::Blank => write!(f, "No selector was entered"),
        }
    }
}

/// Outcome of asking for a selector that did not yield one.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Operator interrupt. A clean stop, not a failure.
    #[error("cancelled by operator")]
    Cancelled,
    /// The input channel itself failed.
    #[error("could not read selector input")]
    Input(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Supplies selectors to the extraction loop and hears about misses.
pub trait SelectorPrompt {
    /// Block until the operator provides a selector or cancels.
    fn next_selector(&mut self) -> Result<String, PromptError>;

    /// Called after a selector produced nothing, before the next prompt.
    fn report_retry(&mut self, selector: &str, reason: &RetryReason);
}

impl<P: SelectorPrompt + ?Sized> SelectorPrompt for &mut P {
    fn next_selector(&mut self) -> Result<String, PromptError> {
        (**self).next_selector()
    }

    fn report_retry(&mut self, selector: &str, reason: &RetryReason) {
        (**self).report_retry(selector, reason);
    }
}

/// Replays a fixed list of selectors, then cancels.
///
/// Used for automation and tests. Every retry report is kept in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pending: VecDeque<String>,
    prompts: usize,
    retries: Vec<(String, RetryReason)>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: selectors.into_iter().map(Into::into).collect(),
            prompts: 0,
            retries: Vec::new(),
        }
    }

    /// How many times a selector was asked for, including the cancelling one.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn retries(&self) -> &[(String, RetryReason)] {
        &self.retries
    }
}

impl SelectorPrompt for ScriptedPrompt {
    fn next_selector(&mut self) -> Result<String, PromptError> {
        self.prompts += 1;
        self.pending.pop_front().ok_or(PromptError::Cancelled)
    }

    fn report_retry(&mut self, selector: &str, reason: &RetryReason) {
        self.retries.push((selector.to_string(), reason.clone()));
    }
}

/// Tries a preset selector first, then defers to `inner`.
#[derive(Debug)]
pub struct PresetPrompt<P> {
    preset: Option<String>,
    inner: P,
}

impl<P: SelectorPrompt> PresetPrompt<P> {
    pub fn new(preset: Option<String>, inner: P) -> Self {
        Self { preset, inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: SelectorPrompt> SelectorPrompt for PresetPrompt<P> {
    fn next_selector(&mut self) -> Result<String, PromptError> {
        match self.preset.take() {
            Some(selector) => Ok(selector),
            None => self.inner.next_selector(),
        }
    }

    fn report_retry(&mut self, selector: &str, reason: &RetryReason) {
        self.inner.report_retry(selector, reason);
    }
}
