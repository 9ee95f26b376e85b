//! Selector-driven text extraction.
//!
//! [`extract_text`] keeps asking a [`SelectorPrompt`] for CSS selectors until
//! one matches at least one element, then returns the matched elements' text
//! in document order.

pub mod prompt;
pub mod selector;

pub use prompt::{PresetPrompt, PromptError, RetryReason, ScriptedPrompt, SelectorPrompt};
pub use selector::{extract_text, select_text};
