//! Invocation context handed to auxiliary tools.

/// Minimal context for an auxiliary tool invocation
///
/// Carries only a language tag, enough for tool selection and logging.
/// Conversion steps deliberately do not receive working directory,
/// environment, or execution options; those belong to the main
/// invocation's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolContext {
    /// Language tag of the input being processed
    pub lang: String,
}

impl ToolContext {
    /// Create a context for the given language tag
    #[must_use]
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
        }
    }
}
