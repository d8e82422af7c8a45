//! Output filters describing the artifact shape a caller asked for.

use serde::{Deserialize, Serialize};

/// Desired output shape for a compilation
///
/// Backends both read and mutate this before producing their flag
/// list: a toolchain that only emits one artifact kind forces the
/// corresponding field regardless of what the caller requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFilters {
    /// Produce a binary object artifact rather than textual assembly
    pub binary: bool,
    /// Demangle symbol names in textual output
    pub demangle: bool,
    /// Keep label lines in textual output
    pub labels: bool,
    /// Keep assembler directives in textual output
    pub directives: bool,
}

impl OutputFilters {
    /// Create filters with everything disabled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request binary output
    #[must_use]
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Request demangled symbols
    #[must_use]
    pub fn with_demangle(mut self, demangle: bool) -> Self {
        self.demangle = demangle;
        self
    }

    /// Keep labels
    #[must_use]
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Keep directives
    #[must_use]
    pub fn with_directives(mut self, directives: bool) -> Self {
        self.directives = directives;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_default() {
        let filters = OutputFilters::new();
        assert!(!filters.binary);
        assert!(!filters.demangle);
    }

    #[test]
    fn test_filters_with_binary() {
        let filters = OutputFilters::new().with_binary(true);
        assert!(filters.binary);
    }

    #[test]
    fn test_filters_builders_compose() {
        let filters = OutputFilters::new()
            .with_demangle(true)
            .with_labels(true)
            .with_directives(true);
        assert!(filters.demangle);
        assert!(filters.labels);
        assert!(filters.directives);
        assert!(!filters.binary);
    }
}
