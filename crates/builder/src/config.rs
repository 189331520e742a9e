//! Document rendering configuration.

/// Settings shared by every render call of one document.
///
/// Request-body encoding requires a config in the encoder pass context;
/// encoding an operation without one is an error rather than a silent
/// fallback to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    /// Spaces per indentation level in pretty output.
    pub indent: usize,
}

impl DocumentConfig {
    pub fn new(indent: usize) -> Self {
        DocumentConfig { indent }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig { indent: 2 }
    }
}
