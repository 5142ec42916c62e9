//! Catalog configuration, fixed before initialization.

/// Behavior options for [`crate::Catalog`].
///
/// Constructed once and handed to the catalog builder; the catalog never
/// mutates it afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Marker wrapped around unresolved keys when `strict` is off.
    pub not_found_symbol: String,
    /// Emits a log line per loaded pair and for fallback lookups.
    pub logging_enabled: bool,
    /// Makes a missing key an error instead of a symbol-wrapped fallback.
    pub strict: bool,
    /// Explicit default locale; when unset one is derived from the
    /// environment, falling back to the first registered locale.
    pub default_locale: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            not_found_symbol: "?".to_string(),
            logging_enabled: false,
            strict: false,
            default_locale: None,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker wrapped around unresolved keys.
    pub fn with_not_found_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.not_found_symbol = symbol.into();
        self
    }

    /// Enables/disables per-pair and fallback logging.
    pub fn with_logging_enabled(mut self, logging_enabled: bool) -> Self {
        self.logging_enabled = logging_enabled;
        self
    }

    /// Enables/disables strict missing-key handling.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets an explicit default locale.
    pub fn with_default_locale(mut self, default_locale: Option<String>) -> Self {
        self.default_locale = default_locale;
        self
    }
}
