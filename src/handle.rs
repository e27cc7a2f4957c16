//! Formatter handles: the mutable configuration objects the cache stores.

use crate::locale::Locale;

/// The rendering mode a handle is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    #[default]
    Decimal,
    Currency,
    Percent,
    Scientific,
    SpellOut,
    Ordinal,
}

/// A configured formatter.
///
/// The cache allocates one per distinct style configuration and keeps it for
/// its lifetime. Handles are plain data: a renderer reads them, nothing
/// mutates them after configuration. The one exception to cache ownership is
/// the custom-style path, where the caller builds a handle, keeps ownership,
/// and the cache uses it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatterHandle {
    pub mode: StyleMode,
    pub locale: Locale,
    /// Upper bound on fraction digits; `None` leaves the mode's default.
    pub max_fraction_digits: Option<u32>,
    /// Currency code string, set only for currency handles.
    pub currency_code: Option<String>,
}

impl FormatterHandle {
    /// A fresh, unconfigured handle: decimal mode, current locale, no bounds.
    pub fn new() -> Self {
        FormatterHandle {
            mode: StyleMode::Decimal,
            locale: Locale::current(),
            max_fraction_digits: None,
            currency_code: None,
        }
    }
}

impl Default for FormatterHandle {
    fn default() -> Self {
        Self::new()
    }
}
