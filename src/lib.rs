//! numstyle - style-keyed number formatting with cached formatters
//!
//! This crate maps a closed set of formatting style descriptors (decimal,
//! currency, percent, scientific, spell-out, ordinal, custom) to configured
//! formatter handles, reusing them across calls with identical configuration.
//! Rendering itself sits behind the [`Renderer`] trait; a built-in
//! locale-aware backend is provided.
//!
//! ```
//! use numstyle::{CurrencyStyle, Iso4217, Locale, NumberStyle};
//!
//! let style = NumberStyle::Currency(
//!     CurrencyStyle::for_locale(Locale::en_us()).with_code(Iso4217::Usd),
//! );
//! assert_eq!(numstyle::format(9876.54, &style).as_deref(), Some("$9,876.54"));
//! ```

pub mod currency;
pub mod error;
pub mod handle;
pub mod locale;
pub mod style;
pub mod value;

mod cache;
mod render;

pub use cache::FormatterCache;
pub use currency::{CurrencyCode, Iso4217};
pub use error::RenderError;
pub use handle::{FormatterHandle, StyleMode};
pub use locale::Locale;
pub use render::{BuiltinRenderer, Renderer};
pub use style::{CurrencyStyle, DecimalStyle, LocaleStyle, NumberStyle};
pub use value::Number;

/// Formats a value with the process-wide shared cache.
///
/// Convenience wrapper over [`FormatterCache::shared`]; hosts that need
/// isolation construct their own [`FormatterCache`] instead.
pub fn format(value: impl Into<Number>, style: &NumberStyle) -> Option<String> {
    FormatterCache::shared().format(value, style)
}

/// Like [`format`], but reports the specific render failure.
pub fn try_format(value: impl Into<Number>, style: &NumberStyle) -> Result<String, RenderError> {
    FormatterCache::shared().try_format(value, style)
}
