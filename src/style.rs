//! Formatting style descriptors and cache-key derivation.

use crate::currency::{CurrencyCode, Iso4217};
use crate::handle::{FormatterHandle, StyleMode};
use crate::locale::Locale;

/// Fraction-digit requests above this are clamped at configure time. f64
/// carries no more than 17 significant decimal digits, so larger bounds
/// cannot change output.
pub const MAX_FRACTION_DIGITS_LIMIT: u32 = 17;

/// Parameters for the decimal style.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalStyle {
    pub max_fraction_digits: u32,
    pub locale: Locale,
}

impl DecimalStyle {
    /// Two fraction digits, current locale. Defaults are captured here, at
    /// construction time, not when the style is later used.
    pub fn new() -> Self {
        DecimalStyle {
            max_fraction_digits: 2,
            locale: Locale::current(),
        }
    }

    pub fn with_max_fraction_digits(mut self, max: u32) -> Self {
        self.max_fraction_digits = max;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for DecimalStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for the currency style.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyStyle {
    pub code: CurrencyCode,
    pub locale: Locale,
}

impl CurrencyStyle {
    /// Defaults the code to the current locale's own currency, or USD when
    /// the locale has none. The current locale is re-read on every call, so
    /// a changed process locale is picked up by styles built afterwards.
    pub fn new() -> Self {
        let locale = Locale::current();
        let code = default_code_for(&locale);
        CurrencyStyle { code, locale }
    }

    /// Currency style for an explicit locale, defaulting the code from it.
    pub fn for_locale(locale: Locale) -> Self {
        let code = default_code_for(&locale);
        CurrencyStyle { code, locale }
    }

    pub fn with_code(mut self, code: impl Into<CurrencyCode>) -> Self {
        self.code = code.into();
        self
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::new()
    }
}

fn default_code_for(locale: &Locale) -> CurrencyCode {
    locale
        .currency_code()
        .and_then(Iso4217::from_code)
        .map(CurrencyCode::Common)
        .unwrap_or(CurrencyCode::Common(Iso4217::Usd))
}

/// Parameters for styles that carry only a locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleStyle {
    pub locale: Locale,
}

impl LocaleStyle {
    /// Current locale, captured at construction time.
    pub fn new() -> Self {
        LocaleStyle {
            locale: Locale::current(),
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        LocaleStyle { locale }
    }
}

impl Default for LocaleStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// A formatting style descriptor.
///
/// The closed set of ways a number can be rendered. Every variant except
/// `Custom` derives a stable cache key from its parameters; `Custom` carries
/// a caller-configured [`FormatterHandle`] that bypasses the cache entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberStyle {
    Decimal(DecimalStyle),
    Currency(CurrencyStyle),
    Percent(LocaleStyle),
    Scientific(LocaleStyle),
    SpellOut(LocaleStyle),
    Ordinal(LocaleStyle),
    Custom(FormatterHandle),
}

impl NumberStyle {
    /// Derives the cache key for this style, or `None` for `Custom`.
    ///
    /// The key captures every parameter that affects rendering, joined with
    /// `:`. Segments are unambiguous even though a custom currency code is
    /// free-form and may itself contain `:`: the variant tag is the fixed
    /// first segment and the locale identifier (closed set, never contains
    /// `:`) is the last, so the code is whatever lies between. Equal keys
    /// therefore always render identically, and any parameter difference
    /// yields a distinct key.
    pub fn cache_key(&self) -> Option<String> {
        match self {
            NumberStyle::Decimal(style) => Some(format!(
                "decimal:{}:{}",
                style.max_fraction_digits, style.locale.id()
            )),
            NumberStyle::Currency(style) => {
                Some(format!("currency:{}:{}", style.code, style.locale.id()))
            }
            NumberStyle::Percent(style) => Some(format!("percent:{}", style.locale.id())),
            NumberStyle::Scientific(style) => Some(format!("scientific:{}", style.locale.id())),
            NumberStyle::SpellOut(style) => Some(format!("spellOut:{}", style.locale.id())),
            NumberStyle::Ordinal(style) => Some(format!("ordinal:{}", style.locale.id())),
            NumberStyle::Custom(_) => None,
        }
    }

    /// Configures a fresh handle to match this style.
    ///
    /// For `Custom` this is a no-op: the supplied handle is already fully
    /// configured by the caller.
    pub fn configure(&self, handle: &mut FormatterHandle) {
        match self {
            NumberStyle::Decimal(style) => {
                handle.mode = StyleMode::Decimal;
                handle.locale = style.locale.clone();
                handle.max_fraction_digits =
                    Some(style.max_fraction_digits.min(MAX_FRACTION_DIGITS_LIMIT));
            }
            NumberStyle::Currency(style) => {
                handle.mode = StyleMode::Currency;
                handle.locale = style.locale.clone();
                handle.currency_code = Some(style.code.as_str().to_string());
            }
            NumberStyle::Percent(style) => {
                handle.mode = StyleMode::Percent;
                handle.locale = style.locale.clone();
            }
            NumberStyle::Scientific(style) => {
                handle.mode = StyleMode::Scientific;
                handle.locale = style.locale.clone();
            }
            NumberStyle::SpellOut(style) => {
                handle.mode = StyleMode::SpellOut;
                handle.locale = style.locale.clone();
            }
            NumberStyle::Ordinal(style) => {
                handle.mode = StyleMode::Ordinal;
                handle.locale = style.locale.clone();
            }
            NumberStyle::Custom(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_shapes() {
        let decimal = NumberStyle::Decimal(
            DecimalStyle::new()
                .with_max_fraction_digits(1)
                .with_locale(Locale::en_us()),
        );
        assert_eq!(decimal.cache_key().as_deref(), Some("decimal:1:en_US"));

        let currency = NumberStyle::Currency(
            CurrencyStyle::for_locale(Locale::en_us()).with_code(Iso4217::Eur),
        );
        assert_eq!(currency.cache_key().as_deref(), Some("currency:EUR:en_US"));

        let percent = NumberStyle::Percent(LocaleStyle::for_locale(Locale::de_de()));
        assert_eq!(percent.cache_key().as_deref(), Some("percent:de_DE"));
    }

    #[test]
    fn test_custom_has_no_key() {
        let style = NumberStyle::Custom(FormatterHandle::new());
        assert_eq!(style.cache_key(), None);
    }

    #[test]
    fn test_fraction_digits_clamp() {
        let style = NumberStyle::Decimal(
            DecimalStyle::new()
                .with_max_fraction_digits(400)
                .with_locale(Locale::en_us()),
        );
        let mut handle = FormatterHandle::new();
        style.configure(&mut handle);
        assert_eq!(handle.max_fraction_digits, Some(MAX_FRACTION_DIGITS_LIMIT));
    }

    #[test]
    fn test_custom_configure_is_noop() {
        let mut custom = FormatterHandle::new();
        custom.mode = StyleMode::Ordinal;
        let style = NumberStyle::Custom(custom.clone());

        let mut handle = custom.clone();
        style.configure(&mut handle);
        assert_eq!(handle, custom);
    }
}
