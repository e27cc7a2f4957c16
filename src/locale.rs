//! Built-in locale data.

use std::sync::Mutex;

/// Process-wide current locale, used when a style does not name one.
static CURRENT: Mutex<Option<Locale>> = Mutex::new(None);

/// Locale settings for number formatting.
///
/// A closed built-in set: the named constructors are the only way to obtain
/// one, and the fields are read-only. The identifier is the only part that
/// enters cache keys, so this closure is what guarantees that equal
/// identifiers always render identically. Hosts needing other conventions
/// supply their own [`Renderer`](crate::Renderer) rather than new locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    id: &'static str,
    language: &'static str,
    decimal_separator: char,
    grouping_separator: char,
    currency_code: Option<&'static str>,
    symbol_after_amount: bool,
    space_before_percent: bool,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            id: "en_US",
            language: "en",
            decimal_separator: '.',
            grouping_separator: ',',
            currency_code: Some("USD"),
            symbol_after_amount: false,
            space_before_percent: false,
        }
    }

    /// British English locale.
    pub fn en_gb() -> Self {
        Locale {
            id: "en_GB",
            language: "en",
            decimal_separator: '.',
            grouping_separator: ',',
            currency_code: Some("GBP"),
            symbol_after_amount: false,
            space_before_percent: false,
        }
    }

    /// German locale.
    pub fn de_de() -> Self {
        Locale {
            id: "de_DE",
            language: "de",
            decimal_separator: ',',
            grouping_separator: '.',
            currency_code: Some("EUR"),
            symbol_after_amount: true,
            space_before_percent: true,
        }
    }

    /// French locale.
    pub fn fr_fr() -> Self {
        Locale {
            id: "fr_FR",
            language: "fr",
            decimal_separator: ',',
            grouping_separator: '\u{202f}',
            currency_code: Some("EUR"),
            symbol_after_amount: true,
            space_before_percent: true,
        }
    }

    /// Japanese locale.
    pub fn ja_jp() -> Self {
        Locale {
            id: "ja_JP",
            language: "ja",
            decimal_separator: '.',
            grouping_separator: ',',
            currency_code: Some("JPY"),
            symbol_after_amount: false,
            space_before_percent: false,
        }
    }

    /// The undetermined root locale: US-style separators, no currency.
    pub fn root() -> Self {
        Locale {
            id: "und",
            language: "und",
            decimal_separator: '.',
            grouping_separator: ',',
            currency_code: None,
            symbol_after_amount: false,
            space_before_percent: false,
        }
    }

    /// Every built-in locale.
    pub fn all() -> [Locale; 6] {
        [
            Locale::en_us(),
            Locale::en_gb(),
            Locale::de_de(),
            Locale::fr_fr(),
            Locale::ja_jp(),
            Locale::root(),
        ]
    }

    /// BCP 47-style identifier, e.g. `"en_US"`. Never contains `:`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Two-letter language subtag, used to select spell-out data.
    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// The locale's own currency, if it has one.
    pub fn currency_code(&self) -> Option<&'static str> {
        self.currency_code
    }

    /// Currency symbol placement: after the amount, separated by a space.
    pub fn symbol_after_amount(&self) -> bool {
        self.symbol_after_amount
    }

    /// Whether a space precedes the percent sign.
    pub fn space_before_percent(&self) -> bool {
        self.space_before_percent
    }

    /// Returns the process-wide current locale (`en_US` unless changed).
    pub fn current() -> Self {
        CURRENT
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(Locale::en_us)
    }

    /// Replaces the process-wide current locale.
    ///
    /// Styles constructed afterwards pick up the new default; styles already
    /// constructed keep the locale they captured.
    pub fn set_current(locale: Locale) {
        *CURRENT.lock().unwrap() = Some(locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_identifiers_are_key_safe() {
        for locale in Locale::all() {
            assert!(
                !locale.id().contains(':'),
                "{} contains delimiter",
                locale.id()
            );
        }
    }

    #[test]
    fn test_identifier_determines_settings() {
        // One locale per identifier: an id seen in a cache key can only ever
        // have come from a single, fixed set of rendering settings.
        let mut by_id: HashMap<&str, Locale> = HashMap::new();
        for locale in Locale::all() {
            if let Some(previous) = by_id.insert(locale.id(), locale.clone()) {
                assert_eq!(previous, locale, "duplicate id {}", locale.id());
            }
        }
        assert_eq!(by_id.len(), Locale::all().len());
    }

    #[test]
    fn test_default_is_en_us() {
        assert_eq!(Locale::default().id(), "en_US");
    }
}
