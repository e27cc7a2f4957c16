//! Process-wide current-locale behavior.
//!
//! Everything lives in a single test: the current locale is process-global
//! state, and this file is its own test binary, so no other test observes
//! the changes made here.

use numstyle::{CurrencyCode, CurrencyStyle, DecimalStyle, Iso4217, Locale, NumberStyle};

#[test]
fn test_current_locale_defaults() {
    assert_eq!(Locale::current(), Locale::en_us());

    // Currency defaults resolve from the current locale at construction.
    let style = CurrencyStyle::new();
    assert_eq!(style.code, CurrencyCode::Common(Iso4217::Usd));
    assert_eq!(style.locale, Locale::en_us());

    // Defaults are re-evaluated per call, so a changed process locale is
    // picked up by styles constructed afterwards.
    Locale::set_current(Locale::de_de());
    let german = CurrencyStyle::new();
    assert_eq!(german.code, CurrencyCode::Common(Iso4217::Eur));
    assert_eq!(german.locale, Locale::de_de());

    // Styles constructed earlier keep the locale they captured.
    assert_eq!(style.locale, Locale::en_us());

    // A locale without a currency of its own falls back to USD.
    Locale::set_current(Locale::root());
    assert_eq!(CurrencyStyle::new().code, CurrencyCode::Common(Iso4217::Usd));

    // Other styles capture the current locale the same way.
    let decimal = DecimalStyle::new();
    assert_eq!(decimal.locale, Locale::root());
    assert_eq!(
        NumberStyle::Decimal(decimal).cache_key().as_deref(),
        Some("decimal:2:und")
    );

    Locale::set_current(Locale::en_us());
}
