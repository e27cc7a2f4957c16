//! Decimal, currency, percent and scientific rendering.

use crate::currency::Iso4217;
use crate::handle::FormatterHandle;
use crate::locale::Locale;

/// Inserts `separator` between groups of three integer digits.
pub(crate) fn group_digits(digits: &str, separator: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Renders `|value|` with exactly `digits` fraction digits, grouped per the
/// locale. Returns the rendered magnitude and whether it rounded to zero
/// (used to suppress the sign on "-0" results).
fn magnitude(value: f64, digits: usize, locale: &Locale) -> (String, String, bool) {
    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (fixed, String::new()),
    };
    let is_zero =
        int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0');
    let grouped = group_digits(&int_part, locale.grouping_separator());
    (grouped, frac_part, is_zero)
}

fn assemble(int_part: &str, frac_part: &str, negative: bool, locale: &Locale) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(int_part);
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

/// Decimal style: bounded fraction digits, trailing zeros trimmed.
pub(super) fn decimal(value: f64, handle: &FormatterHandle) -> String {
    let digits = handle.max_fraction_digits.unwrap_or(2) as usize;
    let (int_part, mut frac_part, is_zero) = magnitude(value, digits, &handle.locale);
    let keep = frac_part.trim_end_matches('0').len();
    frac_part.truncate(keep);
    assemble(
        &int_part,
        &frac_part,
        value.is_sign_negative() && !is_zero,
        &handle.locale,
    )
}

/// Currency style: the code's minor-unit digit count, locale symbol
/// placement. Codes outside the common set render with the code itself in
/// place of a symbol.
pub(super) fn currency(value: f64, handle: &FormatterHandle) -> String {
    let code = handle.currency_code.as_deref().unwrap_or("USD");
    let known = Iso4217::from_code(code);
    let digits = known.map_or(2, |c| c.minor_units()) as usize;
    let symbol = known.and_then(|c| c.symbol());

    let locale = &handle.locale;
    let (int_part, frac_part, is_zero) = magnitude(value, digits, locale);
    let amount = assemble(&int_part, &frac_part, false, locale);
    let negative = value.is_sign_negative() && !is_zero;
    let sign = if negative { "-" } else { "" };

    match (symbol, locale.symbol_after_amount()) {
        (Some(sym), false) => format!("{sign}{sym}{amount}"),
        (Some(sym), true) => format!("{sign}{amount} {sym}"),
        (None, false) => format!("{sign}{code} {amount}"),
        (None, true) => format!("{sign}{amount} {code}"),
    }
}

/// Rounds a non-negative value to `digits` fraction digits with ties going
/// up (away from zero). `format!("{:.*}")` resolves ties to even, so modes
/// that promise half-up rounding go through here first.
fn round_half_up(magnitude: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (magnitude * factor).round() / factor
}

/// Percent style: value scaled by 100, rounded to whole percent with ties
/// away from zero (`0.125` → `"13%"`).
pub(super) fn percent(value: f64, handle: &FormatterHandle) -> String {
    let digits = handle.max_fraction_digits.unwrap_or(0) as usize;
    let locale = &handle.locale;
    let scaled = round_half_up(value.abs() * 100.0, digits);
    let (int_part, frac_part, is_zero) = magnitude(scaled, digits, locale);
    let mut out = assemble(
        &int_part,
        &frac_part,
        value.is_sign_negative() && !is_zero,
        locale,
    );
    if locale.space_before_percent() {
        out.push('\u{a0}');
    }
    out.push('%');
    out
}

/// Scientific style: shortest mantissa, `E` exponent marker, no plus sign.
pub(super) fn scientific(value: f64, locale: &Locale) -> String {
    let mut out = format!("{value:e}").replace('e', "E");
    if locale.decimal_separator() != '.' {
        out = out.replace('.', &locale.decimal_separator().to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::StyleMode;

    fn handle(mode: StyleMode, locale: Locale) -> FormatterHandle {
        FormatterHandle {
            mode,
            locale,
            max_fraction_digits: None,
            currency_code: None,
        }
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_decimal_trims_trailing_zeros() {
        let mut h = handle(StyleMode::Decimal, Locale::en_us());
        h.max_fraction_digits = Some(2);
        assert_eq!(decimal(42.0, &h), "42");
        assert_eq!(decimal(42.5, &h), "42.5");
        assert_eq!(decimal(1234.5678, &h), "1,234.57");
    }

    #[test]
    fn test_decimal_negative_zero_is_unsigned() {
        let mut h = handle(StyleMode::Decimal, Locale::en_us());
        h.max_fraction_digits = Some(0);
        assert_eq!(decimal(-0.2, &h), "0");
        assert_eq!(decimal(-0.0, &h), "0");
    }

    #[test]
    fn test_decimal_german_separators() {
        let mut h = handle(StyleMode::Decimal, Locale::de_de());
        h.max_fraction_digits = Some(2);
        assert_eq!(decimal(1234.5, &h), "1.234,5");
    }

    #[test]
    fn test_currency_minor_units() {
        let mut h = handle(StyleMode::Currency, Locale::en_us());
        h.currency_code = Some("USD".to_string());
        assert_eq!(currency(9876.54, &h), "$9,876.54");
        assert_eq!(currency(-5.0, &h), "-$5.00");

        h.currency_code = Some("JPY".to_string());
        assert_eq!(currency(9876.54, &h), "¥9,877");
    }

    #[test]
    fn test_currency_suffix_placement() {
        let mut h = handle(StyleMode::Currency, Locale::de_de());
        h.currency_code = Some("EUR".to_string());
        assert_eq!(currency(9876.54, &h), "9.876,54 €");
    }

    #[test]
    fn test_currency_unknown_code_uses_code() {
        let mut h = handle(StyleMode::Currency, Locale::en_us());
        h.currency_code = Some("XYZ".to_string());
        assert_eq!(currency(9876.54, &h), "XYZ 9,876.54");
    }

    #[test]
    fn test_percent() {
        let h = handle(StyleMode::Percent, Locale::en_us());
        assert_eq!(percent(0.25, &h), "25%");
        assert_eq!(percent(1.5, &h), "150%");
        assert_eq!(percent(-0.072, &h), "-7%");
    }

    #[test]
    fn test_percent_ties_round_up() {
        // Tie values chosen to be exactly representable in binary.
        let h = handle(StyleMode::Percent, Locale::en_us());
        assert_eq!(percent(0.125, &h), "13%");
        assert_eq!(percent(0.375, &h), "38%");
        assert_eq!(percent(-0.125, &h), "-13%");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(12.5, 0), 13.0);
        assert_eq!(round_half_up(12.25, 1), 12.3);
        assert_eq!(round_half_up(12.2, 0), 12.0);
    }

    #[test]
    fn test_scientific() {
        let en = Locale::en_us();
        assert_eq!(scientific(123456.0, &en), "1.23456E5");
        assert_eq!(scientific(0.001, &en), "1E-3");
        assert_eq!(scientific(0.0, &en), "0E0");
        assert_eq!(scientific(-42.0, &en), "-4.2E1");
        assert_eq!(scientific(123456.0, &Locale::de_de()), "1,23456E5");
    }
}
