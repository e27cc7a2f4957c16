//! Spell-out and ordinal rendering.
//!
//! The built-in backend carries spell-out and ordinal data for English only;
//! other locales report [`RenderError::UnsupportedLocale`] so callers see an
//! absent result rather than wrong-language output.

use super::number::group_digits;
use crate::error::RenderError;
use crate::locale::Locale;
use crate::value::Number;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

fn check_language(locale: &Locale, mode: &'static str) -> Result<(), RenderError> {
    if locale.language() == "en" {
        Ok(())
    } else {
        Err(RenderError::UnsupportedLocale {
            locale: locale.id().to_string(),
            mode,
        })
    }
}

/// Spells a value out in English words, e.g. `42` → `"forty-two"`,
/// `-0.5` → `"minus zero point five"`.
pub(super) fn spell_out(value: Number, locale: &Locale) -> Result<String, RenderError> {
    check_language(locale, "spell-out")?;

    let magnitude = value.value.abs();
    if magnitude.trunc() >= u64::MAX as f64 {
        return Err(RenderError::OutOfRange {
            value: value.value,
            mode: "spell-out",
        });
    }

    let int_part = magnitude.trunc() as u64;
    let mut words = String::new();
    if value.value.is_sign_negative() && (int_part > 0 || !value.is_integral()) {
        words.push_str("minus ");
    }
    words.push_str(&spell_integer(int_part));

    if !value.is_integral() {
        // Fraction digits come from the shortest display form, so 0.1 spells
        // as "point one", not a binary-expansion tail.
        let display = format!("{magnitude}");
        if let Some((_, frac)) = display.split_once('.') {
            words.push_str(" point");
            for digit in frac.bytes() {
                words.push(' ');
                words.push_str(ONES[(digit - b'0') as usize]);
            }
        }
    }

    Ok(words)
}

fn spell_integer(mut n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut parts: Vec<String> = Vec::new();
    for (scale, name) in SCALES {
        if n >= scale {
            parts.push(format!("{} {name}", spell_below_thousand(n / scale)));
            n %= scale;
        }
    }
    if n > 0 {
        parts.push(spell_below_thousand(n));
    }
    parts.join(" ")
}

fn spell_below_thousand(n: u64) -> String {
    debug_assert!(n < 1000);
    let mut out = String::new();
    let hundreds = n / 100;
    let rem = (n % 100) as usize;
    if hundreds > 0 {
        out.push_str(ONES[hundreds as usize]);
        out.push_str(" hundred");
        if rem > 0 {
            out.push(' ');
        }
    }
    if rem >= 20 {
        out.push_str(TENS[rem / 10]);
        if rem % 10 > 0 {
            out.push('-');
            out.push_str(ONES[rem % 10]);
        }
    } else if rem > 0 {
        out.push_str(ONES[rem]);
    }
    out
}

/// Renders a value as an English ordinal, rounding to the nearest integer
/// with ties away from zero (the same tie rule percent uses, so `2.5` is
/// `"3rd"` and `-2.5` is `"-3rd"`), e.g. `3` → `"3rd"`, `1234` → `"1,234th"`.
pub(super) fn ordinal(value: Number, locale: &Locale) -> Result<String, RenderError> {
    check_language(locale, "ordinal")?;

    let rounded = value.value.round();
    if rounded.abs() >= i64::MAX as f64 {
        return Err(RenderError::OutOfRange {
            value: value.value,
            mode: "ordinal",
        });
    }

    let n = rounded as i64;
    let digits = n.unsigned_abs().to_string();
    let grouped = group_digits(&digits, locale.grouping_separator());
    let sign = if n < 0 { "-" } else { "" };
    Ok(format!("{sign}{grouped}{}", ordinal_suffix(n.unsigned_abs())))
}

fn ordinal_suffix(n: u64) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(value: impl Into<Number>) -> String {
        spell_out(value.into(), &Locale::en_us()).unwrap()
    }

    #[test]
    fn test_spell_out_small() {
        assert_eq!(en(0), "zero");
        assert_eq!(en(7), "seven");
        assert_eq!(en(13), "thirteen");
        assert_eq!(en(42), "forty-two");
        assert_eq!(en(70), "seventy");
    }

    #[test]
    fn test_spell_out_compound() {
        assert_eq!(en(142), "one hundred forty-two");
        assert_eq!(en(1234), "one thousand two hundred thirty-four");
        assert_eq!(en(1_000_000), "one million");
        assert_eq!(
            en(2_000_000_001i64),
            "two billion one"
        );
    }

    #[test]
    fn test_spell_out_negative_and_fraction() {
        assert_eq!(en(-8), "minus eight");
        assert_eq!(en(0.25), "zero point two five");
        assert_eq!(en(-0.5), "minus zero point five");
    }

    #[test]
    fn test_spell_out_integral_float_matches_integer() {
        assert_eq!(en(42.0), en(42));
    }

    #[test]
    fn test_spell_out_unsupported_locale() {
        let err = spell_out(Number::from(42), &Locale::de_de()).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedLocale { .. }));
    }

    #[test]
    fn test_ordinal_suffixes() {
        let locale = Locale::en_us();
        assert_eq!(ordinal(Number::from(1), &locale).unwrap(), "1st");
        assert_eq!(ordinal(Number::from(2), &locale).unwrap(), "2nd");
        assert_eq!(ordinal(Number::from(3), &locale).unwrap(), "3rd");
        assert_eq!(ordinal(Number::from(4), &locale).unwrap(), "4th");
        assert_eq!(ordinal(Number::from(11), &locale).unwrap(), "11th");
        assert_eq!(ordinal(Number::from(13), &locale).unwrap(), "13th");
        assert_eq!(ordinal(Number::from(21), &locale).unwrap(), "21st");
        assert_eq!(ordinal(Number::from(112), &locale).unwrap(), "112th");
        assert_eq!(ordinal(Number::from(1234), &locale).unwrap(), "1,234th");
        assert_eq!(ordinal(Number::from(-3), &locale).unwrap(), "-3rd");
    }

    #[test]
    fn test_ordinal_rounds() {
        let locale = Locale::en_us();
        assert_eq!(ordinal(Number::from(2.6), &locale).unwrap(), "3rd");
    }
}
