//! ISO 4217 currency codes.
//!
//! A closed enumeration of the common active ISO 4217 codes, plus an escape
//! hatch for caller-supplied codes outside the set. The table is pure data:
//! the three-letter code and the ISO minor-unit count (JPY = 0, USD = 2,
//! BHD = 3) that drives currency fraction digits.

use std::fmt;

macro_rules! iso_currencies {
    ($(($variant:ident, $code:literal, $minor:expr),)+) => {
        /// A common ISO 4217 currency code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Iso4217 {
            $($variant,)+
        }

        impl Iso4217 {
            /// Every member of the closed enumeration, in code order.
            pub const ALL: &'static [Iso4217] = &[$(Iso4217::$variant,)+];

            /// The three-letter ISO code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Iso4217::$variant => $code,)+
                }
            }

            /// Number of digits after the decimal separator for amounts in
            /// this currency.
            pub fn minor_units(&self) -> u32 {
                match self {
                    $(Iso4217::$variant => $minor,)+
                }
            }

            /// Looks up a member by its three-letter code.
            pub fn from_code(code: &str) -> Option<Iso4217> {
                match code {
                    $($code => Some(Iso4217::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

iso_currencies! {
    (Aed, "AED", 2),
    (Afn, "AFN", 2),
    (All, "ALL", 2),
    (Amd, "AMD", 2),
    (Ang, "ANG", 2),
    (Aoa, "AOA", 2),
    (Ars, "ARS", 2),
    (Aud, "AUD", 2),
    (Awg, "AWG", 2),
    (Azn, "AZN", 2),
    (Bam, "BAM", 2),
    (Bbd, "BBD", 2),
    (Bdt, "BDT", 2),
    (Bgn, "BGN", 2),
    (Bhd, "BHD", 3),
    (Bif, "BIF", 0),
    (Bmd, "BMD", 2),
    (Bnd, "BND", 2),
    (Bob, "BOB", 2),
    (Brl, "BRL", 2),
    (Bsd, "BSD", 2),
    (Btn, "BTN", 2),
    (Bwp, "BWP", 2),
    (Byn, "BYN", 2),
    (Bzd, "BZD", 2),
    (Cad, "CAD", 2),
    (Cdf, "CDF", 2),
    (Chf, "CHF", 2),
    (Clp, "CLP", 0),
    (Cny, "CNY", 2),
    (Cop, "COP", 2),
    (Crc, "CRC", 2),
    (Cup, "CUP", 2),
    (Cve, "CVE", 2),
    (Czk, "CZK", 2),
    (Djf, "DJF", 0),
    (Dkk, "DKK", 2),
    (Dop, "DOP", 2),
    (Dzd, "DZD", 2),
    (Egp, "EGP", 2),
    (Ern, "ERN", 2),
    (Etb, "ETB", 2),
    (Eur, "EUR", 2),
    (Fjd, "FJD", 2),
    (Fkp, "FKP", 2),
    (Gbp, "GBP", 2),
    (Gel, "GEL", 2),
    (Ghs, "GHS", 2),
    (Gip, "GIP", 2),
    (Gmd, "GMD", 2),
    (Gnf, "GNF", 0),
    (Gtq, "GTQ", 2),
    (Gyd, "GYD", 2),
    (Hkd, "HKD", 2),
    (Hnl, "HNL", 2),
    (Htg, "HTG", 2),
    (Huf, "HUF", 2),
    (Idr, "IDR", 2),
    (Ils, "ILS", 2),
    (Inr, "INR", 2),
    (Iqd, "IQD", 3),
    (Irr, "IRR", 2),
    (Isk, "ISK", 0),
    (Jmd, "JMD", 2),
    (Jod, "JOD", 3),
    (Jpy, "JPY", 0),
    (Kes, "KES", 2),
    (Kgs, "KGS", 2),
    (Khr, "KHR", 2),
    (Kmf, "KMF", 0),
    (Krw, "KRW", 0),
    (Kwd, "KWD", 3),
    (Kyd, "KYD", 2),
    (Kzt, "KZT", 2),
    (Lak, "LAK", 2),
    (Lbp, "LBP", 2),
    (Lkr, "LKR", 2),
    (Lrd, "LRD", 2),
    (Lsl, "LSL", 2),
    (Lyd, "LYD", 3),
    (Mad, "MAD", 2),
    (Mdl, "MDL", 2),
    (Mga, "MGA", 2),
    (Mkd, "MKD", 2),
    (Mmk, "MMK", 2),
    (Mnt, "MNT", 2),
    (Mop, "MOP", 2),
    (Mru, "MRU", 2),
    (Mur, "MUR", 2),
    (Mvr, "MVR", 2),
    (Mwk, "MWK", 2),
    (Mxn, "MXN", 2),
    (Myr, "MYR", 2),
    (Mzn, "MZN", 2),
    (Nad, "NAD", 2),
    (Ngn, "NGN", 2),
    (Nio, "NIO", 2),
    (Nok, "NOK", 2),
    (Npr, "NPR", 2),
    (Nzd, "NZD", 2),
    (Omr, "OMR", 3),
    (Pab, "PAB", 2),
    (Pen, "PEN", 2),
    (Pgk, "PGK", 2),
    (Php, "PHP", 2),
    (Pkr, "PKR", 2),
    (Pln, "PLN", 2),
    (Pyg, "PYG", 0),
    (Qar, "QAR", 2),
    (Ron, "RON", 2),
    (Rsd, "RSD", 2),
    (Rub, "RUB", 2),
    (Rwf, "RWF", 0),
    (Sar, "SAR", 2),
    (Sbd, "SBD", 2),
    (Scr, "SCR", 2),
    (Sdg, "SDG", 2),
    (Sek, "SEK", 2),
    (Sgd, "SGD", 2),
    (Shp, "SHP", 2),
    (Sle, "SLE", 2),
    (Sos, "SOS", 2),
    (Srd, "SRD", 2),
    (Ssp, "SSP", 2),
    (Stn, "STN", 2),
    (Svc, "SVC", 2),
    (Szl, "SZL", 2),
    (Thb, "THB", 2),
    (Tjs, "TJS", 2),
    (Tmt, "TMT", 2),
    (Tnd, "TND", 3),
    (Top, "TOP", 2),
    (Try, "TRY", 2),
    (Ttd, "TTD", 2),
    (Twd, "TWD", 2),
    (Tzs, "TZS", 2),
    (Uah, "UAH", 2),
    (Ugx, "UGX", 0),
    (Usd, "USD", 2),
    (Uyu, "UYU", 2),
    (Uzs, "UZS", 2),
    (Ves, "VES", 2),
    (Vnd, "VND", 0),
    (Vuv, "VUV", 0),
    (Wst, "WST", 2),
    (Xaf, "XAF", 0),
    (Xcd, "XCD", 2),
    (Xof, "XOF", 0),
    (Xpf, "XPF", 0),
    (Yer, "YER", 2),
    (Zar, "ZAR", 2),
    (Zmw, "ZMW", 2),
    (Zwl, "ZWL", 2),
}

impl Iso4217 {
    /// A display symbol for currencies that have a widely recognized one.
    /// Currencies without a distinct symbol render with their code instead.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Iso4217::Usd => Some("$"),
            Iso4217::Eur => Some("€"),
            Iso4217::Gbp => Some("£"),
            Iso4217::Jpy => Some("¥"),
            Iso4217::Krw => Some("₩"),
            Iso4217::Inr => Some("₹"),
            Iso4217::Rub => Some("₽"),
            Iso4217::Try => Some("₺"),
            Iso4217::Ngn => Some("₦"),
            Iso4217::Vnd => Some("₫"),
            Iso4217::Ils => Some("₪"),
            Iso4217::Thb => Some("฿"),
            Iso4217::Uah => Some("₴"),
            Iso4217::Php => Some("₱"),
            _ => None,
        }
    }
}

impl fmt::Display for Iso4217 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A currency code: a member of the common ISO 4217 set, or a caller-supplied
/// code outside it.
///
/// `Custom` codes are passed through verbatim and never validated; whether
/// the rendering backend can do anything useful with one is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyCode {
    Common(Iso4217),
    Custom(String),
}

impl CurrencyCode {
    /// The three-letter code string (`Custom` yields the raw string).
    pub fn as_str(&self) -> &str {
        match self {
            CurrencyCode::Common(code) => code.code(),
            CurrencyCode::Custom(code) => code,
        }
    }
}

impl From<Iso4217> for CurrencyCode {
    fn from(code: Iso4217) -> Self {
        CurrencyCode::Common(code)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in Iso4217::ALL {
            assert_eq!(Iso4217::from_code(code.code()), Some(*code));
        }
    }

    #[test]
    fn test_custom_is_verbatim() {
        let code = CurrencyCode::Custom("BTC".to_string());
        assert_eq!(code.as_str(), "BTC");
        assert_eq!(code.to_string(), "BTC");
    }
}
