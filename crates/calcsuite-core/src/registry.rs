//! Static currency reference tables.
//!
//! Three read-only, ordered tables with process-wide lifetime:
//!
//! - [`full`]: the complete ISO 4217 list backing the searchable
//!   currency selector,
//! - [`sip`] and [`mortgage`]: the short display lists the SIP and
//!   mortgage pages offer as quick-pick buttons.
//!
//! The short lists are intentionally distinct surfaces from the full
//! table (different ordering, slightly different membership) and are
//! kept separate rather than merged. Lookup is a linear scan; the
//! tables are small and never mutate.

use crate::error::{CalcError, CalcResult};
use crate::types::Currency;

const fn c(code: &'static str, name: &'static str, symbol: &'static str) -> Currency {
    Currency::new(code, name, symbol)
}

/// Complete ISO 4217 table, ordered by code.
static FULL: &[Currency] = &[
    c("AED", "United Arab Emirates Dirham", "د.إ"),
    c("AFN", "Afghan Afghani", "AFN"),
    c("ALL", "Albanian Lek", "L"),
    c("AMD", "Armenian Dram", "֏"),
    c("ANG", "Netherlands Antillean Guilder", "ANG"),
    c("AOA", "Angolan Kwanza", "AOA"),
    c("ARS", "Argentine Peso", "$"),
    c("AUD", "Australian Dollar", "A$"),
    c("AWG", "Aruban Florin", "AWG"),
    c("AZN", "Azerbaijani Manat", "₼"),
    c("BAM", "Bosnia-Herzegovina Convertible Mark", "KM"),
    c("BBD", "Barbadian Dollar", "$"),
    c("BDT", "Bangladeshi Taka", "৳"),
    c("BGN", "Bulgarian Lev", "лв"),
    c("BHD", "Bahraini Dinar", ".د.ب"),
    c("BIF", "Burundian Franc", "FBu"),
    c("BMD", "Bermudian Dollar", "$"),
    c("BND", "Brunei Dollar", "$"),
    c("BOB", "Bolivian Boliviano", "Bs."),
    c("BRL", "Brazilian Real", "R$"),
    c("BSD", "Bahamian Dollar", "$"),
    c("BTN", "Bhutanese Ngultrum", "Nu."),
    c("BWP", "Botswana Pula", "P"),
    c("BYN", "Belarusian Ruble", "Br"),
    c("BZD", "Belize Dollar", "$"),
    c("CAD", "Canadian Dollar", "C$"),
    c("CDF", "Congolese Franc", "FC"),
    c("CHF", "Swiss Franc", "CHF"),
    c("CLP", "Chilean Peso", "$"),
    c("CNY", "Chinese Yuan", "¥"),
    c("COP", "Colombian Peso", "$"),
    c("CRC", "Costa Rican Colón", "₡"),
    c("CUP", "Cuban Peso", "$"),
    c("CVE", "Cape Verdean Escudo", "CV$"),
    c("CZK", "Czech Koruna", "Kč"),
    c("DJF", "Djiboutian Franc", "Fdj"),
    c("DKK", "Danish Krone", "kr"),
    c("DOP", "Dominican Peso", "RD$"),
    c("DZD", "Algerian Dinar", "د.ج"),
    c("EGP", "Egyptian Pound", "£"),
    c("ERN", "Eritrean Nakfa", "Nfk"),
    c("ETB", "Ethiopian Birr", "Br"),
    c("EUR", "Euro", "€"),
    c("FJD", "Fijian Dollar", "$"),
    c("FKP", "Falkland Islands Pound", "£"),
    c("GBP", "British Pound Sterling", "£"),
    c("GEL", "Georgian Lari", "₾"),
    c("GGP", "Guernsey Pound", "£"),
    c("GHS", "Ghanaian Cedi", "₵"),
    c("GIP", "Gibraltar Pound", "£"),
    c("GMD", "Gambian Dalasi", "D"),
    c("GNF", "Guinean Franc", "FG"),
    c("GTQ", "Guatemalan Quetzal", "Q"),
    c("GYD", "Guyanese Dollar", "$"),
    c("HKD", "Hong Kong Dollar", "HK$"),
    c("HNL", "Honduran Lempira", "L"),
    c("HRK", "Croatian Kuna", "kn"),
    c("HTG", "Haitian Gourde", "G"),
    c("HUF", "Hungarian Forint", "Ft"),
    c("IDR", "Indonesian Rupiah", "Rp"),
    c("ILS", "Israeli New Shekel", "₪"),
    c("IMP", "Manx Pound", "£"),
    c("INR", "Indian Rupee", "₹"),
    c("IQD", "Iraqi Dinar", "ع.د"),
    c("IRR", "Iranian Rial", "﷼"),
    c("ISK", "Icelandic Króna", "kr"),
    c("JEP", "Jersey Pound", "£"),
    c("JMD", "Jamaican Dollar", "J$"),
    c("JOD", "Jordanian Dinar", "JD"),
    c("JPY", "Japanese Yen", "¥"),
    c("KES", "Kenyan Shilling", "KSh"),
    c("KGS", "Kyrgystani Som", "сом"),
    c("KHR", "Cambodian Riel", "៛"),
    c("KMF", "Comorian Franc", "CF"),
    c("KPW", "North Korean Won", "₩"),
    c("KRW", "South Korean Won", "₩"),
    c("KWD", "Kuwaiti Dinar", "د.ك"),
    c("KYD", "Cayman Islands Dollar", "$"),
    c("KZT", "Kazakhstani Tenge", "₸"),
    c("LAK", "Lao Kip", "₭"),
    c("LBP", "Lebanese Pound", "ل.ل"),
    c("LKR", "Sri Lankan Rupee", "Rs"),
    c("LRD", "Liberian Dollar", "$"),
    c("LSL", "Lesotho Loti", "L"),
    c("LYD", "Libyan Dinar", "ل.د"),
    c("MAD", "Moroccan Dirham", "د.م."),
    c("MDL", "Moldovan Leu", "L"),
    c("MGA", "Malagasy Ariary", "Ar"),
    c("MKD", "Macedonian Denar", "ден"),
    c("MMK", "Myanma Kyat", "Ks"),
    c("MNT", "Mongolian Tögrög", "₮"),
    c("MOP", "Macanese Pataca", "MOP$"),
    c("MRU", "Mauritanian Ouguiya", "UM"),
    c("MUR", "Mauritian Rupee", "₨"),
    c("MVR", "Maldivian Rufiyaa", "ރ."),
    c("MWK", "Malawian Kwacha", "MK"),
    c("MXN", "Mexican Peso", "$"),
    c("MYR", "Malaysian Ringgit", "RM"),
    c("MZN", "Mozambican Metical", "MT"),
    c("NAD", "Namibian Dollar", "$"),
    c("NGN", "Nigerian Naira", "₦"),
    c("NIO", "Nicaraguan Córdoba", "C$"),
    c("NOK", "Norwegian Krone", "kr"),
    c("NPR", "Nepalese Rupee", "₨"),
    c("NZD", "New Zealand Dollar", "NZ$"),
    c("OMR", "Omani Rial", "﷼"),
    c("PAB", "Panamanian Balboa", "B/."),
    c("PEN", "Peruvian Sol", "S/."),
    c("PGK", "Papua New Guinean Kina", "K"),
    c("PHP", "Philippine Peso", "₱"),
    c("PKR", "Pakistani Rupee", "₨"),
    c("PLN", "Polish Złoty", "zł"),
    c("PYG", "Paraguayan Guaraní", "₲"),
    c("QAR", "Qatari Rial", "﷼"),
    c("RON", "Romanian Leu", "lei"),
    c("RSD", "Serbian Dinar", "дин"),
    c("RUB", "Russian Ruble", "₽"),
    c("RWF", "Rwandan Franc", "FRw"),
    c("SAR", "Saudi Riyal", "﷼"),
    c("SBD", "Solomon Islands Dollar", "$"),
    c("SCR", "Seychellois Rupee", "₨"),
    c("SDG", "Sudanese Pound", "£"),
    c("SEK", "Swedish Krona", "kr"),
    c("SGD", "Singapore Dollar", "S$"),
    c("SHP", "Saint Helena Pound", "£"),
    c("SLL", "Sierra Leonean Leone", "Le"),
    c("SOS", "Somali Shilling", "S"),
    c("SRD", "Surinamese Dollar", "$"),
    c("SSP", "South Sudanese Pound", "£"),
    c("STN", "São Tomé and Príncipe Dobra", "Db"),
    c("SYP", "Syrian Pound", "£"),
    c("SZL", "Swazi Lilangeni", "E"),
    c("THB", "Thai Baht", "฿"),
    c("TJS", "Tajikistani Somoni", "ЅМ"),
    c("TMT", "Turkmenistan Manat", "m"),
    c("TND", "Tunisian Dinar", "د.ت"),
    c("TOP", "Tongan Paʻanga", "T$"),
    c("TRY", "Turkish Lira", "₺"),
    c("TTD", "Trinidad and Tobago Dollar", "TT$"),
    c("TVD", "Tuvalu Dollar", "$"),
    c("TWD", "New Taiwan Dollar", "NT$"),
    c("TZS", "Tanzanian Shilling", "TSh"),
    c("UAH", "Ukrainian Hryvnia", "₴"),
    c("UGX", "Ugandan Shilling", "USh"),
    c("USD", "United States Dollar", "$"),
    c("UYU", "Uruguayan Peso", "$U"),
    c("UZS", "Uzbekistan Som", "soʻm"),
    c("VES", "Venezuelan Bolívar Soberano", "Bs.S"),
    c("VND", "Vietnamese Dong", "₫"),
    c("VUV", "Vanuatu Vatu", "VT"),
    c("WST", "Samoan Tala", "WS$"),
    c("XAF", "CFA Franc BEAC", "FCFA"),
    c("XCD", "East Caribbean Dollar", "EC$"),
    c("XOF", "CFA Franc BCEAO", "CFA"),
    c("XPF", "CFP Franc", "₣"),
    c("YER", "Yemeni Rial", "﷼"),
    c("ZAR", "South African Rand", "R"),
    c("ZMW", "Zambian Kwacha", "ZK"),
    c("ZWL", "Zimbabwean Dollar", "Z$"),
];

/// Quick-pick list shown on the SIP page.
static SIP: &[Currency] = &[
    c("INR", "Indian Rupee", "₹"),
    c("USD", "US Dollar", "$"),
    c("EUR", "Euro", "€"),
    c("GBP", "British Pound", "£"),
    c("AUD", "Australian Dollar", "A$"),
    c("CAD", "Canadian Dollar", "C$"),
    c("SGD", "Singapore Dollar", "S$"),
    c("AED", "UAE Dirham", "AED"),
];

/// Quick-pick list shown on the mortgage page.
static MORTGAGE: &[Currency] = &[
    c("USD", "US Dollar", "$"),
    c("INR", "Indian Rupee", "₹"),
    c("EUR", "Euro", "€"),
    c("GBP", "British Pound", "£"),
    c("AUD", "Australian Dollar", "A$"),
    c("CAD", "Canadian Dollar", "C$"),
    c("AED", "UAE Dirham", "AED"),
    c("JPY", "Japanese Yen", "¥"),
];

/// Returns the full ISO 4217 table.
#[must_use]
pub fn full() -> &'static [Currency] {
    FULL
}

/// Returns the SIP page's quick-pick list.
#[must_use]
pub fn sip() -> &'static [Currency] {
    SIP
}

/// Returns the mortgage page's quick-pick list.
#[must_use]
pub fn mortgage() -> &'static [Currency] {
    MORTGAGE
}

/// Finds a currency in the full table by code, case-insensitively.
#[must_use]
pub fn find(code: &str) -> Option<Currency> {
    FULL.iter().find(|c| c.code().eq_ignore_ascii_case(code)).copied()
}

/// Looks up a currency in the full table by code, case-insensitively.
///
/// # Errors
///
/// Returns `CalcError::UnknownCurrency` if the code is not in the table.
/// A miss is never papered over with a default.
pub fn lookup(code: &str) -> CalcResult<Currency> {
    find(code).ok_or_else(|| CalcError::unknown_currency(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table_is_sorted_by_code() {
        for pair in FULL.windows(2) {
            assert!(pair[0].code() < pair[1].code(), "{} >= {}", pair[0].code(), pair[1].code());
        }
    }

    #[test]
    fn test_full_table_codes_are_unique() {
        let mut codes: Vec<_> = FULL.iter().map(|c| c.code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), FULL.len());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("usd").unwrap().code(), "USD");
        assert_eq!(lookup("Inr").unwrap().symbol(), "₹");
    }

    #[test]
    fn test_lookup_unknown_code() {
        let err = lookup("XYZ").unwrap_err();
        assert_eq!(err, crate::error::CalcError::unknown_currency("XYZ"));
    }

    #[test]
    fn test_quick_pick_lists_keep_their_own_order() {
        // The short page lists are separate display surfaces, not
        // re-sorted views of the full table.
        assert_eq!(sip()[0].code(), "INR");
        assert_eq!(mortgage()[0].code(), "USD");
        assert_eq!(sip().len(), 8);
        assert_eq!(mortgage().len(), 8);
    }

    #[test]
    fn test_quick_pick_codes_exist_in_full_table() {
        for c in sip().iter().chain(mortgage()) {
            assert!(find(c.code()).is_some(), "missing {}", c.code());
        }
    }
}
