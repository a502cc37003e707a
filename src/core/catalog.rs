//! Curated table of currency codes, display names and symbols.

/// Static description of a currency known to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

impl CurrencyInfo {
    const fn new(code: &'static str, name: &'static str, symbol: &'static str) -> Self {
        Self { code, name, symbol }
    }
}

/// Currency every factor is expressed against.
pub const BASE: CurrencyInfo = CurrencyInfo::new("INR", "Indian Rupee", "₹");

/// Native reference currency of the live rates endpoint.
pub const REFERENCE_CODE: &str = "USD";

// Sorted by code.
static CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo::new("AED", "UAE Dirham", "د.إ"),
    CurrencyInfo::new("AFN", "Afghan Afghani", "؋"),
    CurrencyInfo::new("ALL", "Albanian Lek", "L"),
    CurrencyInfo::new("AMD", "Armenian Dram", "֏"),
    CurrencyInfo::new("ANG", "Netherlands Antillean Guilder", "ƒ"),
    CurrencyInfo::new("AOA", "Angolan Kwanza", "Kz"),
    CurrencyInfo::new("ARS", "Argentine Peso", "$"),
    CurrencyInfo::new("AUD", "Australian Dollar", "A$"),
    CurrencyInfo::new("AWG", "Aruban Florin", "ƒ"),
    CurrencyInfo::new("AZN", "Azerbaijani Manat", "₼"),
    CurrencyInfo::new("BAM", "Bosnia-Herzegovina Convertible Mark", "KM"),
    CurrencyInfo::new("BBD", "Barbadian Dollar", "$"),
    CurrencyInfo::new("BDT", "Bangladeshi Taka", "৳"),
    CurrencyInfo::new("BGN", "Bulgarian Lev", "лв"),
    CurrencyInfo::new("BHD", "Bahraini Dinar", ".د.ب"),
    CurrencyInfo::new("BIF", "Burundian Franc", "FBu"),
    CurrencyInfo::new("BMD", "Bermudan Dollar", "$"),
    CurrencyInfo::new("BND", "Brunei Dollar", "$"),
    CurrencyInfo::new("BOB", "Bolivian Boliviano", "Bs."),
    CurrencyInfo::new("BRL", "Brazilian Real", "R$"),
    CurrencyInfo::new("BSD", "Bahamian Dollar", "$"),
    CurrencyInfo::new("BTC", "Bitcoin", "₿"),
    CurrencyInfo::new("BTN", "Bhutanese Ngultrum", "Nu."),
    CurrencyInfo::new("BWP", "Botswanan Pula", "P"),
    CurrencyInfo::new("BYN", "New Belarusian Ruble", "Br"),
    CurrencyInfo::new("BZD", "Belize Dollar", "BZ$"),
    CurrencyInfo::new("CAD", "Canadian Dollar", "C$"),
    CurrencyInfo::new("CDF", "Congolese Franc", "FC"),
    CurrencyInfo::new("CHF", "Swiss Franc", "CHF"),
    CurrencyInfo::new("CLP", "Chilean Peso", "$"),
    CurrencyInfo::new("CNY", "Chinese Yuan", "¥"),
    CurrencyInfo::new("COP", "Colombian Peso", "$"),
    CurrencyInfo::new("CRC", "Costa Rican Colón", "₡"),
    CurrencyInfo::new("CUC", "Cuban Convertible Peso", "$"),
    CurrencyInfo::new("CUP", "Cuban Peso", "₱"),
    CurrencyInfo::new("CVE", "Cape Verdean Escudo", "$"),
    CurrencyInfo::new("CZK", "Czech Republic Koruna", "Kč"),
    CurrencyInfo::new("DJF", "Djiboutian Franc", "Fdj"),
    CurrencyInfo::new("DKK", "Danish Krone", "kr"),
    CurrencyInfo::new("DOP", "Dominican Peso", "RD$"),
    CurrencyInfo::new("DZD", "Algerian Dinar", "دج"),
    CurrencyInfo::new("EGP", "Egyptian Pound", "£"),
    CurrencyInfo::new("ERN", "Eritrean Nakfa", "Nfk"),
    CurrencyInfo::new("ETB", "Ethiopian Birr", "Br"),
    CurrencyInfo::new("EUR", "Euro", "€"),
    CurrencyInfo::new("FJD", "Fijian Dollar", "$"),
    CurrencyInfo::new("FKP", "Falkland Islands Pound", "£"),
    CurrencyInfo::new("GBP", "British Pound Sterling", "£"),
    CurrencyInfo::new("GEL", "Georgian Lari", "₾"),
    CurrencyInfo::new("GGP", "Guernsey Pound", "£"),
    CurrencyInfo::new("GHS", "Ghanaian Cedi", "¢"),
    CurrencyInfo::new("GIP", "Gibraltar Pound", "£"),
    CurrencyInfo::new("GMD", "Gambian Dalasi", "D"),
    CurrencyInfo::new("GNF", "Guinean Franc", "FG"),
    CurrencyInfo::new("GTQ", "Guatemalan Quetzal", "Q"),
    CurrencyInfo::new("GYD", "Guyanaese Dollar", "$"),
    CurrencyInfo::new("HKD", "Hong Kong Dollar", "HK$"),
    CurrencyInfo::new("HNL", "Honduran Lempira", "L"),
    CurrencyInfo::new("HRK", "Croatian Kuna", "kn"),
    CurrencyInfo::new("HTG", "Haitian Gourde", "G"),
    CurrencyInfo::new("HUF", "Hungarian Forint", "Ft"),
    CurrencyInfo::new("IDR", "Indonesian Rupiah", "Rp"),
    CurrencyInfo::new("ILS", "Israeli New Sheqel", "₪"),
    CurrencyInfo::new("IMP", "Manx pound", "£"),
    CurrencyInfo::new("INR", "Indian Rupee", "₹"),
    CurrencyInfo::new("IQD", "Iraqi Dinar", "ع.د"),
    CurrencyInfo::new("IRR", "Iranian Rial", "﷼"),
    CurrencyInfo::new("ISK", "Icelandic Króna", "kr"),
    CurrencyInfo::new("JEP", "Jersey Pound", "£"),
    CurrencyInfo::new("JMD", "Jamaican Dollar", "J$"),
    CurrencyInfo::new("JOD", "Jordanian Dinar", "JD"),
    CurrencyInfo::new("JPY", "Japanese Yen", "¥"),
    CurrencyInfo::new("KES", "Kenyan Shilling", "KSh"),
    CurrencyInfo::new("KGS", "Kyrgystani Som", "лв"),
    CurrencyInfo::new("KHR", "Cambodian Riel", "៛"),
    CurrencyInfo::new("KMF", "Comorian Franc", "CF"),
    CurrencyInfo::new("KPW", "North Korean Won", "₩"),
    CurrencyInfo::new("KRW", "South Korean Won", "₩"),
    CurrencyInfo::new("KWD", "Kuwaiti Dinar", "KD"),
    CurrencyInfo::new("KYD", "Cayman Islands Dollar", "$"),
    CurrencyInfo::new("KZT", "Kazakhstani Tenge", "₸"),
    CurrencyInfo::new("LAK", "Laotian Kip", "₭"),
    CurrencyInfo::new("LBP", "Lebanese Pound", "£"),
    CurrencyInfo::new("LKR", "Sri Lankan Rupee", "₨"),
    CurrencyInfo::new("LRD", "Liberian Dollar", "$"),
    CurrencyInfo::new("LSL", "Lesotho Loti", "M"),
    CurrencyInfo::new("LYD", "Libyan Dinar", "LD"),
    CurrencyInfo::new("MAD", "Moroccan Dirham", "MAD"),
    CurrencyInfo::new("MDL", "Moldovan Leu", "lei"),
    CurrencyInfo::new("MGA", "Malagasy Ariary", "Ar"),
    CurrencyInfo::new("MKD", "Macedonian Denar", "ден"),
    CurrencyInfo::new("MMK", "Myanma Kyat", "K"),
    CurrencyInfo::new("MNT", "Mongolian Tugrik", "₮"),
    CurrencyInfo::new("MOP", "Macanese Pataca", "MOP$"),
    CurrencyInfo::new("MRO", "Mauritanian Ouguiya", "UM"),
    CurrencyInfo::new("MRU", "Mauritanian Ouguiya", "UM"),
    CurrencyInfo::new("MUR", "Mauritian Rupee", "₨"),
    CurrencyInfo::new("MVR", "Maldivian Rufiyaa", "Rf"),
    CurrencyInfo::new("MWK", "Malawian Kwacha", "MK"),
    CurrencyInfo::new("MXN", "Mexican Peso", "$"),
    CurrencyInfo::new("MYR", "Malaysian Ringgit", "RM"),
    CurrencyInfo::new("MZN", "Mozambican Metical", "MT"),
    CurrencyInfo::new("NAD", "Namibian Dollar", "$"),
    CurrencyInfo::new("NGN", "Nigerian Naira", "₦"),
    CurrencyInfo::new("NIO", "Nicaraguan Córdoba", "C$"),
    CurrencyInfo::new("NOK", "Norwegian Krone", "kr"),
    CurrencyInfo::new("NPR", "Nepalese Rupee", "₨"),
    CurrencyInfo::new("NZD", "New Zealand Dollar", "NZ$"),
    CurrencyInfo::new("OMR", "Omani Rial", "﷼"),
    CurrencyInfo::new("PAB", "Panamanian Balboa", "B/."),
    CurrencyInfo::new("PEN", "Peruvian Nuevo Sol", "S/."),
    CurrencyInfo::new("PGK", "Papua New Guinean Kina", "K"),
    CurrencyInfo::new("PHP", "Philippine Peso", "₱"),
    CurrencyInfo::new("PKR", "Pakistani Rupee", "₨"),
    CurrencyInfo::new("PLN", "Polish Zloty", "zł"),
    CurrencyInfo::new("PYG", "Paraguayan Guarani", "Gs"),
    CurrencyInfo::new("QAR", "Qatari Rial", "﷼"),
    CurrencyInfo::new("RON", "Romanian Leu", "lei"),
    CurrencyInfo::new("RSD", "Serbian Dinar", "Дин."),
    CurrencyInfo::new("RUB", "Russian Ruble", "₽"),
    CurrencyInfo::new("RWF", "Rwandan Franc", "R₣"),
    CurrencyInfo::new("SAR", "Saudi Riyal", "﷼"),
    CurrencyInfo::new("SBD", "Solomon Islands Dollar", "$"),
    CurrencyInfo::new("SCR", "Seychellois Rupee", "₨"),
    CurrencyInfo::new("SDG", "Sudanese Pound", "ج.س."),
    CurrencyInfo::new("SEK", "Swedish Krona", "kr"),
    CurrencyInfo::new("SGD", "Singapore Dollar", "S$"),
    CurrencyInfo::new("SHP", "Saint Helena Pound", "£"),
    CurrencyInfo::new("SLE", "Sierra Leonean Leone", "Le"),
    CurrencyInfo::new("SLL", "Sierra Leonean Leone", "Le"),
    CurrencyInfo::new("SOS", "Somali Shilling", "S"),
    CurrencyInfo::new("SRD", "Surinamese Dollar", "$"),
    CurrencyInfo::new("STD", "São Tomé and Príncipe Dobra", "Db"),
    CurrencyInfo::new("STN", "São Tomé and Príncipe Dobra", "Db"),
    CurrencyInfo::new("SVC", "Salvadoran Colón", "$"),
    CurrencyInfo::new("SYP", "Syrian Pound", "£"),
    CurrencyInfo::new("SZL", "Swazi Lilangeni", "E"),
    CurrencyInfo::new("THB", "Thai Baht", "฿"),
    CurrencyInfo::new("TJS", "Tajikistani Somoni", "SM"),
    CurrencyInfo::new("TMT", "Turkmenistani Manat", "T"),
    CurrencyInfo::new("TND", "Tunisian Dinar", "د.ت"),
    CurrencyInfo::new("TOP", "Tongan Paʻanga", "T$"),
    CurrencyInfo::new("TRY", "Turkish Lira", "₺"),
    CurrencyInfo::new("TTD", "Trinidad and Tobago Dollar", "TT$"),
    CurrencyInfo::new("TWD", "New Taiwan Dollar", "NT$"),
    CurrencyInfo::new("TZS", "Tanzanian Shilling", "TSh"),
    CurrencyInfo::new("UAH", "Ukrainian Hryvnia", "₴"),
    CurrencyInfo::new("UGX", "Ugandan Shilling", "USh"),
    CurrencyInfo::new("USD", "US Dollar", "$"),
    CurrencyInfo::new("UYU", "Uruguayan Peso", "$U"),
    CurrencyInfo::new("UZS", "Uzbekistan Som", "лв"),
    CurrencyInfo::new("VED", "Venezuelan Bolívar", "Bs"),
    CurrencyInfo::new("VES", "Venezuelan Bolívar", "Bs"),
    CurrencyInfo::new("VND", "Vietnamese Dong", "₫"),
    CurrencyInfo::new("VUV", "Vanuatu Vatu", "VT"),
    CurrencyInfo::new("WST", "Samoan Tala", "WS$"),
    CurrencyInfo::new("XAF", "CFA Franc BEAC", "FCFA"),
    CurrencyInfo::new("XAG", "Silver (troy ounce)", "XAG"),
    CurrencyInfo::new("XAU", "Gold (troy ounce)", "XAU"),
    CurrencyInfo::new("XCD", "East Caribbean Dollar", "$"),
    CurrencyInfo::new("XDR", "Special Drawing Rights", "SDR"),
    CurrencyInfo::new("XOF", "CFA Franc BCEAO", "CFA"),
    CurrencyInfo::new("XPD", "Palladium Ounce", "XPD"),
    CurrencyInfo::new("XPF", "CFP Franc", "₣"),
    CurrencyInfo::new("XPT", "Platinum Ounce", "XPT"),
    CurrencyInfo::new("YER", "Yemeni Rial", "﷼"),
    CurrencyInfo::new("ZAR", "South African Rand", "R"),
    CurrencyInfo::new("ZMW", "Zambian Kwacha", "ZK"),
    CurrencyInfo::new("ZWL", "Zimbabwean Dollar", "Z$"),
];

/// All catalog entries, sorted by code.
pub fn all() -> &'static [CurrencyInfo] {
    CURRENCIES
}

/// Looks up a currency by ISO-style code, ignoring ASCII case.
pub fn by_code(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES
        .iter()
        .find(|info| info.code.eq_ignore_ascii_case(code))
}

/// Looks up a currency by its exact display name.
pub fn by_name(name: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|info| info.name == name)
}
