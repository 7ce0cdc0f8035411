use cashflow_core::format::CurrencyFormatter;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware number formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Separators for the handful of locales the CLI knows; anything else uses `en-US` rules.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag {
            "de-DE" | "es-ES" | "it-IT" | "nl-NL" | "pt-BR" => (',', '.'),
            "fr-FR" | "sv-SE" | "nb-NO" | "pl-PL" => (',', ' '),
            "de-CH" => ('.', '\''),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
    pub screen_reader_mode: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
            screen_reader_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let grouped = match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, locale.grouping_separator)),
        None => group_digits(int_part, locale.grouping_separator),
    };
    match fraction {
        Some(fraction) => format!("{}{}{}", grouped, locale.decimal_separator, fraction),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let digits = format_number(locale, amount.abs(), precision);
    // Rounded-away amounts such as -0.001 print without a sign.
    let negative = amount < 0.0 && digits.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    let unsigned = match options.currency_display {
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), digits),
        CurrencyDisplay::Symbol | CurrencyDisplay::SymbolAndCode => {
            format!("{}{}", symbol_for(code.as_str()), digits)
        }
    };
    let suffix = match options.currency_display {
        CurrencyDisplay::SymbolAndCode => format!(" ({})", code.as_str()),
        _ => String::new(),
    };

    if options.screen_reader_mode {
        let spoken = match options.currency_display {
            CurrencyDisplay::Code => format!("{}{}", unsigned, suffix),
            _ => format!("{} {}{}", code.as_str(), unsigned, suffix),
        };
        return if negative {
            format!("minus {}", spoken)
        } else {
            spoken
        };
    }
    let signed = match (negative, options.negative_style) {
        (false, _) => unsigned,
        (true, NegativeStyle::Sign) => format!("-{}", unsigned),
        (true, NegativeStyle::Parentheses) => format!("({})", unsigned),
    };
    format!("{}{}", signed, suffix)
}

/// Compact axis label in thousands, e.g. `$1.5k`.
pub fn abbreviate_thousands(value: f64, code: &CurrencyCode) -> String {
    let thousands = (value / 1000.0 * 100.0).round() / 100.0 + 0.0;
    format!("{}{}k", symbol_for(code.as_str()), thousands)
}

/// [`CurrencyFormatter`] backed by a locale and display options.
#[derive(Debug, Clone, Default)]
pub struct LocaleCurrencyFormatter {
    pub locale: LocaleConfig,
    pub options: FormatOptions,
}

impl LocaleCurrencyFormatter {
    pub fn new(locale: LocaleConfig, options: FormatOptions) -> Self {
        Self { locale, options }
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        format_currency_value(
            amount,
            &CurrencyCode::new(currency),
            &self.locale,
            &self.options,
        )
    }
}
