//! Locale-aware number, currency and date formatting for KPIs, axes and tables.

use crate::error::ConfigError;
use chrono::NaiveDate;

/// Digit grouping and decimal conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Currency symbol follows the amount ("1.250.000 €")
    pub symbol_after: bool,
}

impl Locale {
    pub const EN_AU: Self = Self::english("en-AU");
    pub const EN_US: Self = Self::english("en-US");
    pub const EN_GB: Self = Self::english("en-GB");
    pub const EN_NZ: Self = Self::english("en-NZ");
    pub const DE_DE: Self = Self {
        code: "de-DE",
        group_separator: '.',
        decimal_separator: ',',
        symbol_after: true,
    };
    pub const FR_FR: Self = Self {
        code: "fr-FR",
        group_separator: '\u{202f}',
        decimal_separator: ',',
        symbol_after: true,
    };

    const fn english(code: &'static str) -> Self {
        Self {
            code,
            group_separator: ',',
            decimal_separator: '.',
            symbol_after: false,
        }
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let normalized = value.trim().replace('_', "-").to_lowercase();
        [
            Self::EN_AU,
            Self::EN_US,
            Self::EN_GB,
            Self::EN_NZ,
            Self::DE_DE,
            Self::FR_FR,
        ]
        .into_iter()
        .find(|locale| locale.code.to_lowercase() == normalized)
        .ok_or_else(|| ConfigError::UnknownLocale(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
}

impl Currency {
    pub const AUD: Self = Self::new("AUD", "$");
    pub const USD: Self = Self::new("USD", "$");
    pub const NZD: Self = Self::new("NZD", "$");
    pub const GBP: Self = Self::new("GBP", "£");
    pub const EUR: Self = Self::new("EUR", "€");

    const fn new(code: &'static str, symbol: &'static str) -> Self {
        Self { code, symbol }
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let normalized = value.trim().to_uppercase();
        [Self::AUD, Self::USD, Self::NZD, Self::GBP, Self::EUR]
            .into_iter()
            .find(|currency| currency.code == normalized)
            .ok_or_else(|| ConfigError::UnknownCurrency(value.to_string()))
    }
}

/// Whether a figure reads as good or bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Growth {
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketFormat {
    pub locale: Locale,
    pub currency: Currency,
}

impl Default for MarketFormat {
    fn default() -> Self {
        Self::new(Locale::EN_AU, Currency::AUD)
    }
}

impl MarketFormat {
    pub const fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    /// Whole-unit currency amount, e.g. `$1,250,000`.
    pub fn currency(&self, value: f64) -> String {
        let rounded = value.round();
        let digits = group_digits(rounded.abs() as u64, self.locale.group_separator);
        self.with_symbol(&digits, rounded < 0.0, " ")
    }

    /// Abbreviated amount for axis ticks: `$1.3M`, `$850K`, `$420`.
    pub fn currency_short(&self, value: f64) -> String {
        let magnitude = value.abs();
        let body = if magnitude >= 1_000_000.0 {
            format!("{}M", self.fixed(magnitude / 1_000_000.0, 1))
        } else if magnitude >= 1_000.0 {
            format!("{}K", self.fixed(magnitude / 1_000.0, 0))
        } else {
            self.fixed(magnitude, 0)
        };
        let negative = value < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
        self.with_symbol(&body, negative, "")
    }

    /// Growth figure with an explicit `+` for non-negative values.
    pub fn growth(&self, value: f64) -> Growth {
        let value = if value == 0.0 { 0.0 } else { value };
        if value >= 0.0 {
            Growth {
                text: format!("+{}%", self.plain(value)),
                sentiment: Sentiment::Positive,
            }
        } else {
            Growth {
                text: format!("{}%", self.plain(value)),
                sentiment: Sentiment::Negative,
            }
        }
    }

    /// Percentage with the value printed as given.
    pub fn percent(&self, value: f64) -> String {
        format!("{}%", self.plain(value))
    }

    pub fn percent_fixed(&self, value: f64, decimals: u32) -> String {
        format!("{}%", self.fixed(value, decimals))
    }

    /// `2020-01-15` becomes `Jan 2020`. Anything unparsable is shown as is.
    pub fn month_year(&self, date: &str) -> String {
        let day = date.get(..10).unwrap_or(date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_or_else(|_| date.to_string(), |parsed| parsed.format("%b %Y").to_string())
    }

    /// Rounds half away from zero, unlike `{:.N}` which rounds half to even.
    pub fn fixed(&self, value: f64, decimals: u32) -> String {
        let factor = 10_f64.powi(decimals as i32);
        let rounded = (value * factor).round() / factor;
        let text = format!("{rounded:.prec$}", prec = decimals as usize);
        self.localize_decimal(&text)
    }

    fn plain(&self, value: f64) -> String {
        self.localize_decimal(&value.to_string())
    }

    fn localize_decimal(&self, text: &str) -> String {
        if self.locale.decimal_separator == '.' {
            text.to_string()
        } else {
            text.replace('.', &self.locale.decimal_separator.to_string())
        }
    }

    fn with_symbol(&self, amount: &str, negative: bool, gap: &str) -> String {
        let sign = if negative { "-" } else { "" };
        let symbol = self.currency.symbol;
        if self.locale.symbol_after {
            format!("{sign}{amount}{gap}{symbol}")
        } else {
            format!("{sign}{symbol}{amount}")
        }
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
