use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time window the market series are trimmed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
    #[default]
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "all")]
    All,
}

impl Period {
    pub const ALL: [Self; 4] = [Self::OneYear, Self::FiveYears, Self::TenYears, Self::All];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::All => "all",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::OneYear),
            1 => Some(Self::FiveYears),
            2 => Some(Self::TenYears),
            3 => Some(Self::All),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::OneYear => 0,
            Self::FiveYears => 1,
            Self::TenYears => 2,
            Self::All => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "1y" => Some(Self::OneYear),
            "5y" => Some(Self::FiveYears),
            "10y" => Some(Self::TenYears),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneYear => "1 Year View",
            Self::FiveYears => "5 Year View",
            Self::TenYears => "10 Year View",
            Self::All => "All Time",
        }
    }

    /// Short label used on period buttons.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
            Self::TenYears => "10Y",
            Self::All => "All",
        }
    }

    pub const fn years(self) -> Option<u64> {
        match self {
            Self::OneYear => Some(1),
            Self::FiveYears => Some(5),
            Self::TenYears => Some(10),
            Self::All => None,
        }
    }

    /// Earliest date kept for this period, counted in 365-day years back from `today`.
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        let years = self.years()?;
        today.checked_sub_days(Days::new(365 * years))
    }

    pub const fn next(self) -> Self {
        match self {
            Self::OneYear => Self::FiveYears,
            Self::FiveYears => Self::TenYears,
            Self::TenYears => Self::All,
            Self::All => Self::OneYear,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::OneYear => Self::All,
            Self::FiveYears => Self::OneYear,
            Self::TenYears => Self::FiveYears,
            Self::All => Self::TenYears,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
