//! Display currencies
//!
//! The currency is a label chosen in settings. Amounts are never converted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Currencies the tracker can label amounts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    #[default]
    Inr,
    Jpy,
    Cny,
    Krw,
    Sgd,
    Hkd,
    Thb,
    Myr,
    Php,
    Idr,
    Vnd,
    Twd,
    Lkr,
}

impl Currency {
    /// All supported currencies, in settings-menu order
    pub fn all() -> &'static [Currency] {
        &[
            Self::Usd,
            Self::Eur,
            Self::Gbp,
            Self::Cad,
            Self::Aud,
            Self::Inr,
            Self::Jpy,
            Self::Cny,
            Self::Krw,
            Self::Sgd,
            Self::Hkd,
            Self::Thb,
            Self::Myr,
            Self::Php,
            Self::Idr,
            Self::Vnd,
            Self::Twd,
            Self::Lkr,
        ]
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
            Self::Cny => "CNY",
            Self::Krw => "KRW",
            Self::Sgd => "SGD",
            Self::Hkd => "HKD",
            Self::Thb => "THB",
            Self::Myr => "MYR",
            Self::Php => "PHP",
            Self::Idr => "IDR",
            Self::Vnd => "VND",
            Self::Twd => "TWD",
            Self::Lkr => "LKR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Inr => "₹",
            Self::Jpy | Self::Cny => "¥",
            Self::Krw => "₩",
            Self::Sgd => "S$",
            Self::Hkd => "HK$",
            Self::Thb => "฿",
            Self::Myr => "RM",
            Self::Php => "₱",
            Self::Idr => "Rp",
            Self::Vnd => "₫",
            Self::Twd => "NT$",
            Self::Lkr => "Rs",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
            Self::Cad => "Canadian Dollar",
            Self::Aud => "Australian Dollar",
            Self::Inr => "Indian Rupee",
            Self::Jpy => "Japanese Yen",
            Self::Cny => "Chinese Yuan",
            Self::Krw => "South Korean Won",
            Self::Sgd => "Singapore Dollar",
            Self::Hkd => "Hong Kong Dollar",
            Self::Thb => "Thai Baht",
            Self::Myr => "Malaysian Ringgit",
            Self::Php => "Philippine Peso",
            Self::Idr => "Indonesian Rupiah",
            Self::Vnd => "Vietnamese Dong",
            Self::Twd => "Taiwan Dollar",
            Self::Lkr => "Sri Lankan Rupee",
        }
    }

    /// Currencies conventionally shown without minor units
    pub fn has_minor_units(&self) -> bool {
        !matches!(self, Self::Jpy | Self::Krw | Self::Idr | Self::Vnd)
    }

    /// Format an amount labelled with this currency
    pub fn format(&self, amount: Money) -> String {
        if self.has_minor_units() {
            amount.format_with_symbol(self.symbol())
        } else {
            amount.format_whole_with_symbol(self.symbol())
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownCurrency(code.to_string()))
    }
}

/// Error for an unsupported currency code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported currency: {}", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}
