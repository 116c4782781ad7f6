//! Company and market snapshot returned by the ticker lookup.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Read-only snapshot of a listed company.
///
/// The backend fills these fields from a market-data provider that leaves
/// many of them `null` for funds, ADRs and delisted symbols, so every field
/// tolerates `null` or absence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct StockInfo {
    /// Company name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Ticker symbol, as normalized by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    /// Last traded price.
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Price currency (ISO code).
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    /// Market capitalisation in `currency`.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Sector.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sector: String,
    /// Industry.
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    /// Business summary.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Corporate website.
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    /// Country of the headquarters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    /// Contact phone number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// Street address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// City.
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    /// State or region.
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    /// Postal code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub zip: String,
    /// Full-time headcount.
    #[serde(default)]
    pub full_time_employees: Option<u64>,
    /// Externally hosted price chart image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub chart_url: String,
}

impl StockInfo {
    /// Price followed by its currency, `"-"` when unknown.
    pub fn price_display(&self) -> String {
        match self.current_price {
            Some(price) if self.currency.is_empty() => format!("{price:.2}"),
            Some(price) => format!("{price:.2} {}", self.currency),
            None => "-".to_string(),
        }
    }

    /// Market capitalisation in compact notation (`2.87T`, `512.30B`, `740.00M`).
    pub fn market_cap_display(&self) -> String {
        let Some(cap) = self.market_cap else {
            return "-".to_string();
        };
        const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
        UNITS
            .iter()
            .find(|(scale, _)| cap.abs() >= *scale)
            .map_or_else(
                || format!("{cap:.0}"),
                |(scale, suffix)| format!("{:.2}{suffix}", cap / scale),
            )
    }

    /// Street, city, state and zip joined with commas, skipping blanks.
    pub fn address_line(&self) -> String {
        [&self.address, &self.city, &self.state, &self.zip]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Headcount, `"-"` when unknown.
    pub fn employees_display(&self) -> String {
        self.full_time_employees
            .map_or_else(|| "-".to_string(), |n| n.to_string())
    }

    /// Chart URL, `None` when the backend sent none.
    pub fn chart(&self) -> Option<&str> {
        Some(self.chart_url.as_str()).filter(|url| !url.is_empty())
    }
}
