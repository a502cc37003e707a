//! Currency rate abstractions and core types

use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fmt::Display;

use super::catalog;
use super::error::FetchError;

/// Where the data in a [`RateSnapshot`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// Hard-coded fallback used when no seed file could be read.
    BuiltIn,
    /// Local tab-delimited seed file.
    Seed,
    /// Successful fetch from the live rates endpoint.
    Live,
}

impl Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RateSource::BuiltIn => "built-in",
                RateSource::Seed => "seed file",
                RateSource::Live => "live",
            }
        )
    }
}

/// Conversion factor of one currency relative to the base currency.
///
/// `amount_in_base = amount_in_currency / factor`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRate {
    pub factor: f64,
    pub symbol: String,
}

impl CurrencyRate {
    pub fn new(factor: f64, symbol: impl Into<String>) -> Self {
        Self {
            factor,
            symbol: symbol.into(),
        }
    }
}

/// A complete, immutable set of rates keyed by currency display name.
///
/// The base currency is always present with a factor of exactly `1.0`, and
/// every other entry has a finite positive factor.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    rates: BTreeMap<String, CurrencyRate>,
    source: RateSource,
    last_updated: Option<DateTime<Local>>,
}

impl RateSnapshot {
    pub fn new<I>(source: RateSource, rates: I) -> Self
    where
        I: IntoIterator<Item = (String, CurrencyRate)>,
    {
        let mut map: BTreeMap<String, CurrencyRate> = rates
            .into_iter()
            .filter(|(name, rate)| {
                !name.is_empty() && rate.factor.is_finite() && rate.factor > 0.0
            })
            .collect();

        let base = map
            .entry(catalog::BASE.name.to_string())
            .or_insert_with(|| CurrencyRate::new(1.0, catalog::BASE.symbol));
        base.factor = 1.0;
        if base.symbol.is_empty() {
            base.symbol = catalog::BASE.symbol.to_string();
        }

        Self {
            rates: map,
            source,
            last_updated: None,
        }
    }

    /// Marks the snapshot as refreshed at the given moment.
    pub fn with_last_updated(mut self, at: DateTime<Local>) -> Self {
        self.last_updated = Some(at);
        self
    }

    pub fn source(&self) -> RateSource {
        self.source
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn base_name(&self) -> &'static str {
        catalog::BASE.name
    }

    pub fn get(&self, name: &str) -> Option<&CurrencyRate> {
        self.rates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rates.contains_key(name)
    }

    /// Display symbol for a currency, empty when unknown.
    pub fn symbol(&self, name: &str) -> &str {
        self.rates.get(name).map_or("", |r| r.symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Currency names in lexicographic order.
    pub fn currency_names(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CurrencyRate)> {
        self.rates.iter()
    }

    /// Resolves user input to a currency name held by this snapshot.
    ///
    /// Accepts the exact display name, a case-insensitive display name, or an
    /// ISO code from the catalog.
    pub fn resolve_name(&self, query: &str) -> Option<&str> {
        let query = query.trim();
        if let Some((name, _)) = self.rates.get_key_value(query) {
            return Some(name.as_str());
        }
        if let Some(name) = self
            .rates
            .keys()
            .find(|name| name.eq_ignore_ascii_case(query))
        {
            return Some(name.as_str());
        }
        catalog::by_code(query)
            .and_then(|info| self.rates.get_key_value(info.name))
            .map(|(name, _)| name.as_str())
    }
}

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    /// Fetches a full replacement snapshot from the remote source.
    async fn fetch_rates(&self) -> Result<RateSnapshot, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(factor: f64) -> CurrencyRate {
        CurrencyRate::new(factor, "")
    }

    #[test]
    fn test_base_currency_is_always_one() {
        let snapshot = RateSnapshot::new(
            RateSource::Seed,
            vec![
                ("Indian Rupee".to_string(), rate(3.5)),
                ("Euro".to_string(), rate(0.011175)),
            ],
        );
        assert_eq!(snapshot.get("Indian Rupee").unwrap().factor, 1.0);
        assert_eq!(snapshot.symbol("Indian Rupee"), "₹");

        let empty = RateSnapshot::new(RateSource::Live, Vec::new());
        assert_eq!(empty.len(), 1);
        assert_eq!(empty.get("Indian Rupee").unwrap().factor, 1.0);
    }

    #[test]
    fn test_invalid_factors_are_dropped() {
        let snapshot = RateSnapshot::new(
            RateSource::Seed,
            vec![
                ("Zero".to_string(), rate(0.0)),
                ("Negative".to_string(), rate(-1.0)),
                ("Infinite".to_string(), rate(f64::INFINITY)),
                ("NaN".to_string(), rate(f64::NAN)),
                ("Euro".to_string(), rate(0.011175)),
            ],
        );
        assert_eq!(snapshot.currency_names(), vec!["Euro", "Indian Rupee"]);
    }

    #[test]
    fn test_resolve_name() {
        let snapshot = RateSnapshot::new(
            RateSource::Live,
            vec![("US Dollar".to_string(), CurrencyRate::new(0.012, "$"))],
        );
        assert_eq!(snapshot.resolve_name("US Dollar"), Some("US Dollar"));
        assert_eq!(snapshot.resolve_name("us dollar"), Some("US Dollar"));
        assert_eq!(snapshot.resolve_name("USD"), Some("US Dollar"));
        assert_eq!(snapshot.resolve_name("inr"), Some("Indian Rupee"));
        assert_eq!(snapshot.resolve_name("EUR"), None);
        assert_eq!(snapshot.resolve_name("Dollar"), None);
    }
}
