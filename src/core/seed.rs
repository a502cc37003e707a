//! Loading of the local tab-delimited seed file

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::catalog;
use super::currency::{CurrencyRate, RateSnapshot, RateSource};
use super::error::SeedError;

/// Rates used when no seed file is available.
const BUILT_IN_RATES: [(&str, f64, &str); 5] = [
    ("Indian Rupee", 1.0, "₹"),
    ("US Dollar", 0.013588, "$"),
    ("Euro", 0.011175, "€"),
    ("British Pound", 0.010200, "£"),
    ("Japanese Yen", 1.413723, "¥"),
];

pub fn built_in_snapshot() -> RateSnapshot {
    RateSnapshot::new(
        RateSource::BuiltIn,
        BUILT_IN_RATES
            .iter()
            .map(|(name, factor, symbol)| (name.to_string(), CurrencyRate::new(*factor, *symbol))),
    )
}

/// Parses `<currency-name>\t<factor>` records. Lines that do not parse are
/// skipped.
pub fn parse_seed(content: &str) -> RateSnapshot {
    let rates = content.lines().filter_map(|line| {
        let mut fields = line.trim().split('\t');
        let name = fields.next()?.trim();
        let factor = fields.next()?.trim().parse::<f64>().ok();
        match factor {
            Some(factor) if !name.is_empty() => {
                let symbol = catalog::by_name(name).map_or("", |info| info.symbol);
                Some((name.to_string(), CurrencyRate::new(factor, symbol)))
            }
            _ => {
                debug!(line, "Skipping malformed seed line");
                None
            }
        }
    });
    RateSnapshot::new(RateSource::Seed, rates)
}

pub fn read_seed<P: AsRef<Path>>(path: P) -> Result<RateSnapshot, SeedError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SeedError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_seed(&content))
}

/// Loads the seed file, falling back to the built-in rates when it cannot be
/// read. Never fails.
pub fn load_seed<P: AsRef<Path>>(path: P) -> RateSnapshot {
    match read_seed(path) {
        Ok(snapshot) => {
            debug!(count = snapshot.len(), "Loaded seed rates");
            snapshot
        }
        Err(e) => {
            warn!(error = %e, "Using built-in rates");
            built_in_snapshot()
        }
    }
}
