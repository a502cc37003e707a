//! Core rate management and conversion logic

pub mod catalog;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod log;
pub mod refresh;
pub mod seed;
pub mod store;

// Re-export main types for cleaner imports
pub use conversion::{ConversionRequest, ConversionResult, ConversionService};
pub use currency::{CurrencyRate, CurrencyRateProvider, RateSnapshot, RateSource};
pub use error::{ConversionError, FetchError, SeedError};
pub use refresh::{RefreshEvent, RefreshScheduler};
pub use store::RateStore;
