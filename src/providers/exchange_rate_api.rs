use async_trait::async_trait;
use chrono::Local;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::core::catalog::{self, BASE, REFERENCE_CODE};
use crate::core::currency::{CurrencyRate, CurrencyRateProvider, RateSnapshot, RateSource};
use crate::core::error::FetchError;

/// Units of the base currency per unit of the reference currency, used when a
/// payload carries no usable base rate.
pub const DEFAULT_FALLBACK_BASE_RATE: f64 = 83.0;

/// Live rates from the exchangerate-api.com `latest` endpoint.
pub struct ExchangeRateApiProvider {
    base_url: String,
    timeout: Duration,
    fallback_base_rate: f64,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            fallback_base_rate: DEFAULT_FALLBACK_BASE_RATE,
        }
    }

    /// Overrides the base rate assumed when the payload omits it. Invalid
    /// values keep the default.
    pub fn with_fallback_base_rate(mut self, rate: f64) -> Self {
        if rate.is_finite() && rate > 0.0 {
            self.fallback_base_rate = rate;
        } else {
            warn!(rate, "Ignoring invalid fallback base rate");
        }
        self
    }

    fn map_request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if e.is_decode() {
            FetchError::Malformed(format!("Failed to parse JSON response: {e}"))
        } else {
            FetchError::Network(e)
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: BTreeMap<String, serde_json::Value>,
}

/// Keeps the entries that hold a finite, positive number.
fn usable_rates(rates: &BTreeMap<String, serde_json::Value>) -> BTreeMap<&str, f64> {
    rates
        .iter()
        .filter_map(|(code, value)| match value.as_f64() {
            Some(rate) if rate.is_finite() && rate > 0.0 => Some((code.as_str(), rate)),
            _ => {
                debug!(code, %value, "Skipping unusable rate");
                None
            }
        })
        .collect()
}

/// Re-bases rates quoted against the endpoint's reference currency onto the
/// base currency. Unknown codes are dropped. A missing base rate falls back to
/// `fallback_base_rate`; the base itself is always present at 1.0.
fn rebase(rates: &BTreeMap<&str, f64>, fallback_base_rate: f64) -> Vec<(String, CurrencyRate)> {
    let base_in_reference = match rates.get(BASE.code) {
        Some(rate) => *rate,
        None => {
            warn!(
                fallback = fallback_base_rate,
                "No usable {} rate in response, using fallback", BASE.code
            );
            fallback_base_rate
        }
    };

    let mut rebased: Vec<(String, CurrencyRate)> = rates
        .iter()
        .filter_map(|(code, rate)| {
            let info = catalog::by_code(code)?;
            let factor = if info.code == BASE.code {
                1.0
            } else {
                rate / base_in_reference
            };
            Some((info.name.to_string(), CurrencyRate::new(factor, info.symbol)))
        })
        .collect();
    if !rates.contains_key(BASE.code) {
        rebased.push((BASE.name.to_string(), CurrencyRate::new(1.0, BASE.symbol)));
    }
    rebased
}

#[async_trait]
impl CurrencyRateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateApiFetch", skip(self), fields(reference = REFERENCE_CODE))]
    async fn fetch_rates(&self) -> Result<RateSnapshot, FetchError> {
        let url = format!("{}/v4/latest/{}", self.base_url, REFERENCE_CODE);
        debug!("Requesting rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("fxconv/1.0")
            .timeout(self.timeout)
            .build()
            .map_err(FetchError::Network)?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let data: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let usable = usable_rates(&data.rates);
        let rates = rebase(&usable, self.fallback_base_rate);
        debug!(
            received = data.rates.len(),
            recognised = rates.len(),
            "Fetched live rates"
        );

        Ok(RateSnapshot::new(RateSource::Live, rates).with_last_updated(Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn provider(server: &MockServer) -> ExchangeRateApiProvider {
        ExchangeRateApiProvider::new(&server.uri(), Duration::from_secs(15))
    }

    #[tokio::test]
    async fn test_successful_rates_fetch() {
        let mock_response = r#"{
            "base": "USD",
            "date": "2025-01-01",
            "rates": {
                "USD": 1,
                "INR": 80.0,
                "EUR": 0.92,
                "JPY": 150.0,
                "ZZZ": 3.0,
                "GBP": 0,
                "CHF": -0.9
            }
        }"#;
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;

        let snapshot = provider(&server).fetch_rates().await.unwrap();
        assert_eq!(snapshot.source(), RateSource::Live);
        assert!(snapshot.last_updated().is_some());
        assert_eq!(
            snapshot.currency_names(),
            vec!["Euro", "Indian Rupee", "Japanese Yen", "US Dollar"]
        );
        assert_eq!(snapshot.get("Indian Rupee").unwrap().factor, 1.0);
        assert_eq!(snapshot.get("US Dollar").unwrap().factor, 1.0 / 80.0);
        assert_eq!(snapshot.get("Euro").unwrap().factor, 0.92 / 80.0);
        assert_eq!(snapshot.get("Japanese Yen").unwrap().factor, 150.0 / 80.0);
        assert_eq!(snapshot.symbol("Euro"), "€");
        assert_eq!(snapshot.symbol("Indian Rupee"), "₹");
    }

    #[tokio::test]
    async fn test_missing_base_rate_uses_fallback() {
        let mock_response = r#"{"rates": {"USD": 1.0, "EUR": 0.92, "GBP": 0.8}}"#;
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;

        let snapshot = provider(&server).fetch_rates().await.unwrap();
        assert_eq!(snapshot.source(), RateSource::Live);
        assert_eq!(
            snapshot.currency_names(),
            vec!["British Pound Sterling", "Euro", "Indian Rupee", "US Dollar"]
        );
        assert_eq!(snapshot.get("Indian Rupee").unwrap().factor, 1.0);
        assert_eq!(snapshot.symbol("Indian Rupee"), "₹");
        assert_eq!(
            snapshot.get("US Dollar").unwrap().factor,
            1.0 / DEFAULT_FALLBACK_BASE_RATE
        );
        assert_eq!(
            snapshot.get("Euro").unwrap().factor,
            0.92 / DEFAULT_FALLBACK_BASE_RATE
        );
    }

    #[tokio::test]
    async fn test_configured_fallback_base_rate() {
        let mock_response = r#"{"rates": {"USD": 1.0, "INR": 0}}"#;
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;

        let snapshot = provider(&server)
            .with_fallback_base_rate(80.0)
            .with_fallback_base_rate(-1.0)
            .fetch_rates()
            .await
            .unwrap();
        assert_eq!(snapshot.get("Indian Rupee").unwrap().factor, 1.0);
        assert_eq!(snapshot.get("US Dollar").unwrap().factor, 1.0 / 80.0);
    }

    #[tokio::test]
    async fn test_non_numeric_rates_are_skipped() {
        let mock_response = r#"{
            "rates": {
                "USD": 1,
                "INR": 80.0,
                "EUR": 0.92,
                "VES": null,
                "GBP": "0.8",
                "JPY": {"rate": 150.0}
            }
        }"#;
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;

        let snapshot = provider(&server).fetch_rates().await.unwrap();
        assert_eq!(
            snapshot.currency_names(),
            vec!["Euro", "Indian Rupee", "US Dollar"]
        );
        assert_eq!(snapshot.get("Euro").unwrap().factor, 0.92 / 80.0);
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let server = create_mock_server(ResponseTemplate::new(500)).await;

        let result = provider(&server).fetch_rates().await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_response = r#"{"result": "error", "error-type": "unsupported-code"}"#;
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;

        let result = provider(&server).fetch_rates().await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response")
        );
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"rates": {"INR": 80.0}}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        let provider = ExchangeRateApiProvider::new(&server.uri(), Duration::from_millis(200));
        let result = provider.fetch_rates().await;
        assert!(matches!(result, Err(FetchError::Timeout(_))));
    }

    #[test]
    fn test_rebase_prefers_later_code_for_shared_names() {
        let rates = BTreeMap::from([("INR", 80.0), ("MRO", 357.0), ("MRU", 39.7)]);
        let snapshot = RateSnapshot::new(
            RateSource::Live,
            rebase(&rates, DEFAULT_FALLBACK_BASE_RATE),
        );
        assert_eq!(
            snapshot.get("Mauritanian Ouguiya").unwrap().factor,
            39.7 / 80.0
        );
    }
}
