use std::fs;
use std::path::Path;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn rates_response() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_string(
            r#"{
                "provider": "https://www.exchangerate-api.com",
                "base": "USD",
                "rates": {
                    "USD": 1,
                    "INR": 80.0,
                    "EUR": 0.9,
                    "GBP": 0.8,
                    "XXX": 12.0
                }
            }"#,
        )
    }
}

fn write_config(dir: &Path, base_url: &str) -> std::path::PathBuf {
    let seed_path = dir.join("currency_data.tsv");
    fs::write(
        &seed_path,
        "Indian Rupee\t1.0\nUS Dollar\t0.013588\nbroken line\nEuro\tnot-a-number\n",
    )
    .expect("Failed to write seed file");

    let config_path = dir.join("config.yaml");
    let config_content = format!(
        r#"
providers:
  exchange_rate_api:
    base_url: {}
    timeout_secs: 2
refresh_interval_minutes: 30
seed_path: {}
"#,
        base_url,
        seed_path.display()
    );
    fs::write(&config_path, config_content).expect("Failed to write config file");
    config_path
}

#[test_log::test(tokio::test)]
async fn test_seed_then_live_refresh() {
    let mock_server = test_utils::create_mock_server(test_utils::rates_response()).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), &mock_server.uri());

    let config = fxconv::core::config::AppConfig::load_from_path(&config_path).unwrap();
    let store = fxconv::build_store(&config).unwrap();

    let seed = store.current_snapshot();
    assert_eq!(seed.source(), fxconv::core::RateSource::Seed);
    assert_eq!(seed.currency_names(), vec!["Indian Rupee", "US Dollar"]);

    let seed_result =
        fxconv::core::conversion::convert(&seed, 1000.0, "Indian Rupee", "US Dollar").unwrap();
    assert!((seed_result - 13.588).abs() < 1e-9);

    let live = store.fetch_live().await.unwrap();
    info!(count = live.len(), "Fetched live rates");
    assert_eq!(live.source(), fxconv::core::RateSource::Live);
    assert_eq!(
        live.currency_names(),
        vec!["British Pound Sterling", "Euro", "Indian Rupee", "US Dollar"]
    );

    let live_result =
        fxconv::core::conversion::convert(&live, 1000.0, "Indian Rupee", "US Dollar").unwrap();
    assert!((live_result - 12.5).abs() < 1e-9);

    let cross = fxconv::core::conversion::convert(&live, 90.0, "Euro", "US Dollar").unwrap();
    assert!((cross - 100.0).abs() < 1e-9);
}

#[test_log::test(tokio::test)]
async fn test_failed_refresh_keeps_seed() {
    let mock_server =
        test_utils::create_mock_server(wiremock::ResponseTemplate::new(503)).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), &mock_server.uri());

    let config = fxconv::core::config::AppConfig::load_from_path(&config_path).unwrap();
    let store = fxconv::build_store(&config).unwrap();
    let before = store.current_snapshot();

    let result = store.fetch_live().await;
    assert!(matches!(
        result,
        Err(fxconv::core::FetchError::Status(status)) if status.as_u16() == 503
    ));
    assert_eq!(*store.current_snapshot(), *before);
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_mock_server(test_utils::rates_response()).await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), &mock_server.uri());
    let config_path = config_path.to_str().unwrap();

    let result = fxconv::run_command(
        fxconv::AppCommand::Convert {
            amount: "1000".to_string(),
            from: "INR".to_string(),
            to: "eur".to_string(),
            offline: false,
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());

    let result = fxconv::run_command(
        fxconv::AppCommand::Rates { offline: false },
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Rates failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_offline_convert_rejects_unknown_currency() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), "http://127.0.0.1:9");

    let result = fxconv::run_command(
        fxconv::AppCommand::Convert {
            amount: "10".to_string(),
            from: "Indian Rupee".to_string(),
            to: "Euro".to_string(),
            offline: true,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert_eq!(result.unwrap_err().to_string(), "Unknown currency: Euro");
}

#[test_log::test(tokio::test)]
async fn test_missing_config_path_fails() {
    let result = fxconv::run_command(
        fxconv::AppCommand::Rates { offline: true },
        Some("/nonexistent/fxconv/config.yaml"),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_live_refresh_without_base_rate_succeeds() {
    let mock_server = test_utils::create_mock_server(
        wiremock::ResponseTemplate::new(200)
            .set_body_string(r#"{"rates": {"USD": 1.0, "EUR": 0.92, "GBP": 0.8, "VES": null}}"#),
    )
    .await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), &mock_server.uri());

    let config = fxconv::core::config::AppConfig::load_from_path(&config_path).unwrap();
    let store = fxconv::build_store(&config).unwrap();

    let live = store.fetch_live().await.unwrap();
    assert_eq!(live.get("Indian Rupee").unwrap().factor, 1.0);
    assert!(live.contains("Euro"));

    let result =
        fxconv::core::conversion::convert(&live, 83.0, "Indian Rupee", "US Dollar").unwrap();
    assert!((result - 1.0).abs() < 1e-9);
}
