use super::ui;
use crate::core::{RateSnapshot, RateStore};
use anyhow::Result;
use tracing::warn;

/// Fetches live rates behind a spinner. On failure the held rates stay in
/// place and a notice goes to stderr. Returns whether live rates arrived.
pub async fn refresh_with_spinner(store: &RateStore) -> bool {
    let pb = ui::new_spinner("Fetching latest rates...");
    let fetched = store.fetch_live().await;
    pb.finish_and_clear();
    match fetched {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Live rates unavailable");
            eprintln!(
                "{}",
                ui::style_text(&format!("Using offline rates ({e})"), ui::StyleType::Error)
            );
            false
        }
    }
}

pub async fn run(store: &RateStore, offline: bool) -> Result<()> {
    if !offline {
        refresh_with_spinner(store).await;
    }
    println!("{}", store.current_snapshot().display_as_table());
    Ok(())
}

/// One-line description of where the snapshot came from, e.g.
/// `152 live rates • 14:03:11`.
pub fn describe_source(snapshot: &RateSnapshot) -> String {
    match snapshot.last_updated() {
        Some(at) => format!(
            "{} {} rates • {}",
            snapshot.len(),
            snapshot.source(),
            at.format("%H:%M:%S")
        ),
        None => format!("{} {} rates", snapshot.len(), snapshot.source()),
    }
}

impl RateSnapshot {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Symbol"),
            ui::header_cell(&format!("Per 1 {}", self.base_name())),
        ]);

        for (name, rate) in self.iter() {
            table.add_row(vec![
                comfy_table::Cell::new(name),
                comfy_table::Cell::new(&rate.symbol),
                ui::number_cell(format!("{:.6}", rate.factor)),
            ]);
        }

        format!(
            "{}\n\n{}\n{}",
            ui::style_text("Exchange rates", ui::StyleType::Title),
            table,
            ui::style_text(&describe_source(self), ui::StyleType::Subtle)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;
    use crate::core::store::tests::{MockProvider, live_snapshot};
    use crate::core::FetchError;
    use std::sync::Arc;

    #[test]
    fn test_describe_source() {
        let snapshot = seed::built_in_snapshot();
        assert_eq!(describe_source(&snapshot), "5 built-in rates");

        let at = chrono::Local::now();
        let live = crate::core::RateSnapshot::new(crate::core::RateSource::Live, Vec::new())
            .with_last_updated(at);
        assert_eq!(
            describe_source(&live),
            format!("1 live rates • {}", at.format("%H:%M:%S"))
        );
    }

    #[test]
    fn test_table_lists_currencies_in_order() {
        console::set_colors_enabled(false);
        let table = seed::built_in_snapshot().display_as_table();
        let euro = table.find("Euro").unwrap();
        let rupee = table.find("Indian Rupee").unwrap();
        let dollar = table.find("US Dollar").unwrap();
        assert!(euro < rupee && rupee < dollar);
        assert!(table.contains("0.013588"));
        assert!(table.contains("Per 1 Indian Rupee"));
    }

    #[tokio::test]
    async fn test_refresh_with_spinner_swaps_in_live_rates() {
        let store = RateStore::new(
            seed::built_in_snapshot(),
            Arc::new(MockProvider::new(vec![Ok(live_snapshot(0.012))])),
        );
        assert!(refresh_with_spinner(&store).await);
        assert_eq!(
            store.current_snapshot().source(),
            crate::core::RateSource::Live
        );
    }

    #[tokio::test]
    async fn test_refresh_with_spinner_keeps_rates_on_failure() {
        let store = RateStore::new(
            seed::built_in_snapshot(),
            Arc::new(MockProvider::new(vec![Err(FetchError::Malformed(
                "empty".to_string(),
            ))])),
        );
        assert!(!refresh_with_spinner(&store).await);
        assert_eq!(*store.current_snapshot(), seed::built_in_snapshot());
        assert!(run(&store, false).await.is_ok());
    }
}
