use super::{rates, ui};
use crate::core::{
    ConversionError, ConversionRequest, ConversionResult, ConversionService, RateSnapshot,
    RateStore,
};
use anyhow::Result;
use std::sync::Arc;

/// Maps user input (display name or ISO code) onto a currency in the snapshot.
pub fn resolve_currency(snapshot: &RateSnapshot, query: &str) -> Result<String, ConversionError> {
    snapshot
        .resolve_name(query)
        .map(str::to_string)
        .ok_or_else(|| ConversionError::UnknownCurrency(query.trim().to_string()))
}

impl ConversionResult {
    pub fn display(&self) -> String {
        let mut output = format!(
            "{} {} = {}",
            crate::core::conversion::format_result(self.request.amount),
            self.request.from,
            ui::style_text(&self.display_value(), ui::StyleType::Result)
        );
        output.push_str(&format!(" ({})", self.request.to));
        if let Some(line) = self.rate_line() {
            output.push('\n');
            output.push_str(&ui::style_text(&line, ui::StyleType::Subtle));
        }
        output
    }
}

/// Converts once and returns the result, refreshing from the network first
/// unless `offline` is set.
pub async fn convert_once(
    store: &Arc<RateStore>,
    amount: &str,
    from: &str,
    to: &str,
    offline: bool,
) -> Result<ConversionResult> {
    if !offline {
        rates::refresh_with_spinner(store).await;
    }

    let snapshot = store.current_snapshot();
    let request = ConversionRequest::parse(
        amount,
        resolve_currency(&snapshot, from)?,
        resolve_currency(&snapshot, to)?,
    )?;
    let service = ConversionService::new(Arc::clone(store));
    Ok(service.convert(&request)?)
}

pub async fn run(
    store: &Arc<RateStore>,
    amount: &str,
    from: &str,
    to: &str,
    offline: bool,
) -> Result<()> {
    let result = convert_once(store, amount, from, to, offline).await?;
    println!("{}", result.display());
    println!(
        "{}",
        ui::style_text(
            &rates::describe_source(&store.current_snapshot()),
            ui::StyleType::Subtle
        )
    );
    Ok(())
}
