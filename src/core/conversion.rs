//! Conversion of amounts between currencies by pivoting through the base currency

use std::sync::Arc;

use super::currency::RateSnapshot;
use super::error::ConversionError;
use super::store::RateStore;

/// A single conversion to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            amount,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Builds a request from raw amount text as typed by the user.
    pub fn parse(
        amount: &str,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, ConversionError> {
        Ok(Self::new(parse_amount(amount)?, from, to))
    }
}

/// Outcome of a conversion, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub request: ConversionRequest,
    pub value: f64,
    pub from_symbol: String,
    pub to_symbol: String,
}

impl ConversionResult {
    /// Target symbol followed by the formatted value, e.g. `$13.5880`.
    pub fn display_value(&self) -> String {
        format!("{}{}", self.to_symbol, format_result(self.value))
    }

    /// Units of the target currency per unit of the source currency.
    pub fn rate(&self) -> Option<f64> {
        if self.request.from == self.request.to {
            return None;
        }
        effective_rate(self.request.amount, self.value)
    }

    /// Informational line such as `1 ₹ = 0.0136 $`.
    pub fn rate_line(&self) -> Option<String> {
        let label = |symbol: &str, name: &str| {
            if symbol.is_empty() {
                name.to_string()
            } else {
                symbol.to_string()
            }
        };
        self.rate().map(|rate| {
            format!(
                "1 {} = {rate:.4} {}",
                label(&self.from_symbol, &self.request.from),
                label(&self.to_symbol, &self.request.to)
            )
        })
    }
}

pub fn parse_amount(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ConversionError::InvalidAmount(trimmed.to_string())),
    }
}

/// Converts `amount` from one currency to another using the given snapshot.
pub fn convert(
    snapshot: &RateSnapshot,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    if !amount.is_finite() {
        return Err(ConversionError::InvalidAmount(amount.to_string()));
    }
    let from_rate = snapshot
        .get(from)
        .ok_or_else(|| ConversionError::UnknownCurrency(from.to_string()))?;
    let to_rate = snapshot
        .get(to)
        .ok_or_else(|| ConversionError::UnknownCurrency(to.to_string()))?;

    if from == to {
        return Ok(amount);
    }

    let base = snapshot.base_name();
    let amount_in_base = if from == base {
        amount
    } else {
        amount / from_rate.factor
    };
    Ok(if to == base {
        amount_in_base
    } else {
        amount_in_base * to_rate.factor
    })
}

/// `result / amount`, or `None` when the amount is zero.
pub fn effective_rate(amount: f64, result: f64) -> Option<f64> {
    (amount != 0.0).then(|| result / amount)
}

/// Formats a converted value for display.
///
/// Magnitudes of 100 and above get two decimals with thousands separators,
/// magnitudes in [1, 100) get four decimals, smaller ones up to six decimals
/// with trailing zeros removed.
///
/// Tiers are chosen on `|value|` and the sign is kept, so negative values
/// format like their positive counterparts (`-2500.0` gives `-2,500.00`, not
/// the ungrouped `-2500`). Values that round to zero at six decimals give `0`.
pub fn format_result(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 100.0 {
        group_thousands(&format!("{value:.2}"))
    } else if magnitude >= 1.0 {
        format!("{value:.4}")
    } else {
        let fixed = format!("{value:.6}");
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "-0" | "" => "0".to_string(),
            other => other.to_string(),
        }
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Performs conversions against whatever snapshot the store currently holds.
#[derive(Clone)]
pub struct ConversionService {
    store: Arc<RateStore>,
}

impl ConversionService {
    pub fn new(store: Arc<RateStore>) -> Self {
        Self { store }
    }

    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
        convert_with(&self.store.current_snapshot(), request)
    }
}

/// Converts a request against an explicit snapshot.
pub fn convert_with(
    snapshot: &RateSnapshot,
    request: &ConversionRequest,
) -> Result<ConversionResult, ConversionError> {
    let value = convert(snapshot, request.amount, &request.from, &request.to)?;
    Ok(ConversionResult {
        request: request.clone(),
        value,
        from_symbol: snapshot.symbol(&request.from).to_string(),
        to_symbol: snapshot.symbol(&request.to).to_string(),
    })
}
