//! Line-oriented converter session.
//!
//! Rates refresh in the background; completions are delivered over a channel
//! and applied on the session loop, which is the only place view state is
//! touched.

use super::{convert::resolve_currency, rates, ui};
use crate::core::conversion::convert_with;
use crate::core::{ConversionError, ConversionRequest, RateSnapshot, RateStore};
use crate::core::{RefreshEvent, RefreshScheduler};
use anyhow::Result;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::unbounded_channel;
use tracing::debug;

const DEFAULT_AMOUNT: &str = "1000";
const PREFERRED_FROM: &str = "Indian Rupee";
const PREFERRED_TO: &str = "US Dollar";

const HELP: &str = "\
Commands:
  <amount>          set the amount to convert
  from <currency>   select the source currency (name or code)
  to <currency>     select the target currency (name or code)
  swap              exchange source and target
  refresh | r       fetch the latest rates now
  rates             list all known rates
  help              show this message
  quit | q          leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Amount(String),
    From(String),
    To(String),
    Swap,
    Refresh,
    Rates,
    Help,
    Quit,
}

impl Command {
    /// Interprets one input line. Anything that is not a keyword is taken as
    /// amount text.
    pub fn parse(input: &str) -> Self {
        let line = input.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match (word.to_lowercase().as_str(), rest) {
            ("from", currency) if !currency.is_empty() => Command::From(currency.to_string()),
            ("to", currency) if !currency.is_empty() => Command::To(currency.to_string()),
            ("swap", "") => Command::Swap,
            ("refresh" | "r", "") => Command::Refresh,
            ("rates", "") => Command::Rates,
            ("help" | "?", "") => Command::Help,
            ("quit" | "q" | "exit", "") => Command::Quit,
            _ => Command::Amount(line.to_string()),
        }
    }
}

/// Freshness indicator shown above the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Loading,
    Refreshing,
    Live { count: usize, at: DateTime<Local> },
    Offline,
}

impl Status {
    fn render(&self) -> String {
        match self {
            Status::Loading => ui::style_text("Loading rates...", ui::StyleType::Subtle),
            Status::Refreshing => {
                ui::style_text("Fetching latest rates...", ui::StyleType::Subtle)
            }
            Status::Live { count, at } => ui::style_text(
                &format!("{count} live rates • {}", at.format("%H:%M:%S")),
                ui::StyleType::Success,
            ),
            Status::Offline => ui::style_text("Using offline rates", ui::StyleType::Error),
        }
    }
}

/// What the result area shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub headline: String,
    pub detail: Option<String>,
}

impl ResultView {
    fn message(headline: &str) -> Self {
        Self {
            headline: headline.to_string(),
            detail: None,
        }
    }
}

/// Inputs and selections of the converter, independent of any terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterView {
    pub amount: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub status: Status,
}

impl ConverterView {
    /// Starts with the first two currencies in name order selected.
    pub fn new(snapshot: &RateSnapshot) -> Self {
        let names = snapshot.currency_names();
        Self {
            amount: DEFAULT_AMOUNT.to_string(),
            from: names.first().cloned(),
            to: names.get(1).cloned(),
            status: Status::Loading,
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn select_from(&mut self, snapshot: &RateSnapshot, query: &str) -> Result<(), ConversionError> {
        self.from = Some(resolve_currency(snapshot, query)?);
        Ok(())
    }

    pub fn select_to(&mut self, snapshot: &RateSnapshot, query: &str) -> Result<(), ConversionError> {
        self.to = Some(resolve_currency(snapshot, query)?);
        Ok(())
    }

    /// Applies a completed refresh: selections survive when the currency is
    /// still known, otherwise fall back to the preferred defaults.
    pub fn apply_refresh(&mut self, event: &RefreshEvent) {
        match event {
            RefreshEvent::Updated(snapshot) => {
                let names = snapshot.currency_names();
                self.from = pick(&names, self.from.take(), PREFERRED_FROM, 0);
                self.to = pick(&names, self.to.take(), PREFERRED_TO, 1);
                self.status = Status::Live {
                    count: names.len(),
                    at: snapshot.last_updated().unwrap_or_else(Local::now),
                };
            }
            RefreshEvent::Failed(_) => self.status = Status::Offline,
        }
    }

    pub fn result(&self, snapshot: &RateSnapshot) -> ResultView {
        if self.amount.trim().is_empty() {
            return ResultView::message("Enter an amount");
        }
        let (Some(from), Some(to)) = (&self.from, &self.to) else {
            return ResultView::message("Select currencies");
        };

        let converted = ConversionRequest::parse(&self.amount, from.as_str(), to.as_str())
            .and_then(|request| convert_with(snapshot, &request));
        match converted {
            Ok(result) => ResultView {
                headline: result.display_value(),
                detail: result.rate_line(),
            },
            Err(ConversionError::InvalidAmount(_)) => ResultView {
                headline: "Invalid amount".to_string(),
                detail: Some("Please enter a valid number".to_string()),
            },
            Err(e @ ConversionError::UnknownCurrency(_)) => ResultView::message(&e.to_string()),
        }
    }

    pub fn render(&self, snapshot: &RateSnapshot) -> String {
        let result = self.result(snapshot);
        let mut output = format!(
            "{}\n{} {} → {}\n{}",
            self.status.render(),
            ui::style_text(&self.amount, ui::StyleType::Title),
            self.from.as_deref().unwrap_or("?"),
            self.to.as_deref().unwrap_or("?"),
            ui::style_text(&result.headline, ui::StyleType::Result),
        );
        if let Some(detail) = result.detail {
            output.push('\n');
            output.push_str(&ui::style_text(&detail, ui::StyleType::Subtle));
        }
        output
    }
}

fn pick(names: &[String], current: Option<String>, preferred: &str, fallback: usize) -> Option<String> {
    current
        .filter(|name| names.contains(name))
        .or_else(|| {
            names
                .iter()
                .any(|name| name == preferred)
                .then(|| preferred.to_string())
        })
        .or_else(|| names.get(fallback).or(names.first()).cloned())
}

fn redraw(view: &ConverterView, store: &RateStore) {
    ui::print_separator();
    println!("{}", view.render(&store.current_snapshot()));
}

/// Runs the session until the user quits or input ends.
pub async fn run(store: Arc<RateStore>, refresh_interval: Duration) -> Result<()> {
    let (tx, mut events) = unbounded_channel();
    let scheduler = RefreshScheduler::start(Arc::clone(&store), refresh_interval, tx);

    let mut view = ConverterView::new(&store.current_snapshot());
    println!("{}", ui::style_text("Currency converter", ui::StyleType::Title));
    println!("{}", ui::style_text("Type `help` for commands", ui::StyleType::Subtle));
    redraw(&view, &store);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = Command::parse(&line);
                debug!(?command, "Session input");
                let snapshot = store.current_snapshot();
                match command {
                    Command::Quit => break,
                    Command::Help => {
                        println!("{HELP}");
                        continue;
                    }
                    Command::Rates => {
                        println!("{}", snapshot.display_as_table());
                        continue;
                    }
                    Command::Amount(amount) => view.amount = amount,
                    Command::Swap => view.swap(),
                    Command::Refresh => {
                        view.status = Status::Refreshing;
                        scheduler.refresh_now();
                    }
                    Command::From(query) => {
                        if let Err(e) = view.select_from(&snapshot, &query) {
                            println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
                            continue;
                        }
                    }
                    Command::To(query) => {
                        if let Err(e) = view.select_to(&snapshot, &query) {
                            println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
                            continue;
                        }
                    }
                }
                redraw(&view, &store);
            }
            Some(event) = events.recv() => {
                view.apply_refresh(&event);
                redraw(&view, &store);
            }
        }
    }

    scheduler.shutdown();
    println!("{}", rates::describe_source(&store.current_snapshot()));
    Ok(())
}
