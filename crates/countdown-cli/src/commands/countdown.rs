//! Countdown management commands for CLI.

use std::collections::HashSet;

use chrono::{Days, NaiveTime};
use clap::Subcommand;
use countdown_core::widget::render::{count_label, format_date};
use countdown_core::{Clock, Config, CountdownRecord};
use serde::Serialize;

use super::{clock, open_store, parse_date, parse_id, CmdResult};

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Create a new countdown
    Add {
        /// Event name
        name: String,
        /// Target date as YYYY-MM-DD (default: tomorrow)
        #[arg(long)]
        date: Option<String>,
    },
    /// List countdowns, nearest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Count days from this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Show one countdown
    Show {
        /// Countdown ID
        id: String,
        /// Count days from this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Edit a countdown
    Edit {
        /// Countdown ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New target date as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete countdowns
    Delete {
        /// Countdown IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// A record with its derived fields, as printed by `list --json` and `show`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountdownView<'a> {
    #[serde(flatten)]
    record: &'a CountdownRecord,
    days_remaining: i64,
    is_today: bool,
}

impl<'a> CountdownView<'a> {
    fn new(record: &'a CountdownRecord, today: chrono::NaiveDate) -> Self {
        Self {
            record,
            days_remaining: record.days_remaining(today),
            is_today: record.is_today(today),
        }
    }
}

pub fn run(action: CountdownAction, config: &Config) -> CmdResult {
    let mut store = open_store(config)?;

    match action {
        CountdownAction::Add { name, date } => {
            let target = match date {
                Some(d) => parse_date(&d)?,
                None => {
                    let today = clock(None)?.today();
                    today.checked_add_days(Days::new(1)).unwrap_or(today)
                }
            };
            let record = CountdownRecord::new(&name, target)?;
            let id = record.id;
            store.add(record)?;
            println!("Countdown created: {id}");
        }
        CountdownAction::List { json, today } => {
            let today = clock(today.as_deref())?.today();
            let sorted = store.sorted();
            if json {
                let views: Vec<_> = sorted.iter().map(|r| CountdownView::new(r, today)).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if sorted.is_empty() {
                println!("No Countdowns");
                println!("Run `countdown add <name>` to create your first countdown");
            } else {
                for record in &sorted {
                    let (count, unit) = count_label(record, today);
                    println!(
                        "{}  {:<24} {:>14}  {count} {unit}",
                        record.id,
                        record.name,
                        format_date(record.target_day()),
                    );
                }
            }
        }
        CountdownAction::Show { id, today } => {
            let today = clock(today.as_deref())?.today();
            let id = parse_id(&id)?;
            let record = store
                .get(id)
                .ok_or_else(|| format!("countdown not found: {id}"))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&CountdownView::new(record, today))?
            );
        }
        CountdownAction::Edit { id, name, date } => {
            let id = parse_id(&id)?;
            let existing = store
                .get(id)
                .ok_or_else(|| format!("countdown not found: {id}"))?;
            let name = name.unwrap_or_else(|| existing.name.clone());
            let target_date = match date {
                Some(d) => parse_date(&d)?.and_time(NaiveTime::MIN),
                None => existing.target_date,
            };
            let updated = CountdownRecord::with_id(id, &name, target_date)?;
            store.update(updated)?;
            println!("Countdown updated: {id}");
        }
        CountdownAction::Delete { ids } => {
            let ids = ids
                .iter()
                .map(|s| parse_id(s))
                .collect::<Result<HashSet<_>, _>>()?;
            let removed = store.delete(&ids)?;
            println!("Deleted {removed} countdown(s)");
        }
    }
    Ok(())
}
