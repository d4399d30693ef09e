//! Plain-text rendering of widget entries.

use chrono::NaiveDate;

use super::{CountdownEntry, WidgetFamily};
use crate::countdown::{day_unit, sort_by_target, CountdownRecord, CountdownStatus};

const EMPTY_TITLE: &str = "No Countdowns";
const EMPTY_HINT: &str = "Open the app to add one";

/// Render `entry` for `family` as of `today`. The large family lists at
/// most `large_limit` countdowns, nearest first.
pub fn render(
    entry: &CountdownEntry,
    family: WidgetFamily,
    today: NaiveDate,
    large_limit: usize,
) -> String {
    let lines = match family {
        WidgetFamily::Small => small(entry.countdown.as_ref(), today),
        WidgetFamily::Medium => medium(entry.countdown.as_ref(), today),
        WidgetFamily::Large => large(&entry.all_countdowns, today, large_limit),
    };
    lines.join("\n")
}

/// Calendar date as shown next to a countdown, e.g. "Jan 11, 2024".
pub fn format_date(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}

/// Count and unit for a record, e.g. ("10", "days"), ("Today!", "").
pub fn count_label(record: &CountdownRecord, today: NaiveDate) -> (String, &'static str) {
    match record.status(today) {
        CountdownStatus::Upcoming { days } => (days.to_string(), day_unit(days)),
        CountdownStatus::Today => ("Today!".to_string(), ""),
        CountdownStatus::Passed => ("Passed".to_string(), ""),
    }
}

fn small(countdown: Option<&CountdownRecord>, today: NaiveDate) -> Vec<String> {
    let Some(countdown) = countdown else {
        return vec![EMPTY_TITLE.to_string()];
    };
    let (count, unit) = count_label(countdown, today);
    let mut lines = vec![countdown.name.clone(), count];
    if !unit.is_empty() {
        lines.push(unit.to_string());
    }
    lines
}

fn medium(countdown: Option<&CountdownRecord>, today: NaiveDate) -> Vec<String> {
    let Some(countdown) = countdown else {
        return vec![EMPTY_TITLE.to_string()];
    };
    let (count, unit) = count_label(countdown, today);
    let headline = if unit.is_empty() {
        count
    } else {
        format!("{count} {unit}")
    };
    vec![
        format!("{headline:<10} {}", countdown.name),
        format!("{:<10} {}", "", format_date(countdown.target_day())),
    ]
}

fn large(countdowns: &[CountdownRecord], today: NaiveDate, limit: usize) -> Vec<String> {
    if countdowns.is_empty() {
        return vec![EMPTY_TITLE.to_string(), EMPTY_HINT.to_string()];
    }

    let mut sorted = countdowns.to_vec();
    sort_by_target(&mut sorted);

    let mut lines = vec!["Countdowns".to_string()];
    for (index, record) in sorted.iter().take(limit).enumerate() {
        if index > 0 {
            lines.push("-".repeat(32));
        }
        let (count, unit) = count_label(record, today);
        lines.push(format!("{:<24} {count:>7}", record.name));
        lines.push(format!("{:<24} {unit:>7}", format_date(record.target_day())));
    }
    lines
}
