//! Display surface commands: render what a home-screen widget would show.
//!
//! These only read the shared container; they never go through the store.

use clap::Args;
use countdown_core::widget::render;
use countdown_core::{Clock, Config, CountdownProvider, FileStore, RefreshMarker, WidgetFamily};
use serde::Serialize;

use super::{clock, container, CmdResult};

#[derive(Args)]
pub struct WidgetArgs {
    /// Widget size: small, medium or large (default from config)
    #[arg(long)]
    family: Option<WidgetFamily>,
    /// ID of the countdown to feature (default: nearest)
    #[arg(long)]
    select: Option<String>,
    /// Render as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
    /// Render a placeholder entry instead of stored countdowns
    #[arg(long)]
    placeholder: bool,
    /// Output the timeline as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetOutput {
    family: WidgetFamily,
    timeline: countdown_core::widget::Timeline,
    rendered: String,
    refresh_requested_at: Option<String>,
}

pub fn run(args: WidgetArgs, config: &Config) -> CmdResult {
    let container = container(config)?;
    let clock = clock(args.today.as_deref())?;
    let today = clock.today();
    let family = args.family.unwrap_or(config.widget.default_family);

    let provider = CountdownProvider::new(FileStore::new(&container), clock);
    let mut timeline = provider.timeline(args.select.as_deref());
    if args.placeholder {
        timeline.entries = vec![provider.placeholder()];
    }

    let rendered = timeline
        .entries
        .first()
        .map(|entry| render(entry, family, today, config.widget.large_list_limit))
        .unwrap_or_default();

    if args.json {
        let output = WidgetOutput {
            family,
            timeline,
            rendered,
            refresh_requested_at: RefreshMarker::in_container(&container)
                .last_requested()
                .map(|dt| dt.to_rfc3339()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{rendered}");
    }
    Ok(())
}
