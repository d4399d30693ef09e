use clap::Args;
use countdown_core::{Config, CountdownEntityQuery, FileStore};

use super::{container, CmdResult};

#[derive(Args)]
pub struct PickerArgs {
    /// Only these countdown IDs
    #[arg(long = "id")]
    ids: Vec<String>,
    /// Print the default choice only
    #[arg(long)]
    default: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PickerArgs, config: &Config) -> CmdResult {
    let query = CountdownEntityQuery::new(FileStore::new(container(config)?));

    let entities: Vec<_> = if args.default {
        query.default_result().into_iter().collect()
    } else if args.ids.is_empty() {
        query.suggested_entities()
    } else {
        query.entities_for(&args.ids)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entities)?);
    } else {
        for entity in &entities {
            println!("{}  {}", entity.id, entity.name);
        }
    }
    Ok(())
}
