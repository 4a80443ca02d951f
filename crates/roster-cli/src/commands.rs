use anyhow::Result;
use comfy_table::Table;

use roster_model::DAY_ORDER;
use roster_transform::NormalizeOptions;

use crate::cli::ConvertArgs;
use crate::pipeline::{ConvertConfig, run_pipeline};
use crate::summary::apply_table_style;
use crate::types::ConvertResult;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let config = ConvertConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        options: NormalizeOptions {
            strip_availability: !args.no_strip_availability,
            clean_rooms: !args.no_clean_rooms,
        },
        dry_run: args.dry_run,
    };
    run_pipeline(&config)
}

pub fn run_days() {
    let mut table = Table::new();
    table.set_header(vec!["Rank", "Day"]);
    apply_table_style(&mut table);
    for (day, rank) in DAY_ORDER {
        table.add_row(vec![rank.to_string(), day.to_string()]);
    }
    println!("{table}");
}
