use std::process::ExitCode;

use gomical_core::ScheduleContext;
use tracing::debug;

use crate::cli::NextArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS};
use crate::shared::{
    OutputFormat, days_until_label, find_area, load_holidays, load_municipality, parse_date_arg,
};

pub fn run_next(args: NextArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let municipality = load_municipality(&args.municipality)?;
    let area = find_area(&municipality, &args.area)?;
    let holidays = load_holidays()?;
    let ctx = ScheduleContext::for_area(&municipality, area, &holidays);

    // The only place wall-clock "now" enters: the engine itself is pure.
    let from = match &args.from {
        Some(s) => parse_date_arg(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let upcoming = ctx.next_collections(from, args.horizon);
    debug!(from = %from, horizon = args.horizon, found = upcoming.len(), "projected next collections");

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&upcoming)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for next in &upcoming {
                println!(
                    "{} {} {}",
                    next.date,
                    next.garbage_type.name,
                    days_until_label(next.days_until)
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
