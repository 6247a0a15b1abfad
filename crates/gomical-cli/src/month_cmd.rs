use std::process::ExitCode;

use gomical_core::ScheduleContext;
use tracing::debug;

use crate::cli::MonthArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS};
use crate::shared::{OutputFormat, day_summary, find_area, load_holidays, load_municipality};

pub fn run_month(args: MonthArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    if !(1..=12).contains(&args.month) {
        return Err(CliError::input(format!(
            "Invalid month '{}'. Expected: 1-12",
            args.month
        )));
    }

    let municipality = load_municipality(&args.municipality)?;
    let area = find_area(&municipality, &args.area)?;
    let holidays = load_holidays()?;
    let ctx = ScheduleContext::for_area(&municipality, area, &holidays);

    let days = ctx.month_days(args.year, args.month);
    debug!(year = args.year, month = args.month, days = days.len(), "expanded month grid");

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&days)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for day in &days {
                println!("{}", day_summary(day));
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
