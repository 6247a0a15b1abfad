use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use gomical_core::{CalendarDay, ScheduleContext};
use tracing::debug;

use crate::cli::DayArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS};
use crate::shared::{
    OutputFormat, day_summary, find_area, load_holidays, load_municipality, parse_date_arg,
};

pub fn run_day(args: DayArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let municipality = load_municipality(&args.municipality)?;
    let area = find_area(&municipality, &args.area)?;
    let holidays = load_holidays()?;
    let ctx = ScheduleContext::for_area(&municipality, area, &holidays);
    debug!(
        municipality = %municipality.municipality_id,
        area = %area.area_id,
        "resolved area"
    );

    if let Some(date_arg) = &args.date {
        let date = parse_date_arg(date_arg)?;
        emit_day(&ctx.resolve_day(date), output_format)?;
        return Ok(ExitCode::from(EXIT_SUCCESS));
    }

    let reader: Box<dyn BufRead> = if args.stdin || args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input).map_err(|e| {
            CliError::runtime(format!("Failed to open file '{}': {}", args.input, e))
        })?;
        Box::new(BufReader::new(file))
    };

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let date = parse_date_arg(trimmed)?;
        emit_day(&ctx.resolve_day(date), output_format)?;
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn emit_day(day: &CalendarDay, output_format: OutputFormat) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string(day)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{}", day_summary(day));
        }
    }
    Ok(())
}
