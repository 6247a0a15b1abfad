use chrono::NaiveDate;

use gomical_core::{Area, CalendarDay, Holiday, Municipality, Registry, parse_iso_date};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Best-effort output format for rendering errors that occur before the
/// format argument itself has been validated.
pub fn output_format_hint(s: &str) -> OutputFormat {
    if s.eq_ignore_ascii_case("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

pub fn parse_output_format(s: &str) -> CliResult<OutputFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        _ => Err(CliError::input(format!(
            "Invalid output_format '{}'. Expected: json, text",
            s
        ))),
    }
}

pub fn parse_date_arg(s: &str) -> CliResult<NaiveDate> {
    parse_iso_date(s)
        .map_err(|_| CliError::input(format!("Invalid date '{}'. Expected: YYYY-MM-DD", s.trim())))
}

pub fn load_municipality(id: &str) -> CliResult<Municipality> {
    Registry::bundled()
        .municipality(id)
        .map_err(|e| CliError::input(e.to_string()))
}

pub fn load_holidays() -> CliResult<Vec<Holiday>> {
    Registry::bundled()
        .holidays()
        .map_err(|e| CliError::runtime(e.to_string()))
}

pub fn find_area<'a>(municipality: &'a Municipality, area_id: &str) -> CliResult<&'a Area> {
    municipality.area_by_id(area_id).ok_or_else(|| {
        CliError::input(format!(
            "Unknown area '{}' in municipality '{}'",
            area_id, municipality.municipality_id
        ))
    })
}

/// One text line for a resolved day, e.g.
/// `2025-11-06 可燃ごみ` or `2025-11-03 (文化の日) 収集なし`.
pub fn day_summary(day: &CalendarDay) -> String {
    let mut line = day.date.clone();
    if let Some(name) = &day.holiday_name {
        line.push_str(&format!(" ({name})"));
    }
    if day.garbage_types.is_empty() {
        line.push_str(" 収集なし");
    } else {
        let names: Vec<&str> = day.garbage_types.iter().map(|t| t.name.as_str()).collect();
        line.push(' ');
        line.push_str(&names.join("・"));
    }
    line
}

/// Relative label for a day offset: 今日, 明日, or あとN日.
pub fn days_until_label(days_until: i64) -> String {
    match days_until {
        0 => "今日".to_string(),
        1 => "明日".to_string(),
        n => format!("あと{n}日"),
    }
}
