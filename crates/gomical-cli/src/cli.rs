use clap::{Parser, Subcommand};

/// Garbage collection day lookup tool
#[derive(Parser, Debug)]
#[command(name = "gomical")]
#[command(about = "Garbage collection day lookup tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the collected garbage types for specific dates
    Day(DayArgs),
    /// Expand the collection calendar for a whole month
    Month(MonthArgs),
    /// Project the next collection date of each garbage type
    Next(NextArgs),
}

#[derive(clap::Args, Debug)]
pub struct DayArgs {
    /// Municipality identifier
    #[arg(short, long, default_value = "nagareyama")]
    pub municipality: String,

    /// Area identifier within the municipality
    #[arg(short, long)]
    pub area: String,

    /// Single ISO date (YYYY-MM-DD) to resolve
    #[arg(short, long)]
    pub date: Option<String>,

    /// Input file with one ISO date per line (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct MonthArgs {
    /// Municipality identifier
    #[arg(short, long, default_value = "nagareyama")]
    pub municipality: String,

    /// Area identifier within the municipality
    #[arg(short, long)]
    pub area: String,

    /// Calendar year
    #[arg(short, long)]
    pub year: i32,

    /// Calendar month (1-12)
    #[arg(long)]
    pub month: u32,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct NextArgs {
    /// Municipality identifier
    #[arg(short, long, default_value = "nagareyama")]
    pub municipality: String,

    /// Area identifier within the municipality
    #[arg(short, long)]
    pub area: String,

    /// Start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub from: Option<String>,

    /// Forward search horizon in days
    #[arg(long, default_value_t = gomical_core::DEFAULT_HORIZON_DAYS)]
    pub horizon: u32,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}
