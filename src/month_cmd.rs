//! The `month` subcommand: the lunar label for each day of a Gregorian
//! month, as a calendar grid would show it.

use amlich_lunar::{days_in_month, solar_to_lunar};
use anyhow::Result;
use tracing::debug;

use crate::cli::MonthArgs;
use crate::config::AmlichConfig;

pub fn run(args: MonthArgs) -> Result<()> {
    let config = AmlichConfig::load(&args.config)?;
    let timezone = config.resolve_timezone(args.timezone);
    let n_days = days_in_month(args.year, args.month)?;

    debug!(year = args.year, month = args.month, timezone, n_days, "printing month grid");
    for day in 1..=n_days {
        let lunar = solar_to_lunar(day, args.month, args.year, timezone)?;
        println!("{:4}-{:02}-{:02}  {}", args.year, args.month, day, lunar.label());
    }
    Ok(())
}
