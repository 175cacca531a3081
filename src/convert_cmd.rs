//! The `convert` subcommand: one Gregorian date to its lunar date.

use amlich_lunar::solar_to_lunar;
use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::cli::ConvertArgs;
use crate::config::AmlichConfig;

pub fn run(args: ConvertArgs) -> Result<()> {
    let config = AmlichConfig::load(&args.config)?;
    let timezone = config.resolve_timezone(args.timezone);
    let (year, month, day) = parse_date(&args.date)?;

    debug!(year, month, day, timezone, "converting solar date");
    let lunar = solar_to_lunar(day, month, year, timezone)?;
    println!("{lunar}");
    Ok(())
}

/// Parses a `YYYY-MM-DD` date string into `(year, month, day)`.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        bail!("invalid date {s:?} (expected YYYY-MM-DD)");
    }
    let year: i32 = parts[0]
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month: u32 = parts[1]
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let day: u32 = parts[2]
        .parse()
        .with_context(|| format!("invalid day in {s:?}"))?;
    Ok((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_date("2024-02-10").unwrap(), (2024, 2, 10));
        assert_eq!(parse_date("1582-10-15").unwrap(), (1582, 10, 15));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("2024-02").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2024/02/10").is_err());
        assert!(parse_date("2024-xx-10").is_err());
    }
}
