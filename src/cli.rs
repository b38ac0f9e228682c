use std::env;

use chrono::{DateTime, NaiveDate, Utc};

pub const USAGE: &str = "Usage: habit-day [--sample] [--date YYYY-MM-DD] [--theme NAME]";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub sample: bool,
    pub date: Option<NaiveDate>,
    pub theme: Option<String>,
}

impl CliOptions {
    pub fn start_date(&self) -> DateTime<Utc> {
        self.date
            .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
            .unwrap_or_else(Utc::now)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Help,
    Run(CliOptions),
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliMode, String> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                options.sample = true;
            }
            "--date" => {
                let value = args.next().ok_or("--date requires a value (YYYY-MM-DD)")?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD.", value))?;
                options.date = Some(date);
            }
            "--theme" => {
                let value = args.next().ok_or("--theme requires a theme name")?;
                options.theme = Some(value);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliMode::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliMode, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_runs_with_defaults() {
        assert_eq!(parse(&[]), Ok(CliMode::Run(CliOptions::default())));
    }

    #[test]
    fn sample_and_date_flags_are_parsed() {
        let mode = parse(&["--sample", "--date", "2024-03-01"]).unwrap();

        let CliMode::Run(options) = mode else {
            panic!("expected run mode");
        };
        assert!(options.sample);
        assert_eq!(options.date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn start_date_is_midnight_utc() {
        let options = CliOptions {
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..CliOptions::default()
        };

        assert_eq!(options.start_date().to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn invalid_date_is_rejected() {
        assert!(parse(&["--date", "03/01/2024"]).is_err());
    }

    #[test]
    fn missing_date_value_is_rejected() {
        assert!(parse(&["--date"]).is_err());
    }

    #[test]
    fn theme_flag_takes_a_name() {
        let mode = parse(&["--theme", "nord"]).unwrap();
        assert_eq!(
            mode,
            CliMode::Run(CliOptions { theme: Some("nord".to_string()), ..CliOptions::default() })
        );
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(parse(&["--help", "--bogus"]), Ok(CliMode::Help));
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(parse(&["--agenda"]), Err("Unknown argument: --agenda".to_string()));
    }
}
