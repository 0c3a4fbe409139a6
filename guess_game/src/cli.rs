use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::config::{DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_MAX_ATTEMPTS, GameConfig};
use crate::error::{GameError, Result};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub config: GameConfig,
    pub seed: Option<u64>, // None => fresh thread rng each run
    pub json: bool,
}

pub fn build_cli() -> Command {
    Command::new("guess_game")
        .about("Guess the hidden number in a limited number of tries")
        .arg(
            Arg::new("low")
                .short('l')
                .long("low")
                .value_name("NUM")
                .help("Lowest possible number (default: 1)")
                .allow_negative_numbers(true)
                .num_args(1),
        )
        .arg(
            Arg::new("high")
                .short('u')
                .long("high")
                .value_name("NUM")
                .help("Highest possible number (default: 100)")
                .allow_negative_numbers(true)
                .num_args(1),
        )
        .arg(
            Arg::new("attempts")
                .short('a')
                .long("attempts")
                .value_name("NUM")
                .help("Number of guesses allowed (default: 10)")
                .num_args(1),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed the random generator for a reproducible target")
                .num_args(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON report line when the game ends")
                .action(ArgAction::SetTrue),
        )
        .after_help(
"EXAMPLES:
  guess_game
  guess_game -l 1 -u 1000 -a 12
  guess_game --seed 42 --json",
        )
}

fn parse_arg<T: FromStr>(m: &ArgMatches, name: &'static str) -> Result<Option<T>> {
    match m.get_one::<String>(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| GameError::InvalidArgument {
                name,
                value: raw.clone(),
            }),
        None => Ok(None),
    }
}

pub fn options_from_matches(m: &ArgMatches) -> Result<CliOptions> {
    let low = parse_arg(m, "low")?.unwrap_or(DEFAULT_LOW);
    let high = parse_arg(m, "high")?.unwrap_or(DEFAULT_HIGH);
    let attempts = parse_arg(m, "attempts")?.unwrap_or(DEFAULT_MAX_ATTEMPTS);

    Ok(CliOptions {
        config: GameConfig::new(low, high, attempts)?,
        seed: parse_arg(m, "seed")?,
        json: m.get_flag("json"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions> {
        let m = build_cli().try_get_matches_from(args).unwrap();
        options_from_matches(&m)
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&["guess_game"]).unwrap();
        assert_eq!(opts.config, GameConfig::default());
        assert_eq!(opts.seed, None);
        assert!(!opts.json);
    }

    #[test]
    fn test_all_flags() {
        let opts = parse(&[
            "guess_game", "-l", "-10", "--high", "10", "-a", "3", "-s", "99", "--json",
        ])
        .unwrap();
        assert_eq!(opts.config, GameConfig::new(-10, 10, 3).unwrap());
        assert_eq!(opts.seed, Some(99));
        assert!(opts.json);
    }

    #[test]
    fn test_bad_number_is_reported() {
        let err = parse(&["guess_game", "--attempts", "ten"]).unwrap_err();
        match err {
            GameError::InvalidArgument { name, value } => {
                assert_eq!(name, "attempts");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = parse(&["guess_game", "-l", "50", "-u", "5"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidRange { low: 50, high: 5 }));
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        let err = parse(&["guess_game", "-a", "0"]).unwrap_err();
        assert!(matches!(err, GameError::NoAttempts));
    }
}
