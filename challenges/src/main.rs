use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;
use log::debug;
use serde::Serialize;

use challenges::fizzbuzz::DEFAULT_LIMIT;
use challenges::{
    PasswordIssue, PasswordReport, check_password, fizzbuzz_sequence, sum_to, sum_with_step,
};

#[derive(Debug, Serialize)]
struct PasswordResult<'a> {
    #[serde(flatten)]
    report: &'a PasswordReport,
    valid: bool,
    issues: Vec<PasswordIssue>,
}

#[derive(Debug, Serialize)]
struct SumResult {
    low: i64,
    high: i64,
    step: i64,
    total: i64,
}

fn build_cli() -> Command {
    Command::new("challenges")
        .about("Beginner challenge solutions: FizzBuzz, password checker, sums")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("fizzbuzz")
                .about("Print FizzBuzz from 1 to a limit")
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("NUM")
                        .help("Last number to print (default: 100)")
                        .num_args(1),
                ),
        )
        .subcommand(
            Command::new("password")
                .about("Check passwords: 8+ characters, an uppercase letter and a number")
                .arg(
                    Arg::new("passwords")
                        .value_name("PASSWORD")
                        .help("Passwords to check")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("sum")
                .about("Sum the numbers from 1 (or --low) to N")
                .arg(
                    Arg::new("n")
                        .value_name("N")
                        .help("Last number of the range")
                        .allow_negative_numbers(true)
                        .required(true),
                )
                .arg(
                    Arg::new("low")
                        .short('l')
                        .long("low")
                        .value_name("NUM")
                        .help("First number of the range (default: 1)")
                        .allow_negative_numbers(true)
                        .num_args(1),
                )
                .arg(
                    Arg::new("step")
                        .short('s')
                        .long("step")
                        .value_name("NUM")
                        .help("Distance between summed numbers (default: 1)")
                        .allow_negative_numbers(true)
                        .num_args(1),
                ),
        )
        .after_help(
"EXAMPLES:
  challenges fizzbuzz
  challenges password Password123 short
  challenges sum 100
  challenges --json sum 15 --low 5 --step 3",
        )
}

fn parse_opt<T>(m: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    m.get_one::<String>(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .with_context(|| format!("invalid value '{raw}' for {name}"))
        })
        .transpose()
}

fn run_fizzbuzz(out: &mut impl Write, m: &ArgMatches, json: bool) -> Result<()> {
    let limit = parse_opt(m, "limit")?.unwrap_or(DEFAULT_LIMIT);
    debug!("fizzbuzz up to {limit}");
    let lines = fizzbuzz_sequence(limit);
    if json {
        writeln!(out, "{}", serde_json::to_string(&lines)?)?;
    } else {
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn run_password(out: &mut impl Write, m: &ArgMatches, json: bool) -> Result<()> {
    let reports: Vec<PasswordReport> = m
        .get_many::<String>("passwords")
        .map(|vals| vals.map(|pw| check_password(pw)).collect())
        .unwrap_or_default();

    if json {
        let results: Vec<PasswordResult> = reports
            .iter()
            .map(|report| PasswordResult {
                report,
                valid: report.is_valid(),
                issues: report.issues(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string(&results)?)?;
        return Ok(());
    }

    for report in &reports {
        writeln!(out, "Checking password: '{}'", report.password)?;
        if report.is_valid() {
            writeln!(out, "  -> Password is valid.")?;
            continue;
        }
        writeln!(out, "  -> Password is NOT valid. Issues found:")?;
        for issue in report.issues() {
            writeln!(out, "    - {issue}")?;
        }
    }
    Ok(())
}

fn run_sum(out: &mut impl Write, m: &ArgMatches, json: bool) -> Result<()> {
    let high: i64 = parse_opt(m, "n")?.context("missing N")?;
    let low: Option<i64> = parse_opt(m, "low")?;
    let step: Option<i64> = parse_opt(m, "step")?;

    let result = match (low, step, u32::try_from(high)) {
        (None, None, Ok(n)) => SumResult {
            low: 1,
            high,
            step: 1,
            total: i64::try_from(sum_to(n))?,
        },
        _ => {
            let low = low.unwrap_or(1);
            let step = step.unwrap_or(1);
            SumResult {
                low,
                high,
                step,
                total: sum_with_step(low, high, step)?,
            }
        }
    };
    debug!("{result:?}");

    if json {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    } else if result.low == 1 && result.step == 1 {
        writeln!(out, "The sum of numbers from 1 to {} is: {}", result.high, result.total)?;
    } else {
        writeln!(
            out,
            "Sum {} to {}, step {}: {}",
            result.low, result.high, result.step, result.total
        )?;
    }
    Ok(())
}

fn run(out: &mut impl Write, m: &ArgMatches) -> Result<()> {
    let json = m.get_flag("json");
    match m.subcommand() {
        Some(("fizzbuzz", sub)) => run_fizzbuzz(out, sub, json),
        Some(("password", sub)) => run_password(out, sub, json),
        Some(("sum", sub)) => run_sum(out, sub, json),
        _ => unreachable!("subcommand_required is set"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let m = build_cli().get_matches();
    let stdout = io::stdout();
    run(&mut stdout.lock(), &m)
}
