use std::io;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use guess_game::cli::{build_cli, options_from_matches};
use guess_game::{RngTarget, SessionReport, play};

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the game transcript
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let m = build_cli().get_matches();
    let opts = options_from_matches(&m).context("invalid arguments")?;
    info!("starting game with {:?}", opts);

    ctrlc::set_handler(|| {
        eprintln!("\nCtrl+C detected, leaving the game...");
        process::exit(130);
    })
    .context("failed to install Ctrl+C handler")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let start = Instant::now();

    let summary = match opts.seed {
        Some(seed) => play(opts.config, &mut RngTarget::seeded(seed), &mut input, &mut output),
        None => play(opts.config, &mut RngTarget::thread(), &mut input, &mut output),
    }
    .context("game aborted")?;

    if opts.json {
        let report = SessionReport::new(&opts.config, summary, start.elapsed());
        println!("{}", report.to_json()?);
    }
    Ok(())
}
