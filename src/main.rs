mod cli;
mod report;

use bridgearch::evaluate;
use clap::Parser;
use cli::Cli;
use report::{render_evaluation, render_json};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // `-v` sets the baseline; RUST_LOG still wins when present.
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("{error:?}");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    // Collect the arch profile a·x² + b·x + c. The roots of the profile are the
    // points where the arch meets the ground, i.e. the bridge supports.
    let coefficients = cli.coefficients();
    log::info!("arch coefficients: {coefficients:?}");

    // Solve, classify and plot. An arch with no real roots is still a valid
    // answer; profiles that are not quadratics, or that overflow f64, come
    // back as errors.
    let evaluation = evaluate(coefficients)?;

    let queries = cli.support_queries();
    if cli.json {
        println!("{}", render_json(&evaluation, &queries)?);
    } else {
        print!("{}", render_evaluation(&evaluation, &queries));
    }

    Ok(())
}
