use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, Command};
use tracing_subscriber::EnvFilter;
use u_tempering::io::{self, RunConfig};

fn cli() -> Command {
    Command::new("u-tempering")
        .about("Solves a TSP instance with parallel tempering and 2-opt annealing")
        .after_help("Log level is read from RUST_LOG (default: info).")
        .arg(
            arg!(<RUN_FILE> "TOML run file with the data path and a [solver] table")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--seed <SEED> "Deterministic seed, overrides the run file")
                .required(false)
                .value_parser(clap::value_parser!(u64)),
        )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let run_file = matches
        .get_one::<PathBuf>("RUN_FILE")
        .expect("RUN_FILE is required");
    let seed = matches.get_one::<u64>("seed").copied();

    let result = RunConfig::load(run_file)
        .map_err(u_tempering::Error::from)
        .and_then(|mut config| {
            if let Some(seed) = seed {
                config.solver.seed = Some(seed);
            }
            io::run(&config)
        });

    match result {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
