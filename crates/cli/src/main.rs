use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use hist_cli::args::Args;
use hist_cli::config::config_from_args;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hist: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = config_from_args(args)?;
    let report = hist_core::run(&config, io::stdin().lock())?;
    for skipped in &report.skipped {
        eprintln!("{}: {}", skipped.error, skipped.record);
    }
    let mut out = BufWriter::new(io::stdout().lock());
    hist_core::print_report(&config, &report, &mut out)?;
    out.flush()?;
    Ok(())
}
