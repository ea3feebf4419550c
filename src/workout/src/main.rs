#[macro_use]
extern crate log;

use clap::Parser;
use dotenv::dotenv;
use workout::{PackageReader, SAMPLE_PACKAGES, process_package};

/// Print workout statistics for the bundled sensor packages
#[derive(Parser)]
#[command(version, about)]
pub struct WorkoutCli {}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        eprintln!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _cli = WorkoutCli::parse();
    let reader = PackageReader::default();

    for (code, data) in SAMPLE_PACKAGES {
        let line = process_package(&reader, code, data)?;
        println!("{}", line);
    }

    info!("Processed {} packages", SAMPLE_PACKAGES.len());
    Ok(())
}
