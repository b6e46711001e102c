#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use fitcalc::report::{OnInvalid, summarize};
use fitcalc::{cli, input, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match &cli.input {
        Some(path) => input::load_packages(path)?,
        None => input::sample_packages(),
    };
    let on_invalid = if cli.strict {
        OnInvalid::Abort
    } else {
        OnInvalid::Skip
    };
    dlog!(
        "mode=summarize packages={} strict={} json={}",
        packages.len(),
        cli.strict,
        cli.json
    );

    let messages = summarize(&packages, on_invalid).context("invalid workout package")?;
    if messages.is_empty() && !packages.is_empty() {
        anyhow::bail!("No valid workout packages. Check the activity codes and field counts.");
    }

    for info in &messages {
        if cli.json {
            println!("{}", serde_json::to_string(info)?);
        } else {
            println!("{}", info.get_message());
        }
    }

    Ok(())
}
