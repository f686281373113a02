use std::io::{self, Write};

use adventkit::{runner, CliArgs};
use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let solver = runner::find_solver(&args.year, &args.day)?;
    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| runner::input_path(&args.input_dir, &args.year, &args.day));
    let input = runner::read_input(&input_path).with_context(|| {
        format!(
            "Failed to read puzzle input of year {}, day {} from file({}).",
            args.year,
            args.day,
            input_path.display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    (solver.solve)(&input, &mut out)
        .with_context(|| format!("Failed to solve puzzle with {}.", solver.name))?;
    out.flush()?;

    Ok(())
}
