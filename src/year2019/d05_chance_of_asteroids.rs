use std::io::Write;

use crate::{
    helpers,
    intcode::{self, Session, BASIC},
    Error,
};

const AIR_CONDITIONER_ID: i64 = 1;
const THERMAL_RADIATOR_ID: i64 = 5;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let program = intcode::parse_program(input)?;

    // Outputs before the last one are test results.
    let diagnostics = Session::new(&program, &[AIR_CONDITIONER_ID], &BASIC).run_to_halt()?;
    let code = helpers::last(diagnostics).ok_or(Error::NoSolution("no diagnostic code"))?;
    writeln!(out, "{}", code)?;

    let code = Session::new(&program, &[THERMAL_RADIATOR_ID], &BASIC)
        .next_output()?
        .ok_or(Error::NoSolution("no diagnostic code"))?;
    writeln!(out, "{}", code)?;
    Ok(())
}
