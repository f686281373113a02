use std::io::Write;

use crate::{
    intcode::{self, Session, RELATIVE},
    Error,
};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let program = intcode::parse_program(input)?;
    for mode in [1, 2] {
        let keycode = Session::new(&program, &[mode], &RELATIVE)
            .next_output()?
            .ok_or(Error::NoSolution("BOOST program produced no output"))?;
        writeln!(out, "{}", keycode)?;
    }
    Ok(())
}
