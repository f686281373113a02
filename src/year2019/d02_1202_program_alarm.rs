use std::io::Write;

use log::debug;

use crate::{
    intcode::{self, Session, BASIC},
    Error,
};

const TARGET_OUTPUT: i64 = 19690720;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let program = intcode::parse_program(input)?;
    writeln!(out, "{}", output(&program, 12, 2)?)?;
    writeln!(out, "{}", find_input(&program, TARGET_OUTPUT)?)?;
    Ok(())
}

/// Value left at address 0 after running with the given noun and verb.
fn output(program: &[i64], noun: i64, verb: i64) -> Result<i64, Error> {
    let mut session = Session::new(program, &[], &BASIC);
    session.memory_mut().write(1, noun);
    session.memory_mut().write(2, verb);
    session.run_to_halt()?;

    Ok(session.memory().read(0))
}

fn find_input(program: &[i64], target: i64) -> Result<i64, Error> {
    for noun in 0..100 {
        for verb in 0..100 {
            if output(program, noun, verb)? == target {
                debug!("found noun {} and verb {}", noun, verb);
                return Ok(100 * noun + verb);
            }
        }
    }

    Err(Error::NoSolution("no noun and verb produce the target output"))
}

#[test]
fn test_program_output() {
    let program = intcode::parse_program("1,9,10,3,2,3,11,0,99,30,40,50").unwrap();
    assert_eq!(output(&program, 9, 10).unwrap(), 3500);

    let program = intcode::parse_program("1,0,0,0,99").unwrap();
    assert_eq!(find_input(&program, 4).unwrap(), 202);
}
