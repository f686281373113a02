use std::io::Write;

use itertools::Itertools;

use crate::{
    intcode::{self, Chain, BASIC},
    Error,
};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let program = intcode::parse_program(input)?;
    let in_sequence = max_signal(&program, &[0, 1, 2, 3, 4], |chain| chain.first_signal())?;
    writeln!(out, "{}", in_sequence)?;
    let in_loop = max_signal(&program, &[5, 6, 7, 8, 9], |chain| chain.last_signal())?;
    writeln!(out, "{}", in_loop)?;
    Ok(())
}

/// Highest signal among all orders of the phase settings.
fn max_signal<F>(program: &[i64], settings: &[i64], mut signal: F) -> Result<i64, Error>
where
    F: FnMut(&mut Chain<'_>) -> Result<Option<i64>, intcode::Error>,
{
    let mut max = None;
    for setup in settings.iter().copied().permutations(settings.len()) {
        let mut chain = Chain::new(program, &setup, &BASIC, 0);
        let value = signal(&mut chain)?.ok_or(Error::NoSolution(
            "amplifiers halted before producing a signal",
        ))?;
        max = max.max(Some(value));
    }

    max.ok_or(Error::NoSolution("no phase settings"))
}

#[test]
fn test_max_signal() {
    let program = intcode::parse_program(
        "3,23,3,24,1002,24,10,24,1002,23,-1,23,101,5,23,23,1,24,23,23,4,23,99,0,0",
    )
    .unwrap();
    let signal = max_signal(&program, &[0, 1, 2, 3, 4], |c| c.first_signal());
    assert_eq!(signal.unwrap(), 54321);

    let program = intcode::parse_program(
        "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,4,27,1001,28,-1,28,1005,28,6,99,0,0,5",
    )
    .unwrap();
    let signal = max_signal(&program, &[5, 6, 7, 8, 9], |c| c.last_signal());
    assert_eq!(signal.unwrap(), 139629729);
}
