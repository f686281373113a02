use std::io::Write;

use crate::{parse, Error};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let masses = parse::ints(input)?;
    writeln!(out, "{}", masses.iter().map(|&m| fuel(m)).sum::<i64>())?;
    writeln!(out, "{}", masses.iter().map(|&m| total_fuel(m)).sum::<i64>())?;
    Ok(())
}

fn fuel(mass: i64) -> i64 {
    mass.div_euclid(3) - 2
}

/// Fuel for the mass, plus fuel for that fuel, until no more is needed.
fn total_fuel(mass: i64) -> i64 {
    let mut total = 0;
    let mut required = fuel(mass);
    while required > 0 {
        total += required;
        required = fuel(required);
    }

    total
}

#[test]
fn test_fuel() {
    assert_eq!(fuel(12), 2);
    assert_eq!(fuel(1969), 654);
    assert_eq!(total_fuel(14), 2);
    assert_eq!(total_fuel(1969), 966);
    assert_eq!(total_fuel(100756), 50346);
}
