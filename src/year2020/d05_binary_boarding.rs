use std::{collections::HashSet, io::Write};

use crate::Error;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let seat_ids = input
        .lines()
        .map(seat_id)
        .collect::<Result<HashSet<_>, _>>()?;
    let max_id = seat_ids
        .iter()
        .max()
        .copied()
        .ok_or_else(|| Error::InvalidInput("no boarding passes".to_string()))?;
    writeln!(out, "{}", max_id)?;
    writeln!(out, "{}", missing_seat(&seat_ids))?;
    Ok(())
}

/// Boarding passes are seat ids in binary, `B` and `R` are the 1 bits.
fn seat_id(pass: &str) -> Result<u32, Error> {
    let binary = pass
        .chars()
        .map(|c| match c {
            'F' | 'L' => Some('0'),
            'B' | 'R' => Some('1'),
            _ => None,
        })
        .collect::<Option<String>>()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidInput(format!("malformed boarding pass {:?}", pass)))?;

    u32::from_str_radix(&binary, 2)
        .map_err(|_| Error::InvalidInput(format!("boarding pass {:?} too long", pass)))
}

/// First free id above the lowest taken one.
fn missing_seat(seat_ids: &HashSet<u32>) -> u32 {
    let mut id = seat_ids.iter().min().copied().unwrap_or(0);
    while seat_ids.contains(&id) {
        id += 1;
    }

    id
}

#[test]
fn test_seat_id() {
    assert_eq!(seat_id("FBFBBFFRLR").unwrap(), 357);
    assert_eq!(seat_id("BFFFBBFRRR").unwrap(), 567);
    assert_eq!(seat_id("FFFBBBFRRR").unwrap(), 119);
    assert_eq!(seat_id("BBFFBBFRLL").unwrap(), 820);
    assert!(seat_id("FBFXBFFRLR").is_err());
}

#[test]
fn test_missing_seat() {
    assert_eq!(missing_seat(&HashSet::from([3, 4, 6, 7])), 5);
    assert_eq!(missing_seat(&HashSet::from([119, 357, 567, 820])), 120);
}
