use std::io::Write;

use itertools::Itertools;

use crate::{parse, Error};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let rows = parse::int_rows(input)?;
    let mut checksum = 0;
    let mut quotient_sum = 0;
    for row in &rows {
        let (Some(min), Some(max)) = (row.iter().min(), row.iter().max()) else {
            return Err(Error::InvalidInput("empty spreadsheet row".to_string()));
        };
        checksum += max - min;
        quotient_sum += even_quotient(row).ok_or(Error::NoSolution(
            "no evenly divisible pair in a spreadsheet row",
        ))?;
    }

    writeln!(out, "{}", checksum)?;
    writeln!(out, "{}", quotient_sum)?;
    Ok(())
}

/// Quotient of the first ordered pair where one value divides the other.
fn even_quotient(row: &[i64]) -> Option<i64> {
    row.iter()
        .tuple_combinations()
        .flat_map(|(&a, &b)| [(a, b), (b, a)])
        .find(|&(a, b)| b != 0 && a % b == 0)
        .map(|(a, b)| a / b)
}

#[test]
fn test_even_quotient() {
    assert_eq!(even_quotient(&[5, 9, 2, 8]), Some(4));
    assert_eq!(even_quotient(&[9, 4, 7, 3]), Some(3));
    assert_eq!(even_quotient(&[3, 8, 6, 5]), Some(2));
    assert_eq!(even_quotient(&[3, 5, 7]), None);
}
