use std::io::Write;

use itertools::Itertools;

use crate::{parse, Error};

const PREAMBLE_LENGTH: usize = 25;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let numbers = parse::ints(input)?;
    let invalid = find_invalid(&numbers, PREAMBLE_LENGTH)
        .ok_or(Error::NoSolution("every number is a sum of two previous ones"))?;
    writeln!(out, "{}", invalid)?;
    let weakness = weakness(&numbers, invalid)
        .ok_or(Error::NoSolution("no contiguous range sums to the invalid number"))?;
    writeln!(out, "{}", weakness)?;
    Ok(())
}

/// First number which isn't the sum of two different numbers among the
/// `preamble` numbers before it.
fn find_invalid(numbers: &[i64], preamble: usize) -> Option<i64> {
    numbers.windows(preamble + 1).find_map(|window| {
        let (&target, previous) = window.split_last()?;
        let valid = previous
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a + b == target && a != b);
        (!valid).then_some(target)
    })
}

/// Sum of the smallest and largest number in the first contiguous range of
/// at least 2 numbers which adds up to `target`, shorter ranges first.
fn weakness(numbers: &[i64], target: i64) -> Option<i64> {
    for size in 2..=numbers.len() {
        let mut window_sum = numbers[..size].iter().sum::<i64>();
        for low in 0.. {
            let high = low + size;
            if window_sum == target {
                let window = &numbers[low..high];
                return Some(window.iter().min()? + window.iter().max()?);
            }
            if high == numbers.len() {
                break;
            }
            window_sum += numbers[high] - numbers[low];
        }
    }

    None
}

#[test]
fn test_find_invalid_and_weakness() {
    let numbers = [
        35, 20, 15, 25, 47, 40, 62, 55, 65, 95, 102, 117, 150, 182, 127, 219, 299, 277, 309, 576,
    ];
    assert_eq!(find_invalid(&numbers, 5), Some(127));
    assert_eq!(weakness(&numbers, 127), Some(62));
    assert_eq!(find_invalid(&numbers[..5], 5), None);
    assert_eq!(weakness(&[1, 2], 4), None);
}
