use std::io::Write;

use itertools::Itertools;

use crate::{parse, Error};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let bounds = parse::strings(input);
    let [lower, upper] = bounds.as_slice() else {
        return Err(Error::InvalidInput(format!(
            "expect a range of 2 numbers, got {:?}",
            bounds
        )));
    };
    let lower = lower.chars().collect::<Vec<_>>();
    let upper = upper.chars().collect::<Vec<_>>();

    // Digits never decrease, so every candidate is a multiset of 6 digits.
    let candidates = ('0'..='9')
        .combinations_with_replacement(6)
        .filter(|password| lower <= *password && *password <= upper)
        .map(|password| group_sizes(&password))
        .collect::<Vec<_>>();

    writeln!(
        out,
        "{}",
        candidates
            .iter()
            .filter(|sizes| sizes.iter().any(|&s| s >= 2))
            .count()
    )?;
    writeln!(
        out,
        "{}",
        candidates
            .iter()
            .filter(|sizes| sizes.contains(&2))
            .count()
    )?;
    Ok(())
}

/// Sizes of the runs of equal digits.
fn group_sizes(password: &[char]) -> Vec<usize> {
    password
        .iter()
        .dedup_with_count()
        .map(|(count, _)| count)
        .collect()
}

#[test]
fn test_group_sizes() {
    assert_eq!(group_sizes(&['1', '1', '1', '1', '2', '2']), vec![4, 2]);
    assert_eq!(group_sizes(&['1', '2', '3', '4', '4', '4']), vec![1, 1, 1, 3]);
}
