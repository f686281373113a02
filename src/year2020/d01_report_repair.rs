use std::io::Write;

use itertools::Itertools;

use crate::{helpers, parse, Error};

const TARGET_SUM: i64 = 2020;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let entries = parse::ints(input)?;
    for count in [2, 3] {
        let product = product_of_entries(&entries, count, TARGET_SUM)
            .ok_or(Error::NoSolution("no entries sum to 2020"))?;
        writeln!(out, "{}", product)?;
    }
    Ok(())
}

/// Product of the first `count` entries found summing to `target`.
fn product_of_entries(entries: &[i64], count: usize, target: i64) -> Option<i64> {
    entries
        .iter()
        .copied()
        .combinations(count)
        .find(|combo| combo.iter().sum::<i64>() == target)
        .map(helpers::product)
}

#[test]
fn test_product_of_entries() {
    let entries = [1721, 979, 366, 299, 675, 1456];
    assert_eq!(product_of_entries(&entries, 2, 2020), Some(514579));
    assert_eq!(product_of_entries(&entries, 3, 2020), Some(241861950));
    assert_eq!(product_of_entries(&entries, 2, 1), None);
}
