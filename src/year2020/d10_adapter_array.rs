use std::{collections::HashMap, io::Write};

use crate::{parse, Error};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let joltages = joltages(parse::ints(input)?)
        .ok_or_else(|| Error::InvalidInput("no adapters".to_string()))?;
    let diffs = [0]
        .iter()
        .chain(&joltages)
        .zip(&joltages)
        .map(|(a, b)| b - a)
        .collect::<Vec<_>>();
    let count = |diff: i64| diffs.iter().filter(|&&d| d == diff).count();

    writeln!(out, "{}", count(1) * count(3))?;
    writeln!(out, "{}", count_arrangements(&joltages))?;
    Ok(())
}

/// Sorted adapters followed by the device, rated 3 above the largest one.
fn joltages(mut adapters: Vec<i64>) -> Option<Vec<i64>> {
    adapters.sort_unstable();
    let device = adapters.last()? + 3;
    adapters.push(device);
    Some(adapters)
}

/// Ways to chain adapters from the outlet (0 jolts) up to the last joltage.
fn count_arrangements(joltages: &[i64]) -> u64 {
    let mut counts = HashMap::from([(0, 1)]);
    let mut last = 1;
    for &n in joltages {
        last = (1..=3).map(|d| counts.get(&(n - d)).copied().unwrap_or(0)).sum();
        counts.insert(n, last);
    }

    last
}

#[test]
fn test_count_arrangements() {
    let chain = joltages(vec![16, 10, 15, 5, 1, 11, 7, 19, 6, 12, 4]).unwrap();
    assert_eq!(chain.last(), Some(&22));
    assert_eq!(count_arrangements(&chain), 8);
    assert_eq!(joltages(Vec::new()), None);
}
