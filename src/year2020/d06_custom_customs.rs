use std::{collections::HashSet, io::Write};

use crate::Error;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let groups = input
        .split("\n\n")
        .map(|group| group.lines().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    writeln!(out, "{}", groups.iter().map(|g| count_any_yes(g)).sum::<usize>())?;
    writeln!(out, "{}", groups.iter().map(|g| count_all_yes(g)).sum::<usize>())?;
    Ok(())
}

/// Questions anyone in the group answered yes to.
fn count_any_yes(responses: &[&str]) -> usize {
    responses
        .iter()
        .flat_map(|r| r.chars())
        .collect::<HashSet<_>>()
        .len()
}

/// Questions everyone in the group answered yes to.
fn count_all_yes(responses: &[&str]) -> usize {
    ('a'..='z')
        .filter(|&q| responses.iter().all(|r| r.contains(q)))
        .count()
}

#[test]
fn test_count_yes() {
    assert_eq!(count_any_yes(&["abcx", "abcy", "abcz"]), 6);
    assert_eq!(count_all_yes(&["abcx", "abcy", "abcz"]), 3);
    assert_eq!(count_any_yes(&["a", "b", "c"]), 3);
    assert_eq!(count_all_yes(&["a", "b", "c"]), 0);
    assert_eq!(count_all_yes(&["ab", "ac"]), 1);
}
