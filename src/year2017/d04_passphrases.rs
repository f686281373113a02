use std::{collections::HashSet, io::Write};

use crate::{parse, Error};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let passphrases = parse::string_rows(input);
    let valid_count = passphrases.iter().filter(|p| all_unique(p)).count();
    let strict_count = passphrases
        .iter()
        .filter(|p| {
            let sorted = p
                .iter()
                .map(|word| {
                    let mut chars = word.chars().collect::<Vec<_>>();
                    chars.sort_unstable();
                    chars
                })
                .collect::<Vec<_>>();
            all_unique(&sorted)
        })
        .count();

    writeln!(out, "{}", valid_count)?;
    writeln!(out, "{}", strict_count)?;
    Ok(())
}

fn all_unique<T: Eq + std::hash::Hash>(words: &[T]) -> bool {
    let mut seen = HashSet::new();
    words.iter().all(|w| seen.insert(w))
}

#[test]
fn test_all_unique() {
    assert!(all_unique(&["aa", "bb", "cc", "dd", "ee"]));
    assert!(!all_unique(&["aa", "bb", "cc", "dd", "aa"]));
    assert!(all_unique(&["aa", "bb", "cc", "dd", "aaa"]));
}
