use std::{collections::HashMap, io::Write};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

const TARGET_COLOR: &str = "shiny gold";

/// Contents of each bag color as `(count, color)`.
type Rules<'a> = HashMap<&'a str, Vec<(u64, &'a str)>>;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let rules = parse_rules(input)?;
    writeln!(out, "{}", count_containers_of(TARGET_COLOR, &rules)?)?;
    writeln!(out, "{}", count_bags_in(TARGET_COLOR, &rules, &mut HashMap::new())?)?;
    Ok(())
}

fn parse_rules(input: &str) -> Result<Rules<'_>, Error> {
    static CONTENT_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(\d+) ([^,]+) bag").unwrap());
    input
        .lines()
        .map(|line| -> Result<_, Error> {
            let (color, contents) = line.split_once(" bags contain ").ok_or_else(|| {
                Error::InvalidInput(format!("malformed rule {:?}", line))
            })?;
            let contents = CONTENT_PATTERN
                .captures_iter(contents)
                .map(|caps| {
                    let count = caps[1].parse::<u64>().map_err(|_| {
                        Error::InvalidInput(format!("bag count too large in {:?}", line))
                    })?;
                    let inner = caps.get(2).map_or("", |m| m.as_str());
                    Ok((count, inner))
                })
                .collect::<Result<Vec<_>, Error>>()?;
            Ok((color, contents))
        })
        .collect()
}

fn contents_of<'a, 'r>(color: &str, rules: &'r Rules<'a>) -> Result<&'r [(u64, &'a str)], Error> {
    rules
        .get(color)
        .map(Vec::as_slice)
        .ok_or_else(|| Error::InvalidInput(format!("no rule for {} bags", color)))
}

/// Number of colors which eventually contain a `target` bag.
fn count_containers_of(target: &str, rules: &Rules<'_>) -> Result<usize, Error> {
    fn contains<'a>(
        color: &'a str,
        target: &str,
        rules: &Rules<'a>,
        memo: &mut HashMap<&'a str, bool>,
    ) -> Result<bool, Error> {
        if let Some(&known) = memo.get(color) {
            return Ok(known);
        }

        let mut found = false;
        for &(_, inner) in contents_of(color, rules)? {
            if inner == target || contains(inner, target, rules, memo)? {
                found = true;
                break;
            }
        }
        memo.insert(color, found);
        Ok(found)
    }

    let mut memo = HashMap::new();
    let mut count = 0;
    for &color in rules.keys() {
        if contains(color, target, rules, &mut memo)? {
            count += 1;
        }
    }

    Ok(count)
}

/// Number of bags inside one bag of `color`.
fn count_bags_in<'a>(
    color: &'a str,
    rules: &Rules<'a>,
    memo: &mut HashMap<&'a str, u64>,
) -> Result<u64, Error> {
    if let Some(&known) = memo.get(color) {
        return Ok(known);
    }

    let mut total = 0;
    for &(count, inner) in contents_of(color, rules)? {
        total += count * (1 + count_bags_in(inner, rules, memo)?);
    }
    memo.insert(color, total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

    #[test]
    fn test_parse_rules() {
        let rules = parse_rules(EXAMPLE).unwrap();
        assert_eq!(rules.len(), 9);
        assert_eq!(rules["muted yellow"], vec![(2, "shiny gold"), (9, "faded blue")]);
        assert!(rules["faded blue"].is_empty());
    }

    #[test]
    fn test_counts() {
        let rules = parse_rules(EXAMPLE).unwrap();
        assert_eq!(count_containers_of("shiny gold", &rules).unwrap(), 4);
        assert_eq!(count_bags_in("shiny gold", &rules, &mut HashMap::new()).unwrap(), 32);
    }

    #[test]
    fn test_missing_rule() {
        let rules = parse_rules("red bags contain 1 blue bag.").unwrap();
        assert!(count_bags_in("red", &rules, &mut HashMap::new()).is_err());
    }
}
