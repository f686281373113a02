use std::{collections::HashMap, io::Write};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];
const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let mut complete_count = 0;
    let mut valid_count = 0;
    for passport in input.split("\n\n") {
        let fields = parse_fields(passport)?;
        if REQUIRED_FIELDS.iter().all(|key| fields.contains_key(key)) {
            complete_count += 1;
            if all_valid(&fields) {
                valid_count += 1;
            }
        }
    }

    writeln!(out, "{}", complete_count)?;
    writeln!(out, "{}", valid_count)?;
    Ok(())
}

fn parse_fields(passport: &str) -> Result<HashMap<&str, &str>, Error> {
    passport
        .split_whitespace()
        .map(|item| {
            item.split_once(':')
                .filter(|(_, value)| !value.contains(':'))
                .ok_or_else(|| Error::InvalidInput(format!("malformed passport field {:?}", item)))
        })
        .collect()
}

fn year_within(value: &str, low: u32, high: u32) -> bool {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
    PATTERN.is_match(value)
        && value
            .parse::<u32>()
            .map_or(false, |year| (low..=high).contains(&year))
}

fn is_valid_height(value: &str) -> bool {
    let within = |number: &str, low: u32, high: u32| {
        !number.is_empty()
            && number.bytes().all(|b| b.is_ascii_digit())
            && number.parse::<u32>().map_or(false, |n| (low..=high).contains(&n))
    };

    if let Some(number) = value.strip_suffix("in") {
        within(number, 59, 76)
    } else if let Some(number) = value.strip_suffix("cm") {
        within(number, 150, 193)
    } else {
        false
    }
}

/// Every required field holds a valid value, extra fields are ignored.
fn all_valid(fields: &HashMap<&str, &str>) -> bool {
    static HAIR_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-f]{6}$").unwrap());
    static PASSPORT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").unwrap());
    let field = |key: &str| fields.get(key).copied().unwrap_or_default();

    year_within(field("byr"), 1920, 2002)
        && year_within(field("iyr"), 2010, 2020)
        && year_within(field("eyr"), 2020, 2030)
        && is_valid_height(field("hgt"))
        && HAIR_COLOR.is_match(field("hcl"))
        && EYE_COLORS.contains(&field("ecl"))
        && PASSPORT_ID.is_match(field("pid"))
}

#[test]
fn test_field_rules() {
    assert!(year_within("2002", 1920, 2002));
    assert!(!year_within("2003", 1920, 2002));
    assert!(!year_within("02002", 1920, 2002));
    assert!(is_valid_height("60in"));
    assert!(is_valid_height("190cm"));
    assert!(!is_valid_height("190in"));
    assert!(!is_valid_height("190"));
    assert!(!is_valid_height("cm"));
}

#[test]
fn test_parse_fields() {
    let fields = parse_fields("ecl:gry pid:860033327\nbyr:1937").unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["pid"], "860033327");
    assert!(parse_fields("ecl:gry:x").is_err());
    assert!(parse_fields("ecl").is_err());
}
