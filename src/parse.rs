//! Extraction of integers and words from free-form puzzle text.
//!
//! A hyphen directly in front of digits reads as a minus sign, unless the
//! hyphen itself follows a digit (as in ranges like `1-3`), in which case it
//! only separates the two numbers. Integers out of the range of `i64` are
//! reported as errors.

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::{Match, Regex};

use crate::Error;

static INT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());
static STRING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z\d]+").unwrap());
static MIXED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(-?\d+)|([A-Za-z]+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Int(i64),
    Str(String),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Int(i) => write!(f, "{}", i),
            Token::Str(s) => write!(f, "{}", s),
        }
    }
}

impl Token {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Token::Int(i) => Some(*i),
            Token::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Int(_) => None,
            Token::Str(s) => Some(s.as_str()),
        }
    }
}

pub fn ints(text: &str) -> Result<Vec<i64>, Error> {
    INT_PATTERN
        .find_iter(text)
        .map(|m| int_from_match(text, m))
        .collect()
}

pub fn strings(text: &str) -> Vec<String> {
    STRING_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn mixed_values(text: &str) -> Result<Vec<Token>, Error> {
    MIXED_PATTERN
        .captures_iter(text)
        .filter_map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(m), _) => Some(int_from_match(text, m).map(Token::Int)),
            (None, Some(m)) => Some(Ok(Token::Str(m.as_str().to_string()))),
            (None, None) => None,
        })
        .collect()
}

pub fn int_rows(text: &str) -> Result<Vec<Vec<i64>>, Error> {
    text.lines().map(ints).collect()
}

pub fn string_rows(text: &str) -> Vec<Vec<String>> {
    text.lines().map(strings).collect()
}

pub fn mixed_rows(text: &str) -> Result<Vec<Vec<Token>>, Error> {
    text.lines().map(mixed_values).collect()
}

/// One table per line, the rows of a table are split by `row_sep`.
pub fn mixed_tables(text: &str, row_sep: &str) -> Result<Vec<Vec<Vec<Token>>>, Error> {
    text.lines()
        .map(|line| {
            line.split(row_sep)
                .map(mixed_values)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

fn int_from_match(text: &str, m: Match) -> Result<i64, Error> {
    let digits = m.as_str();
    let follows_digit = text[..m.start()]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit());
    let digits = match digits.strip_prefix('-') {
        Some(unsigned) if follows_digit => unsigned,
        _ => digits,
    };

    digits
        .parse::<i64>()
        .map_err(|_| Error::InvalidInteger(digits.to_string()))
}

#[test]
fn test_ints_hyphen_handling() {
    assert_eq!(ints("-3 T-4,5-10").unwrap(), vec![-3, -4, 5, 10]);
    assert_eq!(ints("1-3 a: abcde").unwrap(), vec![1, 3]);
    assert_eq!(ints("jmp -4\nacc +3").unwrap(), vec![-4, 3]);
    assert!(ints("no digits here").unwrap().is_empty());
}

#[test]
fn test_strings() {
    assert_eq!(strings("COM)B"), vec!["COM", "B"]);
    assert_eq!(strings("206938-679128"), vec!["206938", "679128"]);
}

#[test]
fn test_mixed_values() {
    assert_eq!(
        mixed_values("2-9 c: ccccccccc").unwrap(),
        vec![
            Token::Int(2),
            Token::Int(9),
            Token::Str("c".to_string()),
            Token::Str("ccccccccc".to_string())
        ]
    );
    assert_eq!(
        mixed_values("F10").unwrap(),
        vec![Token::Str("F".to_string()), Token::Int(10)]
    );
    assert_eq!(
        mixed_values("a-5").unwrap(),
        vec![Token::Str("a".to_string()), Token::Int(-5)]
    );
}

#[test]
fn test_rows_and_tables() {
    assert_eq!(int_rows("5 1 9 5\n7 5 3\n").unwrap(), vec![vec![5, 1, 9, 5], vec![7, 5, 3]]);
    let tables = mixed_tables("R8,U5\nL5", ",").unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(
        tables[0],
        vec![
            vec![Token::Str("R".to_string()), Token::Int(8)],
            vec![Token::Str("U".to_string()), Token::Int(5)]
        ]
    );
    assert_eq!(tables[1][0][1].as_int(), Some(5));
    assert_eq!(tables[1][0][0].as_str(), Some("L"));
}

#[test]
fn test_out_of_range_integer() {
    assert!(matches!(
        ints("99999999999999999999 5"),
        Err(Error::InvalidInteger(digits)) if digits == "99999999999999999999"
    ));
    assert!(mixed_values("x -99999999999999999999").is_err());
    assert!(int_rows("1 2\n3 99999999999999999999").is_err());
    assert_eq!(ints("-9223372036854775808").unwrap(), vec![i64::MIN]);
}
