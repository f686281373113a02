//! Lookup of solvers by year and day, and reading of their puzzle input.
//!
//! Solvers of the same edition are grouped by year. A solver's name starts
//! with `d` and the zero-padded day, e.g. `d01_inverse_captcha`, and its input
//! is stored in `<input dir>/year<year>/d<day>.txt`.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{year2017, year2019, year2020, Error};

pub type SolveFn = fn(&str, &mut dyn Write) -> Result<(), Error>;

#[derive(Clone, Copy)]
pub struct Solver {
    pub name: &'static str,
    pub solve: SolveFn,
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver").field("name", &self.name).finish()
    }
}

static EDITIONS: [(&str, &[Solver]); 3] = [
    ("2017", year2017::SOLVERS),
    ("2019", year2019::SOLVERS),
    ("2020", year2020::SOLVERS),
];

pub fn parse_year(value: &str) -> Result<String, Error> {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
    if PATTERN.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(Error::InvalidYear(value.to_string()))
    }
}

/// Validates the day and pads it to two digits.
pub fn parse_day(value: &str) -> Result<String, Error> {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,2}$").unwrap());
    if PATTERN.is_match(value) {
        Ok(format!("{:0>2}", value))
    } else {
        Err(Error::InvalidDay(value.to_string()))
    }
}

pub fn solvers_of(year: &str) -> Result<&'static [Solver], Error> {
    EDITIONS
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, solvers)| *solvers)
        .ok_or_else(|| Error::UnknownYear(year.to_string()))
}

/// Finds the first solver of `year` whose name starts with `d<day>`, `day`
/// is expected to be zero-padded already.
pub fn find_solver(year: &str, day: &str) -> Result<&'static Solver, Error> {
    let prefix = format!("d{}", day);
    let solver = solvers_of(year)?
        .iter()
        .find(|s| s.name.starts_with(&prefix))
        .ok_or_else(|| Error::UnknownDay(year.to_string(), day.to_string()))?;
    info!("found solver {} for year {}, day {}", solver.name, year, day);

    Ok(solver)
}

pub fn input_path<P: AsRef<Path>>(input_dir: P, year: &str, day: &str) -> PathBuf {
    input_dir
        .as_ref()
        .join(format!("year{}", year))
        .join(format!("d{}.txt", day))
}

/// Reads a whole input file, which must be plain ASCII text.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    info!("reading puzzle input from {}", path.display());
    let bytes = fs::read(path).map_err(|e| Error::ReadInputError(path.to_path_buf(), e))?;
    if !bytes.is_ascii() {
        return Err(Error::NonAsciiInput(path.to_path_buf()));
    }

    String::from_utf8(bytes).map_err(|_| Error::NonAsciiInput(path.to_path_buf()))
}

#[test]
fn test_parse_year_and_day() {
    assert_eq!(parse_year("2019").unwrap(), "2019");
    assert!(parse_year("19").is_err());
    assert!(parse_year("20199").is_err());
    assert!(parse_year("２０１９").is_err());
    assert_eq!(parse_day("1").unwrap(), "01");
    assert_eq!(parse_day("25").unwrap(), "25");
    assert!(parse_day("123").is_err());
    assert!(parse_day("x").is_err());
}

#[test]
fn test_find_solver() {
    assert_eq!(find_solver("2019", "07").unwrap().name, "d07_amplification_circuit");
    assert_eq!(find_solver("2017", "01").unwrap().name, "d01_inverse_captcha");
    assert!(matches!(find_solver("2019", "25"), Err(Error::UnknownDay(_, _))));
    assert!(matches!(find_solver("1999", "01"), Err(Error::UnknownYear(_))));
}

#[test]
fn test_input_path() {
    assert_eq!(
        input_path("input", "2020", "05"),
        Path::new("input").join("year2020").join("d05.txt")
    );
}
