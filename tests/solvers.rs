use std::{fs, path::PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

static NOTES_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^={40}\n\n").unwrap());
static CASE_SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^-{40}\n\n").unwrap());
static INPUT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^------INPUT---------\n").unwrap());
static ANSWERS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^------ANSWERS-------\n").unwrap());

#[derive(Debug)]
struct Case {
    key: usize,
    label: String,
    data: String,
    expected: String,
}

fn cases_path(year: &str, day: &str, label: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cases")
        .join(format!("year{}", year))
        .join(format!("day{}_{}.txt", day, label))
}

fn get_cases(year: &str, day: &str, label: &str) -> Vec<Case> {
    let path = cases_path(year, day, label);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("can't read test cases({}): {}", path.display(), e));

    // Notes may come before the cases.
    let cases = NOTES_END.split(&text).last().unwrap();
    CASE_SEP
        .split(cases)
        .enumerate()
        .map(|(ind, text)| parse_case(text, ind + 1))
        .collect()
}

fn parse_case(text: &str, key: usize) -> Case {
    let first_line = text.lines().next().unwrap_or_default();
    let prefix = format!("CASE {}: ", key);
    let label = first_line
        .strip_prefix(&prefix)
        .unwrap_or_else(|| panic!("case {} has unexpected start {:?}", key, first_line));

    let parts = INPUT_HEADER.split(text).collect::<Vec<_>>();
    let [_, essence] = parts.as_slice() else {
        panic!("input header missing or repeated for case {}", key);
    };
    let values = ANSWERS_HEADER.split(essence).collect::<Vec<_>>();
    let [data, expected] = values.as_slice() else {
        panic!("answers header missing or repeated for case {}", key);
    };

    Case {
        key,
        label: label.to_string(),
        data: data.to_string(),
        expected: expected.to_string(),
    }
}

fn check_solver(year: &str, day: &str) {
    let solver = adventkit::find_solver(year, day).unwrap();
    let (_, label) = solver.name.split_once('_').unwrap();
    for case in get_cases(year, day, label) {
        let mut out = Vec::new();
        if let Err(e) = (solver.solve)(&case.data, &mut out) {
            panic!("case {} ({}) failed: {}", case.key, case.label, e);
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            case.expected,
            "case {} ({})",
            case.key,
            case.label
        );
    }
}

macro_rules! solver_tests {
    ($($name:ident: $year:literal, $day:literal;)*) => {
        $(
            #[test]
            fn $name() {
                check_solver($year, $day);
            }
        )*
    };
}

solver_tests! {
    year2017_day01: "2017", "01";
    year2017_day02: "2017", "02";
    year2017_day03: "2017", "03";
    year2017_day04: "2017", "04";
    year2019_day01: "2019", "01";
    year2019_day03: "2019", "03";
    year2019_day04: "2019", "04";
    year2019_day05: "2019", "05";
    year2019_day06: "2019", "06";
    year2019_day07: "2019", "07";
    year2019_day09: "2019", "09";
    year2020_day01: "2020", "01";
    year2020_day02: "2020", "02";
    year2020_day03: "2020", "03";
    year2020_day04: "2020", "04";
    year2020_day05: "2020", "05";
    year2020_day06: "2020", "06";
    year2020_day07: "2020", "07";
    year2020_day08: "2020", "08";
    year2020_day10: "2020", "10";
    year2020_day11: "2020", "11";
    year2020_day12: "2020", "12";
}

#[test]
fn test_parse_case() {
    let case = parse_case(
        "CASE 2: sample\nnote\n------INPUT---------\n1 2\n------ANSWERS-------\n3\n",
        2,
    );
    assert_eq!(case.label, "sample");
    assert_eq!(case.data, "1 2\n");
    assert_eq!(case.expected, "3\n");
}
