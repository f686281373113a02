use std::{error, fmt::Display, io, path::PathBuf};

use clap::Parser;

/// Declares the solver modules of an edition and lists them in `SOLVERS`.
macro_rules! solvers {
    ($($module:ident),* $(,)?) => {
        $(pub mod $module;)*

        pub const SOLVERS: &[$crate::runner::Solver] = &[
            $($crate::runner::Solver {
                name: stringify!($module),
                solve: $module::solve,
            },)*
        ];
    };
}

pub mod grids;
pub mod helpers;
pub mod intcode;
pub mod parse;
pub mod runner;
pub mod year2017;
pub mod year2019;
pub mod year2020;

pub use runner::{find_solver, read_input, Solver};

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    ReadInputError(PathBuf, io::Error),
    NonAsciiInput(PathBuf),
    InvalidYear(String),
    InvalidDay(String),
    UnknownYear(String),
    UnknownDay(String, String),
    InvalidInput(String),
    InvalidInteger(String),
    NoSolution(&'static str),
    IntCodeError(intcode::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::ReadInputError(path, ioe) => {
                write!(f, "can't read input file({}): {}", path.display(), ioe)
            }
            Error::NonAsciiInput(path) => write!(
                f,
                "input file({}) contains non-ASCII characters",
                path.display()
            ),
            Error::InvalidYear(y) => write!(f, "invalid year {:?}, expect 4 digits", y),
            Error::InvalidDay(d) => write!(f, "invalid day {:?}, expect 1 or 2 digits", d),
            Error::UnknownYear(y) => write!(f, "no solvers for year {}", y),
            Error::UnknownDay(y, d) => write!(f, "can't find solver for year {}, day {}", y, d),
            Error::InvalidInput(s) => write!(f, "invalid puzzle input({})", s),
            Error::InvalidInteger(s) => write!(f, "integer {} is out of range", s),
            Error::NoSolution(s) => write!(f, "no solution: {}", s),
            Error::IntCodeError(e) => write!(f, "Intcode error: {}", e),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::IOError(value)
    }
}

impl From<intcode::Error> for Error {
    fn from(value: intcode::Error) -> Self {
        Error::IntCodeError(value)
    }
}

#[derive(Debug, Parser)]
#[command(about = "Run the solver for an Advent of Code puzzle")]
pub struct CliArgs {
    /// Edition of the Advent calendar, e.g. 2019
    #[arg(value_parser = runner::parse_year)]
    pub year: String,
    /// Day of the Advent calendar
    #[arg(value_parser = runner::parse_day)]
    pub day: String,
    /// Root directory of the puzzle inputs
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,
    /// Read the puzzle input from this file instead
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
