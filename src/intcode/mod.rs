//! Intcode machine: programs are lists of integers sharing one memory for
//! code and data.

pub mod chain;
pub mod com;
pub mod inst;

use std::{error, fmt::Display};

pub use chain::Chain;
pub use com::{Memory, Session, Suspension};
pub use inst::{InstructionSet, BASIC, RELATIVE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyProgram,
    ParseIntError(String),
    NegativeInstruction(i64, usize),
    InvalidOpcode(i64, usize),
    UnknownParameterMode(u8),
    NegativeAddress(i64),
    InvalidJumpTarget(i64),
    NotEnoughInput,
    OutputWithPendingInput(i64, i64),
    InputAlreadyPending(i64, i64),
    ChainStalled(usize),
    Overflow(i64, i64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyProgram => write!(f, "Get empty program text"),
            Error::ParseIntError(s) => write!(f, "Failed to parse integer from string({})", s),
            Error::NegativeInstruction(v, p) => {
                write!(f, "Negative instruction value({}) found @ {}", v, p)
            }
            Error::InvalidOpcode(v, p) => write!(f, "Invalid operation code({}) found @ {}", v, p),
            Error::UnknownParameterMode(m) => write!(f, "Unknown parameter mode({}) found", m),
            Error::NegativeAddress(a) => write!(f, "Negative memory address({})", a),
            Error::InvalidJumpTarget(t) => write!(f, "Invalid jump target({})", t),
            Error::NotEnoughInput => write!(f, "Not enough input in execution, inputs exhausted"),
            Error::OutputWithPendingInput(o, i) => write!(
                f,
                "Trying to output({}) while provided input({}) isn't consumed",
                o, i
            ),
            Error::InputAlreadyPending(pending, new) => write!(
                f,
                "Can't provide input({}), input({}) is still pending",
                new, pending
            ),
            Error::ChainStalled(ind) => {
                write!(f, "Session #{} in chain blocked by requiring input", ind)
            }
            Error::Overflow(a, b) => write!(f, "Integer overflow combining {} and {}", a, b),
        }
    }
}

impl error::Error for Error {}

/// Parses comma separated program text.
pub fn parse_program(text: &str) -> Result<Vec<i64>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyProgram);
    }

    text.split(',')
        .map(|s| {
            s.trim()
                .parse::<i64>()
                .map_err(|_| Error::ParseIntError(s.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_single(image: &[i64]) -> Session<'static> {
        let mut session = Session::new(image, &[], &BASIC);
        assert_eq!(session.step(), Ok(None));
        session
    }

    #[test]
    fn test_parse_program() {
        assert_eq!(parse_program("1,0,0,3,99\n"), Ok(vec![1, 0, 0, 3, 99]));
        assert_eq!(parse_program("3,-1"), Ok(vec![3, -1]));
        assert_eq!(parse_program("  \n"), Err(Error::EmptyProgram));
        assert!(matches!(parse_program("1,x"), Err(Error::ParseIntError(_))));
    }

    #[test]
    fn test_arithmetic_instructions() {
        let add = run_single(&[1, 5, 6, 7, 99, 20, 22, 0]);
        assert_eq!(add.memory().read(7), 42);
        assert_eq!(add.ip(), 4);

        let mul = run_single(&[1102, 6, 7, 5, 99, 0]);
        assert_eq!(mul.memory().read(5), 42);
        assert_eq!(mul.ip(), 4);

        let less = run_single(&[1107, 3, 4, 5, 99, 7]);
        assert_eq!(less.memory().read(5), 1);
        let not_less = run_single(&[1107, 4, 4, 5, 99, 7]);
        assert_eq!(not_less.memory().read(5), 0);

        let equal = run_single(&[1108, 4, 4, 5, 99, 7]);
        assert_eq!(equal.memory().read(5), 1);
        assert_eq!(equal.ip(), 4);
    }

    #[test]
    fn test_jump_instructions() {
        assert_eq!(run_single(&[1105, 1, 7, 99]).ip(), 7);
        assert_eq!(run_single(&[1105, 0, 7, 99]).ip(), 3);
        assert_eq!(run_single(&[1106, 0, 9, 99]).ip(), 9);
        assert_eq!(run_single(&[1106, 5, 9, 99]).ip(), 3);

        let mut session = Session::new(&[1105, 1, -1], &[], &BASIC);
        assert_eq!(session.step(), Err(Error::InvalidJumpTarget(-1)));
    }

    #[test]
    fn test_input_and_output_instructions() {
        let mut session = Session::new(&[3, 3, 99, 0], &[17], &BASIC);
        assert_eq!(session.step(), Ok(None));
        assert_eq!(session.memory().read(3), 17);
        assert_eq!(session.ip(), 2);

        let mut session = Session::new(&[4, 2, 99], &[], &BASIC);
        assert_eq!(session.step(), Ok(Some(Suspension::Output(99))));
        assert_eq!(session.ip(), 2);
    }

    #[test]
    fn test_halt_only_program() {
        let mut session = Session::new(&[99], &[], &BASIC);
        assert_eq!(session.run_to_halt(), Ok(vec![]));
        assert!(session.is_halted());
        assert_eq!(session.memory().image(), &[99]);
        assert_eq!(session.resume(), Ok(Suspension::Halt));
    }

    #[test]
    fn test_memory_beyond_image() {
        let mut session = Session::new(&[1101, 2, 3, 10, 99], &[], &BASIC);
        assert_eq!(session.run_to_halt(), Ok(vec![]));
        assert_eq!(session.memory().read(10), 5);
        assert_eq!(session.memory().read(1000), 0);
        assert_eq!(session.memory().image(), &[1101, 2, 3, 10, 99]);
        assert_eq!(session.memory().beyond_image(), 1);
    }

    #[test]
    fn test_far_address() {
        let far = 1 << 40;
        let mut session = Session::new(&[1101, 1, 1, far, 4, far, 99], &[], &RELATIVE);
        assert_eq!(session.run_to_halt(), Ok(vec![2]));
        assert_eq!(session.memory().read(1 << 40), 2);
        assert_eq!(session.memory().read((1 << 40) + 1), 0);
        assert_eq!(session.memory().image().len(), 7);
    }

    #[test]
    fn test_arithmetic_overflow() {
        let mut session = Session::new(&[1101, i64::MAX, 1, 0, 99], &[], &BASIC);
        assert_eq!(session.run_to_halt(), Err(Error::Overflow(i64::MAX, 1)));

        let mut session = Session::new(&[1102, i64::MIN, 2, 0, 99], &[], &BASIC);
        assert_eq!(session.run_to_halt(), Err(Error::Overflow(i64::MIN, 2)));

        let mut session = Session::new(&[109, i64::MAX, 109, 1, 99], &[], &RELATIVE);
        assert_eq!(session.run_to_halt(), Err(Error::Overflow(i64::MAX, 1)));

        let mut session = Session::new(&[109, i64::MAX, 204, 1, 99], &[], &RELATIVE);
        assert_eq!(session.run_to_halt(), Err(Error::Overflow(i64::MAX, 1)));
    }

    #[test]
    fn test_decode_errors() {
        let mut session = Session::new(&[-1], &[], &BASIC);
        assert_eq!(session.step(), Err(Error::NegativeInstruction(-1, 0)));

        let mut session = Session::new(&[42], &[], &BASIC);
        assert_eq!(session.step(), Err(Error::InvalidOpcode(42, 0)));

        let mut session = Session::new(&[301, 0, 0, 0, 99], &[], &BASIC);
        assert_eq!(session.step(), Err(Error::UnknownParameterMode(3)));

        let mut session = Session::new(&[9, 1, 99], &[], &BASIC);
        assert_eq!(session.step(), Err(Error::InvalidOpcode(9, 0)));
    }

    #[test]
    fn test_compare_with_eight() {
        let image = parse_program("3,9,8,9,10,9,4,9,99,-1,8").unwrap();
        for (input, expect) in [(8, 1), (7, 0), (9, 0)] {
            let mut session = Session::new(&image, &[input], &BASIC);
            assert_eq!(session.run_to_halt(), Ok(vec![expect]));
        }

        let image = parse_program(
            "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
             1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,\
             999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99",
        )
        .unwrap();
        for (input, expect) in [(5, 999), (8, 1000), (11, 1001)] {
            let mut session = Session::new(&image, &[input], &BASIC);
            assert_eq!(session.run_to_halt(), Ok(vec![expect]));
        }
    }

    #[test]
    fn test_suspend_for_input() {
        let image = [3, 7, 1001, 7, 1, 7, 4, 7, 99];
        let mut session = Session::new(&image, &[], &BASIC);
        assert_eq!(session.resume(), Ok(Suspension::Input));
        assert_eq!(session.ip(), 0);
        assert_eq!(session.resume(), Ok(Suspension::Input));

        session.provide(41).unwrap();
        assert_eq!(session.resume(), Ok(Suspension::Output(42)));
        assert_eq!(session.resume(), Ok(Suspension::Halt));
    }

    #[test]
    fn test_output_with_pending_input_fails() {
        let mut session = Session::new(&[104, 1, 99], &[], &BASIC);
        session.provide(5).unwrap();
        assert_eq!(session.resume(), Err(Error::OutputWithPendingInput(1, 5)));

        let mut session = Session::new(&[3, 0, 99], &[], &BASIC);
        session.provide(1).unwrap();
        assert_eq!(session.provide(2), Err(Error::InputAlreadyPending(1, 2)));
    }

    #[test]
    fn test_running_out_of_input() {
        let mut session = Session::new(&[3, 0, 3, 0, 99], &[1], &BASIC);
        assert_eq!(session.run_to_halt(), Err(Error::NotEnoughInput));
    }

    #[test]
    fn test_relative_base() {
        let quine = parse_program(
            "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99",
        )
        .unwrap();
        let mut session = Session::new(&quine, &[], &RELATIVE);
        assert_eq!(session.run_to_halt(), Ok(quine.clone()));

        let mut session = Session::new(&[109, 19, 99], &[], &RELATIVE);
        session.resume().unwrap();
        assert_eq!(session.relative_base(), 19);

        let mut session = Session::new(&[104, 1125899906842624, 99], &[], &RELATIVE);
        assert_eq!(session.next_output(), Ok(Some(1125899906842624)));

        let mut session = Session::new(&[1102, 34915192, 34915192, 7, 4, 7, 99, 0], &[], &RELATIVE);
        let output = session.next_output().unwrap().unwrap();
        assert_eq!(output.to_string().len(), 16);

        let mut session = Session::new(&[109, -5, 204, 0, 99], &[], &RELATIVE);
        assert_eq!(session.resume(), Err(Error::NegativeAddress(-5)));
    }

    #[test]
    fn test_custom_opcode_handler() {
        fn double(
            machine: &mut com::Machine<'_>,
            pointer: usize,
            modes: inst::Modes,
        ) -> Result<usize, Error> {
            let addr = machine.param_addr(pointer, modes.nth(0))?;
            machine.write(addr, machine.read(addr) * 2);
            Ok(pointer + 1)
        }

        let inst_set = InstructionSet::basic().with_opcode(42, double);
        let mut session = Session::new(&[42, 4, 4, 4, 21], &[], &inst_set);
        assert_eq!(session.next_output(), Ok(Some(42)));
    }

    #[test]
    fn test_handler_replaces_builtin_opcode() {
        fn subtract(
            machine: &mut com::Machine<'_>,
            pointer: usize,
            modes: inst::Modes,
        ) -> Result<usize, Error> {
            let minuend = machine.param(pointer, modes.nth(0))?;
            let subtrahend = machine.param(pointer + 1, modes.nth(1))?;
            let dst = machine.param_addr(pointer + 2, modes.nth(2))?;
            machine.write(dst, minuend - subtrahend);
            Ok(pointer + 3)
        }

        let image = [1, 5, 6, 7, 99, 20, 22, 0];
        assert_eq!(run_single(&image).memory().read(7), 42);

        let inst_set = InstructionSet::basic().with_opcode(1, subtract);
        let mut session = Session::new(&image, &[], &inst_set);
        assert_eq!(session.run_to_halt(), Ok(vec![]));
        assert_eq!(session.memory().read(7), -2);
    }

    #[test]
    fn test_handler_replaces_builtin_mode() {
        fn as_immediate(_: &com::Machine<'_>, pointer: usize) -> Result<usize, Error> {
            Ok(pointer)
        }

        let image = [4, 42, 99];
        let mut session = Session::new(&image, &[], &BASIC);
        assert_eq!(session.run_to_halt(), Ok(vec![0]));

        let inst_set = InstructionSet::basic().with_mode(0, as_immediate);
        let mut session = Session::new(&image, &[], &inst_set);
        assert_eq!(session.run_to_halt(), Ok(vec![42]));
    }

    #[test]
    fn test_chain_passes_signal_around() {
        let image = [3, 9, 1001, 9, 1, 9, 4, 9, 99, 0];
        let sessions = vec![
            Session::new(&image, &[], &BASIC),
            Session::new(&image, &[], &BASIC),
        ];
        let mut chain = Chain::from_sessions(sessions, 0);
        assert_eq!(chain.last_signal(), Ok(Some(2)));
        assert_eq!(chain.next_signal(), Ok(None));
    }

    #[test]
    fn test_chain_of_amplifiers() {
        let image = parse_program("3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0").unwrap();
        let mut chain = Chain::new(&image, &[4, 3, 2, 1, 0], &BASIC, 0);
        assert_eq!(chain.first_signal(), Ok(Some(43210)));

        let image = parse_program(
            "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,\
             27,4,27,1001,28,-1,28,1005,28,6,99,0,0,5",
        )
        .unwrap();
        let mut chain = Chain::new(&image, &[9, 8, 7, 6, 5], &BASIC, 0);
        assert_eq!(chain.last_signal(), Ok(Some(139629729)));
    }
}
