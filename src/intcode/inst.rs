use std::{collections::HashMap, fmt::Debug};

use int_enum::IntEnum;
use once_cell::sync::Lazy;

use super::{
    com::{to_addr, Machine},
    Error,
};

/// Opcodes understood by the basic machine without any registered handler.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntEnum)]
pub enum Opcode {
    Add = 1,
    Multiply = 2,
    Input = 3,
    Output = 4,
    JumpIfTrue = 5,
    JumpIfFalse = 6,
    LessThan = 7,
    Equals = 8,
    Halt = 99,
}

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IntEnum)]
pub enum ParameterMode {
    #[default]
    Position = 0,
    Immediate = 1,
}

pub const ADJUST_RELATIVE_BASE: u8 = 9;
pub const RELATIVE_MODE: u8 = 2;

/// Mode digits of an instruction, the first parameter's mode is the lowest digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modes(i64);

impl Modes {
    pub fn new(digits: i64) -> Self {
        Self(digits)
    }

    pub fn nth(&self, param_ind: u32) -> u8 {
        let digit = 10i64
            .checked_pow(param_ind)
            .map_or(0, |place| (self.0 / place).rem_euclid(10));
        // rem_euclid keeps the digit in 0..10.
        digit as u8
    }
}

/// Executes a whole instruction. It gets the pointer to the instruction's first
/// parameter and returns the next instruction pointer.
pub type OpcodeHandler = fn(&mut Machine<'_>, usize, Modes) -> Result<usize, Error>;
/// Resolves the address a parameter refers to, given the pointer to the parameter.
pub type ModeHandler = fn(&Machine<'_>, usize) -> Result<usize, Error>;

/// Tables of handlers for opcodes and parameter modes, keyed by their numeric code.
///
/// Registered handlers take precedence over the built-in behavior of the same code.
#[derive(Clone, Default)]
pub struct InstructionSet {
    opcodes: HashMap<u8, OpcodeHandler>,
    modes: HashMap<u8, ModeHandler>,
}

impl Debug for InstructionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut opcodes = self.opcodes.keys().collect::<Vec<_>>();
        let mut modes = self.modes.keys().collect::<Vec<_>>();
        opcodes.sort();
        modes.sort();
        f.debug_struct("InstructionSet")
            .field("opcodes", &opcodes)
            .field("modes", &modes)
            .finish()
    }
}

pub static BASIC: Lazy<InstructionSet> = Lazy::new(InstructionSet::basic);
pub static RELATIVE: Lazy<InstructionSet> = Lazy::new(InstructionSet::relative);

impl InstructionSet {
    pub fn basic() -> Self {
        Self::default()
    }

    /// The basic machine extended by the relative base: opcode 9 adjusts the
    /// base, mode 2 addresses relative to it.
    pub fn relative() -> Self {
        Self::basic()
            .with_opcode(ADJUST_RELATIVE_BASE, adjust_relative_base)
            .with_mode(RELATIVE_MODE, relative_addr)
    }

    pub fn with_opcode(mut self, code: u8, handler: OpcodeHandler) -> Self {
        self.opcodes.insert(code, handler);
        self
    }

    pub fn with_mode(mut self, code: u8, handler: ModeHandler) -> Self {
        self.modes.insert(code, handler);
        self
    }

    pub fn opcode_handler(&self, code: u8) -> Option<OpcodeHandler> {
        self.opcodes.get(&code).copied()
    }

    pub fn mode_handler(&self, code: u8) -> Option<ModeHandler> {
        self.modes.get(&code).copied()
    }
}

fn adjust_relative_base(
    machine: &mut Machine<'_>,
    pointer: usize,
    modes: Modes,
) -> Result<usize, Error> {
    let offset = machine.param(pointer, modes.nth(0))?;
    machine.adjust_rel_base(offset)?;

    Ok(pointer + 1)
}

fn relative_addr(machine: &Machine<'_>, pointer: usize) -> Result<usize, Error> {
    let offset = machine.read(pointer);
    let addr = machine
        .rel_base()
        .checked_add(offset)
        .ok_or(Error::Overflow(machine.rel_base(), offset))?;
    to_addr(addr)
}

#[test]
fn test_mode_digits() {
    let modes = Modes::new(1002 / 100);
    assert_eq!(modes.nth(0), 0);
    assert_eq!(modes.nth(1), 1);
    assert_eq!(modes.nth(2), 0);
    assert_eq!(Modes::new(21).nth(0), 1);
    assert_eq!(Modes::new(21).nth(1), 2);
    assert_eq!(Modes::new(21).nth(30), 0);
}

#[test]
fn test_builtin_codes() {
    assert_eq!(Opcode::try_from(99), Ok(Opcode::Halt));
    assert_eq!(u8::from(Opcode::JumpIfFalse), 6);
    assert!(Opcode::try_from(ADJUST_RELATIVE_BASE).is_err());
    assert!(ParameterMode::try_from(RELATIVE_MODE).is_err());
}

#[test]
fn test_relative_set_registers_extensions() {
    assert!(BASIC.opcode_handler(ADJUST_RELATIVE_BASE).is_none());
    assert!(BASIC.mode_handler(RELATIVE_MODE).is_none());
    assert!(RELATIVE.opcode_handler(ADJUST_RELATIVE_BASE).is_some());
    assert!(RELATIVE.mode_handler(RELATIVE_MODE).is_some());
}
