use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use super::{
    inst::{InstructionSet, Modes, Opcode, ParameterMode},
    Error,
};

/// Memory of a session, addresses never written read as 0.
///
/// The program image is kept dense, cells beyond it live in a sparse map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Memory {
    cells: Vec<i64>,
    beyond: HashMap<usize, i64>,
}

impl Memory {
    pub fn new(image: &[i64]) -> Self {
        Self {
            cells: Vec::from(image),
            beyond: HashMap::new(),
        }
    }

    pub fn read(&self, addr: usize) -> i64 {
        match self.cells.get(addr) {
            Some(&value) => value,
            None => self.beyond.get(&addr).copied().unwrap_or(0),
        }
    }

    pub fn write(&mut self, addr: usize, value: i64) {
        match self.cells.get_mut(addr) {
            Some(cell) => *cell = value,
            None => {
                self.beyond.insert(addr, value);
            }
        }
    }

    /// Cells covered by the program image, as modified so far.
    pub fn image(&self) -> &[i64] {
        &self.cells
    }

    /// Number of cells written outside the program image.
    pub fn beyond_image(&self) -> usize {
        self.beyond.len()
    }
}

pub fn to_addr(value: i64) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| Error::NegativeAddress(value))
}

/// State visible to instruction handlers: memory, relative base and the
/// instruction set used to resolve parameter modes.
pub struct Machine<'a> {
    mem: Memory,
    rel_base: i64,
    inst_set: &'a InstructionSet,
}

impl<'a> Machine<'a> {
    fn new(image: &[i64], inst_set: &'a InstructionSet) -> Self {
        Self {
            mem: Memory::new(image),
            rel_base: 0,
            inst_set,
        }
    }

    pub fn read(&self, addr: usize) -> i64 {
        self.mem.read(addr)
    }

    pub fn write(&mut self, addr: usize, value: i64) {
        self.mem.write(addr, value)
    }

    pub fn memory(&self) -> &Memory {
        &self.mem
    }

    pub fn rel_base(&self) -> i64 {
        self.rel_base
    }

    pub fn adjust_rel_base(&mut self, offset: i64) -> Result<(), Error> {
        self.rel_base = self
            .rel_base
            .checked_add(offset)
            .ok_or(Error::Overflow(self.rel_base, offset))?;
        Ok(())
    }

    /// Address of the parameter stored at `pointer` under the given mode.
    pub fn param_addr(&self, pointer: usize, mode: u8) -> Result<usize, Error> {
        if let Some(handler) = self.inst_set.mode_handler(mode) {
            return handler(self, pointer);
        }

        match ParameterMode::try_from(mode) {
            Ok(ParameterMode::Position) => to_addr(self.read(pointer)),
            Ok(ParameterMode::Immediate) => Ok(pointer),
            Err(_) => Err(Error::UnknownParameterMode(mode)),
        }
    }

    pub fn param(&self, pointer: usize, mode: u8) -> Result<i64, Error> {
        self.param_addr(pointer, mode).map(|addr| self.read(addr))
    }
}

/// Where a session gave control back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suspension {
    /// An input instruction found no value, it runs again on the next resume.
    Input,
    Output(i64),
    Halt,
}

/// One running program with its own memory and input buffers.
///
/// Inputs given at creation are consumed first. After those run out, the
/// program suspends on every input instruction until the caller hands a
/// value over by [`Session::provide`]. A provided value must be consumed
/// before the program outputs anything, otherwise execution fails.
pub struct Session<'a> {
    machine: Machine<'a>,
    inst_p: usize,
    inputs: VecDeque<i64>,
    pending_input: Option<i64>,
    halted: bool,
    step_count: usize,
}

impl<'a> Session<'a> {
    pub fn new(image: &[i64], inputs: &[i64], inst_set: &'a InstructionSet) -> Self {
        Self {
            machine: Machine::new(image, inst_set),
            inst_p: 0,
            inputs: VecDeque::from_iter(inputs.iter().copied()),
            pending_input: None,
            halted: false,
            step_count: 0,
        }
    }

    pub fn ip(&self) -> usize {
        self.inst_p
    }

    pub fn relative_base(&self) -> i64 {
        self.machine.rel_base()
    }

    pub fn memory(&self) -> &Memory {
        self.machine.memory()
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.machine.mem
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn provide(&mut self, value: i64) -> Result<(), Error> {
        if let Some(pending) = self.pending_input {
            return Err(Error::InputAlreadyPending(pending, value));
        }

        self.pending_input = Some(value);
        Ok(())
    }

    /// Executes the instruction at the instruction pointer.
    ///
    /// Returns the suspension caused by this instruction, if any.
    pub fn step(&mut self) -> Result<Option<Suspension>, Error> {
        if self.halted {
            return Ok(Some(Suspension::Halt));
        }

        let value = self.machine.read(self.inst_p);
        if value < 0 {
            return Err(Error::NegativeInstruction(value, self.inst_p));
        }

        let code = u8::try_from(value % 100)
            .map_err(|_| Error::NegativeInstruction(value, self.inst_p))?;
        let modes = Modes::new(value / 100);
        let pointer = self.inst_p + 1;
        trace!(
            "step #{}: instruction({}) @ {}",
            self.step_count,
            value,
            self.inst_p
        );

        if let Some(handler) = self.machine.inst_set.opcode_handler(code) {
            self.inst_p = handler(&mut self.machine, pointer, modes)?;
            self.step_count += 1;
            return Ok(None);
        }

        let opcode =
            Opcode::try_from(code).map_err(|_| Error::InvalidOpcode(value, self.inst_p))?;
        let suspension = match opcode {
            Opcode::Halt => {
                debug!("halt after {} steps", self.step_count);
                self.halted = true;
                Some(Suspension::Halt)
            }
            Opcode::Input => {
                let addr = self.machine.param_addr(pointer, modes.nth(0))?;
                let Some(input) = self
                    .inputs
                    .pop_front()
                    .or_else(|| self.pending_input.take())
                else {
                    debug!("blocked by requiring input @ {}", self.inst_p);
                    return Ok(Some(Suspension::Input));
                };
                self.machine.write(addr, input);
                self.inst_p = pointer + 1;
                None
            }
            Opcode::Output => {
                let output = self.machine.param(pointer, modes.nth(0))?;
                if let Some(pending) = self.pending_input {
                    return Err(Error::OutputWithPendingInput(output, pending));
                }
                self.inst_p = pointer + 1;
                Some(Suspension::Output(output))
            }
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => {
                let condition = self.machine.param(pointer, modes.nth(0))?;
                let target = self.machine.param(pointer + 1, modes.nth(1))?;
                if (condition != 0) == (opcode == Opcode::JumpIfTrue) {
                    self.inst_p =
                        usize::try_from(target).map_err(|_| Error::InvalidJumpTarget(target))?;
                } else {
                    self.inst_p = pointer + 2;
                }
                None
            }
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => {
                let input0 = self.machine.param(pointer, modes.nth(0))?;
                let input1 = self.machine.param(pointer + 1, modes.nth(1))?;
                let dst = self.machine.param_addr(pointer + 2, modes.nth(2))?;
                let result = match opcode {
                    Opcode::Add => input0.checked_add(input1),
                    Opcode::Multiply => input0.checked_mul(input1),
                    Opcode::LessThan => Some(i64::from(input0 < input1)),
                    _ => Some(i64::from(input0 == input1)),
                }
                .ok_or(Error::Overflow(input0, input1))?;
                self.machine.write(dst, result);
                self.inst_p = pointer + 3;
                None
            }
        };

        self.step_count += 1;
        Ok(suspension)
    }

    /// Runs until the program wants input, produces output or halts.
    pub fn resume(&mut self) -> Result<Suspension, Error> {
        loop {
            if let Some(suspension) = self.step()? {
                return Ok(suspension);
            }
        }
    }

    /// Runs until the next output, `None` once the program halted.
    pub fn next_output(&mut self) -> Result<Option<i64>, Error> {
        match self.resume()? {
            Suspension::Output(value) => Ok(Some(value)),
            Suspension::Halt => Ok(None),
            Suspension::Input => Err(Error::NotEnoughInput),
        }
    }

    /// Runs to the end and collects all outputs.
    pub fn run_to_halt(&mut self) -> Result<Vec<i64>, Error> {
        let mut outputs = Vec::new();
        while let Some(value) = self.next_output()? {
            outputs.push(value);
        }

        Ok(outputs)
    }
}
