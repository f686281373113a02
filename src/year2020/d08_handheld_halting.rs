use std::{collections::HashSet, io::Write};

use crate::{
    parse::{self, Token},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Acc,
    Jmp,
    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instruction {
    op: Operation,
    arg: i64,
}

impl TryFrom<&[Token]> for Instruction {
    type Error = Error;

    fn try_from(value: &[Token]) -> Result<Self, Self::Error> {
        let [Token::Str(op), Token::Int(arg)] = value else {
            return Err(Error::InvalidInput(format!(
                "malformed instruction {:?}",
                value
            )));
        };
        let op = match op.as_str() {
            "acc" => Operation::Acc,
            "jmp" => Operation::Jmp,
            "nop" => Operation::Nop,
            _ => return Err(Error::InvalidInput(format!("unknown operation {}", op))),
        };

        Ok(Instruction { op, arg: *arg })
    }
}

/// Accumulator when the program stops, and whether it stopped by running
/// past its last instruction rather than by repeating one.
fn run(program: &[Instruction]) -> (i64, bool) {
    let mut pointer = 0i64;
    let mut accumulator = 0;
    let mut seen = HashSet::new();
    while let Some(inst) = usize::try_from(pointer).ok().and_then(|p| program.get(p)) {
        if !seen.insert(pointer) {
            break;
        }
        match inst.op {
            Operation::Jmp => {
                pointer += inst.arg;
                continue;
            }
            Operation::Acc => accumulator += inst.arg,
            Operation::Nop => {}
        }
        pointer += 1;
    }

    (accumulator, pointer == program.len() as i64)
}

/// Accumulator of the program made to terminate by swapping one `jmp`/`nop`.
fn fixed_output(program: &[Instruction]) -> Option<i64> {
    let mut patched = program.to_vec();
    for (ind, inst) in program.iter().enumerate() {
        let swapped = match inst.op {
            Operation::Acc => continue,
            Operation::Jmp => Operation::Nop,
            Operation::Nop => Operation::Jmp,
        };
        patched[ind].op = swapped;
        let (output, terminated) = run(&patched);
        if terminated {
            return Some(output);
        }
        patched[ind].op = inst.op;
    }

    None
}

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let program = parse::mixed_rows(input)?
        .iter()
        .map(|row| Instruction::try_from(row.as_slice()))
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "{}", run(&program).0)?;
    let output =
        fixed_output(&program).ok_or(Error::NoSolution("no patch terminates the program"))?;
    writeln!(out, "{}", output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Vec<Instruction> {
        parse::mixed_rows(
            "nop +0\nacc +1\njmp +4\nacc +3\njmp -3\nacc -99\nacc +1\njmp -4\nacc +6\n",
        )
        .unwrap()
        .iter()
        .map(|row| Instruction::try_from(row.as_slice()).unwrap())
        .collect()
    }

    #[test]
    fn test_run() {
        assert_eq!(run(&example()), (5, false));
    }

    #[test]
    fn test_fixed_output() {
        assert_eq!(fixed_output(&example()), Some(8));
        let no_patch = [Instruction {
            op: Operation::Acc,
            arg: 1,
        }];
        assert_eq!(run(&no_patch), (1, true));
        assert_eq!(fixed_output(&no_patch), None);
    }

    #[test]
    fn test_parse_instruction() {
        let row = parse::mixed_values("mov +1").unwrap();
        assert!(Instruction::try_from(row.as_slice()).is_err());
    }
}
