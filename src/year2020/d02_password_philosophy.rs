use std::io::Write;

use crate::{
    parse::{self, Token},
    Error,
};

/// A password with the policy it was created under.
#[derive(Debug)]
struct Entry {
    low: i64,
    high: i64,
    letter: u8,
    password: String,
}

impl TryFrom<&[Token]> for Entry {
    type Error = Error;

    fn try_from(value: &[Token]) -> Result<Self, Self::Error> {
        match value {
            [Token::Int(low), Token::Int(high), Token::Str(letter), Token::Str(password)]
                if letter.len() == 1 =>
            {
                Ok(Entry {
                    low: *low,
                    high: *high,
                    letter: letter.as_bytes()[0],
                    password: password.clone(),
                })
            }
            _ => Err(Error::InvalidInput(format!(
                "malformed password entry {:?}",
                value
            ))),
        }
    }
}

impl Entry {
    /// The letter count lies within the range.
    fn is_valid_by_count(&self) -> bool {
        let count = self.password.bytes().filter(|&b| b == self.letter).count() as i64;
        self.low <= count && count <= self.high
    }

    /// Exactly one of the two 1-based positions holds the letter.
    fn is_valid_by_position(&self) -> Result<bool, Error> {
        let at = |pos: i64| {
            usize::try_from(pos - 1)
                .ok()
                .and_then(|ind| self.password.as_bytes().get(ind))
                .map(|&b| b == self.letter)
                .ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "position {} out of password {:?}",
                        pos, self.password
                    ))
                })
        };

        Ok(at(self.low)? != at(self.high)?)
    }
}

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let entries = parse::mixed_rows(input)?
        .iter()
        .map(|row| Entry::try_from(row.as_slice()))
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "{}", entries.iter().filter(|e| e.is_valid_by_count()).count())?;
    let mut count = 0;
    for entry in &entries {
        if entry.is_valid_by_position()? {
            count += 1;
        }
    }
    writeln!(out, "{}", count)?;
    Ok(())
}

#[test]
fn test_entry_policies() {
    let entries = parse::mixed_rows("1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n").unwrap();
    let entries = entries
        .iter()
        .map(|row| Entry::try_from(row.as_slice()).unwrap())
        .collect::<Vec<_>>();
    let by_count = entries.iter().map(Entry::is_valid_by_count).collect::<Vec<_>>();
    assert_eq!(by_count, vec![true, false, true]);
    let by_position = entries
        .iter()
        .map(|e| e.is_valid_by_position().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(by_position, vec![true, false, false]);

    let row = parse::mixed_values("1-3 ab: abcde").unwrap();
    assert!(Entry::try_from(row.as_slice()).is_err());
}
