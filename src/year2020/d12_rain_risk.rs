use std::io::Write;

use crate::{
    grids::{Point, EAST, NORTH, ORIGIN, SOUTH, WEST},
    parse::{self, Token},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Move(Point),
    Left(i32),
    Right(i32),
    Forward(i64),
}

impl TryFrom<&[Token]> for Action {
    type Error = Error;

    fn try_from(value: &[Token]) -> Result<Self, Self::Error> {
        let [Token::Str(action), Token::Int(amount)] = value else {
            return Err(Error::InvalidInput(format!(
                "malformed navigation instruction {:?}",
                value
            )));
        };
        let amount = *amount;
        let quarter_turns = || {
            i32::try_from(amount.div_euclid(90))
                .map_err(|_| Error::InvalidInput(format!("turn of {} degrees", amount)))
        };

        Ok(match action.as_str() {
            "N" => Action::Move(NORTH.scale(amount)),
            "S" => Action::Move(SOUTH.scale(amount)),
            "E" => Action::Move(EAST.scale(amount)),
            "W" => Action::Move(WEST.scale(amount)),
            "L" => Action::Left(quarter_turns()?),
            "R" => Action::Right(quarter_turns()?),
            "F" => Action::Forward(amount),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "unknown navigation action {}",
                    action
                )))
            }
        })
    }
}

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let actions = parse::mixed_rows(input)?
        .iter()
        .map(|row| Action::try_from(row.as_slice()))
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "{}", final_distance(&actions, EAST, false))?;
    let waypoint = EAST.scale(10).add(NORTH);
    writeln!(out, "{}", final_distance(&actions, waypoint, true))?;
    Ok(())
}

/// Manhattan distance travelled by the ship.
///
/// Moves shift the waypoint in waypoint mode and the ship otherwise.
/// `step` is the ship's heading or the waypoint relative to the ship.
fn final_distance(actions: &[Action], mut step: Point, waypoint_mode: bool) -> i64 {
    let mut position = ORIGIN;
    for action in actions {
        match *action {
            Action::Left(times) => step = step.rotate_left(times),
            Action::Right(times) => step = step.rotate_right(times),
            Action::Forward(times) => position = position.add(step.scale(times)),
            Action::Move(offset) if waypoint_mode => step = step.add(offset),
            Action::Move(offset) => position = position.add(offset),
        }
    }

    position.manhattan_distance(&ORIGIN)
}

#[test]
fn test_final_distance() {
    let actions = parse::mixed_rows("F10\nN3\nF7\nR90\nF11\n")
        .unwrap()
        .iter()
        .map(|row| Action::try_from(row.as_slice()).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(final_distance(&actions, EAST, false), 25);
    assert_eq!(final_distance(&actions, Point::new(10, -1), true), 286);
    assert!(Action::try_from(parse::mixed_values("X5").unwrap().as_slice()).is_err());
}
