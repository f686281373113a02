use std::{collections::HashMap, io::Write};

use log::debug;

use crate::{
    grids::{self, Grid, ORIGIN, UP},
    intcode::{self, Session, Suspension, RELATIVE},
    Error,
};

const BLACK: i64 = 0;
const WHITE: i64 = 1;
const TURN_LEFT: i64 = 0;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let program = intcode::parse_program(input)?;
    writeln!(out, "{}", painted_panels(&program, false)?.len())?;

    let identifier = painted_panels(&program, true)?;
    for row in grids::render(&identifier, &HashMap::from([(WHITE, '#')])) {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

/// Runs the painting robot, returns colors of the panels it painted.
fn painted_panels(program: &[i64], start_on_white: bool) -> Result<Grid<i64>, Error> {
    let mut hull = Grid::new();
    let mut position = ORIGIN;
    let mut step = UP;
    if start_on_white {
        hull.insert(position, WHITE);
    }

    let mut robot = Session::new(program, &[], &RELATIVE);
    loop {
        match robot.resume()? {
            Suspension::Input => robot.provide(*hull.get(&position).unwrap_or(&BLACK))?,
            Suspension::Output(color) => {
                let turn = match robot.resume()? {
                    Suspension::Output(turn) => turn,
                    other => {
                        return Err(Error::InvalidInput(format!(
                            "robot painted {} then gave {:?} instead of a turn",
                            color, other
                        )))
                    }
                };
                hull.insert(position, color);
                step = if turn == TURN_LEFT {
                    step.rotate_left(1)
                } else {
                    step.rotate_right(1)
                };
                position = position.add(step);
            }
            Suspension::Halt => break,
        }
    }
    debug!("robot halted after {} steps", robot.step_count());

    Ok(hull)
}

#[test]
fn test_painted_panels() {
    // Paints as in the puzzle example, ignoring the cameras.
    let program = intcode::parse_program(
        "104,1,104,0,104,0,104,0,104,1,104,0,104,1,104,0,104,0,104,1,104,1,104,0,104,1,104,0,99",
    )
    .unwrap();
    let hull = painted_panels(&program, false).unwrap();
    assert_eq!(hull.len(), 6);
    assert_eq!(
        grids::render(&hull, &HashMap::from([(WHITE, '#')])),
        vec!["    #", "    #", "# #  "]
    );
}
