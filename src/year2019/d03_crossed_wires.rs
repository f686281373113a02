use std::{
    collections::{HashMap, HashSet},
    io::Write,
};

use crate::{
    grids::{Point, DOWN, LEFT, ORIGIN, RIGHT, UP},
    parse::{self, Token},
    Error,
};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let paths = parse::mixed_tables(input, ",")?
        .iter()
        .map(|path| visits(path))
        .collect::<Result<Vec<_>, _>>()?;
    let [first, second] = paths.as_slice() else {
        return Err(Error::InvalidInput(format!(
            "expect 2 wires, got {}",
            paths.len()
        )));
    };

    let first_points = first.keys().collect::<HashSet<_>>();
    let crossings = second
        .keys()
        .filter(|p| first_points.contains(p))
        .collect::<Vec<_>>();
    let closest = crossings
        .iter()
        .map(|p| p.manhattan_distance(&ORIGIN))
        .min()
        .ok_or(Error::NoSolution("wires never cross"))?;
    let shortest = crossings
        .iter()
        .map(|&p| first[p] + second[p])
        .min()
        .ok_or(Error::NoSolution("wires never cross"))?;

    writeln!(out, "{}", closest)?;
    writeln!(out, "{}", shortest)?;
    Ok(())
}

/// Points a wire passes, with the number of steps of the first visit.
fn visits(path: &[Vec<Token>]) -> Result<HashMap<Point, usize>, Error> {
    let mut visits = HashMap::new();
    let mut location = ORIGIN;
    let mut steps = 0;
    for segment in path {
        let (Some(Token::Str(direction)), Some(Token::Int(length)), 2) =
            (segment.first(), segment.get(1), segment.len())
        else {
            return Err(Error::InvalidInput(format!(
                "malformed wire segment {:?}",
                segment
            )));
        };
        let step = match direction.as_str() {
            "U" => UP,
            "D" => DOWN,
            "L" => LEFT,
            "R" => RIGHT,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "unknown wire direction {}",
                    direction
                )))
            }
        };
        for _ in 0..*length {
            location = location.add(step);
            steps += 1;
            visits.entry(location).or_insert(steps);
        }
    }

    Ok(visits)
}

#[test]
fn test_visits() {
    let paths = parse::mixed_tables("R8,U5,L5,D3", ",").unwrap();
    let visits = visits(&paths[0]).unwrap();
    assert_eq!(visits.len(), 21);
    assert_eq!(visits[&Point::new(3, -3)], 20);
    assert_eq!(visits[&Point::new(6, -5)], 15);
}
