//! Squares of the spiral memory are numbered from 1 at the origin, going
//! right first and then counter-clockwise.

use std::{collections::HashMap, io::Write, iter};

use crate::{
    grids::{Point, ORIGIN, RIGHT},
    Error,
};

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let number = input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidInput(format!("expect one integer, got {:?}", input.trim())))?;
    if number < 1 {
        return Err(Error::InvalidInput(format!(
            "spiral squares start from 1, got {}",
            number
        )));
    }

    writeln!(out, "{}", locate_square(number).manhattan_distance(&ORIGIN))?;
    writeln!(out, "{}", first_value_above(number))?;
    Ok(())
}

/// Straight segments of the spiral as `(step, length)`.
fn spiral_segments() -> impl Iterator<Item = (Point, usize)> {
    let mut step = RIGHT;
    (1..)
        .flat_map(|length| [length, length])
        .map(move |length| {
            let segment = (step, length);
            step = step.rotate_left(1);
            segment
        })
}

/// Every single step walking along the spiral.
fn spiral_steps() -> impl Iterator<Item = Point> {
    spiral_segments().flat_map(|(step, length)| iter::repeat(step).take(length))
}

fn locate_square(id: i64) -> Point {
    spiral_steps()
        .take((id - 1) as usize)
        .fold(ORIGIN, |location, step| location.add(step))
}

/// Fills squares with the sum of their filled neighbors, returns the first
/// value larger than `threshold`.
fn first_value_above(threshold: i64) -> i64 {
    let mut values = HashMap::from([(ORIGIN, 1)]);
    let mut location = ORIGIN;
    for step in spiral_steps() {
        location = location.add(step);
        let value = location
            .neighbors()
            .iter()
            .filter_map(|n| values.get(n))
            .sum::<i64>();
        if value > threshold {
            return value;
        }
        values.insert(location, value);
    }

    unreachable!("spiral steps never end")
}

#[test]
fn test_locate_square() {
    assert_eq!(locate_square(1), ORIGIN);
    assert_eq!(locate_square(2), Point::new(1, 0));
    assert_eq!(locate_square(3), Point::new(1, -1));
    assert_eq!(locate_square(12).manhattan_distance(&ORIGIN), 3);
    assert_eq!(locate_square(23).manhattan_distance(&ORIGIN), 2);
    assert_eq!(locate_square(1024).manhattan_distance(&ORIGIN), 31);
}

#[test]
fn test_first_value_above() {
    assert_eq!(first_value_above(1), 2);
    assert_eq!(first_value_above(5), 10);
    assert_eq!(first_value_above(147), 304);
    assert_eq!(first_value_above(747), 806);
}
