use std::{collections::HashSet, io::Write};

use crate::{
    grids::{self, Point, ORIGIN},
    helpers, Error,
};

const SLOPES: [(i64, i64); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let (trees, size) = grids::select_and_measure('#', input);
    if size.x == 0 {
        return Err(Error::InvalidInput("empty map".to_string()));
    }

    writeln!(out, "{}", count_encounters(&trees, size, Point::new(3, 1)))?;
    let counts = SLOPES
        .iter()
        .map(|&(x, y)| count_encounters(&trees, size, Point::new(x, y)));
    writeln!(out, "{}", helpers::product(counts))?;
    Ok(())
}

/// Trees hit going down by `slope`, the map repeats to the right.
fn count_encounters(trees: &HashSet<Point>, size: Point, slope: Point) -> usize {
    let mut location = ORIGIN;
    let mut count = 0;
    while location.y < size.y {
        if trees.contains(&Point::new(location.x % size.x, location.y)) {
            count += 1;
        }
        location = location.add(slope);
    }

    count
}

#[test]
fn test_count_encounters() {
    let map = "..##.......\n#...#...#..\n.#....#..#.\n..#.#...#.#\n.#...##..#.\n\
               ..#.##.....\n.#.#.#....#\n.#........#\n#.##...#...\n#...##....#\n\
               .#..#...#.#\n";
    let (trees, size) = grids::select_and_measure('#', map);
    assert_eq!(size, Point::new(11, 11));
    let counts = SLOPES
        .iter()
        .map(|&(x, y)| count_encounters(&trees, size, Point::new(x, y)))
        .collect::<Vec<_>>();
    assert_eq!(counts, vec![2, 7, 3, 4, 2]);
}
