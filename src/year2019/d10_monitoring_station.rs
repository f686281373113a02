use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    io::Write,
};

use crate::{
    grids::{self, Point},
    Error,
};

const CHOSEN_VAPORIZED: usize = 200;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let asteroids = grids::select('#', input);
    let (max_count, station) = best_station(&asteroids)
        .ok_or_else(|| Error::InvalidInput("no asteroid on the map".to_string()))?;
    writeln!(out, "{}", max_count)?;

    let target = nth_vaporized(station, &asteroids, CHOSEN_VAPORIZED)
        .ok_or(Error::NoSolution("not enough asteroids to vaporize"))?;
    writeln!(out, "{}", 100 * target.x + target.y)?;
    Ok(())
}

/// Asteroid detecting the most others, ties go to the larger location.
fn best_station(asteroids: &HashSet<Point>) -> Option<(usize, Point)> {
    asteroids
        .iter()
        .map(|&location| (count_detectable(location, asteroids), location))
        .max()
}

fn count_detectable(location: Point, asteroids: &HashSet<Point>) -> usize {
    asteroids
        .iter()
        .filter(|&&target| target != location)
        .map(|&target| normalized_direction(location, target))
        .collect::<HashSet<_>>()
        .len()
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

/// Shortest integral step from `source` towards `destination`.
fn normalized_direction(source: Point, destination: Point) -> Point {
    let offset = destination.sub(source);
    offset.div(gcd(offset.x, offset.y))
}

/// Direction of a laser, ordered clockwise starting from straight up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Bearing(Point);

impl Bearing {
    /// 0 for the right half including straight up, 1 for the left half.
    fn sector(&self) -> u8 {
        let Point { x, y } = self.0;
        if x > 0 || (x == 0 && y <= 0) {
            0
        } else {
            1
        }
    }
}

impl Ord for Bearing {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.0, other.0);
        self.sector()
            .cmp(&other.sector())
            .then_with(|| (b.x == 0).cmp(&(a.x == 0)))
            .then_with(|| {
                if a.x == 0 || b.x == 0 {
                    Ordering::Equal
                } else {
                    // Both x have the same sign within a sector.
                    (a.y * b.x).cmp(&(b.y * a.x))
                }
            })
    }
}

impl PartialOrd for Bearing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The n-th asteroid (counting from 1) hit by a laser rotating clockwise
/// from straight up, which vaporizes one asteroid per direction each round.
fn nth_vaporized(station: Point, asteroids: &HashSet<Point>, n: usize) -> Option<Point> {
    let mut rays: HashMap<Point, Vec<Point>> = HashMap::new();
    for &target in asteroids.iter().filter(|&&target| target != station) {
        rays.entry(normalized_direction(station, target))
            .or_default()
            .push(target);
    }

    let mut order = Vec::new();
    for (direction, mut ray) in rays {
        ray.sort_by_key(|target| target.manhattan_distance(&station));
        for (rotation, target) in ray.into_iter().enumerate() {
            order.push(((rotation, Bearing(direction)), target));
        }
    }
    order.sort_unstable_by_key(|&(key, _)| key);

    n.checked_sub(1)
        .and_then(|ind| order.get(ind))
        .map(|&(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_station() {
        let map = ".#..#\n.....\n#####\n....#\n...##\n";
        let asteroids = grids::select('#', map);
        assert_eq!(best_station(&asteroids), Some((8, Point::new(3, 4))));
        assert_eq!(count_detectable(Point::new(4, 2), &asteroids), 5);
    }

    #[test]
    fn test_bearing_order() {
        let clockwise = [(0, -1), (1, -2), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-2, -1)]
            .map(|(x, y)| Bearing(Point::new(x, y)));
        assert!(clockwise.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nth_vaporized() {
        let map = ".#....#####...#..\n\
                   ##...##.#####..##\n\
                   ##...#...#.#####.\n\
                   ..#.....#...###..\n\
                   ..#.#.....#....##\n";
        let asteroids = grids::select('#', map);
        let station = Point::new(8, 3);
        let expected = [
            (8, 1),
            (9, 0),
            (9, 1),
            (10, 0),
            (9, 2),
            (11, 1),
            (12, 1),
            (11, 2),
            (15, 1),
        ];
        for (ind, (x, y)) in expected.into_iter().enumerate() {
            assert_eq!(
                nth_vaporized(station, &asteroids, ind + 1),
                Some(Point::new(x, y))
            );
        }
        assert_eq!(nth_vaporized(station, &asteroids, 0), None);
        assert_eq!(nth_vaporized(station, &asteroids, 1000), None);
    }
}
