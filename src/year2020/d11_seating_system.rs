use std::{
    collections::{HashMap, HashSet},
    io::Write,
};

use log::debug;

use crate::{
    grids::{self, Point, ORIGIN},
    Error,
};

type Neighbors = HashMap<Point, Vec<Point>>;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let (seats, size) = grids::select_and_measure('L', input);

    let adjacent = seats
        .iter()
        .map(|&seat| {
            let near = seat
                .neighbors()
                .into_iter()
                .filter(|n| seats.contains(n))
                .collect();
            (seat, near)
        })
        .collect::<Neighbors>();
    writeln!(out, "{}", final_count(&seats, &adjacent, 4))?;

    let visible = seats
        .iter()
        .map(|&seat| (seat, visible_from(seat, &seats, size)))
        .collect::<Neighbors>();
    writeln!(out, "{}", final_count(&seats, &visible, 5))?;
    Ok(())
}

/// Occupied seats once the seating stops changing.
///
/// A seat becomes occupied when none of its neighbors is, and an occupied
/// seat is left when at least `crowded` of its neighbors are occupied.
fn final_count(seats: &HashSet<Point>, neighbors: &Neighbors, crowded: usize) -> usize {
    let mut occupied = HashSet::new();
    for round in 0.. {
        let next = seats
            .iter()
            .filter(|&seat| {
                let count = neighbors
                    .get(seat)
                    .map_or(0, |ns| ns.iter().filter(|n| occupied.contains(*n)).count());
                count == 0 || (occupied.contains(seat) && count < crowded)
            })
            .copied()
            .collect::<HashSet<_>>();
        if next == occupied {
            debug!("seating settled after {} rounds", round);
            break;
        }
        occupied = next;
    }

    occupied.len()
}

/// First seat seen in each of the 8 directions, within the map.
fn visible_from(seat: Point, seats: &HashSet<Point>, size: Point) -> Vec<Point> {
    let within = |p: &Point| (0..size.x).contains(&p.x) && (0..size.y).contains(&p.y);
    ORIGIN
        .neighbors()
        .into_iter()
        .filter_map(|step| {
            let mut other = seat.add(step);
            while within(&other) {
                if seats.contains(&other) {
                    return Some(other);
                }
                other = other.add(step);
            }
            None
        })
        .collect()
}

#[test]
fn test_visible_from() {
    let map = ".......#.\n...#.....\n.#.......\n.........\n..#L....#\n\
               ....#....\n.........\n#........\n...#.....\n";
    let (seats, size) = grids::select_and_measure('#', map);
    assert_eq!(visible_from(Point::new(3, 4), &seats, size).len(), 8);

    let map = ".##.##.\n#.#.#.#\n##...##\n...L...\n##...##\n#.#.#.#\n.##.##.\n";
    let (seats, size) = grids::select_and_measure('#', map);
    assert!(visible_from(Point::new(3, 3), &seats, size).is_empty());
}
