//! Points, vectors and sparse grids in 2D space.
//!
//! The X-axis goes from left to right and the Y-axis from top to bottom, so
//! `UP` is `(0, -1)`. A grid is a mapping from integral points to values of
//! any type.

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    hash::Hash,
};

/// Scalar component of a [`Vector2D`].
pub trait Scalar: Copy + PartialEq + PartialOrd {
    const ZERO: Self;

    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn mul(self, other: Self) -> Self;
    fn div(self, other: Self) -> Self;
    /// Division rounded towards negative infinity.
    fn floor_div(self, other: Self) -> Self;
    /// Remainder of `floor_div`, it has the sign of the divisor.
    fn modulo(self, other: Self) -> Self;
    fn neg(self) -> Self;
    fn abs(self) -> Self;
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;

                fn add(self, other: Self) -> Self {
                    self + other
                }

                fn sub(self, other: Self) -> Self {
                    self - other
                }

                fn mul(self, other: Self) -> Self {
                    self * other
                }

                fn div(self, other: Self) -> Self {
                    self / other
                }

                fn floor_div(self, other: Self) -> Self {
                    let quot = self / other;
                    if (self % other != 0) && ((self < 0) != (other < 0)) {
                        quot - 1
                    } else {
                        quot
                    }
                }

                fn modulo(self, other: Self) -> Self {
                    let rem = self % other;
                    if rem != 0 && ((rem < 0) != (other < 0)) {
                        rem + other
                    } else {
                        rem
                    }
                }

                fn neg(self) -> Self {
                    -self
                }

                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

impl_int_scalar!(i32, i64, isize);

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn mul(self, other: Self) -> Self {
        self * other
    }

    fn div(self, other: Self) -> Self {
        self / other
    }

    fn floor_div(self, other: Self) -> Self {
        (self / other).floor()
    }

    fn modulo(self, other: Self) -> Self {
        self - other * (self / other).floor()
    }

    fn neg(self) -> Self {
        -self
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }
}

/// An immutable vector or point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vector2D<T> {
    pub x: T,
    pub y: T,
}

pub type Point = Vector2D<i64>;

pub const ORIGIN: Point = Vector2D::new(0, 0);
pub const LEFT: Point = Vector2D::new(-1, 0);
pub const RIGHT: Point = Vector2D::new(1, 0);
pub const UP: Point = Vector2D::new(0, -1);
pub const DOWN: Point = Vector2D::new(0, 1);
pub const WEST: Point = LEFT;
pub const EAST: Point = RIGHT;
pub const NORTH: Point = UP;
pub const SOUTH: Point = DOWN;

impl<T: Display> Display for Vector2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}

impl<T> Vector2D<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector2D<T> {
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x.add(other.x), self.y.add(other.y))
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x.sub(other.x), self.y.sub(other.y))
    }

    pub fn scale(self, value: T) -> Self {
        Self::new(self.x.mul(value), self.y.mul(value))
    }

    pub fn div(self, value: T) -> Self {
        Self::new(self.x.div(value), self.y.div(value))
    }

    pub fn floor_div(self, value: T) -> Self {
        Self::new(self.x.floor_div(value), self.y.floor_div(value))
    }

    pub fn modulo(self, value: T) -> Self {
        Self::new(self.x.modulo(value), self.y.modulo(value))
    }

    /// The vector rotated by 180 degrees.
    pub fn neg(self) -> Self {
        Self::new(self.x.neg(), self.y.neg())
    }

    pub fn is_zero(&self) -> bool {
        self.x == T::ZERO && self.y == T::ZERO
    }

    pub fn manhattan_distance(&self, other: &Self) -> T {
        self.x.sub(other.x).abs().add(self.y.sub(other.y).abs())
    }

    /// Rotates by `times` quarter turns counterclockwise on screen.
    pub fn rotate_left(self, times: i32) -> Self {
        match times.rem_euclid(4) {
            1 => Self::new(self.y, self.x.neg()),
            2 => self.neg(),
            3 => Self::new(self.y.neg(), self.x),
            _ => self,
        }
    }

    pub fn rotate_right(self, times: i32) -> Self {
        self.rotate_left(4 - times.rem_euclid(4))
    }
}

impl Point {
    /// All eight neighbors, orthogonal and diagonal, at unit spacing.
    pub fn neighbors(&self) -> [Point; 8] {
        let Vector2D { x, y } = *self;
        [
            Point::new(x - 1, y - 1),
            Point::new(x - 1, y),
            Point::new(x - 1, y + 1),
            Point::new(x, y - 1),
            Point::new(x, y + 1),
            Point::new(x + 1, y - 1),
            Point::new(x + 1, y),
            Point::new(x + 1, y + 1),
        ]
    }
}

pub type Grid<V> = HashMap<Point, V>;

pub fn select(target: char, text: &str) -> HashSet<Point> {
    text.lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(move |&(_, c)| c == target)
                .map(move |(x, _)| Point::new(x as i64, y as i64))
        })
        .collect()
}

/// Like [`select`], also returns the size of the map as `(width, height)`.
pub fn select_and_measure(target: char, text: &str) -> (HashSet<Point>, Point) {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let height = text.lines().count();
    (
        select(target, text),
        Point::new(width as i64, height as i64),
    )
}

/// Draws the part of `grid` whose values have a symbol, one string per row.
///
/// Cells within a row are separated by a space. Points missing from the grid
/// and values without a symbol are drawn blank.
pub fn render<V: Eq + Hash>(grid: &Grid<V>, symbols: &HashMap<V, char>) -> Vec<String> {
    let visible = grid
        .iter()
        .filter(|&(_, v)| symbols.contains_key(v))
        .map(|(p, _)| *p)
        .collect::<Vec<_>>();
    let (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) = (
        visible.iter().map(|p| p.x).min(),
        visible.iter().map(|p| p.x).max(),
        visible.iter().map(|p| p.y).min(),
        visible.iter().map(|p| p.y).max(),
    ) else {
        return Vec::new();
    };

    (min_y..=max_y)
        .map(|y| {
            (min_x..=max_x)
                .map(|x| {
                    grid.get(&Point::new(x, y))
                        .and_then(|v| symbols.get(v))
                        .copied()
                        .unwrap_or(' ')
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[test]
fn test_rotation() {
    let v = Point::new(3, -7);
    for n in -5..9 {
        assert_eq!(v.rotate_left(n).rotate_right(n), v);
        assert_eq!(v.rotate_right(n).rotate_left(n), v);
    }
    assert_eq!(v.rotate_left(4), v);
    assert_eq!(UP.rotate_left(1), LEFT);
    assert_eq!(UP.rotate_right(1), RIGHT);
    assert_eq!(EAST.rotate_left(3), SOUTH);
    assert_eq!(EAST.rotate_right(-1), NORTH);
}

#[test]
fn test_arithmetic() {
    let v = Point::new(7, -3);
    assert_eq!(v.add(Point::new(1, 1)), Point::new(8, -2));
    assert_eq!(v.sub(Point::new(1, 1)), Point::new(6, -4));
    assert_eq!(v.scale(2), Point::new(14, -6));
    assert_eq!(v.floor_div(2), Point::new(3, -2));
    assert_eq!(v.modulo(5), Point::new(2, 2));
    assert_eq!(v.neg(), Point::new(-7, 3));
    assert!(ORIGIN.is_zero());
    assert!(!v.is_zero());
    assert_eq!(v.manhattan_distance(&ORIGIN), 10);

    let r = Vector2D::new(1.5, -0.5);
    assert_eq!(r.scale(2.0), Vector2D::new(3.0, -1.0));
    assert_eq!(r.floor_div(1.0), Vector2D::new(1.0, -1.0));
    assert_eq!(r.modulo(1.0), Vector2D::new(0.5, 0.5));
    assert_eq!(r.manhattan_distance(&Vector2D::new(0.0, 0.0)), 2.0);
}

#[test]
fn test_neighbors() {
    let around = ORIGIN.neighbors();
    assert_eq!(around.len(), 8);
    assert_eq!(around[0], Point::new(-1, -1));
    assert_eq!(around[7], Point::new(1, 1));
    assert!(!around.contains(&ORIGIN));
}

#[test]
fn test_select() {
    let marked = select('O', "X.O\n.XO\n..X");
    assert_eq!(marked, HashSet::from([Point::new(2, 0), Point::new(2, 1)]));

    let (marked, size) = select_and_measure('X', ".O\nX.O\nX");
    assert_eq!(marked, HashSet::from([Point::new(0, 1), Point::new(0, 2)]));
    assert_eq!(size, Point::new(3, 3));
}

#[test]
fn test_render() {
    let grid = Grid::from([
        (Point::new(0, 0), 7),
        (Point::new(1, 0), 8),
        (Point::new(1, 1), 8),
        (Point::new(5, 5), 9),
    ]);
    let symbols = HashMap::from([(7, '>'), (8, '|')]);
    assert_eq!(render(&grid, &symbols), vec!["> |", "  |"]);
    assert!(render(&Grid::<i32>::new(), &symbols).is_empty());
}
