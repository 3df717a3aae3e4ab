use std::fmt;
use std::ops::{Add, Mul, Neg};
use thiserror::Error;

/// A grid cell. `y` grows downward, matching the row order of puzzle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point reached by moving along `vector`
    pub fn translate(self, vector: Vector) -> Point {
        Point::new(self.x + vector.dx, self.y + vector.dy)
    }

    pub fn manhattan_distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, vector: Vector) -> Point {
        self.translate(vector)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement between cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Component-wise multiplication by `k`
    pub fn scale(self, k: i32) -> Vector {
        Vector::new(self.dx * k, self.dy * k)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, k: i32) -> Vector {
        self.scale(k)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1)
    }
}

/// One of the four orthogonal headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid direction {0:?}, expected one of U, D, L, R")]
pub struct DirectionError(pub char);

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this heading
    pub const fn delta(self) -> Vector {
        match self {
            Direction::Up => Vector::new(0, -1),
            Direction::Down => Vector::new(0, 1),
            Direction::Left => Vector::new(-1, 0),
            Direction::Right => Vector::new(1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Counter-clockwise quarter turn, as seen on screen
    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Clockwise quarter turn, as seen on screen
    pub const fn turn_right(self) -> Direction {
        self.turn_left().opposite()
    }

    /// Headings reachable without reversing: straight ahead first, then the
    /// two perpendicular turns.
    pub const fn neighbours(self) -> [Direction; 3] {
        [self, self.turn_left(), self.turn_right()]
    }

    pub const fn is_perpendicular(self, other: Direction) -> bool {
        let vertical = matches!(self, Direction::Up | Direction::Down);
        let other_vertical = matches!(other, Direction::Up | Direction::Down);
        vertical != other_vertical
    }
}

impl TryFrom<char> for Direction {
    type Error = DirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(DirectionError(other)),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Direction::try_from(char::from(byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_follow_row_major_layout() {
        let origin = Point::new(5, 5);
        assert_eq!(origin + Direction::Up.delta(), Point::new(5, 4));
        assert_eq!(origin + Direction::Down.delta(), Point::new(5, 6));
        assert_eq!(origin + Direction::Left.delta(), Point::new(4, 5));
        assert_eq!(origin + Direction::Right.delta(), Point::new(6, 5));
    }

    #[test]
    fn scaling_and_translation() {
        let step = Direction::Left.delta() * 3;
        assert_eq!(step, Vector::new(-3, 0));
        assert_eq!(Point::ORIGIN.translate(step), Point::new(-3, 0));
        assert_eq!(-step, Vector::new(3, 0));
        assert_eq!(Point::new(1, 1).manhattan_distance(Point::new(-2, 5)), 7);
    }

    #[test]
    fn rotations_are_consistent() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.turn_left().turn_left(), dir.opposite());
            assert_eq!(dir.delta() * -1, dir.opposite().delta());
            assert!(dir.is_perpendicular(dir.turn_left()));
            assert!(!dir.is_perpendicular(dir.opposite()));
        }
    }

    #[test]
    fn neighbours_never_reverse() {
        assert_eq!(
            Direction::Right.neighbours(),
            [Direction::Right, Direction::Up, Direction::Down]
        );
        for dir in Direction::ALL {
            let neighbours = dir.neighbours();
            assert_eq!(neighbours[0], dir);
            assert!(!neighbours.contains(&dir.opposite()));
        }
    }

    #[test]
    fn parses_direction_letters() {
        assert_eq!(Direction::try_from(b'U'), Ok(Direction::Up));
        assert_eq!(Direction::try_from('R'), Ok(Direction::Right));
        assert_eq!(Direction::try_from(b'x'), Err(DirectionError('x')));
    }
}
