use super::{Direction, Point};
use crate::utils::input;
use crate::utils::search::breadth_first;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a digit grid fails to parse. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: {found:?} is not a digit")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
}

/// Rectangular grid of per-cell costs in `0..=9`.
///
/// Every point inside `width × height` has a cost; points outside have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGrid {
    costs: Vec<u8>,
    width: usize,
    height: usize,
}

impl WeightedGrid {
    /// Parse one ASCII digit per cell; line length is the width and line
    /// count the height. Surrounding whitespace on each line and blank lines
    /// around the grid are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut costs = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in input::lines(text.trim()).map(str::trim).enumerate() {
            let expected = *width.get_or_insert(line.chars().count());
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::RaggedRow {
                    line: row + 1,
                    expected,
                    found,
                });
            }

            for (col, c) in line.chars().enumerate() {
                let digit = c.to_digit(10).ok_or(GridError::InvalidCell {
                    line: row + 1,
                    column: col + 1,
                    found: c,
                })?;
                costs.push(digit as u8);
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                costs,
                width,
                height,
            }),
            _ => Err(GridError::Empty),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// Cost of entering `point`, `None` outside the grid
    pub fn get(&self, point: Point) -> Option<u32> {
        self.index(point).map(|i| u32::from(self.costs[i]))
    }

    pub fn top_left(&self) -> Point {
        Point::ORIGIN
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Every point, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i32, y as i32)))
    }

    /// In-bounds orthogonal neighbours of `point`
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| point + dir.delta())
            .filter(|p| self.contains(*p))
    }

    /// Cells orthogonally connected to `start` through cells of the same
    /// cost, with their step distance from `start`.
    pub fn region_from(&self, start: Point) -> Vec<(Point, usize)> {
        let Some(cost) = self.get(start) else {
            return Vec::new();
        };
        let mut region: Vec<_> = breadth_first(start, |p| {
            self.neighbours(*p)
                .filter(|n| self.get(*n) == Some(cost))
                .collect::<Vec<_>>()
        })
        .into_iter()
        .collect();
        region.sort_by_key(|&(p, d)| (d, p.y, p.x));
        region
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl FromStr for WeightedGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_and_costs() {
        let grid = WeightedGrid::parse("123\n456\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(Point::new(0, 0)), Some(1));
        assert_eq!(grid.get(Point::new(2, 1)), Some(6));
        assert_eq!(grid.bottom_right(), Point::new(2, 1));
        assert_eq!(grid.points().count(), 6);
    }

    #[test]
    fn out_of_bounds_is_absent() {
        let grid: WeightedGrid = "19\n91".parse().unwrap();
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(2, 0),
            Point::new(0, 2),
        ] {
            assert_eq!(grid.get(p), None);
            assert!(!grid.contains(p));
        }
    }

    #[test]
    fn indented_lines_are_trimmed() {
        let grid = WeightedGrid::parse("\n  12\n  34  \n\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.get(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(WeightedGrid::parse(""), Err(GridError::Empty));
        assert_eq!(WeightedGrid::parse("\n  \n"), Err(GridError::Empty));
        assert_eq!(
            WeightedGrid::parse("123\n45"),
            Err(GridError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            WeightedGrid::parse("12\n3x"),
            Err(GridError::InvalidCell {
                line: 2,
                column: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let grid = WeightedGrid::parse("111\n111\n111").unwrap();
        assert_eq!(grid.neighbours(Point::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbours(Point::new(1, 0)).count(), 3);
        assert_eq!(grid.neighbours(Point::new(1, 1)).count(), 4);
    }

    #[test]
    fn region_follows_equal_costs() {
        let grid = WeightedGrid::parse(
            "1129\n\
             9119\n\
             9911",
        )
        .unwrap();

        let region = grid.region_from(Point::new(0, 0));
        let points: Vec<Point> = region.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(3, 2),
            ]
        );
        assert_eq!(region.last(), Some(&(Point::new(3, 2), 5)));
        assert!(grid.region_from(Point::new(9, 9)).is_empty());
    }
}
