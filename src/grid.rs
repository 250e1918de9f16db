//! Toroidal coordinate space.
//!
//! Every coordinate that leaves this module is already wrapped, so a [`Cell`]
//! produced by [`step`] is always inside its grid.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const DEFAULT_GRID_SIZE: u16 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Default for Size {
    fn default() -> Self {
        Size::square(DEFAULT_GRID_SIZE)
    }
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        Size { width, height }
    }

    pub fn square(side: u16) -> Self {
        Size::new(side, side)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    pub fn opposite(&self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn is_opposite(&self, other: Heading) -> bool {
        self.opposite() == other
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heading {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "up" | "north" => Ok(Heading::Up),
            "down" | "south" => Ok(Heading::Down),
            "left" | "west" => Ok(Heading::Left),
            "right" | "east" => Ok(Heading::Right),
            _ => Err(Error::UnknownHeading(token.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDelta {
    pub x: i64,
    pub y: i64,
}

impl From<Heading> for CellDelta {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::Up => CellDelta { x: 0, y: -1 },
            Heading::Down => CellDelta { x: 0, y: 1 },
            Heading::Left => CellDelta { x: -1, y: 0 },
            Heading::Right => CellDelta { x: 1, y: 0 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub fn new(x: u16, y: u16) -> Self {
        Cell { x, y }
    }

    pub fn wrapped_add(&self, delta: CellDelta, size: Size) -> Cell {
        Cell {
            x: wrap(self.x as i64 + delta.x, size.width),
            y: wrap(self.y as i64 + delta.y, size.height),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Reduces `coord` into `[0, axis)`. `axis` must be non-zero.
pub fn wrap(coord: i64, axis: u16) -> u16 {
    coord.rem_euclid(axis as i64) as u16
}

pub fn step(cell: Cell, heading: Heading, size: Size) -> Cell {
    cell.wrapped_add(heading.into(), size)
}
