use std::collections::HashSet;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Size};

pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 64;

/// Picks a uniformly random free cell for the next morsel.
///
/// Rejection sampling is tried first since the organism is usually small
/// next to the grid. Once `max_attempts` draws have all landed on occupied
/// cells the free cells are listed explicitly and one is drawn from that
/// list, so placement always terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodPlacer {
    max_attempts: usize,
}

impl Default for FoodPlacer {
    fn default() -> Self {
        FoodPlacer::new(DEFAULT_PLACEMENT_ATTEMPTS)
    }
}

impl FoodPlacer {
    pub fn new(max_attempts: usize) -> Self {
        FoodPlacer { max_attempts }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns `None` only when every cell of the grid is occupied.
    pub fn place(
        &self,
        rng: &mut impl Rng,
        size: Size,
        occupied: &HashSet<Cell>,
    ) -> Option<Cell> {
        if occupied.len() >= size.area() {
            return None;
        }

        for _ in 0..self.max_attempts {
            let cell = Cell {
                x: rng.gen_range(0..size.width),
                y: rng.gen_range(0..size.height),
            };
            if !occupied.contains(&cell) {
                debug!("Placed food at {cell}");
                return Some(cell);
            }
        }

        warn!(
            "Food placement missed {} times with {}/{} cells occupied, drawing from the free list",
            self.max_attempts,
            occupied.len(),
            size.area()
        );
        let free: Vec<Cell> = size.cells().filter(|c| !occupied.contains(c)).collect();
        free.choose(rng).copied()
    }
}
