//! Movement and collision: one tick of the organism on the torus.

use std::collections::{HashSet, VecDeque};

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::food::FoodPlacer;
use crate::grid::{step, Cell, Heading, Size};

/// The organism. `head` is kept apart from `body` so it can never be empty;
/// `body` runs from the neck to the tail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snek {
    head: Cell,
    body: VecDeque<Cell>,
}

impl Snek {
    /// Lays `length` cells out from `start` towards the tail, i.e. against
    /// `heading`, wrapping at the edges.
    pub fn new(start: Cell, heading: Heading, length: usize, size: Size) -> Self {
        let mut body = VecDeque::with_capacity(length.saturating_sub(1));
        let mut cell = start;
        for _ in 1..length {
            cell = step(cell, heading.opposite(), size);
            body.push_back(cell);
        }
        Snek { head: start, body }
    }

    /// Builds an organism from explicit cells, head first.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let mut cells = cells.into_iter();
        let head = cells.next()?;
        Some(Snek {
            head,
            body: cells.collect(),
        })
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    pub fn tail(&self) -> Cell {
        self.body.back().copied().unwrap_or(self.head)
    }

    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Head first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    pub fn occupancy(&self) -> HashSet<Cell> {
        self.cells().collect()
    }

    fn slither(&mut self, new_head: Cell, grow: bool) {
        let old_head = std::mem::replace(&mut self.head, new_head);
        self.body.push_front(old_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    /// Ate the food; a fresh morsel is already placed.
    Ate,
    /// Hit its own body; nothing was mutated.
    Collided,
    /// Ate the food and now covers every cell, so no morsel could be placed.
    Filled,
}

impl StepResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepResult::Collided | StepResult::Filled)
    }
}

/// Organism, food and score on one grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arena {
    size: Size,
    snek: Snek,
    food: Option<Cell>,
    score: u32,
    placer: FoodPlacer,
}

impl Arena {
    /// A fresh run laid out from `config`. The config is expected to have
    /// been validated already.
    pub fn spawn(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let snek = Snek::new(
            config.start,
            config.initial_heading,
            config.initial_length,
            config.size,
        );
        let placer = FoodPlacer::new(config.placement_attempts);
        let food = placer.place(rng, config.size, &snek.occupancy());
        Arena {
            size: config.size,
            snek,
            food,
            score: 0,
            placer,
        }
    }

    pub fn with_parts(size: Size, snek: Snek, food: Option<Cell>, placer: FoodPlacer) -> Self {
        Arena {
            size,
            snek,
            food,
            score: 0,
            placer,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn snek(&self) -> &Snek {
        &self.snek
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Moves the organism one cell along `heading`.
    ///
    /// Collision is judged against the body as it stands before the move,
    /// tail included, even though the tail would vacate its cell this tick.
    pub fn advance(&mut self, heading: Heading, rng: &mut impl Rng) -> StepResult {
        let new_head = step(self.snek.head(), heading, self.size);

        if self.snek.occupies(new_head) {
            debug!("Head ran into its own body at {new_head}");
            return StepResult::Collided;
        }

        let ate = self.food == Some(new_head);
        self.snek.slither(new_head, ate);
        if !ate {
            return StepResult::Moved;
        }

        self.score += 1;
        self.food = self.placer.place(rng, self.size, &self.snek.occupancy());
        match self.food {
            Some(_) => StepResult::Ate,
            None => StepResult::Filled,
        }
    }
}
