use std::collections::{HashSet, VecDeque};

use crate::food::{FoodEffect, FoodKind};
use crate::grid::{advance, Cell, Direction, GridSize};

/// What happened to the snake during one [`Snake::step`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// Body shifted by one cell.
    Moved,
    /// Head landed on its own body and the snake was cut down to the head.
    SelfBitten,
}

/// Snake body, heading and the cells it gave up on the latest tick.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    last_removed_tail: Cell,
    vacated: HashSet<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        let body = VecDeque::from(segments);
        let last_removed_tail = body[body.len() - 1];

        Self {
            body,
            direction,
            last_removed_tail,
            vacated: HashSet::new(),
        }
    }

    /// Turns the snake for the next step.
    ///
    /// Reversing straight into the neck is ignored. Returns whether the
    /// heading was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advances the head one cell, wrapping around the grid edges.
    ///
    /// A bare step never changes the length. If the new head lands on the
    /// rest of the body the snake is truncated to that head alone, and the
    /// cells it gave up are recorded in [`Snake::vacated_cells`].
    pub fn step(&mut self, bounds: GridSize) -> StepOutcome {
        let new_head = advance(self.head(), self.direction, bounds);

        self.last_removed_tail = self.tail();
        self.body.push_front(new_head);
        let _ = self.body.pop_back();

        if !self.head_overlaps_body() {
            return StepOutcome::Moved;
        }

        self.vacated
            .extend(self.body.drain(1..).filter(|cell| *cell != new_head));
        StepOutcome::SelfBitten
    }

    /// Re-attaches the tail cell released by the latest step.
    pub fn grow(&mut self) {
        self.body.push_back(self.last_removed_tail);
    }

    /// Drops the tail cell. No-op at length one.
    pub fn shrink(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        if let Some(tail) = self.body.pop_back() {
            self.last_removed_tail = tail;
            self.vacated.insert(tail);
        }
    }

    /// Applies what eating `kind` does to the body.
    pub fn apply_food_effect(&mut self, kind: FoodKind) {
        match kind.effect() {
            FoodEffect::Grow => self.grow(),
            FoodEffect::Shrink => self.shrink(),
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Returns the current tail cell (the head for a one-cell snake).
    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Iterates over body segments from head to tail.
    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell released by the most recent step or shrink.
    #[must_use]
    pub fn last_removed_tail(&self) -> Cell {
        self.last_removed_tail
    }

    /// Cells given up by a self-bite or a shrink since the last drain.
    #[must_use]
    pub fn vacated_cells(&self) -> &HashSet<Cell> {
        &self.vacated
    }

    /// Hands over the vacated cells and clears the set.
    pub fn take_vacated_cells(&mut self) -> HashSet<Cell> {
        std::mem::take(&mut self.vacated)
    }
}
