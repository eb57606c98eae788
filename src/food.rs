use crate::grid::Cell;

/// Which kind of food sits on a cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FoodKind {
    Growth,
    Shrink,
}

/// Body-length operation a food triggers when eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodEffect {
    Grow,
    Shrink,
}

impl FoodKind {
    /// Maps the food kind to the engine operation it triggers.
    #[must_use]
    pub fn effect(self) -> FoodEffect {
        match self {
            Self::Growth => FoodEffect::Grow,
            Self::Shrink => FoodEffect::Shrink,
        }
    }
}

/// Food entity on the board. Eating it moves it; it is never recreated.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
    pub kind: FoodKind,
}

impl Food {
    #[must_use]
    pub fn new(position: Cell, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    /// Creates a growth food at `position`.
    #[must_use]
    pub fn growth(position: Cell) -> Self {
        Self::new(position, FoodKind::Growth)
    }

    /// Creates a shrink food at `position`.
    #[must_use]
    pub fn shrink(position: Cell) -> Self {
        Self::new(position, FoodKind::Shrink)
    }

    /// Moves this food to `position`, keeping its kind.
    pub fn relocate(&mut self, position: Cell) {
        self.position = position;
    }
}

/// Static blocking cell, fixed for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Obstacle {
    pub position: Cell,
}

impl Obstacle {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }
}
