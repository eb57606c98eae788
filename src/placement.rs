use std::collections::HashSet;

use rand::Rng;

use crate::error::GameError;
use crate::food::{Food, FoodKind, Obstacle};
use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Obstacles and food laid out for a fresh session.
#[derive(Debug, Clone)]
pub struct Layout {
    pub obstacles: Vec<Obstacle>,
    pub foods: Vec<Food>,
}

/// Picks a uniformly random cell that is not in `occupied`.
pub fn random_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Cell>,
) -> Result<Cell, GameError> {
    let candidates: Vec<Cell> = bounds
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if candidates.is_empty() {
        return Err(GameError::BoardFull { bounds });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

/// Places `obstacle_count` obstacles, then growth food, then shrink food.
///
/// Each entity avoids the snake and everything placed before it, so the
/// result is pairwise disjoint.
pub fn spawn_layout<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    obstacle_count: usize,
    growth_food_count: usize,
    shrink_food_count: usize,
) -> Result<Layout, GameError> {
    let required = snake.len() + obstacle_count + growth_food_count + shrink_food_count;
    if required > bounds.total_cells() {
        return Err(GameError::GridTooSmall { bounds, required });
    }

    let mut occupied: HashSet<Cell> = snake.body().copied().collect();

    let mut obstacles = Vec::with_capacity(obstacle_count);
    for _ in 0..obstacle_count {
        let position = random_free_cell(rng, bounds, &occupied)?;
        occupied.insert(position);
        obstacles.push(Obstacle::new(position));
    }

    let food_kinds = std::iter::repeat(FoodKind::Growth)
        .take(growth_food_count)
        .chain(std::iter::repeat(FoodKind::Shrink).take(shrink_food_count));

    let mut foods = Vec::with_capacity(growth_food_count + shrink_food_count);
    for kind in food_kinds {
        let position = random_free_cell(rng, bounds, &occupied)?;
        occupied.insert(position);
        foods.push(Food::new(position, kind));
    }

    Ok(Layout { obstacles, foods })
}

/// Cells an eaten food must avoid when it is placed again.
///
/// Other food is left out on purpose: two foods may end up stacked.
#[must_use]
pub fn eaten_food_exclusions(snake: &Snake, obstacles: &[Obstacle]) -> HashSet<Cell> {
    snake
        .body()
        .copied()
        .chain(obstacles.iter().map(|obstacle| obstacle.position))
        .collect()
}
