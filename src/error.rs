use std::io;

use thiserror::Error;

use crate::grid::GridSize;

/// Errors surfaced by session setup and persistence.
#[derive(Debug, Error)]
pub enum GameError {
    /// Every cell is already taken; nothing can be placed.
    #[error("no free cell left on the {}x{} board", .bounds.width, .bounds.height)]
    BoardFull { bounds: GridSize },

    /// The grid cannot hold the snake, obstacles and food of one session.
    #[error("a {}x{} board cannot fit {} entities", .bounds.width, .bounds.height, .required)]
    GridTooSmall { bounds: GridSize, required: usize },

    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("score file encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
