use ratatui::style::Color;
use ratatui::symbols::border;

use crate::grid::GridSize;

/// Default play-field size (a 640x480 window cut into 20px cells).
pub const DEFAULT_GRID_SIZE: GridSize = GridSize {
    width: 32,
    height: 24,
};

/// Default simulation ticks per second.
pub const DEFAULT_TICK_RATE: u32 = 20;

/// Lowest tick rate reachable through speed adjustments.
pub const MIN_TICK_RATE: u32 = 1;

/// Minimum number of growth or shrink food items on the board.
pub const MIN_FOOD_COUNT: u32 = 1;

/// Default number of growth food items per session.
pub const DEFAULT_GROWTH_FOOD_COUNT: u32 = 1;

/// Default number of shrink food items per session.
pub const DEFAULT_SHRINK_FOOD_COUNT: u32 = 1;

/// Fewest obstacles placed at the start of a session.
pub const MIN_OBSTACLES: u32 = 1;

/// Most obstacles placed at the start of a session.
pub const MAX_OBSTACLES: u32 = 5;

/// Frame pacing for the render/input loop, independent of the tick rate.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Application directory under the platform data dir.
pub const APP_DIR_NAME: &str = "toroid-snake";

/// File holding the persisted high score.
pub const HIGH_SCORE_FILE_NAME: &str = "high_score.json";

/// Default log file, written next to the working directory.
pub const DEFAULT_LOG_FILE: &str = "toroid-snake.log";

/// Colors for every entity drawn on the board.
#[derive(Debug)]
pub struct Palette {
    pub board_bg: Color,
    pub border: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub growth_food: Color,
    pub shrink_food: Color,
    pub obstacle: Color,
    pub status: Color,
}

/// Green snake, red apples, dark red rotten apples, grey rocks.
pub const PALETTE: Palette = Palette {
    board_bg: Color::Black,
    border: Color::Rgb(93, 216, 228),
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    growth_food: Color::Red,
    shrink_food: Color::Rgb(128, 0, 0),
    obstacle: Color::DarkGray,
    status: Color::White,
};

/// Full block for every occupied cell.
pub const GLYPH_CELL: &str = "█";

/// Border drawn around the toroidal board; edges are not walls.
pub const BORDER_SET: border::Set = border::ROUNDED;
