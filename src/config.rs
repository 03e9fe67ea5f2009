use static_assertions::const_assert;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Side length of a cell in pixels
pub const GRID_SIZE: i32 = 20;

/// Board dimensions in cells
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / GRID_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / GRID_SIZE;

/// Game updates per second
pub const TICK_RATE: u32 = 3;

pub const WINDOW_TITLE: &str = "Snake";

pub const BORDER_THICKNESS: f32 = 1.;

const_assert!(GRID_SIZE > 0);
const_assert!(SCREEN_WIDTH > 0 && SCREEN_WIDTH % GRID_SIZE == 0);
const_assert!(SCREEN_HEIGHT > 0 && SCREEN_HEIGHT % GRID_SIZE == 0);
// a fresh round needs a free cell for the snake and each of the three items
const_assert!(GRID_WIDTH * GRID_HEIGHT >= 4);
const_assert!(TICK_RATE > 0);
