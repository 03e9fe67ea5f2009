use ggez::graphics::Mesh;
use rand::Rng;

use crate::app::control::Clock;

/// Resources owned by the game loop
pub struct GameContext<R: Rng> {
    pub clock: Clock,
    pub rng: R,
    /// Cached on the first draw, needs a graphics context to build
    pub cell_border: Option<Mesh>,
}

impl<R: Rng> GameContext<R> {
    pub fn new(tick_rate: u32, rng: R) -> Self {
        Self {
            clock: Clock::new(tick_rate),
            rng,
            cell_border: None,
        }
    }
}
