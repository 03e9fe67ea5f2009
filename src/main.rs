#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::app::Game;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod color;
mod config;
mod error;
mod item;
mod rendering;
mod snake;

fn main() -> Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(WindowMode::default().dimensions(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32))
        .window_setup(WindowSetup::default().title(WINDOW_TITLE))
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    let game = Game::new().with_trace_step("main")?;
    event::run(ctx, event_loop, game)
}
