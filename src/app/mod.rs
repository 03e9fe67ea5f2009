use ggez::event::EventHandler;
use ggez::graphics::Canvas;
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use rand::rngs::ThreadRng;
use std::time::Instant;
use rand::{thread_rng, Rng};

use crate::app::game_context::GameContext;
use crate::app::input::Input;
use crate::app::palette::BACKGROUND_COLOR;
use crate::app::stats::Stats;
use crate::config::TICK_RATE;
use crate::error::{Error, ErrorConversion, Result};
use crate::item::spawn::{respawn, spawn_item};
use crate::item::{Item, ItemType};
use crate::rendering::{cell_border_mesh, CanvasSurface, Drawable, Surface};
use crate::snake::Snake;

pub mod control;
pub mod game_context;
pub mod input;
pub mod palette;
pub mod stats;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Display)]
pub enum Crash {
    #[display(fmt = "itself")]
    SelfCollision,
    #[display(fmt = "a stone")]
    Stone,
}

/// What happened during a single tick
#[derive(Default, Debug, Eq, PartialEq)]
pub struct TickReport {
    pub ate_apple: bool,
    pub ate_bad_food: bool,
    /// The snake was reset
    pub crash: Option<Crash>,
    /// The board filled up and a new round started
    pub won: bool,
}

pub struct Game<R: Rng = ThreadRng> {
    gtx: GameContext<R>,

    snake: Snake,
    apple: Item,
    stone: Item,
    bad_food: Item,

    stats: Stats,
}

impl Game {
    pub fn new() -> Result<Self> {
        Self::with_rng(thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rng: R) -> Result<Self> {
        let mut gtx = GameContext::new(TICK_RATE, rng);
        let snake = Snake::spawn(&mut gtx.rng);
        let (apple, stone, bad_food) =
            spawn_items(&snake, &mut gtx.rng).with_trace_step("Game::with_rng")?;

        log::info!(
            "new game, snake at {:?} going {:?}, {} ticks per second",
            snake.head(),
            snake.dir,
            gtx.clock.tick_rate(),
        );

        Ok(Self {
            gtx,
            snake,
            apple,
            stone,
            bad_food,
            stats: Stats::default(),
        })
    }

    /// Fresh snake and items, used when a round is won
    fn restart(&mut self) -> Result {
        self.snake.reset(&mut self.gtx.rng);
        let (apple, stone, bad_food) =
            spawn_items(&self.snake, &mut self.gtx.rng).with_trace_step("Game::restart")?;
        self.apple = apple;
        self.stone = stone;
        self.bad_food = bad_food;
        Ok(())
    }

    pub fn handle_input(&mut self, input: Input, ctx: &mut Context) {
        log::debug!("input: {:?}", input);
        match input {
            Input::Turn(dir) => {
                self.snake.update_dir(dir);
            }
            Input::Quit => ctx.request_quit(),
        }
    }

    /// Advance the game by one step, a full board wins the round
    /// and starts a new one
    pub fn tick(&mut self) -> Result<TickReport> {
        let mut report = TickReport::default();

        if let Err(e) = self.step(&mut report) {
            if !e.is_board_full() {
                return Err(e.with_trace_step("Game::tick"));
            }

            log::info!("no free cells left at length {}, round won", self.snake.len());
            report.won = true;
            self.stats.record(&report, self.snake.len());
            self.restart().with_trace_step("Game::tick")?;
            return Ok(report);
        }

        self.stats.record(&report, self.snake.len());
        Ok(report)
    }

    fn step(&mut self, report: &mut TickReport) -> Result {
        let Self { gtx, snake, apple, stone, bad_food, .. } = self;
        let rng = &mut gtx.rng;

        snake.apply_dir();
        snake.advance(apple.pos);
        log::trace!("head at {:?}, length {}", snake.head(), snake.len());

        let crash = if snake.crashed_into_self() {
            Some(Crash::SelfCollision)
        } else if snake.head() == stone.pos {
            Some(Crash::Stone)
        } else {
            None
        };

        if let Some(crash) = crash {
            log::info!("crashed into {} at length {}", crash, snake.len());
            report.crash = Some(crash);

            snake.reset(rng);
            respawn(stone, snake, [&*apple, &*bad_food], rng)?;

            // nothing may sit under the fresh snake
            if apple.pos == snake.head() {
                respawn(apple, snake, [&*stone, &*bad_food], rng)?;
            }
            if bad_food.pos == snake.head() {
                respawn(bad_food, snake, [&*apple, &*stone], rng)?;
            }
            return Ok(());
        }

        if snake.head() == apple.pos {
            report.ate_apple = true;
            respawn(apple, snake, [&*stone, &*bad_food], rng)?;
        }

        if snake.head() == bad_food.pos {
            report.ate_bad_food = true;
            snake.shrink();
            respawn(bad_food, snake, [&*apple, &*stone], rng)?;
        }

        Ok(())
    }
}

fn spawn_items(snake: &Snake, rng: &mut impl Rng) -> Result<(Item, Item, Item)> {
    let apple = spawn_item(ItemType::Apple, snake, [] as [&Item; 0], rng)?;
    let stone = spawn_item(ItemType::Stone, snake, [&apple], rng)?;
    let bad_food = spawn_item(ItemType::BadFood, snake, [&apple, &stone], rng)?;
    Ok((apple, stone, bad_food))
}

impl<R: Rng> Drawable for Game<R> {
    fn render(&self, target: &mut dyn Surface) {
        // an item may have respawned onto the vacated cell,
        // erase it before anything live is drawn
        if let Some(last) = self.snake.last {
            target.fill_cell(last, *BACKGROUND_COLOR, false);
        }

        self.stone.render(target);
        self.apple.render(target);
        self.bad_food.render(target);
        self.snake.render(target);
    }
}

impl<R: Rng> EventHandler<Error> for Game<R> {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        if self.gtx.clock.tick_due(Instant::now()) {
            self.tick()?;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        if self.gtx.cell_border.is_none() {
            self.gtx.cell_border = Some(cell_border_mesh(ctx).with_trace_step("Game::draw")?);
        }

        let mut canvas = Canvas::from_frame(ctx, BACKGROUND_COLOR.0);
        if let Some(cell_border) = &self.gtx.cell_border {
            self.render(&mut CanvasSurface::new(&mut canvas, cell_border));
        }

        canvas
            .finish(ctx)
            .map_err(Error::from)
            .with_trace_step("Game::draw")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        if let Some(input) = input.keycode.and_then(Input::from_keycode) {
            self.handle_input(input, ctx);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool> {
        log::info!("quitting after {} ticks ({})", self.gtx.clock.ticks(), self.stats);
        Ok(false)
    }
}
