use std::collections::VecDeque;

use rand::Rng;

use crate::app::palette::{SNAKE_COLOR, SNAKE_HEAD_COLOR};
use crate::basic::{Cell, Dir};
use crate::color::Color;
use crate::rendering::{Drawable, Surface};

pub struct Snake {
    /// Head first, consecutive cells are one step apart (with wraparound)
    pub body: VecDeque<Cell>,

    /// Direction the snake moved in on the last tick
    pub dir: Dir,

    /// Direction requested since the last tick, applied
    /// by `apply_dir` right before the next move
    pub next_dir: Option<Dir>,

    /// Cell vacated by the tail on the last move, the scene
    /// paints it over with the background color
    pub last: Option<Cell>,

    pub head_color: Color,
    pub body_color: Color,
}

impl Snake {
    /// The head can't share a cell with the segments before this
    /// index, they are always adjacent to it
    pub const FIRST_COLLIDABLE_SEGMENT: usize = 2;

    pub fn new(pos: Cell, dir: Dir) -> Self {
        let mut body = VecDeque::new();
        body.push_back(pos);

        Self {
            body,
            dir,
            next_dir: None,
            last: None,
            head_color: *SNAKE_HEAD_COLOR,
            body_color: *SNAKE_COLOR,
        }
    }

    /// A single segment in the middle of the board going in a random direction
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self::new(Cell::center(), Dir::random(rng))
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Where the head will be after the next move
    pub fn predict_move(&self) -> Cell {
        self.head().wrapping_translate(self.dir)
    }

    /// Request a turn for the next tick, returns false (and changes
    /// nothing) if `dir` would reverse the snake onto itself
    pub fn update_dir(&mut self, dir: Dir) -> bool {
        if dir == -self.dir {
            log::trace!("ignoring 180° turn {:?} -> {:?}", self.dir, dir);
            return false;
        }

        self.next_dir = Some(dir);
        true
    }

    pub fn apply_dir(&mut self) {
        if let Some(dir) = self.next_dir.take() {
            if dir != self.dir {
                log::debug!("turning {:?} -> {:?}", self.dir, dir);
            }
            self.dir = dir;
        }
    }

    /// Move one cell forward, the tail stays in place when the new
    /// head lands on `apple` (the snake grows by one segment).
    /// Returns whether the snake grew
    pub fn advance(&mut self, apple: Cell) -> bool {
        let new_head = self.predict_move();
        self.body.push_front(new_head);

        if new_head == apple {
            self.last = None;
            true
        } else {
            self.last = self.body.pop_back();
            false
        }
    }

    pub fn crashed_into_self(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .skip(Self::FIRST_COLLIDABLE_SEGMENT)
            .any(|&cell| cell == head)
    }

    /// Back to a single segment in the middle of the board
    /// going in a random direction
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let Self { head_color, body_color, .. } = *self;
        *self = Self {
            head_color,
            body_color,
            ..Self::spawn(rng)
        };
    }

    /// Drop the tail segment, a single-segment snake stays as it is.
    /// Returns whether a segment was removed
    pub fn shrink(&mut self) -> bool {
        if self.len() > 1 {
            self.body.pop_back();
            true
        } else {
            false
        }
    }
}

impl Drawable for Snake {
    fn render(&self, target: &mut dyn Surface) {
        target.fill_cell(self.head(), self.head_color, true);
        for &cell in self.body.iter().skip(1) {
            target.fill_cell(cell, self.body_color, true);
        }
    }
}
