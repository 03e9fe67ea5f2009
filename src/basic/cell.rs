use ggez::graphics::Rect;
use ggez::mint::Point2;
use num_integer::Integer;
use std::fmt::{Debug, Formatter};

use super::dir::Dir;
use crate::config::{GRID_HEIGHT, GRID_SIZE, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

// INVARIANT: x and y are multiples of GRID_SIZE within the screen bounds
#[derive(Eq, PartialEq, Copy, Clone, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell-aligned middle of the board, where every snake starts
    pub const fn center() -> Self {
        Self {
            x: GRID_WIDTH / 2 * GRID_SIZE,
            y: GRID_HEIGHT / 2 * GRID_SIZE,
        }
    }

    /// One step in `dir`, leaving through an edge re-enters from the opposite one
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: (self.x + dx * GRID_SIZE).mod_floor(&SCREEN_WIDTH),
            y: (self.y + dy * GRID_SIZE).mod_floor(&SCREEN_HEIGHT),
        }
    }

    pub fn is_on_board(self) -> bool {
        (0..SCREEN_WIDTH).contains(&self.x)
            && (0..SCREEN_HEIGHT).contains(&self.y)
            && self.x % GRID_SIZE == 0
            && self.y % GRID_SIZE == 0
    }

    /// Row-major index of the cell on the board
    pub fn index(self) -> usize {
        ((self.y / GRID_SIZE) * GRID_WIDTH + self.x / GRID_SIZE) as usize
    }

    pub fn from_index(idx: usize) -> Self {
        let idx = idx as i32;
        Self {
            x: idx % GRID_WIDTH * GRID_SIZE,
            y: idx / GRID_WIDTH * GRID_SIZE,
        }
    }

    pub const fn board_len() -> usize {
        (GRID_WIDTH * GRID_HEIGHT) as usize
    }

    /// Every cell of the board in row-major order
    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::board_len()).map(Self::from_index)
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            GRID_SIZE as f32,
            GRID_SIZE as f32,
        )
    }
}

impl From<Cell> for Point2<f32> {
    fn from(Cell { x, y }: Cell) -> Self {
        Point2 { x: x as f32, y: y as f32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Dir::*;

    #[test]
    fn test_wraparound_on_every_edge() {
        let right_edge = Cell::new(SCREEN_WIDTH - GRID_SIZE, 240);
        assert_eq!(right_edge.wrapping_translate(R), Cell::new(0, 240));

        let left_edge = Cell::new(0, 240);
        assert_eq!(
            left_edge.wrapping_translate(L),
            Cell::new(SCREEN_WIDTH - GRID_SIZE, 240)
        );

        let top_edge = Cell::new(100, 0);
        assert_eq!(
            top_edge.wrapping_translate(U),
            Cell::new(100, SCREEN_HEIGHT - GRID_SIZE)
        );

        let bottom_edge = Cell::new(100, SCREEN_HEIGHT - GRID_SIZE);
        assert_eq!(bottom_edge.wrapping_translate(D), Cell::new(100, 0));
    }

    #[test]
    fn test_translate_stays_on_board() {
        for cell in Cell::all() {
            for dir in Dir::ALL {
                let moved = cell.wrapping_translate(dir);
                assert!(moved.is_on_board(), "{:?} -> {:?} = {:?}", cell, dir, moved);
                assert_eq!(moved.wrapping_translate(-dir), cell);
            }
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(Cell::center(), Cell::new(320, 240));
        assert!(Cell::center().is_on_board());
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Cell::board_len(), 32 * 24);
        assert_eq!(Cell::from_index(0), Cell::new(0, 0));
        assert_eq!(Cell::from_index(1), Cell::new(20, 0));
        assert_eq!(Cell::from_index(32), Cell::new(0, 20));
        assert_eq!(Cell::from_index(32 * 24 - 1), Cell::new(620, 460));
        for (idx, cell) in Cell::all().enumerate() {
            assert!(cell.is_on_board());
            assert_eq!(cell.index(), idx);
        }
    }

    #[test]
    fn test_off_board() {
        assert!(!Cell::new(SCREEN_WIDTH, 0).is_on_board());
        assert!(!Cell::new(0, -GRID_SIZE).is_on_board());
        assert!(!Cell::new(5, 0).is_on_board());
    }
}
