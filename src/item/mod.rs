use crate::app::palette::{APPLE_COLOR, BAD_FOOD_COLOR, STONE_COLOR};
use crate::basic::Cell;
use crate::color::Color;
use crate::rendering::{Drawable, Surface};

pub mod spawn;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ItemType {
    /// Eating it grows the snake by one segment
    Apple,
    /// Running into it resets the snake
    Stone,
    /// Eating it shrinks the snake by one segment
    BadFood,
}

impl ItemType {
    pub fn color(self) -> Color {
        match self {
            ItemType::Apple => *APPLE_COLOR,
            ItemType::Stone => *STONE_COLOR,
            ItemType::BadFood => *BAD_FOOD_COLOR,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Item {
    pub pos: Cell,
    pub item_type: ItemType,
    pub color: Color,
}

impl Item {
    pub fn new(item_type: ItemType, pos: Cell) -> Self {
        Self { pos, item_type, color: item_type.color() }
    }
}

impl Drawable for Item {
    fn render(&self, target: &mut dyn Surface) {
        target.fill_cell(self.pos, self.color, true)
    }
}

#[test]
fn test_item_renders_own_cell() {
    use crate::rendering::RecordingSurface;

    let stone = Item::new(ItemType::Stone, Cell::new(60, 80));
    let mut surface = RecordingSurface::default();
    stone.render(&mut surface);
    assert_eq!(surface.0, vec![(Cell::new(60, 80), *STONE_COLOR, true)]);
}
