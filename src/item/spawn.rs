use rand::Rng;

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::error::{Error, ErrorConversion, ErrorType, Result};
use crate::item::{Item, ItemType};
use crate::snake::Snake;

/// A new item on a cell not covered by the snake or any of `others`
pub fn spawn_item<'a>(
    item_type: ItemType,
    snake: &Snake,
    others: impl IntoIterator<Item = &'a Item>,
    rng: &mut impl Rng,
) -> Result<Item> {
    let occupied_cells = get_occupied_cells(snake, others);
    let pos = random_free_spot(&occupied_cells, rng).ok_or_else(|| {
        Error::from(ErrorType::BoardFull { occupied: occupied_cells.len() })
            .with_trace_step(format!("spawn_item({:?})", item_type))
    })?;

    log::debug!("spawned {:?} at {:?}", item_type, pos);
    Ok(Item::new(item_type, pos))
}

/// Move `item` to a cell not covered by the snake or any of `others`,
/// on error the item stays where it was
pub fn respawn<'a>(
    item: &mut Item,
    snake: &Snake,
    others: impl IntoIterator<Item = &'a Item>,
    rng: &mut impl Rng,
) -> Result {
    *item = spawn_item(item.item_type, snake, others, rng).with_trace_step("respawn")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Cell, Dir};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_respawn_avoids_snake_and_other_items() {
        let mut rng = StdRng::seed_from_u64(11);

        // everything but the last three cells of the board is snake
        let mut snake = Snake::new(Cell::from_index(0), Dir::R);
        snake.body = (0..Cell::board_len() - 3).map(Cell::from_index).collect();

        let last = Cell::board_len() - 1;
        let stone = Item::new(ItemType::Stone, Cell::from_index(last));
        let bad_food = Item::new(ItemType::BadFood, Cell::from_index(last - 1));
        let mut apple = Item::new(ItemType::Apple, Cell::from_index(0));

        for _ in 0..20 {
            respawn(&mut apple, &snake, [&stone, &bad_food], &mut rng).unwrap();
            assert_eq!(apple.pos, Cell::from_index(last - 2));
            assert_eq!(apple.item_type, ItemType::Apple);
        }
    }

    #[test]
    fn test_full_board_is_reported() {
        let mut rng = StdRng::seed_from_u64(12);

        let mut snake = Snake::new(Cell::from_index(0), Dir::R);
        snake.body = (0..Cell::board_len() - 1).map(Cell::from_index).collect();
        let stone = Item::new(ItemType::Stone, Cell::from_index(Cell::board_len() - 1));
        let mut apple = Item::new(ItemType::Apple, Cell::from_index(5));

        let err = respawn(&mut apple, &snake, [&stone], &mut rng).unwrap_err();
        assert!(err.is_board_full());
        // unchanged
        assert_eq!(apple.pos, Cell::from_index(5));
    }

    #[test]
    fn test_spawned_items_never_overlap() {
        let mut rng = StdRng::seed_from_u64(13);
        let snake = Snake::new(Cell::center(), Dir::U);

        for _ in 0..200 {
            let apple = spawn_item(ItemType::Apple, &snake, [] as [&Item; 0], &mut rng).unwrap();
            let stone = spawn_item(ItemType::Stone, &snake, [&apple], &mut rng).unwrap();
            let bad_food =
                spawn_item(ItemType::BadFood, &snake, [&apple, &stone], &mut rng).unwrap();

            let cells = [snake.head(), apple.pos, stone.pos, bad_food.pos];
            for (i, a) in cells.iter().enumerate() {
                for b in &cells[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }
}
