use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::Cell;
use crate::item::Item;
use crate::snake::Snake;

/// Cells covered by the snake and the given items, sorted
/// by board index and without duplicates
pub fn get_occupied_cells<'a>(snake: &Snake, items: impl IntoIterator<Item = &'a Item>) -> Vec<Cell> {
    let items = items.into_iter();
    // upper bound
    let mut occupied_cells = Vec::with_capacity(snake.len() + items.size_hint().0);
    occupied_cells.extend(snake.body.iter().copied());
    occupied_cells.extend(items.map(|item| item.pos));
    occupied_cells.sort_unstable_by_key(|cell| cell.index());
    occupied_cells.dedup();
    occupied_cells
}

/// Uniformly random cell outside of `occupied_cells`, `None`
/// if the board is full. `occupied_cells` must be sorted by
/// board index and free of duplicates (see [`get_occupied_cells`])
pub fn random_free_spot(occupied_cells: &[Cell], rng: &mut impl Rng) -> Option<Cell> {
    let board_len = Cell::board_len();
    let free_spaces = board_len.saturating_sub(occupied_cells.len());
    if free_spaces == 0 {
        return None;
    }

    // pick the n-th free cell by skipping over every occupied
    // cell that comes before it in index order
    let mut new_idx = (0..free_spaces).sample_single(rng);
    for cell in occupied_cells {
        if cell.index() <= new_idx {
            new_idx += 1;
        }
    }

    let cell = Cell::from_index(new_idx);
    debug_assert!(cell.is_on_board(), "{:?} is off the board", cell);
    Some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir;
    use crate::item::ItemType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn snake_at(cells: &[Cell]) -> Snake {
        let mut snake = Snake::new(cells[0], Dir::R);
        snake.body = cells.iter().copied().collect();
        snake
    }

    #[test]
    fn test_occupied_cells_sorted_and_deduplicated() {
        let snake = snake_at(&[Cell::new(40, 20), Cell::new(20, 20), Cell::new(0, 20)]);
        let items = [
            Item::new(ItemType::Apple, Cell::new(0, 0)),
            Item::new(ItemType::Stone, Cell::new(20, 20)),
        ];
        let occupied = get_occupied_cells(&snake, &items);
        assert_eq!(
            occupied,
            vec![Cell::new(0, 0), Cell::new(0, 20), Cell::new(20, 20), Cell::new(40, 20)]
        );
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        // occupy every other cell
        let occupied: Vec<_> = Cell::all().step_by(2).collect();
        let occupied_set: HashSet<_> = occupied.iter().copied().collect();
        for _ in 0..1000 {
            let cell = random_free_spot(&occupied, &mut rng).expect("board has free cells");
            assert!(cell.is_on_board());
            assert!(!occupied_set.contains(&cell), "{:?} is occupied", cell);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(2);
        for free in [0, 1, 137, Cell::board_len() - 1] {
            let occupied: Vec<_> = Cell::all().filter(|cell| cell.index() != free).collect();
            for _ in 0..10 {
                assert_eq!(random_free_spot(&occupied, &mut rng), Some(Cell::from_index(free)));
            }
        }
    }

    #[test]
    fn test_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let occupied: Vec<_> = Cell::all().collect();
        assert_eq!(random_free_spot(&occupied, &mut rng), None);
    }

    #[test]
    fn test_every_free_cell_reachable() {
        let mut rng = StdRng::seed_from_u64(4);
        let occupied: Vec<_> = Cell::all().skip(4).collect();
        let seen: HashSet<_> = (0..500)
            .map(|_| random_free_spot(&occupied, &mut rng).unwrap())
            .collect();
        let expected: HashSet<_> = (0..4).map(Cell::from_index).collect();
        assert_eq!(seen, expected);
    }
}
