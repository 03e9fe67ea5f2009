use ggez::input::keyboard::KeyCode;

use crate::basic::Dir;

/// Decoded keyboard input
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Input {
    Turn(Dir),
    Quit,
}

impl Input {
    pub fn from_keycode(key: KeyCode) -> Option<Self> {
        use KeyCode::*;

        match key {
            Up => Some(Self::Turn(Dir::U)),
            Down => Some(Self::Turn(Dir::D)),
            Left => Some(Self::Turn(Dir::L)),
            Right => Some(Self::Turn(Dir::R)),
            Escape => Some(Self::Quit),
            _ => None,
        }
    }
}

#[test]
fn test_arrow_keys() {
    assert_eq!(Input::from_keycode(KeyCode::Up), Some(Input::Turn(Dir::U)));
    assert_eq!(Input::from_keycode(KeyCode::Down), Some(Input::Turn(Dir::D)));
    assert_eq!(Input::from_keycode(KeyCode::Left), Some(Input::Turn(Dir::L)));
    assert_eq!(Input::from_keycode(KeyCode::Right), Some(Input::Turn(Dir::R)));
    assert_eq!(Input::from_keycode(KeyCode::Escape), Some(Input::Quit));
    assert_eq!(Input::from_keycode(KeyCode::Space), None);
}
