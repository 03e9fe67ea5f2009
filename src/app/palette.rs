use crate::color::Color;

lazy_static! {
    pub static ref BACKGROUND_COLOR: Color = Color::from_rgb(0, 0, 0);
    pub static ref BORDER_COLOR: Color = Color::from_rgb(93, 216, 228);
    pub static ref APPLE_COLOR: Color = Color::from_rgb(255, 0, 0);
    pub static ref SNAKE_COLOR: Color = Color::from_rgb(0, 255, 0);
    pub static ref SNAKE_HEAD_COLOR: Color = Color::from_rgb(0, 128, 0);
    pub static ref STONE_COLOR: Color = Color::from_rgb(128, 128, 128);
    pub static ref BAD_FOOD_COLOR: Color = Color::from_rgb(255, 0, 255);
}
