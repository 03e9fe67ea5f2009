use ggez::graphics;

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(graphics::Color::from_rgb(r, g, b))
    }
}

impl From<Color> for graphics::Color {
    fn from(Color(color): Color) -> Self {
        color
    }
}

#[test]
fn test_from_rgb() {
    let color = Color::from_rgb(255, 0, 255);
    assert_eq!(color.r, 1.);
    assert_eq!(color.g, 0.);
    assert_eq!(color.b, 1.);
    assert_eq!(color.a, 1.);
    assert_eq!(Color::from_rgb(0, 0, 0).0, graphics::Color::BLACK);
}
