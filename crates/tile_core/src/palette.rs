//! Display colours for tiles, derived purely from a tile's value.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const ORANGE: Rgb = Rgb::new(255, 128, 0);
pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
pub const GRAY: Rgb = Rgb::new(128, 128, 128);

pub const EMPTY_FOREGROUND: Rgb = GRAY;
pub const EMPTY_BACKGROUND: Rgb = Rgb::new(204, 192, 178);
pub const BOARD_BACKGROUND: Rgb = Rgb::new(184, 175, 158);

pub fn foreground_color(value: u32) -> Rgb {
    match value {
        2 | 32 | 1024 => RED,
        4 | 64 | 2048 => YELLOW,
        8 | 128 => ORANGE,
        16 | 256 => PURPLE,
        _ => GRAY,
    }
}

pub fn background_color(value: u32) -> Rgb {
    match value {
        2 | 32 | 1024 => Rgb::new(238, 228, 218),
        4 | 64 | 2048 => Rgb::new(236, 224, 200),
        8 | 128 => Rgb::new(242, 177, 121),
        16 | 256 => Rgb::new(245, 149, 99),
        _ => GRAY,
    }
}
