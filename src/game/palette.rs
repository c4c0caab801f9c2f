use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_SLATE_GRAY: Color = Color::rgb(47, 79, 79);
    pub const DARK_GREY: Color = Color::rgb(169, 169, 169);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const WHITE_SMOKE: Color = Color::rgb(245, 245, 245);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_MAGENTA: Color = Color::rgb(139, 0, 139);
    pub const LAVENDER: Color = Color::rgb(230, 230, 250);
    pub const DARK_SLATE_BLUE: Color = Color::rgb(72, 61, 139);
    pub const ALICE_BLUE: Color = Color::rgb(240, 248, 255);
    pub const DARK_OLIVE_GREEN: Color = Color::rgb(85, 107, 47);
    pub const MINT_CREAM: Color = Color::rgb(245, 255, 250);
    pub const DARK_GOLDENROD: Color = Color::rgb(184, 134, 11);
    pub const LEMON_CHIFFON: Color = Color::rgb(255, 250, 205);
    pub const DARK_ORANGE: Color = Color::rgb(255, 140, 0);
    pub const PEACH_PUFF: Color = Color::rgb(255, 218, 185);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const TOMATO: Color = Color::rgb(255, 99, 71);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const INDIAN_RED: Color = Color::rgb(205, 92, 92);
    pub const CORNSILK: Color = Color::rgb(255, 248, 220);
    pub const MEDIUM_AQUAMARINE: Color = Color::rgb(102, 205, 170);
}

/// Named color sequences used to stripe a snake's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Palette {
    #[default]
    Black,
    Grey,
    White,
    Purple,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Rainbow,
}

const BLACK: &[Color] = &[Color::BLACK, Color::DARK_SLATE_GRAY];
const GREY: &[Color] = &[Color::DARK_GREY, Color::LIGHT_GRAY];
const WHITE: &[Color] = &[Color::WHITE_SMOKE, Color::WHITE];
const PURPLE: &[Color] = &[Color::DARK_MAGENTA, Color::LAVENDER];
const BLUE: &[Color] = &[Color::DARK_SLATE_BLUE, Color::ALICE_BLUE];
const GREEN: &[Color] = &[Color::DARK_OLIVE_GREEN, Color::MINT_CREAM];
const YELLOW: &[Color] = &[Color::DARK_GOLDENROD, Color::LEMON_CHIFFON];
const ORANGE: &[Color] = &[Color::DARK_ORANGE, Color::PEACH_PUFF];
const RED: &[Color] = &[Color::DARK_RED, Color::TOMATO];
const RAINBOW: &[Color] = &[
    Color::PURPLE,
    Color::BLUE,
    Color::GREEN,
    Color::YELLOW,
    Color::ORANGE,
    Color::RED,
];

impl Palette {
    /// Look a palette up by name, ignoring case. Unknown names give `Black`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "grey" | "gray" => Palette::Grey,
            "white" => Palette::White,
            "purple" => Palette::Purple,
            "blue" => Palette::Blue,
            "green" => Palette::Green,
            "yellow" => Palette::Yellow,
            "orange" => Palette::Orange,
            "red" => Palette::Red,
            "rainbow" => Palette::Rainbow,
            _ => Palette::Black,
        }
    }

    /// The ordered colors of this palette
    pub fn colors(self) -> &'static [Color] {
        match self {
            Palette::Black => BLACK,
            Palette::Grey => GREY,
            Palette::White => WHITE,
            Palette::Purple => PURPLE,
            Palette::Blue => BLUE,
            Palette::Green => GREEN,
            Palette::Yellow => YELLOW,
            Palette::Orange => ORANGE,
            Palette::Red => RED,
            Palette::Rainbow => RAINBOW,
        }
    }
}

/// Colors for a palette name, see [`Palette::from_name`]
pub fn colors_for(name: &str) -> &'static [Color] {
    Palette::from_name(name).colors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Palette::from_name("Rainbow"), Palette::Rainbow);
        assert_eq!(Palette::from_name("BLUE"), Palette::Blue);
        assert_eq!(Palette::from_name(" grey "), Palette::Grey);
    }

    #[test]
    fn test_unknown_name_falls_back_to_black() {
        assert_eq!(Palette::from_name("chartreuse"), Palette::Black);
        assert_eq!(Palette::from_name(""), Palette::Black);
        assert_eq!(colors_for("nope"), &[Color::BLACK, Color::DARK_SLATE_GRAY]);
    }

    #[test]
    fn test_rainbow_order() {
        let colors = colors_for("rainbow");
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], Color::PURPLE);
        assert_eq!(colors[5], Color::RED);
    }

    #[test]
    fn test_every_palette_has_colors() {
        for palette in [
            Palette::Black,
            Palette::Grey,
            Palette::White,
            Palette::Purple,
            Palette::Blue,
            Palette::Green,
            Palette::Yellow,
            Palette::Orange,
            Palette::Red,
            Palette::Rainbow,
        ] {
            assert!(!palette.colors().is_empty(), "{palette:?} is empty");
        }
    }
}
