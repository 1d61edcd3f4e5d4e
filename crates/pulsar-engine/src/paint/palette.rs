//! Named colors.

use super::Color;

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 128, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const CYAN: Color = Color::new(0, 255, 255);

pub const GRAY: Color = Color::new(128, 128, 128);
pub const DARK_GRAY: Color = Color::new(169, 169, 169);
pub const LIGHT_GRAY: Color = Color::new(211, 211, 211);

pub const ORANGE: Color = Color::new(255, 165, 0);
pub const CORAL: Color = Color::new(255, 127, 80);
pub const CRIMSON: Color = Color::new(220, 20, 60);
pub const NAVY: Color = Color::new(0, 0, 128);
pub const STEEL_BLUE: Color = Color::new(70, 130, 180);
pub const DODGER_BLUE: Color = Color::new(30, 144, 255);
pub const FOREST_GREEN: Color = Color::new(34, 139, 34);
pub const LIME: Color = Color::new(0, 255, 0);
pub const INDIGO: Color = Color::new(75, 0, 130);
pub const PURPLE: Color = Color::new(128, 0, 128);
