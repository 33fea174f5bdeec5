pub mod app;
pub mod theme;
pub mod view;

pub const WINDOW_SIZE: i32 = 400;
pub const LABEL_HEIGHT: i32 = 80;
pub const SELECTED_LINE_WIDTH: f64 = 5.0;
pub const DIGIT_FONT_SIZE: f64 = 28.0;
pub const CENTER_FONT_SIZE: f64 = 40.0;
pub const HANDSET_GLYPH: &str = "\u{260E}";
