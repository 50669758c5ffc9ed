use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7c, 0x9e, 0xd6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
