use ratatui::style::Color;

pub const BITCOIN_ORANGE: Color = Color::Rgb(0xf7, 0x93, 0x1a);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x19, 0x87, 0x54);
pub const STATUS_ERROR: Color = Color::Rgb(0xdc, 0x35, 0x45);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TOAST_TEXT: Color = Color::White;
