// Helper utilities for TUI components
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color name or `#RRGGBB` string
/// Returns None for anything unrecognised so callers can pick their own fallback
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(hex_color);
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Color::DarkGray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}
