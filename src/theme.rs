use ratatui::style::Color;

// Centralized theme colors. The desktop leans on the terminal palette so
// it degrades gracefully on 16-color terminals.

pub fn accent() -> Color {
    Color::Yellow
}

// Window chrome
pub fn window_border() -> Color {
    Color::DarkGray
}
pub fn window_border_focused() -> Color {
    accent()
}
pub fn window_title_fg() -> Color {
    Color::Gray
}
pub fn window_title_focused_fg() -> Color {
    Color::Black
}
pub fn window_title_focused_bg() -> Color {
    accent()
}

// Nav bar
pub fn nav_bg() -> Color {
    Color::DarkGray
}
pub fn nav_fg() -> Color {
    Color::White
}
pub fn nav_open_fg() -> Color {
    Color::Black
}
pub fn nav_open_bg() -> Color {
    Color::Gray
}

// Content
pub fn heading() -> Color {
    Color::Cyan
}
pub fn muted() -> Color {
    Color::DarkGray
}
pub fn error() -> Color {
    Color::Red
}
pub fn success() -> Color {
    Color::Green
}
pub fn link() -> Color {
    Color::Blue
}
