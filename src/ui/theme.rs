use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub info: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub node_border: Color,
    pub node_value: Color,
    pub highlight_bg: Color, // Node currently visited or found
    pub pointer: Color,      // next arrows
    pub back_pointer: Color, // prev / wrap arrows
    pub label: Color,        // HEAD / TAIL
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    info: Color::Rgb(148, 226, 213),           // Teal
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    node_border: Color::Rgb(137, 180, 250),
    node_value: Color::Rgb(205, 214, 244),
    highlight_bg: Color::Rgb(249, 226, 175),
    pointer: Color::Rgb(137, 180, 250),
    back_pointer: Color::Rgb(250, 179, 135),
    label: Color::Rgb(245, 194, 231), // Pink
};
