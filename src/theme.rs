use ratatui::style::Color;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_score: Color::White,
    overlay_title: Color::Green,
    overlay_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_score: Color::Cyan,
    overlay_title: Color::Cyan,
    overlay_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_score: Color::Magenta,
    overlay_title: Color::Magenta,
    overlay_footer: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks a theme up by case-insensitive name, falling back to classic.
#[must_use]
pub fn by_name(name: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .unwrap_or(&THEME_CLASSIC)
}
