use clap::ValueEnum;
use ratatui::style::Color;

/// Colors applied to every drawn element.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Background of empty board cells.
    pub field_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Olive field with dark blocks, after the classic desktop version.
pub const THEME_OLIVE: Theme = Theme {
    name: "Olive",
    snake_head: Color::Rgb(40, 30, 10),
    snake_body: Color::Rgb(150, 60, 20),
    food: Color::Rgb(200, 20, 20),
    field_bg: Color::Rgb(110, 110, 5),
    border_fg: Color::Rgb(70, 70, 0),
    hud_label: Color::DarkGray,
    hud_value: Color::Yellow,
    menu_title: Color::LightRed,
    menu_footer: Color::DarkGray,
};

/// Blue snake on black, for terminals without true color.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Blue,
    food: Color::Red,
    field_bg: Color::Black,
    border_fg: Color::White,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Theme selectable from the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum ThemeName {
    #[default]
    Olive,
    Classic,
}

impl ThemeName {
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Olive => &THEME_OLIVE,
            Self::Classic => &THEME_CLASSIC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeName;

    #[test]
    fn every_name_resolves_to_its_theme() {
        assert_eq!(ThemeName::Olive.theme().name, "Olive");
        assert_eq!(ThemeName::Classic.theme().name, "Classic");
        assert_eq!(ThemeName::default(), ThemeName::Olive);
    }
}
