use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub primary: Color,
    pub light: Color,
    pub dark: Color,
    pub title: Color,
    pub text: Color,
    pub muted: Color,
    pub selected_bg: Color,
    pub today: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub status_bar: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            primary: Color::Cyan,
            light: Color::DarkGray,
            dark: Color::Gray,
            title: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            selected_bg: Color::Blue,
            today: Color::Green,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            status_bar: Color::White,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            primary: Color::Rgb(142, 192, 124),
            light: Color::Rgb(102, 92, 84),
            dark: Color::Rgb(146, 131, 116),
            title: Color::Rgb(251, 184, 108),
            text: Color::Rgb(235, 219, 178),
            muted: Color::Rgb(146, 131, 116),
            selected_bg: Color::Rgb(60, 56, 54),
            today: Color::Rgb(184, 187, 38),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            status_bar: Color::Rgb(235, 219, 178),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            primary: Color::Rgb(136, 192, 208),
            light: Color::Rgb(76, 86, 106),
            dark: Color::Rgb(67, 76, 94),
            title: Color::Rgb(136, 192, 208),
            text: Color::Rgb(236, 239, 244),
            muted: Color::Rgb(76, 86, 106),
            selected_bg: Color::Rgb(59, 66, 82),
            today: Color::Rgb(163, 190, 140),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            status_bar: Color::Rgb(216, 222, 233),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            primary: Color::Rgb(189, 147, 249),
            light: Color::Rgb(98, 114, 164),
            dark: Color::Rgb(68, 71, 90),
            title: Color::Rgb(139, 233, 253),
            text: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(98, 114, 164),
            selected_bg: Color::Rgb(68, 71, 90),
            today: Color::Rgb(80, 250, 123),
            help_title: Color::Rgb(139, 233, 253),
            help_section: Color::Rgb(241, 250, 140),
            status_bar: Color::Rgb(248, 248, 242),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
