use serde::{Deserialize, Serialize};

/// Color themes shared by the date and time pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    Black,
    AntiqueWhite,
    Green,
    #[default]
    Blue,
    Pink,
    Red,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Black,
        Theme::AntiqueWhite,
        Theme::Green,
        Theme::Blue,
        Theme::Pink,
        Theme::Red,
    ];

    /// Stable lowercase name, suitable for a style-class suffix.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Black => "black",
            Theme::AntiqueWhite => "antique-white",
            Theme::Green => "green",
            Theme::Blue => "blue",
            Theme::Pink => "pink",
            Theme::Red => "red",
        }
    }
}

/// Widgets whose active theme can be switched by the host.
pub trait Themeable {
    fn theme(&self) -> Theme;

    fn change_theme(&mut self, theme: Theme);
}
