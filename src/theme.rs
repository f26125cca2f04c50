use catppuccin::PALETTE;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Convert a catppuccin color to a ratatui color.
const fn catppuccin_to_color(c: &catppuccin::Color) -> Color {
    Color::Rgb(c.rgb.r, c.rgb.g, c.rgb.b)
}

/// Application theme with customizable colors.
///
/// Holds all color values directly, making it independent of any specific
/// palette. Use the factory functions like `catppuccin_mocha()` for
/// pre-configured themes, or build custom themes by setting colors directly.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub base: Color,
    pub crust: Color,
    pub surface0: Color,
    pub overlay1: Color,
    pub text: Color,
    pub subtext0: Color,
    pub mauve: Color,
    pub red: Color,
    pub peach: Color,
    pub green: Color,
    pub blue: Color,
    pub lavender: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Create a theme from a Catppuccin flavor.
    const fn from_catppuccin(flavor: &catppuccin::Flavor) -> Self {
        let c = &flavor.colors;
        Self {
            base: catppuccin_to_color(&c.base),
            crust: catppuccin_to_color(&c.crust),
            surface0: catppuccin_to_color(&c.surface0),
            overlay1: catppuccin_to_color(&c.overlay1),
            text: catppuccin_to_color(&c.text),
            subtext0: catppuccin_to_color(&c.subtext0),
            mauve: catppuccin_to_color(&c.mauve),
            red: catppuccin_to_color(&c.red),
            peach: catppuccin_to_color(&c.peach),
            green: catppuccin_to_color(&c.green),
            blue: catppuccin_to_color(&c.blue),
            lavender: catppuccin_to_color(&c.lavender),
            border_type: BorderType::Rounded,
        }
    }

    /// Catppuccin Mocha theme (dark).
    #[must_use]
    pub fn catppuccin_mocha() -> Self {
        Self::from_catppuccin(&PALETTE.mocha)
    }

    /// Catppuccin Latte theme (light).
    #[must_use]
    pub fn catppuccin_latte() -> Self {
        Self::from_catppuccin(&PALETTE.latte)
    }

    /// Catppuccin Frappé theme (dark).
    #[must_use]
    pub fn catppuccin_frappe() -> Self {
        Self::from_catppuccin(&PALETTE.frappe)
    }

    /// Catppuccin Macchiato theme (dark).
    #[must_use]
    pub fn catppuccin_macchiato() -> Self {
        Self::from_catppuccin(&PALETTE.macchiato)
    }

    // Semantic colors

    /// Scrim painted over the host while a dialog is up.
    #[must_use]
    pub const fn backdrop(&self) -> Color {
        self.crust
    }

    /// Background of the dialog's content box.
    #[must_use]
    pub const fn panel(&self) -> Color {
        self.base
    }

    #[must_use]
    pub const fn text(&self) -> Color {
        self.text
    }

    #[must_use]
    pub const fn title(&self) -> Color {
        self.mauve
    }

    #[must_use]
    pub const fn border(&self) -> Color {
        self.lavender
    }

    /// Key hints next to button captions.
    #[must_use]
    pub const fn key_hint(&self) -> Color {
        self.peach
    }

    /// Caption of the affirmative control.
    #[must_use]
    pub const fn accept(&self) -> Color {
        self.green
    }

    /// Caption of the declining control.
    #[must_use]
    pub const fn decline(&self) -> Color {
        self.overlay1
    }

    #[must_use]
    pub const fn hint(&self) -> Color {
        self.subtext0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

/// Returns the built-in themes by display name.
pub fn available_themes() -> Vec<(&'static str, Theme)> {
    vec![
        ("Catppuccin Mocha", Theme::catppuccin_mocha()),
        ("Catppuccin Macchiato", Theme::catppuccin_macchiato()),
        ("Catppuccin Frappé", Theme::catppuccin_frappe()),
        ("Catppuccin Latte", Theme::catppuccin_latte()),
    ]
}

/// Look up a theme by name. Returns the default theme if not found.
pub fn theme_from_name(name: &str) -> Theme {
    available_themes()
        .into_iter()
        .find(|(n, _)| *n == name)
        .map_or_else(Theme::default, |(_, t)| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name_falls_back_to_default() {
        let theme = theme_from_name("No Such Theme");
        assert_eq!(theme.base, Theme::catppuccin_mocha().base);
    }

    #[test]
    fn test_theme_from_name_finds_latte() {
        let theme = theme_from_name("Catppuccin Latte");
        assert_eq!(theme.base, Theme::catppuccin_latte().base);
    }
}
