//! Application-wide theme system
//!
//! Maps the view tree's classes (nav, active button, tags, skill bars, form
//! fields, alert) to terminal colors. Two built-in presets: dark and light.

use ratatui::style::Color;

/// Complete application theme defining all UI colors
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // Navigation bar
    pub nav_background: Color,
    pub nav_background_scrolled: Color,
    pub nav_border: Color,
    pub nav_border_scrolled: Color,
    pub nav_brand: Color,
    pub nav_item: Color,
    pub nav_item_active: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub heading: Color,
    pub accent: Color,

    // Skill bars
    pub bar_fill: Color,
    pub bar_background: Color,

    // Project cards
    pub tag_text: Color,
    pub tag_background: Color,
    pub link: Color,

    // Form colors
    pub form_label: Color,
    pub form_label_focused: Color,
    pub form_field_background: Color,
    pub form_field_text: Color,
    pub form_placeholder: Color,
    pub form_error: Color,

    // Interactive elements
    pub button_normal: Color,
    pub button_text: Color,
    pub focus: Color,

    // Overlays
    pub alert_border: Color,
    pub alert_background: Color,
    pub status_text: Color,
}

impl AppTheme {
    pub fn preset_names() -> Vec<&'static str> {
        vec!["dark", "light"]
    }

    /// Look up a preset by (case-insensitive) name
    pub fn from_name(name: &str) -> Option<AppTheme> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(ThemePresets::dark()),
            "light" => Some(ThemePresets::light()),
            _ => None,
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        ThemePresets::dark()
    }
}

/// Built-in theme presets
pub struct ThemePresets;

impl ThemePresets {
    pub fn dark() -> AppTheme {
        AppTheme {
            name: "Dark".to_string(),

            nav_background: Color::Reset,
            nav_background_scrolled: Color::Rgb(30, 30, 46),
            nav_border: Color::DarkGray,
            nav_border_scrolled: Color::Rgb(102, 126, 234),
            nav_brand: Color::White,
            nav_item: Color::Gray,
            nav_item_active: Color::Rgb(102, 126, 234),

            text_primary: Color::White,
            text_secondary: Color::Gray,
            heading: Color::White,
            accent: Color::Rgb(118, 75, 162),

            bar_fill: Color::Rgb(102, 126, 234),
            bar_background: Color::Rgb(50, 50, 60),

            tag_text: Color::White,
            tag_background: Color::Rgb(118, 75, 162),
            link: Color::Cyan,

            form_label: Color::Cyan,
            form_label_focused: Color::Rgb(255, 215, 0), // Gold
            form_field_background: Color::Rgb(40, 40, 48),
            form_field_text: Color::White,
            form_placeholder: Color::DarkGray,
            form_error: Color::Red,

            button_normal: Color::Rgb(102, 126, 234),
            button_text: Color::White,
            focus: Color::Rgb(255, 215, 0),

            alert_border: Color::Cyan,
            alert_background: Color::Black,
            status_text: Color::Yellow,
        }
    }

    pub fn light() -> AppTheme {
        AppTheme {
            name: "Light".to_string(),

            nav_background: Color::Reset,
            nav_background_scrolled: Color::Rgb(235, 235, 245),
            nav_border: Color::Gray,
            nav_border_scrolled: Color::Rgb(72, 90, 200),
            nav_brand: Color::Black,
            nav_item: Color::DarkGray,
            nav_item_active: Color::Rgb(72, 90, 200),

            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            heading: Color::Black,
            accent: Color::Rgb(118, 75, 162),

            bar_fill: Color::Rgb(72, 90, 200),
            bar_background: Color::Rgb(210, 210, 220),

            tag_text: Color::White,
            tag_background: Color::Rgb(118, 75, 162),
            link: Color::Blue,

            form_label: Color::Blue,
            form_label_focused: Color::Rgb(180, 90, 0),
            form_field_background: Color::Rgb(230, 230, 238),
            form_field_text: Color::Black,
            form_placeholder: Color::Gray,
            form_error: Color::Red,

            button_normal: Color::Rgb(72, 90, 200),
            button_text: Color::White,
            focus: Color::Rgb(180, 90, 0),

            alert_border: Color::Blue,
            alert_background: Color::White,
            status_text: Color::Rgb(180, 90, 0),
        }
    }
}
