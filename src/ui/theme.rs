use ratatui::style::Color;

/// Palette for the terminal surface. One dark scheme; embeddings that draw
/// native windows bring their own styling.
#[derive(Debug, Clone)]
pub struct Theme {
    pub panel_border: Color,
    pub panel_title_bg: Color,
    pub panel_title_fg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub status_err: Color,
    pub statusbar_bg: Color,
    pub surface_bg: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub overlay_bg: Color,
    pub overlay_border_locked: Color,
    pub overlay_border_unlocked: Color,
    pub upload_accent: Color,
    pub download_accent: Color,
    pub menu_bg: Color,
    pub menu_border: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            panel_border: Color::DarkGray,
            panel_title_bg: Color::Green,
            panel_title_fg: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            status_err: Color::Rgb(243, 139, 168),
            statusbar_bg: Color::DarkGray,
            surface_bg: Color::DarkGray,
            pill_key_bg: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            overlay_bg: Color::Rgb(30, 30, 46),
            overlay_border_locked: Color::DarkGray,
            overlay_border_unlocked: Color::Rgb(249, 226, 175),
            upload_accent: Color::Rgb(166, 227, 161),
            download_accent: Color::Rgb(137, 180, 250),
            menu_bg: Color::Rgb(30, 30, 46),
            menu_border: Color::Gray,
            menu_selected_bg: Color::Rgb(203, 166, 247),
            menu_selected_fg: Color::Rgb(30, 30, 46),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
