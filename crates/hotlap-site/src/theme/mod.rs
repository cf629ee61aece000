pub mod styles;

use iced::theme::Palette;
use iced::{Theme, color};

pub mod tokens {
    use iced::Color;

    pub const RADIUS_SM: f32 = 6.0;
    pub const RADIUS_MD: f32 = 12.0;
    pub const RADIUS_LG: f32 = 24.0;
    pub const RADIUS_PILL: f32 = 999.0;

    pub const AMBER: Color = Color::from_rgb(245.0 / 255.0, 158.0 / 255.0, 11.0 / 255.0);
    pub const AMBER_LIGHT: Color = Color::from_rgb(251.0 / 255.0, 191.0 / 255.0, 36.0 / 255.0);
    pub const TEXT_MUTED: Color = Color::from_rgb(161.0 / 255.0, 161.0 / 255.0, 170.0 / 255.0);
    pub const TEXT_FAINT: Color = Color::from_rgb(82.0 / 255.0, 82.0 / 255.0, 91.0 / 255.0);
    pub const CARD_BG: Color = Color::from_rgb(10.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0);
    pub const CARD_BORDER: Color = Color::from_rgb(39.0 / 255.0, 39.0 / 255.0, 42.0 / 255.0);
    pub const SUCCESS: Color = Color::from_rgb(34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0);
    pub const DANGER: Color = Color::from_rgb(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0);
}

pub fn site_theme() -> Theme {
    Theme::custom(
        "Hotlap Dark".to_string(),
        Palette {
            background: color!(0x0005_0505),
            text: color!(0x00ff_ffff),
            primary: color!(0x00f5_9e0b),
            success: color!(0x0022_c55e),
            danger: color!(0x00ef_4444),
            warning: color!(0x00fb_bf24),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{site_theme, tokens};

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.0001,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn palette_primary_matches_amber_token() {
        let palette = site_theme().palette();

        assert_close(palette.primary.r, tokens::AMBER.r);
        assert_close(palette.primary.g, tokens::AMBER.g);
        assert_close(palette.primary.b, tokens::AMBER.b);
    }

    #[test]
    fn palette_background_is_near_black() {
        let palette = site_theme().palette();

        assert_close(palette.background.r, 5.0 / 255.0);
        assert!(palette.background.r < 0.5);
    }
}
