use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::with_alpha;
use crate::theme::tokens;

pub fn card_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tokens::CARD_BG)),
        border: Border {
            radius: tokens::RADIUS_MD.into(),
            width: 1.0,
            color: tokens::CARD_BORDER,
        },
        shadow: Shadow {
            color: with_alpha(tokens::AMBER, 0.05),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 40.0,
        },
        text_color: None,
        snap: false,
    }
}

pub fn cta_container(theme: &Theme) -> container::Style {
    let card = card_container(theme);
    container::Style {
        border: Border {
            radius: tokens::RADIUS_LG.into(),
            ..card.border
        },
        ..card
    }
}

pub fn band_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba8(24, 24, 27, 0.3))),
        border: Border {
            width: 1.0,
            color: with_alpha(Color::WHITE, 0.05),
            ..Border::default()
        },
        shadow: Shadow::default(),
        text_color: None,
        snap: false,
    }
}

pub fn badge_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(tokens::AMBER, 0.1))),
        border: Border {
            radius: tokens::RADIUS_PILL.into(),
            width: 1.0,
            color: with_alpha(tokens::AMBER, 0.3),
        },
        shadow: Shadow {
            color: with_alpha(tokens::AMBER, 0.2),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 15.0,
        },
        text_color: Some(tokens::AMBER),
        snap: false,
    }
}

fn status_badge(tint: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(tint, 0.1))),
        border: Border {
            radius: tokens::RADIUS_PILL.into(),
            width: 1.0,
            color: with_alpha(tint, 0.2),
        },
        shadow: Shadow::default(),
        text_color: Some(tint),
        snap: false,
    }
}

pub fn success_badge(_theme: &Theme) -> container::Style {
    status_badge(tokens::SUCCESS)
}

pub fn danger_badge(_theme: &Theme) -> container::Style {
    status_badge(tokens::DANGER)
}
