use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::with_alpha;
use crate::theme::tokens;

fn glow(alpha: f32, blur_radius: f32) -> Shadow {
    Shadow {
        color: with_alpha(tokens::AMBER, alpha),
        offset: Vector::new(0.0, 0.0),
        blur_radius,
    }
}

pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    let base = button::Style {
        background: Some(Background::Color(palette.primary)),
        text_color: Color::BLACK,
        border: Border {
            radius: tokens::RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: glow(0.3, 20.0),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(tokens::AMBER_LIGHT)),
            shadow: glow(0.5, 35.0),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(tokens::AMBER_LIGHT)),
            shadow: glow(0.2, 12.0),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(with_alpha(palette.primary, 0.4))),
            shadow: Shadow::default(),
            ..base
        },
    }
}

pub fn pill_button(theme: &Theme, status: button::Status) -> button::Style {
    let style = primary_button(theme, status);
    button::Style {
        border: Border {
            radius: tokens::RADIUS_PILL.into(),
            ..style.border
        },
        ..style
    }
}

pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => tokens::AMBER,
        button::Status::Active | button::Status::Disabled => tokens::TEXT_FAINT,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}
