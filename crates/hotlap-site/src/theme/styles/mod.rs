mod buttons;
mod containers;

pub use buttons::*;
pub use containers::*;

pub(crate) fn with_alpha(color: iced::Color, a: f32) -> iced::Color {
    iced::Color { a, ..color }
}
