pub mod callback;
pub mod landing;

use iced::widget::container;
use iced::{Element, Font, Length, font};

use crate::message::Message;

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub const HEAVY: Font = Font {
    weight: font::Weight::Black,
    ..Font::DEFAULT
};

pub fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content).center_x(Length::Fill).into()
}
