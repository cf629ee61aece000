use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use hotlap_core::HandoffError;

use super::{BOLD, HEAVY, centered};
use crate::message::Message;
use crate::state::{CallbackState, CallbackStatus};
use crate::theme::{styles, tokens};

const CARD_WIDTH: f32 = 420.0;

pub fn view(state: &CallbackState) -> Element<'_, Message> {
    let body = match state.status() {
        CallbackStatus::Loading => loading(),
        CallbackStatus::Success(_) => success(),
        CallbackStatus::Error(error) => failure(error),
    };

    let mut page = column![
        text("HOTLAP.AI").size(28).font(HEAVY).color(tokens::AMBER),
        container(body)
            .padding(32)
            .width(Length::Fixed(CARD_WIDTH))
            .style(styles::card_container),
    ]
    .spacing(32)
    .align_x(Alignment::Center);

    if *state.status() != CallbackStatus::Loading {
        page = page.push(
            button(text("Back to Hotlap.ai").size(13))
                .on_press(Message::NavigateHome)
                .style(styles::link_button),
        );
    }

    container(page).center(Length::Fill).into()
}

fn status_mark<'a>(
    glyph: &'a str,
    style: fn(&iced::Theme) -> container::Style,
) -> Element<'a, Message> {
    centered(container(text(glyph).size(28)).center(64.0).style(style))
}

fn loading<'a>() -> Element<'a, Message> {
    column![
        centered(text("...").size(32).color(tokens::AMBER)),
        Space::new().height(16),
        centered(text("Processing").size(20).font(BOLD)),
        centered(text("Completing sign in...").color(tokens::TEXT_MUTED)),
    ]
    .spacing(8)
    .into()
}

fn success<'a>() -> Element<'a, Message> {
    column![
        status_mark("✓", styles::success_badge),
        Space::new().height(16),
        centered(text("Sign in complete").size(20).font(BOLD)),
        centered(text("You can now return to the app.").color(tokens::TEXT_MUTED)),
        Space::new().height(24),
        button(centered(text("Open Hotlap.ai").font(BOLD)))
            .width(Length::Fill)
            .padding(14)
            .on_press(Message::OpenApp)
            .style(styles::primary_button),
        Space::new().height(16),
        centered(
            text("You can close this window after opening the app.")
                .size(13)
                .color(tokens::TEXT_FAINT)
        ),
    ]
    .spacing(8)
    .into()
}

fn failure(error: &HandoffError) -> Element<'_, Message> {
    column![
        status_mark("✕", styles::danger_badge),
        Space::new().height(16),
        centered(text("Sign in failed").size(20).font(BOLD)),
        centered(text(error.to_string()).color(tokens::TEXT_MUTED)),
    ]
    .spacing(8)
    .into()
}
