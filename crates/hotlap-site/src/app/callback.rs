//! Sign-in callback view: one-shot classification, delayed deep link redirect,
//! manual "open app", and teardown on navigation away.
//!
//! Handles messages: `CallbackMounted`, `AutoRedirectElapsed`, `OpenApp`,
//! `NavigateHome`

use std::time::Duration;

use iced::Task;
use log::{debug, info};

use crate::message::Message;
use crate::state::{AppState, CallbackStatus, LandingState};

use super::HotlapSite;
use super::async_helpers::sleep_unless_cancelled;

impl HotlapSite {
    pub(super) fn handle_callback_mounted(&mut self) -> Task<Message> {
        let AppState::Callback(state) = &mut self.state else {
            return Task::none();
        };

        if state.mount().is_none() {
            if let CallbackStatus::Error(error) = state.status() {
                info!("Sign-in handoff failed: {error}");
            }
            return Task::none();
        }

        let delay = Duration::from_millis(self.settings.auto_redirect_delay_ms);
        info!(
            "Sign-in complete, opening the desktop app in {}ms",
            delay.as_millis()
        );

        Task::perform(
            sleep_unless_cancelled(delay, state.redirect_token()),
            |elapsed| {
                if elapsed {
                    Message::AutoRedirectElapsed
                } else {
                    Message::NoOp
                }
            },
        )
    }

    pub(super) fn handle_auto_redirect_elapsed(&mut self) -> Task<Message> {
        let AppState::Callback(state) = &self.state else {
            debug!("Auto-redirect fired after the callback view closed");
            return Task::none();
        };
        let Some(link) = state.auto_redirect_target() else {
            return Task::none();
        };

        let url = link.to_string();
        self.open_link(url)
    }

    pub(super) fn handle_open_app(&mut self) -> Task<Message> {
        let AppState::Callback(state) = &self.state else {
            return Task::none();
        };
        let Some(link) = state.deep_link() else {
            return Task::none();
        };

        let url = link.to_string();
        self.open_link(url)
    }

    pub(super) fn handle_navigate_home(&mut self) -> Task<Message> {
        if matches!(self.state, AppState::Landing(_)) {
            return Task::none();
        }

        // Replacing the callback state drops it, which cancels its redirect.
        self.state = AppState::Landing(LandingState::default());
        Task::done(Message::FetchRelease)
    }
}
