use iced::Task;
use log::warn;

use crate::error::AppError;
use crate::message::Message;

use super::HotlapSite;

impl HotlapSite {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NoOp => Task::none(),
            Message::CallbackMounted => self.handle_callback_mounted(),
            Message::AutoRedirectElapsed => self.handle_auto_redirect_elapsed(),
            Message::OpenApp => self.handle_open_app(),
            Message::NavigateHome => self.handle_navigate_home(),
            Message::FetchRelease => self.handle_fetch_release(),
            Message::ReleaseFetched(result) => {
                self.handle_release_fetched(result);
                Task::none()
            }
            Message::OpenLink(url) => self.open_link(url),
        }
    }

    /// Every link and deep link the app opens goes through here.
    pub(super) fn open_link(&mut self, url: String) -> Task<Message> {
        #[cfg(test)]
        self.opened_links.push(url.clone());
        open_url_task(url)
    }
}

/// Hand `url` to the OS URL handler. Failures are logged without the fragment,
/// which may carry credentials.
fn open_url_task(url: String) -> Task<Message> {
    Task::perform(
        async move {
            open::that(&url).map_err(|error| {
                let target = url.split('#').next().unwrap_or_default();
                AppError::open_link_failed(target, error.to_string())
            })
        },
        |result| {
            if let Err(error) = result {
                warn!("{error}");
            }
            Message::NoOp
        },
    )
}
