//! Landing view: best-effort lookup of the latest release.
//!
//! Handles messages: `FetchRelease`, `ReleaseFetched`

use std::time::Duration;

use iced::Task;
use log::debug;

use hotlap_core::{ReleaseInfo, fetch_release_info};

use crate::error::AppError;
use crate::message::Message;
use crate::state::AppState;

use super::HotlapSite;
use super::async_helpers::run_with_timeout;

impl HotlapSite {
    pub(super) fn handle_fetch_release(&mut self) -> Task<Message> {
        let AppState::Landing(state) = &mut self.state else {
            return Task::none();
        };
        if !state.begin_fetch() {
            return Task::none();
        }

        let Some(client) = self.http_client.clone() else {
            debug!("No HTTP client, keeping default release info");
            return Task::none();
        };
        let url = self.settings.release_api_url.clone();
        let fetch_timeout = Duration::from_secs(self.settings.fetch_timeout_secs);

        Task::perform(
            async move {
                run_with_timeout(
                    fetch_timeout,
                    "Release lookup",
                    fetch_release_info(&client, &url),
                    AppError::from,
                )
                .await
            },
            Message::ReleaseFetched,
        )
    }

    pub(super) fn handle_release_fetched(&mut self, result: Result<ReleaseInfo, AppError>) {
        let AppState::Landing(state) = &mut self.state else {
            debug!("Dropping release lookup result for a closed landing view");
            return;
        };

        if let Ok(release) = &result {
            debug!(
                "Latest release {} downloads from {}",
                release.version, release.download_url
            );
        }
        state.apply_release(result);
    }
}
