mod async_helpers;
mod callback;
mod landing;
mod update;

use iced::{Element, Task, Theme};
use log::warn;

use hotlap_core::fragment_from_location;

use crate::message::Message;
use crate::settings::AppSettings;
use crate::state::{AppState, CallbackState, LandingState};
use crate::theme::site_theme;
use crate::views;

/// Which view the window opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Landing,
    Callback { fragment: String },
}

impl Launch {
    /// `location` is the provider redirect passed on the command line, if any.
    pub fn from_callback_arg(location: Option<&str>) -> Self {
        location.map_or(Self::Landing, |location| Self::Callback {
            fragment: fragment_from_location(location).to_string(),
        })
    }
}

pub struct HotlapSite {
    pub(crate) state: AppState,
    pub(crate) settings: AppSettings,
    /// `None` when the client could not be built; the landing page then keeps
    /// its default release info.
    pub(crate) http_client: Option<reqwest::Client>,
    #[cfg(test)]
    pub(crate) opened_links: Vec<String>,
}

fn build_http_client(settings: &AppSettings) -> Option<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(settings.http_timeout_secs))
        .user_agent(format!("hotlap-site/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .inspect_err(|error| {
            warn!("Failed to build HTTP client, release lookup disabled: {error}");
        })
        .ok()
}

impl HotlapSite {
    pub fn new(launch: Launch, settings: AppSettings) -> (Self, Task<Message>) {
        let http_client = build_http_client(&settings);

        let (state, mount) = match launch {
            Launch::Landing => (
                AppState::Landing(LandingState::default()),
                Message::FetchRelease,
            ),
            Launch::Callback { fragment } => (
                AppState::Callback(CallbackState::new(fragment)),
                Message::CallbackMounted,
            ),
        };

        let app = Self {
            state,
            settings,
            http_client,
            #[cfg(test)]
            opened_links: Vec::new(),
        };

        (app, Task::done(mount))
    }

    pub fn title(&self) -> String {
        match &self.state {
            AppState::Landing(state) if !state.release.is_placeholder() => {
                format!("Hotlap.ai - {}", state.release.version)
            }
            AppState::Landing(_) => "Hotlap.ai".to_string(),
            AppState::Callback(_) => "Hotlap.ai - Sign in".to_string(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.state {
            AppState::Landing(state) => views::landing::view(state),
            AppState::Callback(state) => views::callback::view(state),
        }
    }

    pub fn theme(&self) -> Theme {
        site_theme()
    }
}

#[cfg(test)]
pub(crate) fn test_app(launch: Launch) -> HotlapSite {
    let (app, _) = HotlapSite::new(launch, AppSettings::default());
    app
}

#[cfg(test)]
mod tests {
    use hotlap_core::ReleaseInfo;

    use super::{Launch, build_http_client, test_app};
    use crate::message::Message;
    use crate::settings::AppSettings;
    use crate::state::AppState;

    #[test]
    fn launch_without_callback_opens_landing() {
        assert_eq!(Launch::from_callback_arg(None), Launch::Landing);
    }

    #[test]
    fn launch_with_redirect_url_keeps_only_fragment() {
        let launch = Launch::from_callback_arg(Some(
            "https://hotlap.ai/auth/callback#access_token=a&refresh_token=r",
        ));

        assert_eq!(
            launch,
            Launch::Callback {
                fragment: "access_token=a&refresh_token=r".to_string()
            }
        );
    }

    #[test]
    fn launch_with_url_without_fragment_has_empty_fragment() {
        let launch = Launch::from_callback_arg(Some("https://hotlap.ai/auth/callback"));

        assert_eq!(
            launch,
            Launch::Callback {
                fragment: String::new()
            }
        );
    }

    #[test]
    fn http_client_builds_with_default_settings() {
        assert!(build_http_client(&AppSettings::default()).is_some());
        assert!(test_app(Launch::Landing).http_client.is_some());
    }

    #[test]
    fn boot_state_matches_launch() {
        let landing = test_app(Launch::Landing);
        let callback = test_app(Launch::Callback {
            fragment: "error=x".to_string(),
        });

        assert!(matches!(landing.state, AppState::Landing(_)));
        assert!(matches!(callback.state, AppState::Callback(_)));
    }

    #[test]
    fn title_tracks_view_and_release() {
        let mut app = test_app(Launch::Landing);
        assert_eq!(app.title(), "Hotlap.ai");

        let _ = app.update(Message::ReleaseFetched(Ok(ReleaseInfo {
            version: "v1.4.0".to_string(),
            download_url: "https://x/y".to_string(),
        })));
        assert_eq!(app.title(), "Hotlap.ai - v1.4.0");

        let callback = test_app(Launch::Callback {
            fragment: String::new(),
        });
        assert_eq!(callback.title(), "Hotlap.ai - Sign in");
    }
}
