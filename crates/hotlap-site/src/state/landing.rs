use hotlap_core::ReleaseInfo;

use crate::error::AppError;

#[derive(Debug, Default)]
pub struct LandingState {
    pub release: ReleaseInfo,
    fetch_started: bool,
}

impl LandingState {
    /// Mark the release lookup as started. Returns `false` if it already ran
    /// for this view.
    pub fn begin_fetch(&mut self) -> bool {
        !std::mem::replace(&mut self.fetch_started, true)
    }

    pub fn apply_release(&mut self, result: Result<ReleaseInfo, AppError>) {
        self.release = ReleaseInfo::resolve(result);
    }
}

#[cfg(test)]
mod tests {
    use hotlap_core::ReleaseInfo;

    use super::LandingState;
    use crate::error::AppError;

    #[test]
    fn fetch_starts_once_per_view() {
        let mut state = LandingState::default();

        assert!(state.begin_fetch());
        assert!(!state.begin_fetch());
    }

    #[test]
    fn fetched_release_replaces_defaults() {
        let mut state = LandingState::default();
        let fetched = ReleaseInfo {
            version: "v1.2.3".to_string(),
            download_url: "https://x/y".to_string(),
        };

        state.apply_release(Ok(fetched.clone()));

        assert_eq!(state.release, fetched);
    }

    #[test]
    fn failed_lookup_keeps_defaults() {
        let mut state = LandingState::default();

        state.apply_release(Err(AppError::timeout("Release lookup", 15)));

        assert_eq!(state.release, ReleaseInfo::default());
        assert!(state.release.is_placeholder());
    }
}
