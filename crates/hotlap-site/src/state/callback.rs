use hotlap_core::{DeepLink, HandoffError, resolve_handoff};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackStatus {
    Loading,
    Success(DeepLink),
    Error(HandoffError),
}

/// State of the sign-in callback view.
///
/// `mount` classifies the redirect fragment exactly once; `teardown` (also run
/// on drop) cancels a pending automatic redirect.
#[derive(Debug)]
pub struct CallbackState {
    fragment: String,
    status: CallbackStatus,
    redirect_cancel: CancellationToken,
}

impl CallbackState {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            status: CallbackStatus::Loading,
            redirect_cancel: CancellationToken::new(),
        }
    }

    pub fn status(&self) -> &CallbackStatus {
        &self.status
    }

    /// Classify the fragment and leave the loading state.
    ///
    /// Returns the deep link to redirect to after a successful sign-in. Calls
    /// after the first one, or after teardown, change nothing and return `None`.
    pub fn mount(&mut self) -> Option<DeepLink> {
        if self.status != CallbackStatus::Loading || self.is_torn_down() {
            return None;
        }

        match resolve_handoff(&self.fragment) {
            Ok(link) => {
                self.status = CallbackStatus::Success(link.clone());
                Some(link)
            }
            Err(error) => {
                self.status = CallbackStatus::Error(error);
                None
            }
        }
    }

    pub fn deep_link(&self) -> Option<&DeepLink> {
        match &self.status {
            CallbackStatus::Success(link) => Some(link),
            CallbackStatus::Loading | CallbackStatus::Error(_) => None,
        }
    }

    /// Deep link the scheduled redirect may still open.
    pub fn auto_redirect_target(&self) -> Option<&DeepLink> {
        if self.is_torn_down() {
            None
        } else {
            self.deep_link()
        }
    }

    pub fn redirect_token(&self) -> CancellationToken {
        self.redirect_cancel.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.redirect_cancel.is_cancelled()
    }

    pub fn teardown(&self) {
        self.redirect_cancel.cancel();
    }
}

impl Drop for CallbackState {
    fn drop(&mut self) {
        self.teardown();
    }
}
