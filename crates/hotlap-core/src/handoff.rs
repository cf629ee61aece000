//! Sign-in handoff from the identity provider redirect into the desktop app.
//!
//! The provider finishes the OAuth exchange itself and appends the resulting
//! tokens (or an error) to the redirect URL fragment. This module classifies
//! that fragment and builds the `hotlapai://` deep link that carries it, unchanged,
//! into the native application.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::form_urlencoded;

/// Prefix of the deep link registered by the desktop application.
pub const DEEP_LINK_PREFIX: &str = "hotlapai://auth/callback#";

/// Delay before the callback view navigates to the deep link on its own.
pub const AUTO_REDIRECT_DELAY: Duration = Duration::from_millis(500);

pub const MISSING_TOKENS_MESSAGE: &str =
    "Missing authentication tokens. Please try signing in again.";

/// Parameters of interest carried by the provider redirect fragment.
///
/// Values that are present but empty are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthResult {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl AuthResult {
    /// Decode a fragment of `&`-separated, form-urlencoded `key=value` pairs.
    ///
    /// The input is the text after the URL's `#`. When a key repeats, its first
    /// value is kept.
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let mut result = Self::default();

        for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
            let slot = match key.as_ref() {
                "access_token" => &mut result.access_token,
                "refresh_token" => &mut result.refresh_token,
                "error" => &mut result.error,
                "error_description" => &mut result.error_description,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }

        result
    }

    /// Classify the parsed parameters.
    ///
    /// A provider error takes precedence over any tokens that came with it.
    ///
    /// # Errors
    /// Returns [`HandoffError::Provider`] when the provider reported an error and
    /// [`HandoffError::MissingCredentials`] when either token is absent.
    pub fn classify(&self) -> Result<(), HandoffError> {
        if let Some(error) = &self.error {
            let message = self.error_description.as_ref().unwrap_or(error);
            return Err(HandoffError::Provider(message.clone()));
        }

        if self.access_token.is_none() || self.refresh_token.is_none() {
            return Err(HandoffError::MissingCredentials);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoffError {
    /// The provider's own description, or its error code when none was sent.
    #[error("{0}")]
    Provider(String),
    #[error("Missing authentication tokens. Please try signing in again.")]
    MissingCredentials,
}

/// Custom-scheme URL handed to the operating system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeepLink(String);

impl DeepLink {
    /// Prefix the raw fragment without re-encoding it, so the desktop app sees
    /// every parameter exactly as the provider sent it.
    #[must_use]
    pub fn for_fragment(fragment: &str) -> Self {
        Self(format!("{DEEP_LINK_PREFIX}{fragment}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classify a redirect fragment and build the deep link for a successful
/// sign-in.
///
/// # Errors
/// Returns the classification error from [`AuthResult::classify`].
pub fn resolve_handoff(fragment: &str) -> Result<DeepLink, HandoffError> {
    AuthResult::parse(fragment).classify()?;
    Ok(DeepLink::for_fragment(fragment))
}

/// Extract the fragment from a redirect location.
///
/// Accepts a full URL, a `#fragment`, or a bare fragment. A URL without a `#`
/// has an empty fragment.
#[must_use]
pub fn fragment_from_location(location: &str) -> &str {
    if let Some((_, fragment)) = location.split_once('#') {
        return fragment;
    }
    if location.contains("://") {
        return "";
    }
    location
}
