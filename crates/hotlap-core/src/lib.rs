//! Core logic for the Hotlap.ai site, independent of the UI.
//!
//! - Sign-in handoff: classify the identity provider redirect fragment and build
//!   the deep link into the desktop app.
//! - Release lookup: fetch the latest GitHub release and pick the installer
//!   download, with a renderable default when the lookup fails.

pub mod handoff;
pub mod release;

/// Redirect fragment model, classification, and deep link construction.
pub use handoff::{
    AUTO_REDIRECT_DELAY, AuthResult, DEEP_LINK_PREFIX, DeepLink, HandoffError,
    MISSING_TOKENS_MESSAGE, fragment_from_location, resolve_handoff,
};
/// GitHub release model, installer selection, and fetch helpers.
pub use release::{
    GitHubAsset, GitHubRelease, INSTALLER_SUFFIX, PLACEHOLDER_VERSION, RELEASES_API_URL,
    RELEASES_PAGE_URL, ReleaseError, ReleaseInfo, fetch_latest_release, fetch_release_info,
    release_tag_url,
};
