use hotlap_core::ReleaseInfo;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,

    CallbackMounted,
    AutoRedirectElapsed,
    OpenApp,
    NavigateHome,

    FetchRelease,
    ReleaseFetched(Result<ReleaseInfo, AppError>),

    OpenLink(String),
}
