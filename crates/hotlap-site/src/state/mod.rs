mod callback;
mod landing;

pub use callback::*;
pub use landing::*;

#[derive(Debug)]
pub enum AppState {
    Landing(LandingState),
    Callback(CallbackState),
}
