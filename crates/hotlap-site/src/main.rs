mod app;
mod error;
mod logging;
mod message;
mod settings;
mod state;
mod theme;
mod views;

use clap::Parser;
use log::info;

use crate::app::{HotlapSite, Launch};
use crate::settings::AppSettings;

#[derive(Debug, Parser)]
#[command(
    name = "hotlap-site",
    version,
    about = "Hotlap.ai landing page and desktop sign-in handoff"
)]
struct Cli {
    /// Identity provider redirect to hand off to the desktop app: a full URL,
    /// a `#fragment`, or a bare fragment.
    #[arg(long, value_name = "LOCATION")]
    callback: Option<String>,

    /// Enable debug logging for this run.
    #[arg(long)]
    debug: bool,
}

fn main() -> iced::Result {
    let cli = Cli::parse();
    let settings = AppSettings::load();

    logging::init_logging(
        cli.debug || settings.debug_logging,
        settings.max_log_size_bytes,
    );

    let launch = Launch::from_callback_arg(cli.callback.as_deref());
    info!(
        "Starting hotlap-site v{} ({})",
        env!("CARGO_PKG_VERSION"),
        match launch {
            Launch::Landing => "landing",
            Launch::Callback { .. } => "sign-in callback",
        }
    );

    iced::application(
        move || HotlapSite::new(launch.clone(), settings.clone()),
        HotlapSite::update,
        HotlapSite::view,
    )
    .title(HotlapSite::title)
    .theme(HotlapSite::theme)
    .window_size(iced::Size::new(1100.0, 780.0))
    .run()
}
