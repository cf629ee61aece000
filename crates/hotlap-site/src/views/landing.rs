use chrono::Datelike;
use iced::widget::{Column, Row, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Length};

use hotlap_core::ReleaseInfo;

use super::{BOLD, HEAVY, centered};
use crate::message::Message;
use crate::state::LandingState;
use crate::theme::{styles, tokens};

const GITHUB_URL: &str = "https://github.com/hotlap-ai/releases";

const CAPABILITIES: [&str; 6] = [
    "Real-time Telemetry Processing",
    "Automatic Session Library",
    "Delta Time Analysis",
    "Fuel & Tire Usage Calculator",
    "Sector-by-Sector Breakdown",
    "Input Trace Comparison",
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Smart Comparison",
        "Auto-aligns laps for perfect comparison, even with different start lines.",
    ),
    (
        "Track Anatomy",
        "Interactive maps with sectors, corners, and racing line overlays.",
    ),
    (
        "Consistency",
        "Visualize your lap time spread and identify high-risk corners.",
    ),
    (
        "Leaderboards",
        "Track local records per car/track combo automatically.",
    ),
];

const STATS: [(&str, &str); 2] = [("<1%", "CPU Usage"), ("0ms", "Input Lag")];

const BODY: Color = Color::from_rgb(212.0 / 255.0, 212.0 / 255.0, 216.0 / 255.0);

pub fn view(state: &LandingState) -> Element<'_, Message> {
    let page = column![
        nav_bar(),
        hero(&state.release),
        showcase(),
        features_grid(),
        performance(),
        call_to_action(&state.release),
        footer(chrono::Utc::now().year()),
    ]
    .width(Length::Fill);

    scrollable(page).height(Length::Fill).into()
}

fn download_label(release: &ReleaseInfo) -> String {
    format!("Download {}", release.version)
}

fn copyright_notice(year: i32) -> String {
    format!("© {year} Hotlap.ai. Built for Speed.")
}

fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding([72, 48])
        .center_x(Length::Fill)
        .into()
}

fn banded<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(section(content))
        .width(Length::Fill)
        .style(styles::band_container)
        .into()
}

fn download_button<'a>(label: String, url: &str) -> button::Button<'a, Message> {
    button(text(label).size(16).font(BOLD))
        .padding([16, 32])
        .on_press(Message::OpenLink(url.to_string()))
}

fn nav_bar<'a>() -> Element<'a, Message> {
    container(
        row![
            text("HOTLAP.AI").size(20).font(HEAVY).color(tokens::AMBER),
            Space::new().width(Length::Fill),
            button(text("GitHub").size(13))
                .on_press(Message::OpenLink(GITHUB_URL.to_string()))
                .style(styles::link_button),
        ]
        .align_y(Alignment::Center),
    )
    .padding([16, 48])
    .into()
}

fn hero(release: &ReleaseInfo) -> Element<'_, Message> {
    let badge = container(text("PROFESSIONAL iRACING TELEMETRY").size(13).font(BOLD))
        .padding([6, 16])
        .style(styles::badge_container);

    let tagline = row![
        text("The modern, open-source telemetry analyzer for iRacing.")
            .size(20)
            .color(tokens::TEXT_MUTED),
        text(" Completely free.").size(20),
    ];

    section(
        column![
            centered(badge),
            Space::new().height(24),
            centered(text("DATA DRIVEN").size(80).font(HEAVY)),
            centered(text("DOMINATION").size(80).font(HEAVY).color(tokens::AMBER)),
            Space::new().height(24),
            centered(tagline),
            Space::new().height(32),
            centered(
                download_button(download_label(release), &release.download_url)
                    .style(styles::primary_button)
            ),
        ]
        .spacing(4),
    )
}

fn bullet(item: &'static str) -> Element<'static, Message> {
    row![
        text("●").size(8).color(tokens::AMBER),
        text(item).size(14).color(BODY),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn showcase<'a>() -> Element<'a, Message> {
    let bullets = Row::with_children(CAPABILITIES.chunks(3).map(|chunk| {
        Column::with_children(chunk.iter().copied().map(bullet))
            .spacing(16)
            .width(Length::Fill)
            .into()
    }))
    .spacing(32);

    banded(
        column![
            text("Precision").size(48).font(BOLD),
            text("Engineering").size(48).font(BOLD).color(tokens::AMBER),
            Space::new().height(16),
            text(
                "Built by sim racers, for sim racers. We focus on clean data visualization \
                 without the clutter. Compare laps, analyze inputs, and spot consistency \
                 issues instantly with our high-contrast, dark-mode optimized charts."
            )
            .size(17)
            .color(tokens::TEXT_MUTED),
            Space::new().height(24),
            bullets,
        ]
        .max_width(720.0),
    )
}

fn feature_card(title: &'static str, description: &'static str) -> Element<'static, Message> {
    container(
        column![
            text(title).size(18).font(BOLD),
            text(description).size(14).color(tokens::TEXT_MUTED),
        ]
        .spacing(8),
    )
    .padding(24)
    .width(Length::Fill)
    .style(styles::card_container)
    .into()
}

fn features_grid<'a>() -> Element<'a, Message> {
    let rows = Column::with_children(FEATURES.chunks(2).map(|pair| {
        Row::with_children(
            pair.iter()
                .map(|&(title, description)| feature_card(title, description)),
        )
        .spacing(16)
        .into()
    }))
    .spacing(16);

    section(
        column![
            centered(text("Complete Toolkit").size(40).font(BOLD)),
            Space::new().height(32),
            rows,
        ]
        .max_width(960.0),
    )
}

fn stat(value: &'static str, label: &'static str) -> Element<'static, Message> {
    column![
        text(value).size(72).font(BOLD).color(tokens::AMBER),
        text(label.to_uppercase()).size(13).font(BOLD).color(tokens::TEXT_FAINT),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .into()
}

fn performance<'a>() -> Element<'a, Message> {
    let stats = Row::with_children(STATS.iter().map(|&(value, label)| stat(value, label))).spacing(128);

    banded(
        column![
            centered(text("LIGHTWEIGHT.").size(64).font(BOLD)),
            centered(text("FAST.").size(64).font(BOLD).color(tokens::TEXT_FAINT)),
            Space::new().height(24),
            centered(
                text(
                    "A native desktop app with a high-performance backend. \
                     Zero impact on your sim racing frame rates."
                )
                .size(18)
                .color(tokens::TEXT_MUTED)
            ),
            Space::new().height(48),
            centered(stats),
        ]
        .max_width(960.0),
    )
}

fn call_to_action(release: &ReleaseInfo) -> Element<'_, Message> {
    let card = container(
        column![
            centered(text("Ready to").size(48).font(HEAVY)),
            centered(text("Hit the Track?").size(48).font(HEAVY).color(tokens::AMBER)),
            Space::new().height(24),
            centered(
                text("Join the community of drivers improving their lap times with Hotlap.ai.")
                    .size(18)
                    .color(tokens::TEXT_MUTED)
            ),
            Space::new().height(40),
            centered(
                download_button("Download Now".to_string(), &release.download_url)
                    .style(styles::pill_button)
            ),
            Space::new().height(16),
            centered(
                text("Windows only (macOS & Linux coming soon)")
                    .size(13)
                    .color(tokens::TEXT_FAINT)
            ),
        ]
        .spacing(4),
    )
    .padding(64)
    .width(Length::Fill)
    .style(styles::cta_container);

    section(container(card).max_width(960.0))
}

fn footer<'a>(year: i32) -> Element<'a, Message> {
    container(
        row![
            text(copyright_notice(year)).size(13).color(tokens::TEXT_FAINT),
            Space::new().width(Length::Fill),
            button(text("Github").size(13))
                .on_press(Message::OpenLink(GITHUB_URL.to_string()))
                .style(styles::link_button),
            text("Discord").size(13).color(tokens::TEXT_FAINT),
            text("Twitter").size(13).color(tokens::TEXT_FAINT),
        ]
        .spacing(24)
        .align_y(Alignment::Center),
    )
    .padding([32, 48])
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use hotlap_core::ReleaseInfo;

    use super::{copyright_notice, download_label};

    #[test]
    fn download_label_uses_placeholder_until_fetched() {
        assert_eq!(download_label(&ReleaseInfo::default()), "Download Latest");
    }

    #[test]
    fn download_label_shows_release_tag() {
        let release = ReleaseInfo {
            version: "v1.2.3".to_string(),
            download_url: "https://x/y".to_string(),
        };

        assert_eq!(download_label(&release), "Download v1.2.3");
    }

    #[test]
    fn copyright_notice_includes_year() {
        assert_eq!(
            copyright_notice(2026),
            "© 2026 Hotlap.ai. Built for Speed."
        );
    }
}
