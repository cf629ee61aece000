use log::debug;
use serde::Deserialize;
use thiserror::Error;

const GITHUB_REPO: &str = "hotlap-ai/releases";

/// Latest-release endpoint of the public release repository.
pub const RELEASES_API_URL: &str =
    "https://api.github.com/repos/hotlap-ai/releases/releases/latest";

/// Releases listing page, used until a direct installer link is known.
pub const RELEASES_PAGE_URL: &str = "https://github.com/hotlap-ai/releases/releases/latest";

pub const INSTALLER_SUFFIX: &str = "-setup.exe";

pub const PLACEHOLDER_VERSION: &str = "Latest";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubAsset {
    pub name: String,
    #[serde(default)]
    pub browser_download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubRelease {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub assets: Option<Vec<GitHubAsset>>,
}

impl GitHubRelease {
    /// First asset whose file name ends with `suffix`.
    #[must_use]
    pub fn find_asset(&self, suffix: &str) -> Option<&GitHubAsset> {
        self.assets
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|asset| asset.name.ends_with(suffix))
    }
}

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("failed to fetch latest release: {0}")]
    Request(#[source] reqwest::Error),
    #[error("latest release request failed with HTTP {status}{body_snippet}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body_snippet: String,
    },
    #[error("failed to parse latest release response: {0}")]
    Parse(#[source] reqwest::Error),
    #[error("latest release response has no tag")]
    MissingTag,
}

/// Version label and download link shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub version: String,
    pub download_url: String,
}

impl Default for ReleaseInfo {
    fn default() -> Self {
        Self {
            version: PLACEHOLDER_VERSION.to_string(),
            download_url: RELEASES_PAGE_URL.to_string(),
        }
    }
}

impl ReleaseInfo {
    /// Build the displayed release from an API response.
    ///
    /// Returns `None` when the release carries no tag. Without a matching
    /// installer the link points at the release page for that tag.
    #[must_use]
    pub fn from_release(release: &GitHubRelease) -> Option<Self> {
        let tag = release.tag_name.as_deref().filter(|tag| !tag.is_empty())?;

        let download_url = release
            .find_asset(INSTALLER_SUFFIX)
            .and_then(|asset| asset.browser_download_url.as_deref())
            .filter(|url| !url.is_empty())
            .map_or_else(|| release_tag_url(tag), str::to_string);

        Some(Self {
            version: tag.to_string(),
            download_url,
        })
    }

    /// Collapse a lookup result into something renderable, keeping the
    /// defaults on failure.
    #[must_use]
    pub fn resolve<E: std::fmt::Display>(lookup: Result<Self, E>) -> Self {
        lookup.unwrap_or_else(|error| {
            debug!("Keeping default release info: {error}");
            Self::default()
        })
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }
}

#[must_use]
pub fn release_tag_url(tag: &str) -> String {
    format!("https://github.com/{GITHUB_REPO}/releases/tag/{tag}")
}

/// Fetch the latest release object from `url`.
///
/// # Errors
/// Returns an error when the request fails, the server answers with a
/// non-success status, or the body is not a release object.
pub async fn fetch_latest_release(
    client: &reqwest::Client,
    url: &str,
) -> Result<GitHubRelease, ReleaseError> {
    let response = client
        .get(url)
        .header("User-Agent", "hotlap-site")
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(ReleaseError::Request)?;

    if !response.status().is_success() {
        let status = response.status();
        let body_snippet = response
            .text()
            .await
            .ok()
            .map(|body| response_snippet(&body, 160))
            .unwrap_or_default();
        return Err(ReleaseError::HttpStatus {
            status,
            body_snippet,
        });
    }

    response.json().await.map_err(ReleaseError::Parse)
}

/// Fetch the latest release and map it to the landing page's download info.
///
/// # Errors
/// Returns the fetch error, or [`ReleaseError::MissingTag`] when the release has
/// no usable tag.
pub async fn fetch_release_info(
    client: &reqwest::Client,
    url: &str,
) -> Result<ReleaseInfo, ReleaseError> {
    let release = fetch_latest_release(client, url).await?;
    ReleaseInfo::from_release(&release).ok_or(ReleaseError::MissingTag)
}

fn response_snippet(body: &str, max_chars: usize) -> String {
    let snippet: String = body.chars().take(max_chars).collect();
    if snippet.is_empty() {
        String::new()
    } else {
        format!(": {snippet}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn release(value: serde_json::Value) -> GitHubRelease {
        serde_json::from_value(value).expect("release JSON should deserialize")
    }

    #[test]
    fn default_release_info_points_at_releases_page() {
        let info = ReleaseInfo::default();

        assert_eq!(info.version, "Latest");
        assert_eq!(
            info.download_url,
            "https://github.com/hotlap-ai/releases/releases/latest"
        );
        assert!(info.is_placeholder());
    }

    #[test]
    fn installer_asset_becomes_download_url() {
        let release = release(json!({
            "tag_name": "v1.2.3",
            "assets": [
                { "name": "app-1.2.3.msi.sig", "browser_download_url": "https://x/sig" },
                { "name": "app-1.2.3-setup.exe", "browser_download_url": "https://x/y" },
                { "name": "other-setup.exe", "browser_download_url": "https://x/z" }
            ]
        }));

        let info = ReleaseInfo::from_release(&release).expect("tag is present");

        assert_eq!(info.version, "v1.2.3");
        assert_eq!(info.download_url, "https://x/y");
    }

    #[test]
    fn missing_installer_falls_back_to_tag_page() {
        let release = release(json!({
            "tag_name": "v2.0.0",
            "assets": [{ "name": "app-2.0.0.dmg", "browser_download_url": "https://x/dmg" }]
        }));

        let info = ReleaseInfo::from_release(&release).expect("tag is present");

        assert_eq!(info.version, "v2.0.0");
        assert_eq!(
            info.download_url,
            "https://github.com/hotlap-ai/releases/releases/tag/v2.0.0"
        );
    }

    #[test]
    fn null_or_missing_assets_fall_back_to_tag_page() {
        for value in [
            json!({ "tag_name": "v3.1.0" }),
            json!({ "tag_name": "v3.1.0", "assets": null }),
        ] {
            let info = ReleaseInfo::from_release(&release(value)).expect("tag is present");
            assert_eq!(info.download_url, release_tag_url("v3.1.0"));
        }
    }

    #[test]
    fn empty_installer_url_falls_back_to_tag_page() {
        let release = release(json!({
            "tag_name": "v1.0.0",
            "assets": [{ "name": "app-setup.exe", "browser_download_url": "" }]
        }));

        let info = ReleaseInfo::from_release(&release).expect("tag is present");

        assert_eq!(info.download_url, release_tag_url("v1.0.0"));
    }

    #[test]
    fn null_installer_url_falls_back_to_tag_page() {
        let release = release(json!({
            "tag_name": "v1.1.0",
            "assets": [
                { "name": "app.dmg", "browser_download_url": "https://x/dmg" },
                { "name": "app-setup.exe", "browser_download_url": null }
            ]
        }));

        let info = ReleaseInfo::from_release(&release).expect("tag is present");

        assert_eq!(info.version, "v1.1.0");
        assert_eq!(info.download_url, release_tag_url("v1.1.0"));
    }

    #[test]
    fn missing_or_empty_tag_yields_nothing() {
        assert!(ReleaseInfo::from_release(&release(json!({ "message": "Not Found" }))).is_none());
        assert!(ReleaseInfo::from_release(&release(json!({ "tag_name": "" }))).is_none());
    }

    #[test]
    fn resolve_keeps_defaults_on_error() {
        let info = ReleaseInfo::resolve(Err::<ReleaseInfo, _>(ReleaseError::MissingTag));

        assert_eq!(info, ReleaseInfo::default());
    }

    #[test]
    fn response_snippet_is_prefixed_and_truncated() {
        assert_eq!(response_snippet("", 10), "");
        assert_eq!(response_snippet("rate limited", 4), ": rate");
    }

    #[tokio::test]
    async fn fetch_release_info_reads_latest_release() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/hotlap-ai/releases/releases/latest"))
            .and(header("User-Agent", "hotlap-site"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tag_name": "v1.2.3",
                "assets": [{ "name": "app-1.2.3-setup.exe", "browser_download_url": "https://x/y" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/repos/hotlap-ai/releases/releases/latest", server.uri());
        let info = fetch_release_info(&reqwest::Client::new(), &url)
            .await
            .expect("release should be fetched");

        assert_eq!(
            info,
            ReleaseInfo {
                version: "v1.2.3".to_string(),
                download_url: "https://x/y".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn fetch_release_info_reports_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
            .mount(&server)
            .await;

        let result = fetch_release_info(&reqwest::Client::new(), &server.uri()).await;

        let Err(ReleaseError::HttpStatus {
            status,
            body_snippet,
        }) = result
        else {
            panic!("expected HTTP status error");
        };
        assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
        assert_eq!(body_snippet, ": API rate limit exceeded");
    }

    #[tokio::test]
    async fn malformed_body_resolves_to_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = fetch_release_info(&reqwest::Client::new(), &server.uri()).await;
        assert!(matches!(result, Err(ReleaseError::Parse(_))));

        assert_eq!(ReleaseInfo::resolve(result), ReleaseInfo::default());
    }

    #[tokio::test]
    async fn untagged_release_is_missing_tag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [] })))
            .mount(&server)
            .await;

        let result = fetch_release_info(&reqwest::Client::new(), &server.uri()).await;

        assert!(matches!(result, Err(ReleaseError::MissingTag)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_request_error() {
        let result = fetch_release_info(&reqwest::Client::new(), "http://127.0.0.1:1/latest").await;

        assert!(matches!(result, Err(ReleaseError::Request(_))));
    }
}
