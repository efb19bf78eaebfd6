//! Icon images and open sounds. Every failure here is recoverable: callers
//! log it and carry on without the asset.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::AssetError;

mod sound;

pub use sound::{CommandSoundPlayer, Muted, SoundPlayer, play_detached};

pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Where an icon image comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Remote(Url),
    Local(PathBuf),
    Unsupported(String),
}

impl ImageSource {
    /// Classifies a configured image string. Blank input means no icon.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let source = match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Self::Remote(url),
                "file" => url
                    .to_file_path()
                    .map_or_else(|()| Self::Unsupported(raw.to_string()), Self::Local),
                // `C:\icons\a.png` parses with a one-letter scheme.
                scheme if scheme.len() == 1 => Self::Local(PathBuf::from(raw)),
                _ => Self::Unsupported(raw.to_string()),
            },
            Err(_) => Self::Local(PathBuf::from(raw)),
        };
        Some(source)
    }
}

/// Fetches icon bytes over HTTP or from disk.
#[derive(Clone, Debug)]
pub struct ImageLoader {
    http: reqwest::Client,
}

impl ImageLoader {
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, AssetError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("toaster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| AssetError::Request { source })?;
        Ok(Self { http })
    }

    /// # Errors
    ///
    /// Returns an error when the image cannot be fetched or read, or when its
    /// scheme is not supported.
    pub async fn load(&self, source: &ImageSource) -> Result<Arc<[u8]>, AssetError> {
        match source {
            ImageSource::Remote(url) => {
                debug!(%url, "fetching remote icon");
                let response = self
                    .http
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?;
                let bytes = response.bytes().await?;
                Ok(Arc::from(bytes.as_ref()))
            }
            ImageSource::Local(path) => {
                debug!(path = %path.display(), "reading local icon");
                tokio::fs::read(path)
                    .await
                    .map(Arc::from)
                    .map_err(|source| AssetError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            ImageSource::Unsupported(raw) => Err(AssetError::UnsupportedScheme(raw.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ImageSource;
    use std::path::PathBuf;

    #[test]
    fn blank_source_means_no_icon() {
        assert_eq!(ImageSource::parse(""), None);
        assert_eq!(ImageSource::parse("   "), None);
    }

    #[test]
    fn classifies_sources() {
        assert!(matches!(
            ImageSource::parse("https://example.com/a.jpg?w=10"),
            Some(ImageSource::Remote(_))
        ));
        assert_eq!(
            ImageSource::parse("icons/a.png"),
            Some(ImageSource::Local(PathBuf::from("icons/a.png")))
        );
        assert_eq!(
            ImageSource::parse(r"C:\icons\a.png"),
            Some(ImageSource::Local(PathBuf::from(r"C:\icons\a.png")))
        );
        assert_eq!(
            ImageSource::parse("data:image/png;base64,AAAA"),
            Some(ImageSource::Unsupported("data:image/png;base64,AAAA".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_become_paths() {
        assert_eq!(
            ImageSource::parse("file:///tmp/icon.png"),
            Some(ImageSource::Local(PathBuf::from("/tmp/icon.png")))
        );
    }
}
