//! Avatar Fetching
//!
//! Character images are plain HTTP resources. They are downloaded with the
//! same reqwest stack as the API and handed to the UI as raw bytes.

use crate::error::Result;

/// HTTP client for character images
#[derive(Debug, Clone)]
pub struct AvatarClient {
    client: reqwest::Client,
}

/// Encoding of an avatar, guessed from its URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl AvatarFormat {
    /// Character API avatars are `.jpeg`; anything unrecognized is treated as JPEG
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let extension = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => AvatarFormat::Png,
            "gif" => AvatarFormat::Gif,
            "webp" => AvatarFormat::Webp,
            _ => AvatarFormat::Jpeg,
        }
    }
}

impl AvatarClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rm-table/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Download the image at `url`
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        tracing::debug!(url, size = bytes.len(), "Fetched avatar");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_url() {
        assert_eq!(
            AvatarFormat::from_url("https://rickandmortyapi.com/api/character/avatar/1.jpeg"),
            AvatarFormat::Jpeg
        );
        assert_eq!(AvatarFormat::from_url("http://x/a.PNG"), AvatarFormat::Png);
        assert_eq!(AvatarFormat::from_url("http://x/a.gif?size=2"), AvatarFormat::Gif);
        assert_eq!(AvatarFormat::from_url("http://x/a.webp#top"), AvatarFormat::Webp);
        assert_eq!(AvatarFormat::from_url("http://x/avatar"), AvatarFormat::Jpeg);
    }
}
