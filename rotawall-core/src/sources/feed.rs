use async_trait::async_trait;
use bytes::Bytes;
use rand::Rng;
use serde::Deserialize;

use crate::error::Result;
use crate::sources::{has_image_extension, ImageSource};

/// How many recent items to ask the feed for each cycle.
pub const FEED_LIMIT: u32 = 20;

const API_BASE: &str = "https://www.reddit.com";

/// Listing access to the remote image feed. A trait so the acquirer can be
/// exercised against a canned feed in tests; the real client is constructed
/// once at startup and injected.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Up to `limit` item URLs for the channel, in feed ranking order.
    async fn list_items(&self, channel: &str, limit: u32) -> Result<Vec<String>>;
    async fn download(&self, url: &str) -> Result<Bytes>;
}

pub struct RedditClient {
    client: reqwest::Client,
}

impl Default for RedditClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RedditClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("rotawall/0.1")
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl FeedClient for RedditClient {
    async fn list_items(&self, channel: &str, limit: u32) -> Result<Vec<String>> {
        let resp: Listing = self
            .client
            .get(format!("{API_BASE}/r/{channel}/hot.json"))
            .query(&[("limit", limit.to_string())])
            .send()
            .await?
            .json()
            .await?;

        Ok(resp.data.children.into_iter().map(|c| c.data.url).collect())
    }

    async fn download(&self, url: &str) -> Result<Bytes> {
        let bytes = self.client.get(url).send().await?.bytes().await?;
        Ok(bytes)
    }
}

// -- API response types --

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: ListingPost,
}

#[derive(Debug, Deserialize)]
struct ListingPost {
    url: String,
}

/// Remote feed acquirer: list recent items, keep the image-typed ones, pick
/// one at random and download it.
pub struct RemoteFeedSource {
    client: Box<dyn FeedClient>,
    channel: String,
}

impl RemoteFeedSource {
    pub fn new(client: Box<dyn FeedClient>, channel: impl Into<String>) -> Self {
        Self {
            client,
            channel: channel.into(),
        }
    }
}

#[async_trait]
impl ImageSource for RemoteFeedSource {
    fn name(&self) -> &str {
        "remote feed"
    }

    async fn acquire(&self) -> Result<Option<Bytes>> {
        let items = self.client.list_items(&self.channel, FEED_LIMIT).await?;
        let candidates: Vec<String> = items
            .into_iter()
            .filter(|url| has_image_extension(url))
            .collect();

        if candidates.is_empty() {
            return Ok(None);
        }

        let url = &candidates[rand::rng().random_range(0..candidates.len())];
        let bytes = self.client.download(url).await?;
        Ok(Some(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_LISTING: &str = r##"{
        "kind": "Listing",
        "data": {
            "after": "t3_xyz",
            "dist": 3,
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "id": "aaa111",
                        "title": "Misty forest [3840x2160]",
                        "url": "https://i.redd.it/misty.png",
                        "ups": 4200,
                        "over_18": false
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "id": "bbb222",
                        "title": "Gallery post",
                        "url": "https://www.reddit.com/gallery/bbb222",
                        "ups": 900,
                        "over_18": false
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "id": "ccc333",
                        "title": "Timelapse",
                        "url": "https://v.redd.it/clip.mp4",
                        "ups": 120,
                        "over_18": false
                    }
                }
            ]
        }
    }"##;

    #[test]
    fn test_parse_listing() {
        let listing: Listing = serde_json::from_str(MOCK_LISTING).unwrap();
        assert_eq!(listing.data.children.len(), 3);
        assert_eq!(listing.data.children[0].data.url, "https://i.redd.it/misty.png");
    }

    struct FakeFeed {
        items: Vec<String>,
    }

    #[async_trait]
    impl FeedClient for FakeFeed {
        async fn list_items(&self, _channel: &str, _limit: u32) -> Result<Vec<String>> {
            Ok(self.items.clone())
        }

        async fn download(&self, url: &str) -> Result<Bytes> {
            Ok(Bytes::from(url.to_string()))
        }
    }

    #[tokio::test]
    async fn single_image_item_is_always_chosen() {
        let feed = FakeFeed {
            items: vec![
                "https://example.com/gallery/abc".into(),
                "https://example.com/pics/keep.png".into(),
                "https://example.com/clip.mp4".into(),
            ],
        };
        let source = RemoteFeedSource::new(Box::new(feed), "wallpaper");

        let bytes = source.acquire().await.unwrap().unwrap();
        assert_eq!(&bytes[..], b"https://example.com/pics/keep.png");
    }

    #[tokio::test]
    async fn no_image_items_yields_none() {
        let feed = FakeFeed {
            items: vec![
                "https://example.com/gallery/abc".into(),
                "https://example.com/clip.mp4".into(),
            ],
        };
        let source = RemoteFeedSource::new(Box::new(feed), "wallpaper");

        assert!(source.acquire().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_feed_yields_none() {
        let source = RemoteFeedSource::new(Box::new(FakeFeed { items: vec![] }), "wallpaper");
        assert!(source.acquire().await.unwrap().is_none());
    }
}
