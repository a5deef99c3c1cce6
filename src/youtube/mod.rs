//! YouTube Data API v3 client.
//!
//! The fetch pipeline is a short, strictly sequential chain with no
//! retries: resolve handle -> channel details -> uploads playlist ->
//! batch video stats. The first failure aborts the whole run and its
//! message is surfaced to the user verbatim.

use chrono::{DateTime, Months, Utc};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::resolver::ChannelIdentifier;
use crate::VideoRecord;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const ENV_API_KEY: &str = "YOUTUBE_API_KEY";

/// The uploads playlist is read in one page.
const MAX_RESULTS: u32 = 50;

/// Errors from the fetch pipeline. Scoring itself never fails; all
/// fallible work lives here.
#[derive(Debug, Error)]
pub enum YouTubeError {
    #[error("YOUTUBE_API_KEY environment variable not set (or pass --api-key)")]
    NoApiKey,
    #[error(
        "Invalid YouTube URL or channel identifier. Please enter a valid channel URL, @handle, or channel ID."
    )]
    InvalidIdentifier,
    #[error("{0}")]
    NotFound(String),
    #[error("YouTube API error: {0}")]
    Api(String),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Blocking client for the endpoints the analyzer needs
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    http: reqwest::blocking::Client,
}

impl YouTubeClient {
    /// Create a client using YOUTUBE_API_KEY from the environment
    pub fn from_env() -> Result<Self, YouTubeError> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| YouTubeError::NoApiKey)?;
        Ok(Self::with_key(api_key))
    }

    /// Create a client with a specific API key
    pub fn with_key(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies)
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn get<T>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T, YouTubeError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint))
            .map_err(|e| YouTubeError::Api(e.to_string()))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.api_key);

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().unwrap_or_default();
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("API Error")
                .to_string();
            return Err(YouTubeError::Api(message));
        }

        Ok(response.json()?)
    }

    /// Canonical channel id for any identifier. Handles and usernames go
    /// through the search endpoint; ids pass straight through.
    pub fn resolve_channel_id(
        &self,
        identifier: &ChannelIdentifier,
    ) -> Result<String, YouTubeError> {
        if let ChannelIdentifier::Id(id) = identifier {
            return Ok(id.clone());
        }

        let found: SearchResponse = self.get(
            "search",
            &[
                ("part", "snippet"),
                ("type", "channel"),
                ("q", identifier.value()),
            ],
        )?;
        found
            .items
            .into_iter()
            .next()
            .map(|item| item.snippet.channel_id)
            .ok_or_else(|| {
                YouTubeError::NotFound(
                    "Channel not found. Please check the URL or handle.".to_string(),
                )
            })
    }

    /// The channel's uploads playlist id
    pub fn uploads_playlist(&self, channel_id: &str) -> Result<String, YouTubeError> {
        let channels: ChannelsResponse = self.get(
            "channels",
            &[("part", "contentDetails"), ("id", channel_id)],
        )?;
        channels
            .items
            .into_iter()
            .next()
            .map(|item| item.content_details.related_playlists.uploads)
            .ok_or_else(|| YouTubeError::NotFound("Channel not found.".to_string()))
    }

    /// Ids of uploads published within the last `months`, newest page of
    /// 50 only. Items with an unparsable publish date fall outside the
    /// window.
    pub fn recent_upload_ids(
        &self,
        playlist_id: &str,
        months: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>, YouTubeError> {
        let max = MAX_RESULTS.to_string();
        let playlist: PlaylistItemsResponse = self.get(
            "playlistItems",
            &[
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", &max),
            ],
        )?;
        if playlist.items.is_empty() {
            return Err(YouTubeError::NotFound(
                "No videos found on this channel.".to_string(),
            ));
        }

        let ids = filter_recent(playlist.items, months, now);
        if ids.is_empty() {
            return Err(YouTubeError::NotFound(format!(
                "No videos found in the last {} months.",
                months
            )));
        }
        Ok(ids)
    }

    /// Full snippet + statistics for a batch of video ids
    pub fn videos(&self, ids: &[String]) -> Result<Vec<VideoRecord>, YouTubeError> {
        let joined = ids.join(",");
        let response: VideosResponse = self.get(
            "videos",
            &[("part", "snippet,statistics"), ("id", &joined)],
        )?;
        Ok(response.items)
    }

    /// The whole sequential chain from a resolved identifier to records
    /// ready for scoring.
    pub fn fetch_recent_videos(
        &self,
        identifier: &ChannelIdentifier,
        months: u32,
    ) -> Result<Vec<VideoRecord>, YouTubeError> {
        let channel_id = self.resolve_channel_id(identifier)?;
        let playlist_id = self.uploads_playlist(&channel_id)?;
        let ids = self.recent_upload_ids(&playlist_id, months, Utc::now())?;
        self.videos(&ids)
    }
}

fn filter_recent(items: Vec<PlaylistItem>, months: u32, now: DateTime<Utc>) -> Vec<String> {
    let cutoff = now.checked_sub_months(Months::new(months)).unwrap_or(now);
    items
        .into_iter()
        .filter(|item| {
            DateTime::parse_from_rfc3339(&item.snippet.published_at)
                .map(|published| published.with_timezone(&Utc) >= cutoff)
                .unwrap_or(false)
        })
        .map(|item| item.snippet.resource_id.video_id)
        .collect()
}

// Wire shapes, private to this module. Only the fields the pipeline
// reads are modeled.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    channel_id: String,
}

#[derive(Debug, Deserialize)]
struct ChannelsResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistSnippet {
    #[serde(default)]
    published_at: String,
    resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoRecord>,
}
