use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ApiConfig;

/// YouTube Data API の呼び出しエラー
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("An HTTP error {status} occurred: {body}")]
    Http { status: u16, body: String },
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{what} not found")]
    NotFound { what: String },
}

impl FetchError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// HTTPステータスコード（HTTPエラーの場合のみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// コメント無効化された動画に対する応答かどうか
    pub fn is_comments_disabled(&self) -> bool {
        self.status() == Some(403)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChannelId(pub String);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VideoId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(pub String);

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// キーをログに出さない
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

/// アップロード再生リスト上の動画参照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRef {
    pub video_id: VideoId,
    pub title: String,
}

/// 動画ごとの統計情報
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoStats {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    /// ISO 8601 形式の生の長さ（例: `PT4M13S`）
    pub duration: String,
}

/// チャンネル概要
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub channel_id: String,
    pub title: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
}

/// ページングされた一覧の1ページ分
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

// ---- APIレスポンス（必要なフィールドのみ） ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    #[serde(default)]
    pub id: String,
    pub snippet: Option<TitleSnippet>,
    pub content_details: Option<ChannelContentDetails>,
    pub statistics: Option<CountStatistics>,
}

#[derive(Debug, Deserialize)]
pub struct TitleSnippet {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

/// 統計値。APIは数値を10進文字列で返す
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
    pub subscriber_count: Option<String>,
    pub video_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub statistics: Option<CountStatistics>,
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Deserialize)]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

/// 文字列の統計値を数値化（欠損・不正値は0）
pub fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// channels (part=contentDetails) のレスポンスからアップロード再生リストIDを取り出す
pub fn extract_uploads_playlist(response: ListResponse<ChannelItem>) -> Option<PlaylistId> {
    response
        .items
        .into_iter()
        .next()?
        .content_details?
        .related_playlists?
        .uploads
        .map(PlaylistId)
}

/// playlistItems のレスポンスを動画参照のページに変換
pub fn extract_video_refs(response: ListResponse<PlaylistItem>) -> Page<VideoRef> {
    let items = response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.snippet.resource_id?.video_id?;
            Some(VideoRef {
                video_id: VideoId(video_id),
                title: item.snippet.title,
            })
        })
        .collect();

    Page {
        items,
        next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
    }
}

/// commentThreads のレスポンスからトップレベルコメント本文を取り出す
pub fn extract_comment_texts(response: ListResponse<CommentThread>) -> Vec<String> {
    response
        .items
        .into_iter()
        .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
        .collect()
}

/// videos (part=statistics,contentDetails) のレスポンスから統計を取り出す
pub fn extract_video_stats(response: ListResponse<VideoItem>) -> Option<VideoStats> {
    let item = response.items.into_iter().next()?;
    let stats = item.statistics.unwrap_or_default();

    Some(VideoStats {
        view_count: parse_count(stats.view_count.as_deref()),
        like_count: parse_count(stats.like_count.as_deref()),
        comment_count: parse_count(stats.comment_count.as_deref()),
        duration: item
            .content_details
            .and_then(|d| d.duration)
            .unwrap_or_default(),
    })
}

/// channels (part=snippet,statistics) のレスポンスからチャンネル概要を取り出す
pub fn extract_channel_summary(
    channel_id: &ChannelId,
    response: ListResponse<ChannelItem>,
) -> Option<ChannelSummary> {
    let item = response.items.into_iter().next()?;
    let stats = item.statistics.unwrap_or_default();

    Some(ChannelSummary {
        channel_id: if item.id.is_empty() {
            channel_id.0.clone()
        } else {
            item.id
        },
        title: item.snippet.map(|s| s.title).unwrap_or_default(),
        subscriber_count: parse_count(stats.subscriber_count.as_deref()),
        view_count: parse_count(stats.view_count.as_deref()),
        video_count: parse_count(stats.video_count.as_deref()),
    })
}

/// YouTube Data API の読み取り専用操作
#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// チャンネルのアップロード再生リストIDを解決
    async fn uploads_playlist_id(&self, channel_id: &ChannelId) -> Result<PlaylistId, FetchError>;

    /// 再生リストの1ページ分を取得
    async fn playlist_items_page(
        &self,
        playlist_id: &PlaylistId,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<Page<VideoRef>, FetchError>;

    /// 動画の統計情報と長さを取得
    async fn video_stats(&self, video_id: &VideoId) -> Result<VideoStats, FetchError>;

    /// トップレベルコメントを1ページ分取得
    async fn comment_threads(
        &self,
        video_id: &VideoId,
        max_results: u32,
    ) -> Result<Vec<String>, FetchError>;

    /// チャンネル統計を取得（該当なしは `None`）
    async fn channel_summary(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelSummary>, FetchError>;
}

/// reqwest ベースの YouTube Data API v3 クライアント
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl YouTubeClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: ApiKey::new(config.api_key.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(endpoint = endpoint, params = ?params, "📡 API request sent");

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ HTTP request failed: {}", e);
                e
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                endpoint = endpoint,
                status = status.as_u16(),
                "⚠️ API returned an error status"
            );
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(
            endpoint = endpoint,
            response_size_bytes = body.len(),
            "📨 API response received"
        );

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl YouTubeApi for YouTubeClient {
    async fn uploads_playlist_id(&self, channel_id: &ChannelId) -> Result<PlaylistId, FetchError> {
        let response: ListResponse<ChannelItem> = self
            .get_json("channels", &[("part", "contentDetails"), ("id", channel_id.0.as_str())])
            .await?;

        extract_uploads_playlist(response)
            .ok_or_else(|| FetchError::not_found(format!("Channel '{}'", channel_id)))
    }

    async fn playlist_items_page(
        &self,
        playlist_id: &PlaylistId,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<Page<VideoRef>, FetchError> {
        let page_size = page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id.0.as_str()),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response: ListResponse<PlaylistItem> = self.get_json("playlistItems", &params).await?;
        Ok(extract_video_refs(response))
    }

    async fn video_stats(&self, video_id: &VideoId) -> Result<VideoStats, FetchError> {
        let response: ListResponse<VideoItem> = self
            .get_json(
                "videos",
                &[("part", "statistics,contentDetails"), ("id", video_id.0.as_str())],
            )
            .await?;

        extract_video_stats(response)
            .ok_or_else(|| FetchError::not_found(format!("Video '{}'", video_id)))
    }

    async fn comment_threads(
        &self,
        video_id: &VideoId,
        max_results: u32,
    ) -> Result<Vec<String>, FetchError> {
        let max_results = max_results.to_string();
        let response: ListResponse<CommentThread> = self
            .get_json(
                "commentThreads",
                &[
                    ("part", "snippet"),
                    ("videoId", video_id.0.as_str()),
                    ("textFormat", "plainText"),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(extract_comment_texts(response))
    }

    async fn channel_summary(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelSummary>, FetchError> {
        let response: ListResponse<ChannelItem> = self
            .get_json("channels", &[("part", "snippet,statistics"), ("id", channel_id.0.as_str())])
            .await?;

        Ok(extract_channel_summary(channel_id, response))
    }
}
