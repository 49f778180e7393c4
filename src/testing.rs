//! テスト用のインメモリ YouTube API 実装
//!
//! ネットワークを使わずに集計処理や比較処理を検証するために使う。

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::api::youtube::{
    ChannelId, ChannelSummary, FetchError, Page, PlaylistId, VideoId, VideoRef, VideoStats,
    YouTubeApi,
};

struct FakeChannel {
    summary: ChannelSummary,
    uploads: Vec<VideoRef>,
}

/// 固定データを返す [`YouTubeApi`]
#[derive(Default)]
pub struct FakeYouTube {
    channels: HashMap<String, FakeChannel>,
    comments: HashMap<String, Vec<String>>,
    comment_errors: HashMap<String, u16>,
    stats: HashMap<String, VideoStats>,
    next_page_error: Option<u16>,
    page_sizes: Mutex<Vec<u32>>,
    calls: Mutex<Vec<String>>,
}

impl FakeYouTube {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{prefix}-{i}` という動画IDを `video_count` 本持つチャンネルを登録
    pub fn with_channel(self, channel_id: &str, title: &str, video_count: usize, prefix: &str) -> Self {
        let videos = (0..video_count)
            .map(|i| (format!("{}-{}", prefix, i), format!("{} video {}", title, i)))
            .collect();
        self.with_videos(channel_id, title, videos)
    }

    /// 動画ID・タイトルを明示してチャンネルを登録（統計は連番で自動設定）
    pub fn with_videos(mut self, channel_id: &str, title: &str, videos: Vec<(String, String)>) -> Self {
        let uploads: Vec<VideoRef> = videos
            .into_iter()
            .map(|(video_id, title)| VideoRef {
                video_id: VideoId(video_id),
                title,
            })
            .collect();

        for (i, video) in uploads.iter().enumerate() {
            let n = i as u64 + 1;
            self.stats.entry(video.video_id.0.clone()).or_insert(VideoStats {
                view_count: n * 100,
                like_count: n * 10,
                comment_count: 0,
                duration: format!("PT{}M", n),
            });
        }

        let summary = ChannelSummary {
            channel_id: channel_id.to_string(),
            title: title.to_string(),
            subscriber_count: 1_000 * (uploads.len() as u64 + 1),
            view_count: 100_000,
            video_count: uploads.len() as u64,
        };

        self.channels
            .insert(channel_id.to_string(), FakeChannel { summary, uploads });
        self
    }

    pub fn with_comments(mut self, video_id: &str, comments: Vec<String>) -> Self {
        self.comments.insert(video_id.to_string(), comments);
        self
    }

    pub fn with_comment_error(mut self, video_id: &str, status: u16) -> Self {
        self.comment_errors.insert(video_id.to_string(), status);
        self
    }

    pub fn with_video_stats(mut self, video_id: &str, stats: VideoStats) -> Self {
        self.stats.insert(video_id.to_string(), stats);
        self
    }

    /// 再生リストの2ページ目以降の取得を指定ステータスで失敗させる
    pub fn with_next_page_error(mut self, status: u16) -> Self {
        self.next_page_error = Some(status);
        self
    }

    /// チャンネルの統計は返すがアップロード一覧は返さない状態にする
    pub fn without_uploads(mut self, channel_id: &str) -> Self {
        if let Some(channel) = self.channels.get_mut(channel_id) {
            channel.uploads.clear();
        }
        self
    }

    /// これまでに要求された再生リストのページサイズ
    pub fn requested_page_sizes(&self) -> Vec<u32> {
        self.page_sizes.lock().clone()
    }

    /// 呼び出されたエンドポイントの記録（`"comments:vid-0"` 形式）
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl YouTubeApi for FakeYouTube {
    async fn uploads_playlist_id(&self, channel_id: &ChannelId) -> Result<PlaylistId, FetchError> {
        self.record(format!("uploads:{}", channel_id));
        if self.channels.contains_key(&channel_id.0) {
            Ok(PlaylistId(format!("uploads-{}", channel_id)))
        } else {
            Err(FetchError::not_found(format!("Channel '{}'", channel_id)))
        }
    }

    async fn playlist_items_page(
        &self,
        playlist_id: &PlaylistId,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<Page<VideoRef>, FetchError> {
        self.record(format!("playlist:{}", playlist_id));
        self.page_sizes.lock().push(page_size);

        if let (Some(status), Some(_)) = (self.next_page_error, page_token) {
            return Err(FetchError::Http {
                status,
                body: format!("{{\"error\":{{\"code\":{}}}}}", status),
            });
        }

        let channel_id = playlist_id.0.trim_start_matches("uploads-");
        let channel = self
            .channels
            .get(channel_id)
            .ok_or_else(|| FetchError::not_found(format!("Playlist '{}'", playlist_id)))?;

        let offset: usize = page_token.and_then(|t| t.parse().ok()).unwrap_or(0);
        let end = (offset + page_size as usize).min(channel.uploads.len());
        let items = channel.uploads.get(offset..end).unwrap_or_default().to_vec();

        Ok(Page {
            items,
            next_page_token: (end < channel.uploads.len()).then(|| end.to_string()),
        })
    }

    async fn video_stats(&self, video_id: &VideoId) -> Result<VideoStats, FetchError> {
        self.record(format!("stats:{}", video_id));
        self.stats
            .get(&video_id.0)
            .cloned()
            .ok_or_else(|| FetchError::not_found(format!("Video '{}'", video_id)))
    }

    async fn comment_threads(
        &self,
        video_id: &VideoId,
        max_results: u32,
    ) -> Result<Vec<String>, FetchError> {
        self.record(format!("comments:{}", video_id));
        if let Some(status) = self.comment_errors.get(&video_id.0) {
            return Err(FetchError::Http {
                status: *status,
                body: format!("{{\"error\":{{\"code\":{}}}}}", status),
            });
        }

        Ok(self
            .comments
            .get(&video_id.0)
            .map(|c| c.iter().take(max_results as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn channel_summary(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelSummary>, FetchError> {
        self.record(format!("channel:{}", channel_id));
        Ok(self.channels.get(&channel_id.0).map(|c| c.summary.clone()))
    }
}
