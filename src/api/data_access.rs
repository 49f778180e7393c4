//! リモート呼び出しの縮退層
//!
//! [`YouTubeApi`] の各呼び出しを包み、失敗時はユーザー向けの通知を記録した上で
//! 空/既定値を返す。呼び出し側がエラーで中断することはない。

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::youtube::{ChannelId, ChannelSummary, VideoId, VideoRef, VideoStats, YouTubeApi};

/// 1ページあたりの再生リスト取得件数の上限
pub const PLAYLIST_PAGE_SIZE: usize = 50;

/// 1動画あたりのコメント取得件数の上限
pub const MAX_COMMENTS_PER_VIDEO: usize = 100;

/// 通知レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Error,
    Warning,
    Info,
}

/// 画面に表示するユーザー向けメッセージ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// 1回の操作中に発生した通知の蓄積先
#[derive(Debug, Default)]
pub struct NoticeLog {
    entries: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notice: Notice) {
        self.entries.lock().push(notice);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.entries.lock().clone()
    }

    /// 蓄積済みの通知をすべて取り出す
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.entries.lock())
    }
}

/// 失敗を通知に変換するデータアクセス
pub struct DataAccess<'a> {
    api: &'a dyn YouTubeApi,
    notices: &'a NoticeLog,
}

impl<'a> DataAccess<'a> {
    pub fn new(api: &'a dyn YouTubeApi, notices: &'a NoticeLog) -> Self {
        Self { api, notices }
    }

    fn report(&self, context: &str, error: &super::youtube::FetchError) {
        tracing::error!(context = context, error = %error, "❌ YouTube API call failed");
        self.notices.push(Notice::error(error.to_string()));
    }

    /// チャンネルのアップロード動画を最大 `max` 件、公開順に取得
    pub async fn list_uploads(&self, channel_id: &ChannelId, max: usize) -> Vec<VideoRef> {
        let playlist_id = match self.api.uploads_playlist_id(channel_id).await {
            Ok(id) => id,
            Err(e) => {
                self.report("list_uploads", &e);
                return Vec::new();
            }
        };

        let mut videos: Vec<VideoRef> = Vec::new();
        let mut page_token: Option<String> = None;

        while videos.len() < max {
            let page_size = PLAYLIST_PAGE_SIZE.min(max - videos.len());
            let page = match self
                .api
                .playlist_items_page(&playlist_id, page_size as u32, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    self.report("list_uploads", &e);
                    return Vec::new();
                }
            };

            tracing::debug!(
                playlist_id = %playlist_id,
                received = page.items.len(),
                has_next = page.next_page_token.is_some(),
                "📄 Playlist page fetched"
            );

            videos.extend(page.items);
            page_token = page.next_page_token;

            if page_token.is_none() {
                break;
            }
        }

        // APIが要求より多く返した場合に備える
        videos.truncate(max);
        videos
    }

    /// 動画の統計情報。失敗時はすべて0
    pub async fn get_video_stats(&self, video_id: &VideoId) -> VideoStats {
        match self.api.video_stats(video_id).await {
            Ok(stats) => stats,
            Err(e) => {
                self.report("get_video_stats", &e);
                VideoStats::default()
            }
        }
    }

    /// トップレベルコメントを最大 `max` 件（上限100、1ページのみ）
    pub async fn get_comments(&self, video_id: &VideoId, max: usize) -> Vec<String> {
        let max = max.min(MAX_COMMENTS_PER_VIDEO);
        match self.api.comment_threads(video_id, max as u32).await {
            Ok(mut comments) => {
                comments.truncate(max);
                comments
            }
            Err(e) if e.is_comments_disabled() => {
                tracing::debug!(video_id = %video_id, "💬 Comments disabled, skipping");
                Vec::new()
            }
            Err(e) => {
                self.report("get_comments", &e);
                Vec::new()
            }
        }
    }

    /// チャンネル統計。失敗時・該当なしは `None`
    pub async fn get_channel_stats(&self, channel_id: &ChannelId) -> Option<ChannelSummary> {
        match self.api.channel_summary(channel_id).await {
            Ok(Some(summary)) => Some(summary),
            Ok(None) => {
                tracing::warn!(channel_id = %channel_id, "⚠️ Channel has no statistics");
                None
            }
            Err(e) => {
                self.report("get_channel_stats", &e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeYouTube;

    #[tokio::test]
    async fn test_list_uploads_pages_until_max() {
        let api = FakeYouTube::new().with_channel("UC1", "Channel", 120, "vid");
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let videos = access.list_uploads(&ChannelId("UC1".to_string()), 75).await;

        assert_eq!(videos.len(), 75);
        assert_eq!(videos[0].video_id.0, "vid-0");
        assert_eq!(videos[74].video_id.0, "vid-74");
        // 50件 + 25件
        assert_eq!(api.requested_page_sizes(), vec![50, 25]);
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_list_uploads_stops_when_pages_exhausted() {
        let api = FakeYouTube::new().with_channel("UC1", "Channel", 3, "vid");
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let videos = access.list_uploads(&ChannelId("UC1".to_string()), 10).await;

        assert_eq!(videos.len(), 3);
        assert_eq!(api.requested_page_sizes(), vec![10]);
    }

    #[tokio::test]
    async fn test_list_uploads_unknown_channel_reports_error() {
        let api = FakeYouTube::new();
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let videos = access.list_uploads(&ChannelId("UCnope".to_string()), 10).await;

        assert!(videos.is_empty());
        let reported = notices.take();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].level, NoticeLevel::Error);
        assert!(reported[0].message.contains("UCnope"));
    }

    #[tokio::test]
    async fn test_list_uploads_later_page_failure_discards_all() {
        let api = FakeYouTube::new()
            .with_channel("UC1", "Channel", 80, "vid")
            .with_next_page_error(500);
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let videos = access.list_uploads(&ChannelId("UC1".to_string()), 80).await;

        assert!(videos.is_empty());
        assert_eq!(api.requested_page_sizes(), vec![50, 30]);
        let reported = notices.take();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_comments_disabled_is_silent() {
        let api = FakeYouTube::new().with_comment_error("vid-0", 403);
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let comments = access.get_comments(&VideoId("vid-0".to_string()), 100).await;

        assert!(comments.is_empty());
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_comment_server_error_is_reported() {
        let api = FakeYouTube::new().with_comment_error("vid-0", 500);
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let comments = access.get_comments(&VideoId("vid-0".to_string()), 100).await;

        assert!(comments.is_empty());
        let reported = notices.take();
        assert_eq!(reported.len(), 1);
        assert!(reported[0].message.starts_with("An HTTP error 500 occurred"));
    }

    #[tokio::test]
    async fn test_get_comments_caps_at_one_hundred() {
        let texts: Vec<String> = (0..150).map(|i| format!("comment {}", i)).collect();
        let api = FakeYouTube::new().with_comments("vid-0", texts);
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let comments = access.get_comments(&VideoId("vid-0".to_string()), 500).await;

        assert_eq!(comments.len(), 100);
        assert_eq!(comments[0], "comment 0");
    }

    #[tokio::test]
    async fn test_video_stats_default_on_error() {
        let api = FakeYouTube::new();
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        let stats = access.get_video_stats(&VideoId("missing".to_string())).await;

        assert_eq!(stats, VideoStats::default());
        assert_eq!(notices.take().len(), 1);
    }

    #[tokio::test]
    async fn test_channel_stats_missing_is_none_without_notice() {
        let api = FakeYouTube::new();
        let notices = NoticeLog::new();
        let access = DataAccess::new(&api, &notices);

        assert!(access
            .get_channel_stats(&ChannelId("UCnope".to_string()))
            .await
            .is_none());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_notice_log_take_drains() {
        let log = NoticeLog::new();
        log.push(Notice::warning("slow"));
        log.push(Notice::error("boom"));

        assert_eq!(log.snapshot().len(), 2);
        assert_eq!(log.take().len(), 2);
        assert!(log.is_empty());
    }
}
