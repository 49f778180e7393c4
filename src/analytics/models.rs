use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::api::data_access::Notice;
pub use crate::api::youtube::ChannelSummary;

use super::duration::parse_iso8601_duration;

/// 取得したコメント1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub text: String,
    /// 所属する動画のタイトル（[`VideoRecord::title`] との結合キー）
    pub video_title: String,
    /// スコアリング前は `None`
    pub sentiment: Option<f64>,
}

impl CommentRecord {
    pub fn new(text: impl Into<String>, video_title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            video_title: video_title.into(),
            sentiment: None,
        }
    }

    pub fn with_sentiment(mut self, score: f64) -> Self {
        self.sentiment = Some(score);
        self
    }

    /// 未スコアは中立扱い
    pub fn score(&self) -> f64 {
        self.sentiment.unwrap_or(0.0)
    }
}

/// 動画ごとの集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub video_id: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    /// ISO 8601 の生の値。統計取得に失敗した場合は空
    pub duration: String,
    /// スパム除外後コメントの平均スコア（コメントなしは0）
    pub average_sentiment: f64,
}

impl VideoRecord {
    pub fn duration(&self) -> Option<Duration> {
        parse_iso8601_duration(&self.duration)
    }
}

/// 1回の分析の結果。セッション状態には丸ごと保持・置換される
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub comments: Vec<CommentRecord>,
    pub videos: Vec<VideoRecord>,
    pub channel: ChannelSummary,
    /// 分析中に縮退した呼び出しの通知
    pub notices: Vec<Notice>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// スコア列（コメント順）
    pub fn sentiment_scores(&self) -> Vec<f64> {
        self.comments.iter().map(CommentRecord::score).collect()
    }
}
