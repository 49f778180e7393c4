//! チャンネル分析のオーケストレーション
//!
//! 動画一覧 → 動画ごとのコメント・統計 → スパム除外 → 感情スコア → 集計、の順に
//! 逐次実行する。リモート呼び出しはすべて [`DataAccess`] 経由で、失敗は通知として
//! 結果に残る。

use serde::{Deserialize, Serialize};

use crate::api::data_access::{DataAccess, Notice, NoticeLog, MAX_COMMENTS_PER_VIDEO};
use crate::api::youtube::{ChannelId, ChannelSummary, YouTubeApi};
use crate::config::AnalysisConfig;

use super::models::{AnalysisResult, CommentRecord, VideoRecord};
use super::{sentiment, spam_filter};

/// 分析パラメータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub max_videos: usize,
    pub max_comments: usize,
    pub filter_spam: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_videos: 10,
            max_comments: MAX_COMMENTS_PER_VIDEO,
            filter_spam: true,
        }
    }
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            max_videos: config.max_videos,
            max_comments: config.max_comments.min(MAX_COMMENTS_PER_VIDEO),
            filter_spam: config.filter_spam,
        }
    }
}

/// 分析を完了できなかった理由
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Please enter a YouTube channel ID")]
    EmptyChannelId,
    #[error("No data could be retrieved for channel '{channel_id}'")]
    NoData {
        channel_id: String,
        notices: Vec<Notice>,
    },
}

impl AnalysisError {
    /// 失敗までに記録された通知
    pub fn notices(&self) -> &[Notice] {
        match self {
            AnalysisError::EmptyChannelId => &[],
            AnalysisError::NoData { notices, .. } => notices,
        }
    }
}

/// チャンネルを分析する
pub async fn analyze_channel(
    api: &dyn YouTubeApi,
    channel_id: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    let channel_id = channel_id.trim();
    if channel_id.is_empty() {
        return Err(AnalysisError::EmptyChannelId);
    }
    let channel_id = ChannelId(channel_id.to_string());

    let notices = NoticeLog::new();
    let access = DataAccess::new(api, &notices);

    tracing::info!(
        channel_id = %channel_id,
        max_videos = options.max_videos,
        filter_spam = options.filter_spam,
        "🔍 Starting channel analysis"
    );

    let videos = access.list_uploads(&channel_id, options.max_videos).await;
    let channel = access.get_channel_stats(&channel_id).await;

    let channel = match channel {
        Some(channel) if !videos.is_empty() => channel,
        _ => {
            tracing::warn!(
                channel_id = %channel_id,
                video_count = videos.len(),
                "⚠️ Analysis aborted: channel data unavailable"
            );
            return Err(AnalysisError::NoData {
                channel_id: channel_id.0,
                notices: notices.take(),
            });
        }
    };

    let mut comment_records: Vec<CommentRecord> = Vec::new();
    let mut video_records: Vec<VideoRecord> = Vec::with_capacity(videos.len());

    for video in &videos {
        let comments = access
            .get_comments(&video.video_id, options.max_comments)
            .await;
        let stats = access.get_video_stats(&video.video_id).await;

        let fetched = comments.len();
        let kept = if options.filter_spam {
            spam_filter::filter_spam(comments)
        } else {
            comments
        };

        let scores = sentiment::score_batch(&kept);
        let average_sentiment = sentiment::mean(&scores);

        tracing::debug!(
            video_id = %video.video_id,
            fetched_comments = fetched,
            kept_comments = kept.len(),
            average_sentiment = average_sentiment,
            "🎬 Video analyzed"
        );

        comment_records.extend(
            kept.into_iter()
                .zip(scores)
                .map(|(text, score)| CommentRecord::new(text, &video.title).with_sentiment(score)),
        );

        video_records.push(VideoRecord {
            title: video.title.clone(),
            video_id: video.video_id.0.clone(),
            view_count: stats.view_count,
            like_count: stats.like_count,
            comment_count: stats.comment_count,
            duration: stats.duration,
            average_sentiment,
        });
    }

    tracing::info!(
        channel = %channel.title,
        videos = video_records.len(),
        comments = comment_records.len(),
        "✅ Channel analysis complete"
    );

    Ok(AnalysisResult {
        comments: comment_records,
        videos: video_records,
        channel,
        notices: notices.take(),
        analyzed_at: chrono::Utc::now(),
    })
}

/// 比較対象チャンネルの取得結果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub channels: Vec<ChannelSummary>,
    pub notices: Vec<Notice>,
}

/// カンマ区切りのチャンネルID入力を分解（前後空白除去、空要素は無視）
pub fn parse_channel_ids(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// 各チャンネルの概要を個別に取得する。取得できなかったものは除外
pub async fn compare_channels(api: &dyn YouTubeApi, channel_ids: &[String]) -> ComparisonResult {
    let notices = NoticeLog::new();
    let access = DataAccess::new(api, &notices);
    let mut channels = Vec::new();

    for channel_id in channel_ids {
        let channel_id = ChannelId(channel_id.clone());
        match access.get_channel_stats(&channel_id).await {
            Some(summary) => channels.push(summary),
            None => tracing::info!(channel_id = %channel_id, "⏭️ Skipping channel without statistics"),
        }
    }

    tracing::info!(
        requested = channel_ids.len(),
        found = channels.len(),
        "📊 Channel comparison fetched"
    );

    ComparisonResult {
        channels,
        notices: notices.take(),
    }
}
