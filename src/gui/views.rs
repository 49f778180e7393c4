//! 画面ごとのビューモデル
//!
//! [`AnalysisResult`] を受け取り、表示に必要な値（指標・表・グラフ系列）を組み立てる
//! 純粋関数群。コンポーネントはここで作られた値をそのまま描画するだけにする。

use std::cmp::Ordering;

use crate::analytics::{AnalysisResult, ChannelSummary, CommentRecord, SentimentLabel, VideoRecord};
use crate::analytics::duration::format_duration;
use crate::gui::utils::format_count;

pub use crate::analytics::parse_channel_ids;

/// ヒストグラムのビン数
pub const HISTOGRAM_BINS: usize = 50;

/// ランキング表の件数
pub const VIEW_RANKING_SIZE: usize = 10;
pub const COMMENT_RANKING_SIZE: usize = 5;

/// 指標カード1枚分
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub icon: &'static str,
}

impl Metric {
    fn new(label: &str, value: String, icon: &'static str) -> Self {
        Self {
            label: label.to_string(),
            value,
            icon,
        }
    }
}

/// 単純な表
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// 棒グラフの1本
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub display: String,
}

/// 棒グラフ
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    fn new(title: &str, x_label: &str, y_label: &str, bars: Vec<Bar>) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            bars,
        }
    }

    /// 棒の長さ計算用の最大絶対値
    pub fn max_abs(&self) -> f64 {
        self.bars.iter().map(|b| b.value.abs()).fold(0.0, f64::max)
    }

    /// 負の値を含むかどうか（中央基準で描画する）
    pub fn has_negative(&self) -> bool {
        self.bars.iter().any(|b| b.value < 0.0)
    }
}

/// ヒストグラムのビン（`[start, end)`、最後のビンのみ閉区間）
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub title: String,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// 観測範囲を等幅 `bins` 個に分割して度数を数える
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }

    result
}

fn desc_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn asc_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// 値の大きい順に上位n件（同値は出現順）
fn largest_by<'a, T, K: Ord>(items: &'a [T], n: usize, key: impl Fn(&T) -> K) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted.truncate(n);
    sorted
}

/// 値の小さい順に下位n件（同値は出現順）
fn smallest_by<'a, T, K: Ord>(items: &'a [T], n: usize, key: impl Fn(&T) -> K) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| key(item));
    sorted.truncate(n);
    sorted
}

fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

// ---------------------------------------------------------------------------
// Channel Insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInsightsView {
    pub channel_title: String,
    pub metrics: Vec<Metric>,
    pub videos_analyzed: usize,
    pub comments_analyzed: usize,
    pub comments_per_video: BarChart,
    pub top_by_views: Table,
    pub bottom_by_views: Table,
    pub views_per_video: BarChart,
    pub most_liked: Table,
    pub least_liked: Table,
    pub longest_video: Table,
    pub sentiment_by_video: BarChart,
}

fn views_table(videos: &[&VideoRecord]) -> Table {
    let mut table = Table::new(&["Video Title", "View Count"]);
    table.rows = videos
        .iter()
        .map(|v| vec![v.title.clone(), format_count(v.view_count)])
        .collect();
    table
}

fn likes_table(videos: &[&VideoRecord]) -> Table {
    let mut table = Table::new(&["Video Title", "Like Count"]);
    table.rows = videos
        .iter()
        .map(|v| vec![v.title.clone(), format_count(v.like_count)])
        .collect();
    table
}

/// 動画ごとのコメント数（コメントのある動画のみ、多い順）
pub fn comments_per_video(comments: &[CommentRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for comment in comments {
        match counts.iter_mut().find(|(title, _)| *title == comment.video_title) {
            Some((_, count)) => *count += 1,
            None => counts.push((comment.video_title.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// 平均感情スコアの棒グラフ（昇順）
pub fn sentiment_by_video_chart(videos: &[VideoRecord]) -> BarChart {
    let mut sorted: Vec<&VideoRecord> = videos.iter().collect();
    sorted.sort_by(|a, b| asc_f64(a.average_sentiment, b.average_sentiment));

    BarChart::new(
        "Average Sentiment by Video",
        "Video Title",
        "Average Sentiment",
        sorted
            .into_iter()
            .map(|v| Bar {
                label: v.title.clone(),
                value: v.average_sentiment,
                display: format!("{:.3}", v.average_sentiment),
            })
            .collect(),
    )
}

pub fn channel_insights(result: &AnalysisResult) -> ChannelInsightsView {
    let channel = &result.channel;
    let videos = &result.videos;

    let metrics = vec![
        Metric::new("Total Subscribers", format_count(channel.subscriber_count), "👥"),
        Metric::new("Total Views", format_count(channel.view_count), "👀"),
        Metric::new("Total Videos", format_count(channel.video_count), "🎬"),
    ];

    let comments_per_video = BarChart::new(
        "Number of Comments per Video",
        "Video Title",
        "Number of Comments",
        comments_per_video(&result.comments)
            .into_iter()
            .map(|(title, count)| Bar {
                label: title,
                value: count as f64,
                display: count.to_string(),
            })
            .collect(),
    );

    let mut by_views: Vec<&VideoRecord> = videos.iter().collect();
    by_views.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    let views_per_video = BarChart::new(
        "Views per Video",
        "Video Title",
        "View Count",
        by_views
            .iter()
            .map(|v| Bar {
                label: v.title.clone(),
                value: v.view_count as f64,
                display: format_count(v.view_count),
            })
            .collect(),
    );

    let longest = largest_by(videos, 1, |v| v.duration().unwrap_or_default());
    let mut longest_video = Table::new(&["Video Title", "Duration"]);
    longest_video.rows = longest
        .iter()
        .map(|v| {
            let duration = v
                .duration()
                .map(format_duration)
                .unwrap_or_else(|| "-".to_string());
            vec![v.title.clone(), duration]
        })
        .collect();

    ChannelInsightsView {
        channel_title: channel.title.clone(),
        metrics,
        videos_analyzed: videos.len(),
        comments_analyzed: result.comments.len(),
        comments_per_video,
        top_by_views: views_table(&largest_by(videos, VIEW_RANKING_SIZE, |v| v.view_count)),
        bottom_by_views: views_table(&smallest_by(videos, VIEW_RANKING_SIZE, |v| v.view_count)),
        views_per_video,
        most_liked: likes_table(&largest_by(videos, 1, |v| v.like_count)),
        least_liked: likes_table(&smallest_by(videos, 1, |v| v.like_count)),
        longest_video,
        sentiment_by_video: sentiment_by_video_chart(videos),
    }
}

// ---------------------------------------------------------------------------
// Sentiment Analysis
// ---------------------------------------------------------------------------

/// 全コメントの感情集計
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SentimentStats {
    pub mean: f64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentStats {
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut stats = Self {
            mean: crate::analytics::sentiment::mean(scores),
            ..Self::default()
        };
        for score in scores {
            match SentimentLabel::from_score(*score) {
                SentimentLabel::Positive => stats.positive += 1,
                SentimentLabel::Negative => stats.negative += 1,
                SentimentLabel::Neutral => stats.neutral += 1,
            }
        }
        stats
    }
}

/// コメント検索結果
#[derive(Debug, Clone, PartialEq)]
pub struct CommentSearch {
    pub term: String,
    pub summary: String,
    pub table: Table,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentView {
    pub stats: SentimentStats,
    pub metrics: Vec<Metric>,
    pub histogram: Histogram,
    pub sentiment_by_video: BarChart,
    pub most_positive: Table,
    pub most_negative: Table,
    pub all_comments: Table,
    pub search: Option<CommentSearch>,
}

fn ranked_comments_table(comments: &[&CommentRecord]) -> Table {
    let mut table = Table::new(&["Video Title", "Comment", "Sentiment"]);
    table.rows = comments
        .iter()
        .map(|c| vec![c.video_title.clone(), c.text.clone(), format_score(c.score())])
        .collect();
    table
}

fn comment_table(comments: &[&CommentRecord]) -> Table {
    let mut table = Table::new(&["Comment", "Video Title", "Sentiment"]);
    table.rows = comments
        .iter()
        .map(|c| vec![c.text.clone(), c.video_title.clone(), format_score(c.score())])
        .collect();
    table
}

/// 本文に `term` を含むコメント（大文字小文字を区別しない部分一致）
pub fn search_comments<'a>(comments: &'a [CommentRecord], term: &str) -> Vec<&'a CommentRecord> {
    let needle = term.to_lowercase();
    comments
        .iter()
        .filter(|c| c.text.to_lowercase().contains(&needle))
        .collect()
}

pub fn sentiment_overview(result: &AnalysisResult, search_term: &str) -> SentimentView {
    let scores = result.sentiment_scores();
    let stats = SentimentStats::from_scores(&scores);

    let metrics = vec![
        Metric::new("Average Sentiment", format!("{:.2}", stats.mean), "📈"),
        Metric::new("Positive Comments", format_count(stats.positive as u64), "😊"),
        Metric::new("Negative Comments", format_count(stats.negative as u64), "😠"),
        Metric::new("Neutral Comments", format_count(stats.neutral as u64), "😐"),
    ];

    let mut by_score: Vec<&CommentRecord> = result.comments.iter().collect();
    by_score.sort_by(|a, b| desc_f64(a.score(), b.score()));
    let most_positive: Vec<&CommentRecord> =
        by_score.iter().take(COMMENT_RANKING_SIZE).copied().collect();

    by_score.sort_by(|a, b| asc_f64(a.score(), b.score()));
    let most_negative: Vec<&CommentRecord> =
        by_score.iter().take(COMMENT_RANKING_SIZE).copied().collect();

    let all: Vec<&CommentRecord> = result.comments.iter().collect();

    let term = search_term.trim();
    let search = (!term.is_empty()).then(|| {
        let matches = search_comments(&result.comments, term);
        CommentSearch {
            term: term.to_string(),
            summary: format!("Found {} comments containing '{}':", matches.len(), term),
            table: comment_table(&matches),
        }
    });

    SentimentView {
        stats,
        metrics,
        histogram: Histogram {
            title: "Distribution of Comment Sentiment Scores".to_string(),
            bins: histogram_bins(&scores, HISTOGRAM_BINS),
        },
        sentiment_by_video: sentiment_by_video_chart(&result.videos),
        most_positive: ranked_comments_table(&most_positive),
        most_negative: ranked_comments_table(&most_negative),
        all_comments: comment_table(&all),
        search,
    }
}

// ---------------------------------------------------------------------------
// Channel Comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub table: Table,
    pub subscribers: BarChart,
    pub views: BarChart,
    pub videos: BarChart,
}

fn channel_chart(
    title: &str,
    y_label: &str,
    channels: &[ChannelSummary],
    value: impl Fn(&ChannelSummary) -> u64,
) -> BarChart {
    BarChart::new(
        title,
        "Channel",
        y_label,
        channels
            .iter()
            .map(|c| Bar {
                label: c.title.clone(),
                value: value(c) as f64,
                display: format_count(value(c)),
            })
            .collect(),
    )
}

/// 比較表とグラフ。有効なチャンネルが1つもなければ `None`
pub fn channel_comparison(channels: &[ChannelSummary]) -> Option<ComparisonView> {
    if channels.is_empty() {
        return None;
    }

    let mut table = Table::new(&["Channel", "Channel ID", "Subscribers", "Views", "Videos"]);
    table.rows = channels
        .iter()
        .map(|c| {
            vec![
                c.title.clone(),
                c.channel_id.clone(),
                format_count(c.subscriber_count),
                format_count(c.view_count),
                format_count(c.video_count),
            ]
        })
        .collect();

    Some(ComparisonView {
        table,
        subscribers: channel_chart("Subscribers Comparison", "Subscribers", channels, |c| {
            c.subscriber_count
        }),
        views: channel_chart("View Count Comparison", "Views", channels, |c| c.view_count),
        videos: channel_chart("Video Count Comparison", "Videos", channels, |c| c.video_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn video(title: &str, views: u64, likes: u64, duration: &str, sentiment: f64) -> VideoRecord {
        VideoRecord {
            title: title.to_string(),
            video_id: format!("id-{}", title),
            view_count: views,
            like_count: likes,
            comment_count: 0,
            duration: duration.to_string(),
            average_sentiment: sentiment,
        }
    }

    fn comment(text: &str, title: &str, score: f64) -> CommentRecord {
        CommentRecord::new(text, title).with_sentiment(score)
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            comments: vec![
                comment("Great video!", "A", 0.66),
                comment("Terrible audio", "A", -0.5),
                comment("Posted on Tuesday", "B", 0.0),
                comment("LOVE this", "A", 0.64),
            ],
            videos: vec![
                video("A", 1_500, 40, "PT10M5S", 0.27),
                video("B", 300, 5, "PT1H2M", 0.0),
                video("C", 9_000, 5, "", 0.0),
            ],
            channel: ChannelSummary {
                channel_id: "UC1".to_string(),
                title: "Demo".to_string(),
                subscriber_count: 1_234_567,
                view_count: 10_800,
                video_count: 3,
            },
            notices: Vec::new(),
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_channel_metrics() {
        let view = channel_insights(&sample_result());
        assert_eq!(view.metrics[0].value, "1,234,567");
        assert_eq!(view.metrics[1].value, "10,800");
        assert_eq!(view.metrics[2].value, "3");
        assert_eq!(view.videos_analyzed, 3);
        assert_eq!(view.comments_analyzed, 4);
    }

    #[test]
    fn test_comments_per_video_sorted_desc() {
        let counts = comments_per_video(&sample_result().comments);
        assert_eq!(counts, vec![("A".to_string(), 3), ("B".to_string(), 1)]);
    }

    #[test]
    fn test_view_rankings() {
        let view = channel_insights(&sample_result());
        assert_eq!(view.top_by_views.rows[0], vec!["C", "9,000"]);
        assert_eq!(view.top_by_views.len(), 3);
        assert_eq!(view.bottom_by_views.rows[0], vec!["B", "300"]);
        let labels: Vec<&str> = view
            .views_per_video
            .bars
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_like_rankings_tie_keeps_first() {
        let view = channel_insights(&sample_result());
        assert_eq!(view.most_liked.rows, vec![vec!["A", "40"]]);
        // B と C が同数なので先に出現した B
        assert_eq!(view.least_liked.rows, vec![vec!["B", "5"]]);
    }

    #[test]
    fn test_longest_video_uses_parsed_duration() {
        let view = channel_insights(&sample_result());
        assert_eq!(view.longest_video.rows, vec![vec!["B", "1:02:00"]]);
    }

    #[test]
    fn test_sentiment_chart_ascending() {
        let chart = sentiment_by_video_chart(&sample_result().videos);
        let values: Vec<f64> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![0.0, 0.0, 0.27]);
        assert!(!chart.has_negative());
        assert_eq!(chart.max_abs(), 0.27);
    }

    #[test]
    fn test_sentiment_stats() {
        let view = sentiment_overview(&sample_result(), "");
        assert_eq!(view.stats.positive, 2);
        assert_eq!(view.stats.negative, 1);
        assert_eq!(view.stats.neutral, 1);
        assert_eq!(view.metrics[0].value, "0.20");
        assert!(view.search.is_none());
    }

    #[test]
    fn test_comment_rankings() {
        let view = sentiment_overview(&sample_result(), "");
        assert_eq!(view.most_positive.rows[0][1], "Great video!");
        assert_eq!(view.most_negative.rows[0][1], "Terrible audio");
        assert_eq!(view.most_positive.len(), 4);
        assert_eq!(view.all_comments.headers, vec!["Comment", "Video Title", "Sentiment"]);
        assert_eq!(view.all_comments.len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let view = sentiment_overview(&sample_result(), "  love ");
        let search = view.search.unwrap();
        assert_eq!(search.term, "love");
        assert_eq!(search.summary, "Found 1 comments containing 'love':");
        assert_eq!(search.table.rows[0][0], "LOVE this");
    }

    #[test]
    fn test_search_no_match() {
        let result = sample_result();
        assert!(search_comments(&result.comments, "xyz").is_empty());
        assert_eq!(search_comments(&result.comments, "A").len(), 3);
    }

    #[test]
    fn test_histogram_bins() {
        let bins = histogram_bins(&[-1.0, -0.5, 0.0, 0.5, 1.0], 4);
        assert_eq!(bins.len(), 4);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 1, 2]);
        assert_eq!(bins[0].start, -1.0);
        assert_eq!(bins[3].end, 1.0);
    }

    #[test]
    fn test_histogram_degenerate_inputs() {
        assert!(histogram_bins(&[], HISTOGRAM_BINS).is_empty());

        let single = histogram_bins(&[0.3, 0.3], HISTOGRAM_BINS);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].count, 2);
    }

    #[test]
    fn test_empty_comments_view() {
        let mut result = sample_result();
        result.comments.clear();

        let view = sentiment_overview(&result, "");
        assert_eq!(view.stats, SentimentStats::default());
        assert!(view.histogram.bins.is_empty());
        assert!(view.most_positive.is_empty());
        assert!(channel_insights(&result).comments_per_video.bars.is_empty());
    }

    #[test]
    fn test_channel_comparison() {
        let channels = vec![
            ChannelSummary {
                channel_id: "UC1".to_string(),
                title: "One".to_string(),
                subscriber_count: 5_000,
                view_count: 1_000_000,
                video_count: 12,
            },
            ChannelSummary {
                channel_id: "UC2".to_string(),
                title: "Two".to_string(),
                subscriber_count: 50,
                view_count: 900,
                video_count: 3,
            },
        ];

        let view = channel_comparison(&channels).unwrap();
        assert_eq!(view.table.len(), 2);
        assert_eq!(view.table.rows[0], vec!["One", "UC1", "5,000", "1,000,000", "12"]);
        assert_eq!(view.subscribers.bars[1].value, 50.0);
        assert_eq!(view.videos.bars[0].display, "12");
        assert!(channel_comparison(&[]).is_none());
    }
}
