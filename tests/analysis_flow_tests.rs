//! 分析フローの統合テスト
//!
//! インメモリのAPIで分析を実行し、セッション状態とビューモデルまで通す。

use std::sync::Arc;

use tubelens::analytics::{AnalysisOptions, SentimentLabel};
use tubelens::gui::views::{channel_comparison, channel_insights, sentiment_overview, HISTOGRAM_BINS};
use tubelens::gui::{AnalysisService, AnalysisStatus, AppEvent, AppState, Page};
use tubelens::testing::FakeYouTube;

fn demo_api() -> FakeYouTube {
    FakeYouTube::new()
        .with_videos(
            "UCdemo",
            "Demo Channel",
            vec![
                ("a".to_string(), "Launch day".to_string()),
                ("b".to_string(), "Behind the scenes".to_string()),
                ("c".to_string(), "Q&A".to_string()),
            ],
        )
        .with_comments(
            "a",
            vec![
                "Great video!".to_string(),
                "I love this so much".to_string(),
                "subscribe to my channel".to_string(),
            ],
        )
        .with_comments(
            "b",
            vec![
                "This is terrible and boring".to_string(),
                "Filmed in March".to_string(),
            ],
        )
        .with_channel("UCother", "Other Channel", 1, "o")
}

fn service() -> AnalysisService {
    AnalysisService::new(Arc::new(demo_api()), AnalysisOptions::default())
}

#[cfg(test)]
mod session_flow_tests {
    use super::*;

    #[test]
    fn test_analysis_result_flows_into_views() {
        let service = service();
        let mut state = AppState::new(service.defaults().filter_spam);

        state.dispatch(AppEvent::ChannelInputChanged("UCdemo".to_string()));
        state.dispatch(AppEvent::AnalysisStarted);
        let result = tokio_test::block_on(service.analyze(&state.channel_input, state.filter_spam));
        state.dispatch(AppEvent::AnalysisFinished(result));

        assert_eq!(state.status, AnalysisStatus::Succeeded);
        state.dispatch(AppEvent::PageChanged(Page::ChannelInsights));
        let analysis = state.analysis_for_page().unwrap();

        // スパム1件除外で4件
        assert_eq!(analysis.comments.len(), 4);

        let insights = channel_insights(&analysis);
        assert_eq!(insights.channel_title, "Demo Channel");
        assert_eq!(insights.videos_analyzed, 3);
        assert_eq!(insights.comments_analyzed, 4);
        assert_eq!(insights.comments_per_video.bars.len(), 2);
        assert_eq!(insights.top_by_views.rows[0][0], "Q&A");
        assert_eq!(insights.longest_video.rows[0], vec!["Q&A", "3:00"]);

        let sentiment = sentiment_overview(&analysis, "");
        assert_eq!(
            sentiment.stats.positive + sentiment.stats.negative + sentiment.stats.neutral,
            4
        );
        assert!(sentiment.histogram.bins.len() <= HISTOGRAM_BINS);
        assert_eq!(sentiment.most_positive.rows.len(), 4);
        assert_eq!(sentiment.sentiment_by_video.bars.len(), 3);

        let search = sentiment_overview(&analysis, "LOVE").search.unwrap();
        assert_eq!(search.summary, "Found 1 comments containing 'LOVE':");
    }

    #[test]
    fn test_sentiment_labels_follow_scores() {
        let result = tokio_test::block_on(service().analyze("UCdemo", true)).unwrap();

        let labels: Vec<SentimentLabel> = result
            .comments
            .iter()
            .map(|c| SentimentLabel::from_score(c.score()))
            .collect();
        assert_eq!(labels[0], SentimentLabel::Positive);
        assert_eq!(labels[2], SentimentLabel::Negative);
    }

    #[test]
    fn test_spam_filter_toggle_changes_next_analysis() {
        let service = service();
        let mut state = AppState::default();
        state.dispatch(AppEvent::SpamFilterToggled(false));

        let result = tokio_test::block_on(service.analyze("UCdemo", state.filter_spam));
        state.dispatch(AppEvent::AnalysisFinished(result));

        let analysis = state.analysis.clone().unwrap();
        assert_eq!(analysis.comments.len(), 5);
    }

    #[test]
    fn test_unknown_channel_leaves_session_empty() {
        let service = service();
        let mut state = AppState::default();

        let result = tokio_test::block_on(service.analyze("UCnope", true));
        state.dispatch(AppEvent::AnalysisFinished(result));

        assert!(matches!(state.status, AnalysisStatus::Failed(_)));
        assert!(state.analysis.is_none());
        assert!(!state.notices.is_empty());
    }
}

#[cfg(test)]
mod comparison_flow_tests {
    use super::*;

    #[tokio::test]
    async fn test_comparison_skips_unknown_channels() {
        let mut state = AppState::default();
        state.dispatch(AppEvent::ComparisonInputChanged(
            "UCdemo, UCnope ,UCother".to_string(),
        ));

        let result = service().compare(&state.comparison_input).await;
        state.dispatch(AppEvent::ComparisonFinished(result));

        let comparison = state.comparison.clone().unwrap();
        let view = channel_comparison(&comparison.channels).unwrap();
        assert_eq!(view.table.rows.len(), 2);
        assert_eq!(view.table.rows[0][0], "Demo Channel");
        assert_eq!(view.table.rows[1][0], "Other Channel");
        assert_eq!(view.subscribers.bars.len(), 2);
    }

    #[tokio::test]
    async fn test_comparison_with_no_valid_channels() {
        let result = service().compare("UCnope").await;
        assert!(result.channels.is_empty());
        assert!(channel_comparison(&result.channels).is_none());
    }
}
