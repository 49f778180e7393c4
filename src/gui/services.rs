// 分析サービス層

use std::fmt;
use std::sync::Arc;

use crate::analytics::{
    analyze_channel, compare_channels, parse_channel_ids, AnalysisError, AnalysisOptions,
    AnalysisResult, ComparisonResult,
};
use crate::api::youtube::YouTubeApi;
use crate::gui::state_management::AppEvent;

/// 画面からメインウィンドウのワーカーへ送る処理要求
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceRequest {
    Analyze { channel_id: String, filter_spam: bool },
    Compare { input: String },
}

/// 画面から呼び出す分析サービス
///
/// ルートコンテキストとして登録し、各コンポーネントは `use_context` で取得する。
#[derive(Clone)]
pub struct AnalysisService {
    api: Arc<dyn YouTubeApi>,
    defaults: AnalysisOptions,
}

impl fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisService")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl AnalysisService {
    pub fn new(api: Arc<dyn YouTubeApi>, defaults: AnalysisOptions) -> Self {
        Self { api, defaults }
    }

    pub fn defaults(&self) -> &AnalysisOptions {
        &self.defaults
    }

    /// チャンネル分析（スパムフィルタは画面のチェック状態で上書き）
    pub async fn analyze(
        &self,
        channel_id: &str,
        filter_spam: bool,
    ) -> Result<AnalysisResult, AnalysisError> {
        let options = AnalysisOptions {
            filter_spam,
            ..self.defaults.clone()
        };

        tracing::info!(channel_id = channel_id.trim(), "▶️ Analyze requested");
        analyze_channel(self.api.as_ref(), channel_id, &options).await
    }

    /// カンマ区切り入力のチャンネル比較
    pub async fn compare(&self, input: &str) -> ComparisonResult {
        let channel_ids = parse_channel_ids(input);
        tracing::info!(channels = channel_ids.len(), "▶️ Compare requested");
        compare_channels(self.api.as_ref(), &channel_ids).await
    }

    /// 要求を実行し、完了を表すイベントを返す
    pub async fn run(&self, request: ServiceRequest) -> AppEvent {
        match request {
            ServiceRequest::Analyze {
                channel_id,
                filter_spam,
            } => AppEvent::AnalysisFinished(self.analyze(&channel_id, filter_spam).await),
            ServiceRequest::Compare { input } => {
                AppEvent::ComparisonFinished(self.compare(&input).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeYouTube;

    fn service() -> AnalysisService {
        let api = FakeYouTube::new()
            .with_channel("UC1", "Demo", 2, "v")
            .with_comments("v-0", vec!["Nice work".into(), "free giveaway here".into()]);
        AnalysisService::new(Arc::new(api), AnalysisOptions::default())
    }

    #[tokio::test]
    async fn test_analyze_respects_filter_flag() {
        let service = service();

        let filtered = service.analyze("UC1", true).await.unwrap();
        assert_eq!(filtered.comments.len(), 1);

        let unfiltered = service.analyze("UC1", false).await.unwrap();
        assert_eq!(unfiltered.comments.len(), 2);
        assert!(service.defaults().filter_spam);
    }

    #[tokio::test]
    async fn test_compare_parses_input() {
        let result = service().compare(" UC1 ,, UCmissing ").await;
        assert_eq!(result.channels.len(), 1);
        assert_eq!(result.channels[0].title, "Demo");
    }

    #[tokio::test]
    async fn test_run_maps_requests_to_finish_events() {
        let service = service();

        let event = service
            .run(ServiceRequest::Analyze {
                channel_id: "UC1".to_string(),
                filter_spam: false,
            })
            .await;
        assert!(matches!(event, AppEvent::AnalysisFinished(Ok(ref r)) if r.comments.len() == 2));

        let event = service
            .run(ServiceRequest::Compare {
                input: "UC1".to_string(),
            })
            .await;
        assert!(matches!(event, AppEvent::ComparisonFinished(ref r) if r.channels.len() == 1));
    }
}
