//! セッション状態
//!
//! メインウィンドウが `Signal<AppState>` として1つだけ保持し、変更は
//! [`AppState::dispatch`] に [`AppEvent`] を渡して行う。

use std::sync::Arc;

use crate::analytics::{AnalysisError, AnalysisResult, ComparisonResult};
use crate::api::data_access::Notice;
use crate::gui::models::Page;
use crate::gui::services::ServiceRequest;

/// 状態イベント
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// 画面が切り替えられた
    PageChanged(Page),
    /// スパムフィルタのチェックが変更された
    SpamFilterToggled(bool),
    /// チャンネルID入力が変更された
    ChannelInputChanged(String),
    /// 分析を開始した
    AnalysisStarted,
    /// 分析が終了した
    AnalysisFinished(Result<AnalysisResult, AnalysisError>),
    /// コメント検索語が変更された
    SearchTermChanged(String),
    /// 比較対象のID入力が変更された
    ComparisonInputChanged(String),
    /// 比較を開始した
    ComparisonStarted,
    /// 比較が終了した
    ComparisonFinished(ComparisonResult),
}

/// 分析の進行状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed(String),
}

impl AnalysisStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, AnalysisStatus::Running)
    }
}

/// アプリケーションの状態
#[derive(Debug, Clone)]
pub struct AppState {
    pub active_page: Page,
    pub filter_spam: bool,
    pub channel_input: String,
    pub status: AnalysisStatus,
    /// 最後に成功した分析。新しい分析が成功したときだけ丸ごと置き換える
    pub analysis: Option<Arc<AnalysisResult>>,
    /// 直近の分析で記録された通知
    pub notices: Vec<Notice>,
    pub search_term: String,
    pub comparison_input: String,
    pub comparison_running: bool,
    pub comparison: Option<Arc<ComparisonResult>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AppState {
    pub fn new(filter_spam: bool) -> Self {
        Self {
            active_page: Page::default(),
            filter_spam,
            channel_input: String::new(),
            status: AnalysisStatus::Idle,
            analysis: None,
            notices: Vec::new(),
            search_term: String::new(),
            comparison_input: String::new(),
            comparison_running: false,
            comparison: None,
        }
    }

    /// 分析ボタンを押せるか
    pub fn can_analyze(&self) -> bool {
        !self.status.is_running() && !self.channel_input.trim().is_empty()
    }

    pub fn can_compare(&self) -> bool {
        !self.comparison_running && !self.comparison_input.trim().is_empty()
    }

    /// 分析を開始状態にし、実行する要求を返す（開始できなければ `None`）
    pub fn begin_analysis(&mut self) -> Option<ServiceRequest> {
        if !self.can_analyze() {
            tracing::debug!("🚫 Analyze request ignored");
            return None;
        }
        let request = ServiceRequest::Analyze {
            channel_id: self.channel_input.trim().to_string(),
            filter_spam: self.filter_spam,
        };
        self.dispatch(AppEvent::AnalysisStarted);
        Some(request)
    }

    pub fn begin_comparison(&mut self) -> Option<ServiceRequest> {
        if !self.can_compare() {
            return None;
        }
        let request = ServiceRequest::Compare {
            input: self.comparison_input.clone(),
        };
        self.dispatch(AppEvent::ComparisonStarted);
        Some(request)
    }

    /// 現在の画面に表示する分析結果（結果が不要な画面では `None`）
    pub fn analysis_for_page(&self) -> Option<Arc<AnalysisResult>> {
        if self.active_page.requires_analysis() {
            self.analysis.clone()
        } else {
            None
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::PageChanged(page) => {
                tracing::info!("🔄 Page switched: {:?} → {:?}", self.active_page, page);
                self.active_page = page;
            }
            AppEvent::SpamFilterToggled(enabled) => {
                tracing::info!(filter_spam = enabled, "🧹 Spam filter toggled");
                self.filter_spam = enabled;
            }
            AppEvent::ChannelInputChanged(value) => {
                self.channel_input = value;
            }
            AppEvent::AnalysisStarted => {
                self.status = AnalysisStatus::Running;
                self.notices.clear();
            }
            AppEvent::AnalysisFinished(Ok(result)) => {
                tracing::info!(
                    channel = %result.channel.title,
                    videos = result.videos.len(),
                    comments = result.comments.len(),
                    "📥 Analysis stored in session"
                );
                self.notices = result.notices.clone();
                self.analysis = Some(Arc::new(result));
                self.search_term.clear();
                self.status = AnalysisStatus::Succeeded;
            }
            AppEvent::AnalysisFinished(Err(error)) => {
                tracing::warn!("⚠️ Analysis failed: {}", error);
                self.notices = error.notices().to_vec();
                self.status = AnalysisStatus::Failed(error.to_string());
            }
            AppEvent::SearchTermChanged(term) => {
                self.search_term = term;
            }
            AppEvent::ComparisonInputChanged(value) => {
                self.comparison_input = value;
            }
            AppEvent::ComparisonStarted => {
                self.comparison_running = true;
            }
            AppEvent::ComparisonFinished(result) => {
                self.comparison_running = false;
                self.comparison = Some(Arc::new(result));
            }
        }
    }
}
