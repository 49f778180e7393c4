use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::gui::{
    components::{
        AnalysisPlaceholder, ChannelInsightsPage, ComparisonPage, HomePage, SentimentPage, Sidebar,
    },
    models::Page,
    services::{AnalysisService, ServiceRequest},
    state_management::AppState,
    styles::theme::{get_embedded_css, CssClasses},
};

/// 分析・比較を実行するワーカー
///
/// 要求ごとのタスクはメインウィンドウのスコープに属し、画面を切り替えても完了まで動く。
/// 子コンポーネントは `use_coroutine_handle::<ServiceRequest>()` で要求を送る。
pub fn use_service_worker(app_state: Signal<AppState>) -> Coroutine<ServiceRequest> {
    let service = use_context::<AnalysisService>();

    use_coroutine(move |mut requests: UnboundedReceiver<ServiceRequest>| {
        let service = service.clone();
        async move {
            while let Some(request) = requests.next().await {
                tracing::debug!("📨 Service request received: {:?}", request);
                let service = service.clone();
                let mut app_state = app_state;
                spawn(async move {
                    let event = service.run(request).await;
                    app_state.write().dispatch(event);
                });
            }
        }
    })
}

/// メインウィンドウコンポーネント
///
/// セッション状態 `Signal<AppState>` はここで1つだけ作成し、子コンポーネントへ
/// コンテキストとして渡す。
#[component]
pub fn MainWindow() -> Element {
    let service = use_context::<AnalysisService>();
    let app_state =
        use_context_provider(|| Signal::new(AppState::new(service.defaults().filter_spam)));
    use_service_worker(app_state);

    let active_page = app_state.read().active_page;
    let analysis = app_state.read().analysis_for_page();

    tracing::debug!("🖥️ MainWindow: Rendering with active_page={:?}", active_page);

    rsx! {
        // CSSスタイルをdocument headに注入
        document::Style {
            {get_embedded_css()}
        }

        div {
            class: CssClasses::MAIN_WINDOW,

            Sidebar {}

            main {
                class: CssClasses::MAIN_CONTENT,

                {
                    match (active_page, analysis) {
                        (Page::Home, _) => rsx! { HomePage {} },
                        (Page::ChannelComparison, _) => rsx! { ComparisonPage {} },
                        (Page::ChannelInsights, Some(result)) => rsx! {
                            ChannelInsightsPage { result }
                        },
                        (Page::SentimentAnalysis, Some(result)) => rsx! {
                            SentimentPage { result }
                        },
                        (_, None) => rsx! { AnalysisPlaceholder {} },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::AnalysisOptions;
    use crate::gui::state_management::{AnalysisStatus, AppEvent};
    use crate::testing::FakeYouTube;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    type RenderLog = Arc<Mutex<Vec<(Page, AnalysisStatus)>>>;

    #[component]
    fn WorkerHost() -> Element {
        let log = use_context::<RenderLog>();
        let app_state = use_context_provider(|| Signal::new(AppState::new(true)));
        use_service_worker(app_state);

        let (page, status) = {
            let state = app_state.read();
            (state.active_page, state.status.clone())
        };
        log.lock().push((page, status));

        rsx! {
            if page == Page::Home {
                StartThenLeave {}
            }
        }
    }

    /// 分析を要求した直後に別の画面へ移動する
    #[component]
    fn StartThenLeave() -> Element {
        let mut app_state = use_context::<Signal<AppState>>();
        let worker = use_coroutine_handle::<ServiceRequest>();

        use_effect(move || {
            let request = {
                let mut state = app_state.write();
                state.dispatch(AppEvent::ChannelInputChanged("UC1".to_string()));
                let request = state.begin_analysis();
                state.dispatch(AppEvent::PageChanged(Page::ChannelComparison));
                request
            };
            if let Some(request) = request {
                worker.send(request);
            }
        });

        rsx! {}
    }

    #[tokio::test]
    async fn test_analysis_finishes_after_leaving_home() {
        let api = FakeYouTube::new()
            .with_channel("UC1", "Demo", 2, "v")
            .with_comments("v-0", vec!["Great video!".to_string()]);
        let service = AnalysisService::new(Arc::new(api), AnalysisOptions::default());
        let log: RenderLog = Arc::default();

        let mut dom = VirtualDom::new(WorkerHost)
            .with_root_context(service)
            .with_root_context(log.clone());
        dom.rebuild_in_place();

        for _ in 0..50 {
            let finished = log
                .lock()
                .last()
                .is_some_and(|(_, status)| *status == AnalysisStatus::Succeeded);
            if finished {
                break;
            }
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }

        let log = log.lock();
        let (page, status) = log.last().cloned().unwrap();
        assert_eq!(page, Page::ChannelComparison);
        assert_eq!(status, AnalysisStatus::Succeeded);
    }
}
