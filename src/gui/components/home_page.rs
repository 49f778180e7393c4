use dioxus::prelude::*;

use crate::api::data_access::Notice;
use crate::gui::components::notice_banner::{NoticeBanner, NoticeList};
use crate::gui::services::ServiceRequest;
use crate::gui::state_management::{AnalysisStatus, AppEvent, AppState};
use crate::gui::styles::theme::{get_button_class, CssClasses};

/// 分析完了時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Analysis complete! Navigate to other pages to view insights.";

/// 分析中の表示
pub const PROGRESS_MESSAGE: &str = "Fetching channel data and analyzing...";

/// ホーム画面（チャンネルID入力と分析の実行）
#[component]
pub fn HomePage() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let worker = use_coroutine_handle::<ServiceRequest>();

    let state = app_state.read().clone();
    let can_analyze = state.can_analyze();
    let is_running = state.status.is_running();

    let start_analysis = move |_: MouseEvent| {
        let request = app_state.write().begin_analysis();
        if let Some(request) = request {
            worker.send(request);
        }
    };

    rsx! {
        div {
            class: CssClasses::PAGE,

            h1 { class: CssClasses::PAGE_TITLE, "YouTube Channel Analysis" }

            div {
                class: CssClasses::CARD,

                div {
                    class: CssClasses::FORM_GROUP,
                    label { class: CssClasses::FORM_LABEL, "Enter YouTube Channel ID:" }
                    input {
                        class: CssClasses::FORM_INPUT,
                        r#type: "text",
                        placeholder: "UC...",
                        value: "{state.channel_input}",
                        readonly: is_running,
                        oninput: move |event| {
                            app_state.write().dispatch(AppEvent::ChannelInputChanged(event.value()));
                        },
                    }
                }

                button {
                    class: get_button_class("primary", !can_analyze),
                    disabled: !can_analyze,
                    onclick: start_analysis,
                    if is_running { "🔄 Analyzing..." } else { "🔍 Analyze Channel" }
                }

                if is_running {
                    div { class: CssClasses::SPINNER, "{PROGRESS_MESSAGE}" }
                }
            }

            {
                match &state.status {
                    AnalysisStatus::Succeeded => rsx! {
                        NoticeBanner { notice: Notice::info(SUCCESS_MESSAGE) }
                    },
                    AnalysisStatus::Failed(message) => rsx! {
                        NoticeBanner { notice: Notice::error(message.clone()) }
                    },
                    _ => rsx! {},
                }
            }

            NoticeList { notices: state.notices.clone() }
        }
    }
}
