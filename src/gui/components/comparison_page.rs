use dioxus::prelude::*;

use crate::gui::components::charts::BarChartCard;
use crate::gui::components::data_table::DataTable;
use crate::gui::components::notice_banner::NoticeList;
use crate::gui::services::ServiceRequest;
use crate::gui::state_management::{AppEvent, AppState};
use crate::gui::styles::theme::{get_button_class, CssClasses};
use crate::gui::views::channel_comparison;

/// 比較対象が1つも取得できなかったときの表示
pub const NO_VALID_CHANNELS: &str = "No valid channel statistics to display.";

/// チャンネル比較画面
#[component]
pub fn ComparisonPage() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let worker = use_coroutine_handle::<ServiceRequest>();

    let state = app_state.read().clone();
    let can_compare = state.can_compare();

    let start_compare = move |_: MouseEvent| {
        let request = app_state.write().begin_comparison();
        if let Some(request) = request {
            worker.send(request);
        }
    };

    rsx! {
        div {
            class: CssClasses::PAGE,

            h1 { class: CssClasses::PAGE_TITLE, "⚖️ Channel Comparison" }

            div {
                class: CssClasses::CARD,

                div {
                    class: CssClasses::FORM_GROUP,
                    label { class: CssClasses::FORM_LABEL, "Enter YouTube Channel IDs (comma-separated):" }
                    textarea {
                        class: CssClasses::FORM_INPUT,
                        rows: "3",
                        placeholder: "UC..., UC...",
                        value: "{state.comparison_input}",
                        oninput: move |event| {
                            app_state.write().dispatch(AppEvent::ComparisonInputChanged(event.value()));
                        },
                    }
                }

                button {
                    class: get_button_class("primary", !can_compare),
                    disabled: !can_compare,
                    onclick: start_compare,
                    if state.comparison_running { "🔄 Comparing..." } else { "⚖️ Compare Channels" }
                }
            }

            if let Some(comparison) = state.comparison.clone() {
                NoticeList { notices: comparison.notices.clone() }

                if let Some(view) = channel_comparison(&comparison.channels) {
                    DataTable { table: view.table.clone(), title: "📋 Channel Statistics" }
                    BarChartCard { chart: view.subscribers.clone(), color: "#3498db" }
                    BarChartCard { chart: view.views.clone(), color: "#27ae60" }
                    BarChartCard { chart: view.videos.clone(), color: "#9b59b6" }
                } else {
                    div { class: "notice error", "❌ {NO_VALID_CHANNELS}" }
                }
            }
        }
    }
}
