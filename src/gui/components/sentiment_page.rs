use std::sync::Arc;

use dioxus::prelude::*;

use crate::analytics::AnalysisResult;
use crate::gui::components::charts::{BarChartCard, HistogramCard, StatCard};
use crate::gui::components::data_table::DataTable;
use crate::gui::state_management::{AppEvent, AppState};
use crate::gui::styles::theme::CssClasses;
use crate::gui::views::sentiment_overview;

const METRIC_COLORS: [&str; 4] = ["#3498db", "#27ae60", "#e74c3c", "#95a5a6"];

/// 感情分析画面
#[component]
pub fn SentimentPage(result: Arc<AnalysisResult>) -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let search_term = app_state.read().search_term.clone();
    let view = sentiment_overview(&result, &search_term);

    rsx! {
        div {
            class: CssClasses::PAGE,

            h1 { class: CssClasses::PAGE_TITLE, "💬 Sentiment Analysis" }

            div {
                class: CssClasses::STATS_GRID,
                for (index, metric) in view.metrics.iter().enumerate() {
                    StatCard {
                        key: "{index}",
                        metric: metric.clone(),
                        color: METRIC_COLORS[index % METRIC_COLORS.len()].to_string(),
                    }
                }
            }

            HistogramCard { histogram: view.histogram.clone() }

            BarChartCard { chart: view.sentiment_by_video.clone() }

            DataTable { table: view.most_positive.clone(), title: "😊 Top 5 Most Positive Comments" }
            DataTable { table: view.most_negative.clone(), title: "😠 Top 5 Most Negative Comments" }

            DataTable { table: view.all_comments.clone(), title: "🗂️ All Comments" }

            div {
                class: CssClasses::CARD,

                div {
                    class: CssClasses::FORM_GROUP,
                    label { class: CssClasses::FORM_LABEL, "Search comments:" }
                    input {
                        class: CssClasses::FORM_INPUT,
                        r#type: "text",
                        placeholder: "keyword",
                        value: "{search_term}",
                        oninput: move |event| {
                            app_state.write().dispatch(AppEvent::SearchTermChanged(event.value()));
                        },
                    }
                }

                if let Some(search) = view.search.clone() {
                    p { style: "font-weight: 600;", "{search.summary}" }
                    DataTable { table: search.table.clone() }
                }
            }
        }
    }
}
