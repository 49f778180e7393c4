use std::sync::Arc;

use dioxus::prelude::*;

use crate::analytics::AnalysisResult;
use crate::gui::components::charts::{BarChartCard, StatCard};
use crate::gui::components::data_table::DataTable;
use crate::gui::styles::theme::CssClasses;
use crate::gui::utils::format_timestamp;
use crate::gui::views::channel_insights;

const METRIC_COLORS: [&str; 3] = ["#3498db", "#27ae60", "#9b59b6"];

/// チャンネル概要画面
#[component]
pub fn ChannelInsightsPage(result: Arc<AnalysisResult>) -> Element {
    let view = channel_insights(&result);
    let analyzed_at = format_timestamp(&result.analyzed_at);

    rsx! {
        div {
            class: CssClasses::PAGE,

            h1 { class: CssClasses::PAGE_TITLE, "📊 Channel Insights: {view.channel_title}" }

            p {
                style: "color: #7f8c8d; margin-top: -12px;",
                "Analyzed at {analyzed_at}"
            }

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

            div {
                class: CssClasses::CARD,
                p { style: "margin: 0 0 6px 0;", "Number of videos analyzed: {view.videos_analyzed}" }
                p { style: "margin: 0;", "Total number of comments analyzed: {view.comments_analyzed}" }
            }

            BarChartCard { chart: view.comments_per_video.clone(), color: "#3498db" }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 20px;",
                DataTable { table: view.top_by_views.clone(), title: "🔝 Top 10 Videos by Views" }
                DataTable { table: view.bottom_by_views.clone(), title: "🔻 Bottom 10 Videos by Views" }
            }

            BarChartCard { chart: view.views_per_video.clone(), color: "#e67e22" }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 20px;",
                DataTable { table: view.most_liked.clone(), title: "👍 Most Liked Video" }
                DataTable { table: view.least_liked.clone(), title: "👎 Least Liked Video" }
                DataTable { table: view.longest_video.clone(), title: "⏱️ Longest Video" }
            }

            BarChartCard { chart: view.sentiment_by_video.clone() }
        }
    }
}
