use dioxus::prelude::*;

use crate::gui::styles::theme::{sentiment_color, CssClasses};
use crate::gui::utils::truncate_label;
use crate::gui::views::{BarChart, Histogram, Metric};

/// バーのラベル最大文字数
const BAR_LABEL_CHARS: usize = 40;

/// 統計カード
#[component]
pub fn StatCard(metric: Metric, color: String) -> Element {
    rsx! {
        div {
            style: "
                background: linear-gradient(145deg, white 0%, #f8f9fa 100%);
                padding: 18px 20px;
                border-radius: 8px;
                border-left: 4px solid {color};
                box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            ",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",

                div {
                    h4 {
                        style: "
                            margin: 0;
                            color: #7f8c8d;
                            font-size: 0.85rem;
                            font-weight: 500;
                            text-transform: uppercase;
                            letter-spacing: 0.5px;
                        ",
                        "{metric.label}"
                    }
                    p {
                        style: "
                            margin: 8px 0 0 0;
                            font-size: clamp(1.3rem, 3vw, 1.8rem);
                            font-weight: 700;
                            color: {color};
                            line-height: 1.2;
                        ",
                        "{metric.value}"
                    }
                }

                span {
                    style: "font-size: clamp(1.8rem, 4vw, 2.3rem);",
                    "{metric.icon}"
                }
            }
        }
    }
}

/// 横棒グラフ
///
/// `color` が空なら値の正負で色分けし、負の値を含む場合は中央を0として描画する。
#[component]
pub fn BarChartCard(chart: BarChart, #[props(default)] color: String) -> Element {
    let max = chart.max_abs();
    let signed = chart.has_negative();

    rsx! {
        div {
            class: CssClasses::CARD,

            h3 { class: CssClasses::CARD_TITLE, "{chart.title}" }

            if chart.bars.is_empty() {
                p {
                    style: "color: #7f8c8d; text-align: center; padding: 20px;",
                    "No data to display."
                }
            } else {
                div {
                    style: "font-size: 0.75rem; color: #7f8c8d; margin-bottom: 8px;",
                    "{chart.x_label} / {chart.y_label}"
                }

                for (index, bar) in chart.bars.iter().enumerate() {
                    BarRow {
                        key: "{index}",
                        label: bar.label.clone(),
                        display: bar.display.clone(),
                        value: bar.value,
                        max,
                        signed,
                        color: bar_color(&color, bar.value),
                    }
                }
            }
        }
    }
}

fn bar_color(color: &str, value: f64) -> String {
    if color.is_empty() {
        sentiment_color(value).to_string()
    } else {
        color.to_string()
    }
}

/// バー1本分
#[component]
fn BarRow(label: String, display: String, value: f64, max: f64, signed: bool, color: String) -> Element {
    let percentage = if max > 0.0 {
        value.abs() / max * 100.0
    } else {
        0.0
    };

    // 符号付きのグラフは中央から左右に伸ばす
    let (left, width) = if signed {
        let half = percentage / 2.0;
        if value < 0.0 {
            (50.0 - half, half)
        } else {
            (50.0, half)
        }
    } else {
        (0.0, percentage)
    };

    rsx! {
        div {
            class: CssClasses::BAR_ROW,

            span {
                class: CssClasses::BAR_LABEL,
                title: "{label}",
                {truncate_label(&label, BAR_LABEL_CHARS)}
            }

            div {
                class: CssClasses::BAR_TRACK,

                if signed {
                    div {
                        style: "position: absolute; left: 50%; top: 0; bottom: 0; width: 1px; background: #bdc3c7;",
                    }
                }

                div {
                    style: "
                        position: absolute;
                        top: 0;
                        height: 100%;
                        left: {left}%;
                        width: {width}%;
                        background: linear-gradient(90deg, {color} 0%, {color}aa 100%);
                        border-radius: 11px;
                        transition: width 0.5s ease;
                    ",
                }

                span {
                    style: "
                        position: absolute;
                        right: 8px;
                        top: 50%;
                        transform: translateY(-50%);
                        font-size: 0.78rem;
                        color: #2c3e50;
                        font-weight: 600;
                    ",
                    "{display}"
                }
            }
        }
    }
}

/// ヒストグラム
#[component]
pub fn HistogramCard(histogram: Histogram) -> Element {
    let max_count = histogram.max_count();
    let range = histogram
        .bins
        .first()
        .zip(histogram.bins.last())
        .map(|(first, last)| (first.start, last.end));

    rsx! {
        div {
            class: CssClasses::CARD,

            h3 { class: CssClasses::CARD_TITLE, "{histogram.title}" }

            if let Some((start, end)) = range {
                div {
                    class: CssClasses::HISTOGRAM,

                    for (index, bin) in histogram.bins.iter().enumerate() {
                        div {
                            key: "{index}",
                            title: format!("[{:.3}, {:.3}]: {}", bin.start, bin.end, bin.count),
                            style: format!(
                                "flex: 1; height: {}%; background: {}; border-radius: 2px 2px 0 0;",
                                if max_count > 0 { bin.count as f64 / max_count as f64 * 100.0 } else { 0.0 },
                                sentiment_color((bin.start + bin.end) / 2.0),
                            ),
                        }
                    }
                }

                div {
                    style: "display: flex; justify-content: space-between; font-size: 0.75rem; color: #7f8c8d; margin-top: 4px;",
                    span { {format!("{:.2}", start)} }
                    span { "Sentiment Score" }
                    span { {format!("{:.2}", end)} }
                }
            } else {
                p {
                    style: "color: #7f8c8d; text-align: center; padding: 20px;",
                    "No comments to display."
                }
            }
        }
    }
}
