//! テーマとスタイルヘルパー

use crate::api::data_access::NoticeLevel;

/// CSS クラス名の定数
pub struct CssClasses;

impl CssClasses {
    // アプリケーション
    pub const APP: &'static str = "app";
    pub const MAIN_WINDOW: &'static str = "main-window";
    pub const MAIN_CONTENT: &'static str = "main-content";
    pub const SIDEBAR: &'static str = "sidebar";
    pub const PAGE: &'static str = "page";
    pub const PAGE_TITLE: &'static str = "page-title";

    // 入力
    pub const FORM_GROUP: &'static str = "form-group";
    pub const FORM_LABEL: &'static str = "form-label";
    pub const FORM_INPUT: &'static str = "form-input";
    pub const CHECKBOX_LABEL: &'static str = "checkbox-label";

    // ボタン
    pub const BTN: &'static str = "btn";
    pub const BTN_PRIMARY: &'static str = "btn-primary";
    pub const BTN_SECONDARY: &'static str = "btn-secondary";

    // カード・グラフ
    pub const CARD: &'static str = "card";
    pub const CARD_TITLE: &'static str = "card-title";
    pub const STATS_GRID: &'static str = "stats-grid";
    pub const BAR_ROW: &'static str = "bar-row";
    pub const BAR_LABEL: &'static str = "bar-label";
    pub const BAR_TRACK: &'static str = "bar-track";
    pub const HISTOGRAM: &'static str = "histogram";

    // 表
    pub const DATA_TABLE: &'static str = "data-table";
    pub const TABLE_WRAPPER: &'static str = "table-wrapper";

    // 通知
    pub const NOTICE: &'static str = "notice";
    pub const SPINNER: &'static str = "spinner";
    pub const PLACEHOLDER: &'static str = "placeholder";
}

/// 通知レベルに応じたCSSクラスを取得
pub fn get_notice_class(level: NoticeLevel) -> String {
    let level_class = match level {
        NoticeLevel::Error => "error",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Info => "info",
    };
    format!("{} {}", CssClasses::NOTICE, level_class)
}

/// ボタンの状態に応じたCSSクラスを取得
pub fn get_button_class(variant: &str, disabled: bool) -> String {
    let variant_class = match variant {
        "secondary" => CssClasses::BTN_SECONDARY,
        _ => CssClasses::BTN_PRIMARY,
    };

    let mut classes = format!("{} {}", CssClasses::BTN, variant_class);
    if disabled {
        classes.push_str(" disabled");
    }
    classes
}

/// 感情スコアに応じたバーの色
pub fn sentiment_color(score: f64) -> &'static str {
    if score > 0.0 {
        "#27ae60"
    } else if score < 0.0 {
        "#e74c3c"
    } else {
        "#95a5a6"
    }
}

/// CSSの埋め込み用ヘルパー
pub fn get_embedded_css() -> &'static str {
    include_str!("theme.css")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_class() {
        assert_eq!(get_notice_class(NoticeLevel::Error), "notice error");
        assert_eq!(get_notice_class(NoticeLevel::Info), "notice info");
    }

    #[test]
    fn test_button_class() {
        assert_eq!(get_button_class("primary", false), "btn btn-primary");
        assert_eq!(get_button_class("secondary", true), "btn btn-secondary disabled");
    }

    #[test]
    fn test_sentiment_color() {
        assert_eq!(sentiment_color(0.5), "#27ae60");
        assert_eq!(sentiment_color(-0.1), "#e74c3c");
        assert_eq!(sentiment_color(0.0), "#95a5a6");
    }

    #[test]
    fn test_embedded_css_defines_layout() {
        let css = get_embedded_css();
        assert!(css.contains(".sidebar"));
        assert!(css.contains(".data-table"));
    }
}
