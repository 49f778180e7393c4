use dioxus::prelude::*;

use crate::api::data_access::{Notice, NoticeLevel};
use crate::gui::styles::theme::{get_notice_class, CssClasses};

/// 通知バナー
#[component]
pub fn NoticeBanner(notice: Notice) -> Element {
    let icon = match notice.level {
        NoticeLevel::Error => "❌",
        NoticeLevel::Warning => "⚠️",
        NoticeLevel::Info => "✅",
    };

    rsx! {
        div {
            class: get_notice_class(notice.level),
            "{icon} {notice.message}"
        }
    }
}

/// 通知の一覧
#[component]
pub fn NoticeList(notices: Vec<Notice>) -> Element {
    rsx! {
        for (index, notice) in notices.into_iter().enumerate() {
            NoticeBanner { key: "{index}", notice }
        }
    }
}

/// 分析前の案内
#[component]
pub fn AnalysisPlaceholder() -> Element {
    rsx! {
        p {
            class: CssClasses::PLACEHOLDER,
            "Please enter a valid YouTube channel ID and analyze the channel."
        }
    }
}
