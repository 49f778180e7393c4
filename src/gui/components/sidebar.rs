use dioxus::prelude::*;

use crate::gui::models::Page;
use crate::gui::state_management::{AppEvent, AppState};
use crate::gui::styles::theme::CssClasses;

/// サイドバー（画面切り替え + スパムフィルタ）
#[component]
pub fn Sidebar() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let active_page = app_state.read().active_page;
    let filter_spam = app_state.read().filter_spam;

    rsx! {
        nav {
            class: CssClasses::SIDEBAR,

            h2 { "📺 Navigation" }

            for page in Page::all() {
                PageButton {
                    key: "{page:?}",
                    page,
                    is_active: page == active_page,
                    on_click: move |_| app_state.write().dispatch(AppEvent::PageChanged(page)),
                }
            }

            label {
                class: CssClasses::CHECKBOX_LABEL,
                input {
                    r#type: "checkbox",
                    checked: filter_spam,
                    onchange: move |_| {
                        let enabled = !app_state.read().filter_spam;
                        app_state.write().dispatch(AppEvent::SpamFilterToggled(enabled));
                    },
                }
                "Filter spam comments"
            }
        }
    }
}

/// 画面切り替えボタン
#[component]
fn PageButton(page: Page, is_active: bool, on_click: EventHandler<MouseEvent>) -> Element {
    let button_style = if is_active {
        "
            display: flex;
            align-items: center;
            gap: 10px;
            width: 100%;
            padding: 12px 14px;
            border: none;
            border-radius: 8px;
            background: rgba(255, 255, 255, 0.95);
            color: #333;
            font-weight: 600;
            font-size: 14px;
            cursor: pointer;
            text-align: left;
            box-shadow: 0 2px 10px rgba(0, 0, 0, 0.15);
        "
    } else {
        "
            display: flex;
            align-items: center;
            gap: 10px;
            width: 100%;
            padding: 12px 14px;
            border: none;
            border-radius: 8px;
            background: transparent;
            color: rgba(255, 255, 255, 0.85);
            font-weight: 500;
            font-size: 14px;
            cursor: pointer;
            text-align: left;
        "
    };

    rsx! {
        button {
            style: "{button_style}",
            title: page.description(),
            onclick: on_click,

            span { style: "font-size: 16px;", "{page.icon()}" }
            span { style: "white-space: nowrap;", "{page.to_string()}" }
        }
    }
}
