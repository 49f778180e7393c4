use dioxus::prelude::*;

use crate::gui::styles::theme::CssClasses;
use crate::gui::views::Table;

/// 表コンポーネント
#[component]
pub fn DataTable(table: Table, #[props(default)] title: String) -> Element {
    rsx! {
        div {
            class: CssClasses::CARD,

            if !title.is_empty() {
                h3 { class: CssClasses::CARD_TITLE, "{title}" }
            }

            if table.is_empty() {
                p {
                    style: "color: #7f8c8d; text-align: center; padding: 20px; font-style: italic;",
                    "No rows to display."
                }
            } else {
                div {
                    class: CssClasses::TABLE_WRAPPER,

                    table {
                        class: CssClasses::DATA_TABLE,

                        thead {
                            tr {
                                for header in table.headers.iter() {
                                    th { key: "{header}", "{header}" }
                                }
                            }
                        }

                        tbody {
                            for (row_index, row) in table.rows.iter().enumerate() {
                                tr {
                                    key: "{row_index}",
                                    for cell in row.iter() {
                                        td { "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
