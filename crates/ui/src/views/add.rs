use dioxus::prelude::*;

use crate::views::Page;

#[component]
pub fn AddQuestionView() -> Element {
    rsx! {
        Page { title: "問題を追加する",
            h1 { "新しい問題を追加" }
            form { action: "/add/submit", method: "POST",
                p {
                    "問題: "
                    input { r#type: "text", name: "questionText", autocomplete: "off", required: true }
                }
                p {
                    "正解: "
                    input { r#type: "text", name: "answer", autocomplete: "off", required: true }
                }
                button { r#type: "submit", "追加する" }
            }
            p { class: "footer",
                a { href: "/", "戻る" }
            }
        }
    }
}
