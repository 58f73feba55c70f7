use dioxus::prelude::*;

use crate::views::Page;
use crate::vm::QuestionVm;

#[derive(Props, Clone, PartialEq)]
pub struct QuestionProps {
    pub vm: QuestionVm,
}

#[component]
pub fn QuestionView(props: QuestionProps) -> Element {
    let QuestionVm {
        prompt,
        number,
        total,
    } = props.vm;

    rsx! {
        Page { title: "問題ページ",
            h1 { "問題" }
            p { class: "question", "{prompt}" }
            form { action: "/submit", method: "POST",
                div { class: "input-row",
                    input {
                        r#type: "text",
                        name: "answer",
                        placeholder: "答えを入力",
                        autocomplete: "off",
                        required: true,
                    }
                    button { r#type: "submit", "回答する" }
                }
            }
            p { class: "footer",
                "進捗: {number} / {total} "
                a { href: "/", "ホームへ" }
            }
        }
    }
}
