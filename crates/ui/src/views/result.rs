use dioxus::prelude::*;

use crate::views::Page;
use crate::vm::AnswerVm;

#[derive(Props, Clone, PartialEq)]
pub struct ResultProps {
    pub vm: AnswerVm,
}

#[component]
pub fn ResultView(props: ResultProps) -> Element {
    let AnswerVm {
        is_correct,
        correct_answer,
        your_answer,
        number,
        total,
        has_next,
    } = props.vm;

    rsx! {
        Page { title: "回答結果",
            if is_correct {
                h1 { class: "result-correct", "正解です！" }
            } else {
                h1 { class: "result-wrong", "不正解です！" }
                p { "正解は「{correct_answer}」でした。" }
            }
            p { "あなたの回答: 「{your_answer}」" }
            p { "進捗: {number} / {total}" }
            p { class: "footer",
                if has_next {
                    a { class: "action", href: "/start", "次へ" }
                } else {
                    a { class: "action", href: "/done", "結果を見る" }
                }
                a { href: "/", "ホームへ" }
            }
        }
    }
}
