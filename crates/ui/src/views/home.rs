use dioxus::prelude::*;

use crate::views::Page;

#[derive(Props, Clone, PartialEq)]
pub struct HomeProps {
    pub question_count: usize,
}

#[component]
pub fn HomeView(props: HomeProps) -> Element {
    let count = props.question_count;

    rsx! {
        Page { title: "酒の名前を当てるゲーム",
            h1 { "酒の振り仮名ゲームへようこそ" }
            p { "問題数: {count}" }
            p {
                a { class: "action", href: "/start", "スタート" }
            }
            p { class: "footer",
                a { href: "/add", "問題を追加する" }
            }
            small { "入力欄はひらがなで入力お願いします" }
        }
    }
}
