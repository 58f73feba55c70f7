use dioxus::prelude::*;

use crate::views::Page;
use crate::vm::SessionSummaryVm;

#[derive(Props, Clone, PartialEq)]
pub struct DoneProps {
    pub summary: SessionSummaryVm,
}

#[component]
pub fn DoneView(props: DoneProps) -> Element {
    let SessionSummaryVm { correct, total } = props.summary;

    rsx! {
        Page { title: "おつかれさま",
            h1 { "おつかれさま！" }
            p { "全問終了しました。" }
            p { "正解数: {correct} / {total}" }
            p { class: "footer",
                a { class: "action", href: "/", "ホームへ" }
                a { class: "action", href: "/start", "もう一度挑戦" }
            }
        }
    }
}
