use dioxus::prelude::*;

/// Shared document shell: head, stylesheet link and the centered card.
#[component]
pub fn Page(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        html { lang: "ja",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width,initial-scale=1" }
                title { "{title}" }
                link { rel: "stylesheet", href: "/style.css" }
            }
            body {
                div { class: "container", {children} }
            }
        }
    }
}
